pub mod cpu;
pub mod machine;

pub use cpu::{Bus, Cpu, CpuEvent, CpuState, Flag, Interrupt, RegisterPair, Registers};
pub use machine::{
    Console, ConsoleBuilder, ConsoleConfig, InterruptController, MemoryBus, Peripheral,
    PriorityInterrupts, Region, REGIONS,
};

/// DMG master clock in Hz (T-cycles per second).
pub const CLOCK_HZ: u32 = 4_194_304;
/// Frames per second the console paces itself against.
pub const FRAME_RATE: u32 = 60;
/// Cycle budget for a single frame at the default clock and frame rate.
pub const CYCLES_PER_FRAME: u32 = CLOCK_HZ / FRAME_RATE;

/// Value returned for reads from the unusable region (0xFEA0..=0xFEFF).
pub const UNMAPPED_READ: u8 = 0xFF;
