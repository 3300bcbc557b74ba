mod bus;
mod console;
mod interrupts;

pub use bus::{MemoryBus, Region, REGIONS, ROM_SIZE};
pub use console::{Console, ConsoleBuilder, ConsoleConfig, Peripheral};
pub use interrupts::{InterruptController, PriorityInterrupts};

#[cfg(test)]
mod tests;
