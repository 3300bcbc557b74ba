mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
pub mod instr;
mod interrupts;
mod regs;
mod step;
pub mod table;

pub use bus::Bus;
pub use interrupts::{Interrupt, IE_ADDR, IF_ADDR};
pub use regs::{Flag, RegisterPair, Registers};

/// Execution state of the CPU.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CpuState {
    #[default]
    Running,
    /// Entered by HALT. The clock keeps running; execution resumes once an
    /// enabled interrupt is requested.
    Halted,
    /// Entered by STOP. `step` does nothing until `Cpu::wake` is called.
    Stopped,
}

/// Diagnostics surfaced by `step` for conditions that do not stop emulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuEvent {
    /// An opcode with no defined instruction was executed as a 1-byte no-op.
    UndefinedOpcode { opcode: u8, pc: u16 },
}

/// Game Boy CPU core (Sharp LR35902).
///
/// The core owns only its register file and control state; memory is
/// reached through the `Bus` passed to `step`.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable.
    pub ime: bool,
    state: CpuState,
    /// EI was executed; IME turns on once the following instruction is done.
    ime_enable_pending: bool,
    cycles: u64,
    last_event: Option<CpuEvent>,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.regs.get_flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.set_flag(flag, value);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = Flag::empty();
    }

    #[inline]
    pub fn state(&self) -> CpuState {
        self.state
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.state == CpuState::Stopped
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.state == CpuState::Halted
    }

    /// Total T-cycles consumed since construction or the last reset.
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Take the most recent diagnostic event, if any.
    pub fn take_event(&mut self) -> Option<CpuEvent> {
        self.last_event.take()
    }
}
