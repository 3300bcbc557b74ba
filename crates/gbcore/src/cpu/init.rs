use super::{Cpu, CpuState, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            regs: Registers::post_boot(),
            ime: false,
            state: CpuState::Running,
            ime_enable_pending: false,
            cycles: 0,
            last_event: None,
        }
    }

    /// Reset the CPU to the state the DMG boot ROM hands over to the
    /// cartridge.
    ///
    /// Per Pan Docs, IME is clear when control reaches 0x0100. The cartridge
    /// is responsible for enabling interrupts via EI/RETI as needed.
    pub fn reset(&mut self) {
        self.regs = Registers::post_boot();
        self.ime = false;
        self.state = CpuState::Running;
        self.ime_enable_pending = false;
        self.cycles = 0;
        self.last_event = None;
    }
}
