use bitflags::bitflags;

use super::{Bus, Cpu, CpuState};

/// Interrupt enable register.
pub const IE_ADDR: u16 = 0xFFFF;
/// Interrupt flag (request) register.
pub const IF_ADDR: u16 = 0xFF0F;

/// T-cycles spent dispatching an interrupt.
const SERVICE_CYCLES: u32 = 20;

bitflags! {
    /// Interrupt sources as laid out in IE/IF. Lower bits have priority.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Interrupt: u8 {
        const VBLANK = 0x01;
        const LCD_STAT = 0x02;
        const TIMER = 0x04;
        const SERIAL = 0x08;
        const JOYPAD = 0x10;
    }
}

impl Interrupt {
    /// Highest-priority source set in `bits`, if any.
    pub fn highest_priority(bits: u8) -> Option<Interrupt> {
        let pending = bits & Interrupt::all().bits();
        if pending == 0 {
            return None;
        }
        Interrupt::from_bits(1 << pending.trailing_zeros())
    }

    /// Handler address for a single interrupt source (0x40, 0x48, ... 0x60).
    ///
    /// For a combination of sources the highest-priority one is used.
    pub fn vector(self) -> u16 {
        let index = self.bits().trailing_zeros().min(4) as u16;
        0x0040 + index * 8
    }
}

impl Cpu {
    /// True when some interrupt is both enabled (IE) and requested (IF),
    /// regardless of IME.
    pub(in crate::cpu) fn interrupt_pending(&self, bus: &mut dyn Bus) -> bool {
        let ie = bus.read8(IE_ADDR);
        let iflags = bus.read8(IF_ADDR);
        ie & iflags & Interrupt::all().bits() != 0
    }

    /// Dispatch to an interrupt handler: clears IME (and any pending EI),
    /// leaves HALT, pushes PC and jumps to `vector`. Returns the cycles
    /// spent.
    ///
    /// The caller decides which interrupt to take and acknowledges it in IF.
    pub fn service_interrupt<B: Bus>(&mut self, bus: &mut B, vector: u16) -> u32 {
        log::debug!(
            "GB CPU servicing interrupt vector=0x{:04X} PC=0x{:04X} SP=0x{:04X}",
            vector,
            self.regs.pc,
            self.regs.sp
        );

        self.ime = false;
        self.ime_enable_pending = false;
        if self.state == CpuState::Halted {
            self.state = CpuState::Running;
        }

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = vector;

        self.cycles += SERVICE_CYCLES as u64;
        SERVICE_CYCLES
    }

    /// Resume execution after STOP or HALT.
    pub fn wake(&mut self) {
        if self.state != CpuState::Running {
            log::debug!("GB CPU woken at PC=0x{:04X}", self.regs.pc);
            self.state = CpuState::Running;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Interrupt;

    #[test]
    fn vectors_follow_bit_order() {
        assert_eq!(Interrupt::VBLANK.vector(), 0x40);
        assert_eq!(Interrupt::LCD_STAT.vector(), 0x48);
        assert_eq!(Interrupt::TIMER.vector(), 0x50);
        assert_eq!(Interrupt::SERIAL.vector(), 0x58);
        assert_eq!(Interrupt::JOYPAD.vector(), 0x60);
    }

    #[test]
    fn highest_priority_is_lowest_bit() {
        assert_eq!(Interrupt::highest_priority(0), None);
        assert_eq!(Interrupt::highest_priority(0xE0), None);
        assert_eq!(Interrupt::highest_priority(0x14), Some(Interrupt::TIMER));
        assert_eq!(Interrupt::highest_priority(0x1F), Some(Interrupt::VBLANK));
        assert_eq!(
            (Interrupt::SERIAL | Interrupt::JOYPAD).vector(),
            Interrupt::SERIAL.vector()
        );
    }
}
