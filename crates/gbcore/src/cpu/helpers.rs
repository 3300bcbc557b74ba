use super::{Bus, Cpu, Flag, RegisterPair};

impl Cpu {
    /// Helper to read an 8-bit register or (HL) by index.
    ///
    /// The encoding matches the standard Game Boy register order used by
    /// opcode tables:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    #[inline]
    pub(super) fn read_reg8(&mut self, bus: &mut dyn Bus, index: u8) -> u8 {
        match index {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => bus.read8(self.regs.hl()),
            7 => self.regs.a,
            _ => unreachable!("register index {index} out of range"),
        }
    }

    /// Helper to write an 8-bit register or (HL) by index.
    ///
    /// The encoding matches `read_reg8`.
    #[inline]
    pub(super) fn write_reg8(&mut self, bus: &mut dyn Bus, index: u8, value: u8) {
        match index {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => bus.write8(self.regs.hl(), value),
            7 => self.regs.a = value,
            _ => unreachable!("register index {index} out of range"),
        }
    }

    /// 16-bit register by `rp` index (bits 5..4 of the opcode): BC, DE, HL, SP.
    #[inline]
    pub(super) fn read_rp(&self, rp: u8) -> u16 {
        match rp {
            0 => self.regs.get_pair(RegisterPair::BC),
            1 => self.regs.get_pair(RegisterPair::DE),
            2 => self.regs.get_pair(RegisterPair::HL),
            3 => self.regs.sp,
            _ => unreachable!("register pair index {rp} out of range"),
        }
    }

    #[inline]
    pub(super) fn write_rp(&mut self, rp: u8, value: u16) {
        match rp {
            0 => self.regs.set_pair(RegisterPair::BC, value),
            1 => self.regs.set_pair(RegisterPair::DE, value),
            2 => self.regs.set_pair(RegisterPair::HL, value),
            3 => self.regs.sp = value,
            _ => unreachable!("register pair index {rp} out of range"),
        }
    }

    /// Stack pair by `rp2` index, as used by PUSH/POP: BC, DE, HL, AF.
    #[inline]
    pub(super) fn rp2_pair(rp2: u8) -> RegisterPair {
        match rp2 {
            0 => RegisterPair::BC,
            1 => RegisterPair::DE,
            2 => RegisterPair::HL,
            3 => RegisterPair::AF,
            _ => unreachable!("stack pair index {rp2} out of range"),
        }
    }

    /// Branch condition by `cc` index (bits 4..3 of the opcode).
    #[inline]
    pub(super) fn cc_condition(&self, cc: u8) -> bool {
        match cc {
            0 => !self.get_flag(Flag::Z), // NZ
            1 => self.get_flag(Flag::Z),  // Z
            2 => !self.get_flag(Flag::C), // NC
            3 => self.get_flag(Flag::C),  // C
            _ => unreachable!("condition index {cc} out of range"),
        }
    }

    #[inline]
    pub(super) fn fetch8(&mut self, bus: &mut dyn Bus) -> u8 {
        let value = bus.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Fetch a little-endian word and advance PC past both bytes.
    #[inline]
    pub(super) fn fetch16(&mut self, bus: &mut dyn Bus) -> u16 {
        let value = bus.read16(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(2);
        value
    }

    #[inline]
    pub(super) fn push_u16(&mut self, bus: &mut dyn Bus, value: u16) {
        bus.push16(value, &mut self.regs.sp);
    }

    #[inline]
    pub(super) fn pop_u16(&mut self, bus: &mut dyn Bus) -> u16 {
        bus.pop16(&mut self.regs.sp)
    }
}
