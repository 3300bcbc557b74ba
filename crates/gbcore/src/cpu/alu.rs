use super::{Cpu, Flag};

impl Cpu {
    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true). The sum is
    /// computed in 16 bits so the carry out of bit 7 is visible.
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = u8::from(use_carry && self.get_flag(Flag::C));

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = a as u16 + value as u16 + carry_in as u16;
        let result = full as u8;

        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, half > 0x0F);
        self.set_flag(Flag::C, full > 0xFF);
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let carry_in = u8::from(use_carry && self.get_flag(Flag::C));
        self.regs.a = self.sub_flags(value, carry_in);
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.sub_flags(value, 0);
    }

    /// Shared subtraction: sets Z N H C for `A - value - carry_in` and
    /// returns the 8-bit result.
    fn sub_flags(&mut self, value: u8, carry_in: u8) -> u8 {
        let a = self.regs.a;
        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry_in as i16;
        let full = a as i16 - value as i16 - carry_in as i16;
        let result = full as u8;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, half < 0);
        self.set_flag(Flag::C, full < 0);
        result
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::H, true);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
    }

    /// Dispatch one of the eight accumulator operations by the `y` field of
    /// an opcode (bits 5..3): ADD ADC SUB SBC AND XOR OR CP.
    pub(super) fn alu_op(&mut self, op: u8, value: u8) {
        match op {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            7 => self.alu_cp(value),
            _ => unreachable!("ALU operation {op} out of range"),
        }
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// Uses C, H, N and A to compute a correction value.
    /// Updates A, Z, H, C; leaves N unchanged.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.get_flag(Flag::C) { 0x60 } else { 0x00 };
        if self.get_flag(Flag::H) {
            adjust |= 0x06;
        }

        if !self.get_flag(Flag::N) {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.set_flag(Flag::C, adjust >= 0x60);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::Z, a == 0);
        self.regs.a = a;
    }

    /// 8-bit increment helper used by INC r and INC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (value & 0x0F) == 0x0F);
        result
    }

    /// 8-bit decrement helper used by DEC r and DEC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, (value & 0x0F) == 0);
        result
    }

    /// 16-bit add for `ADD HL,rr`.
    ///
    /// Works on the whole pair and writes the result back through the pair
    /// setter. Z is unaffected; N is cleared; H is the carry out of bit 11
    /// and C the carry out of bit 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let result = hl.wrapping_add(value);

        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::C, hl as u32 + value as u32 > 0xFFFF);

        self.regs.set_hl(result);
    }

    /// Add a signed 8-bit immediate to a 16-bit base (ADD SP,r8 and
    /// LD HL,SP+r8).
    ///
    /// Z and N are cleared; H and C come from the unsigned low-byte add.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        self.clear_flags();
        self.set_flag(Flag::H, (base & 0x000F) + (offset & 0x000F) > 0x000F);
        self.set_flag(Flag::C, (base & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        base.wrapping_add(offset)
    }

    /// Rotate/shift by the `y` field of a CB opcode (bits 5..3):
    /// RLC RRC RL RR SLA SRA SWAP SRL.
    ///
    /// Sets Z from the result, clears N and H, and sets C from the bit
    /// shifted out (SWAP clears C).
    pub(super) fn alu_shift(&mut self, op: u8, value: u8) -> u8 {
        let carry_in = self.get_flag(Flag::C);
        let (result, carry) = match op {
            0 => (value.rotate_left(1), value & 0x80 != 0),
            1 => (value.rotate_right(1), value & 0x01 != 0),
            2 => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            3 => ((value >> 1) | (u8::from(carry_in) << 7), value & 0x01 != 0),
            4 => (value << 1, value & 0x80 != 0),
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            6 => (value.rotate_left(4), false),
            7 => (value >> 1, value & 0x01 != 0),
            _ => unreachable!("shift operation {op} out of range"),
        };

        self.clear_flags();
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::C, carry);
        result
    }
}
