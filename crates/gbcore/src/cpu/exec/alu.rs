use crate::cpu::instr::{Decoded, Flow};
use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A with r or (HL) (0x80..=0xBF).
    pub(in crate::cpu) fn exec_alu_r(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!((0x80..=0xBF).contains(&ins.opcode));

        let op = (ins.opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, ins.opcode & 0x07);
        self.alu_op(op, value);
        Flow::Next
    }

    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A with an immediate byte.
    pub(in crate::cpu) fn exec_alu_d8(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(matches!(
            ins.opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));

        let op = (ins.opcode >> 3) & 0x07;
        self.alu_op(op, ins.operand.byte());
        Flow::Next
    }

    pub(in crate::cpu) fn exec_add_hl_rr(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(matches!(ins.opcode, 0x09 | 0x19 | 0x29 | 0x39));

        let value = self.read_rp((ins.opcode >> 4) & 0x03);
        self.alu_add16_hl(value);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_add_sp_r8(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        self.regs.sp = self.alu_add16_signed(self.regs.sp, ins.operand.byte());
        Flow::Next
    }

    /// RLCA/RRCA/RLA/RRA. Same as the CB forms on A except Z is always
    /// cleared.
    pub(in crate::cpu) fn exec_rotate_a(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(matches!(ins.opcode, 0x07 | 0x0F | 0x17 | 0x1F));

        let op = (ins.opcode >> 3) & 0x03;
        self.regs.a = self.alu_shift(op, self.regs.a);
        self.set_flag(Flag::Z, false);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_daa(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        self.alu_daa();
        Flow::Next
    }

    pub(in crate::cpu) fn exec_cpl(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_scf(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ccf(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !carry);
        Flow::Next
    }
}
