use crate::cpu::instr::{Decoded, Flow};
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// Relative jump. The displacement is signed and relative to the address
    /// following the operand, which is where PC already points.
    #[inline]
    fn jump_relative(&mut self, offset: u8) {
        self.regs.pc = self.regs.pc.wrapping_add(offset as i8 as i16 as u16);
    }

    #[inline]
    fn call(&mut self, bus: &mut dyn Bus, addr: u16) {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = addr;
    }

    pub(in crate::cpu) fn exec_jr(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        self.jump_relative(ins.operand.byte());
        Flow::Next
    }

    pub(in crate::cpu) fn exec_jr_cc(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(matches!(ins.opcode, 0x20 | 0x28 | 0x30 | 0x38));

        if !self.cc_condition((ins.opcode >> 3) & 0x03) {
            return Flow::Next;
        }
        self.jump_relative(ins.operand.byte());
        Flow::Taken
    }

    pub(in crate::cpu) fn exec_jp(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        self.regs.pc = ins.operand.word();
        Flow::Next
    }

    pub(in crate::cpu) fn exec_jp_cc(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(matches!(ins.opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));

        if !self.cc_condition((ins.opcode >> 3) & 0x03) {
            return Flow::Next;
        }
        self.regs.pc = ins.operand.word();
        Flow::Taken
    }

    pub(in crate::cpu) fn exec_jp_hl(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        self.regs.pc = self.regs.hl();
        Flow::Next
    }

    pub(in crate::cpu) fn exec_call(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        self.call(bus, ins.operand.word());
        Flow::Next
    }

    pub(in crate::cpu) fn exec_call_cc(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(matches!(ins.opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));

        if !self.cc_condition((ins.opcode >> 3) & 0x03) {
            return Flow::Next;
        }
        self.call(bus, ins.operand.word());
        Flow::Taken
    }

    pub(in crate::cpu) fn exec_ret(&mut self, bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        self.regs.pc = self.pop_u16(bus);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ret_cc(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(matches!(ins.opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));

        if !self.cc_condition((ins.opcode >> 3) & 0x03) {
            return Flow::Next;
        }
        self.regs.pc = self.pop_u16(bus);
        Flow::Taken
    }

    /// RETI: return and enable interrupts immediately (no EI-style delay).
    pub(in crate::cpu) fn exec_reti(&mut self, bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        self.regs.pc = self.pop_u16(bus);
        self.ime = true;
        self.ime_enable_pending = false;
        Flow::Next
    }

    pub(in crate::cpu) fn exec_rst(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(matches!(
            ins.opcode,
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF
        ));

        self.call(bus, (ins.opcode & 0x38) as u16);
        Flow::Next
    }
}
