use crate::cpu::instr::{Decoded, Flow};
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_push(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(matches!(ins.opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));

        let pair = Self::rp2_pair((ins.opcode >> 4) & 0x03);
        let value = self.regs.get_pair(pair);
        self.push_u16(bus, value);
        Flow::Next
    }

    /// POP rr. POP AF drops the low nibble of F through the pair setter.
    pub(in crate::cpu) fn exec_pop(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(matches!(ins.opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));

        let value = self.pop_u16(bus);
        let pair = Self::rp2_pair((ins.opcode >> 4) & 0x03);
        self.regs.set_pair(pair, value);
        Flow::Next
    }
}
