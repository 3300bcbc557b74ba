use crate::cpu::instr::{Decoded, Flow};
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_inc8(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(
            matches!(ins.opcode, 0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C),
            "unexpected INC r opcode {:#04x}",
            ins.opcode
        );

        let reg = (ins.opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, reg);
        let result = self.alu_inc8(value);
        self.write_reg8(bus, reg, result);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_dec8(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(
            matches!(ins.opcode, 0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D),
            "unexpected DEC r opcode {:#04x}",
            ins.opcode
        );

        let reg = (ins.opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, reg);
        let result = self.alu_dec8(value);
        self.write_reg8(bus, reg, result);
        Flow::Next
    }

    /// INC rr. No flags are affected.
    pub(in crate::cpu) fn exec_inc16(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(matches!(ins.opcode, 0x03 | 0x13 | 0x23 | 0x33));

        let rp = (ins.opcode >> 4) & 0x03;
        let value = self.read_rp(rp).wrapping_add(1);
        self.write_rp(rp, value);
        Flow::Next
    }

    /// DEC rr. No flags are affected.
    pub(in crate::cpu) fn exec_dec16(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(matches!(ins.opcode, 0x0B | 0x1B | 0x2B | 0x3B));

        let rp = (ins.opcode >> 4) & 0x03;
        let value = self.read_rp(rp).wrapping_sub(1);
        self.write_rp(rp, value);
        Flow::Next
    }
}
