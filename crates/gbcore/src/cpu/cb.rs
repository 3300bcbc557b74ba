use super::instr::{Decoded, Flow};
use super::{Bus, Cpu, Flag};

/// Effects for the CB-prefixed table (bit operations, shifts, and rotates).
///
/// Opcode layout: bits 7..6 select the group, bits 5..3 the operation or bit
/// number, bits 2..0 the register (6 = (HL)).
impl Cpu {
    pub(super) fn exec_cb_shift(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let z = ins.opcode & 0x07;
        let value = self.read_reg8(bus, z);
        let result = self.alu_shift((ins.opcode >> 3) & 0x07, value);
        self.write_reg8(bus, z, result);
        Flow::Next
    }

    /// BIT b,r: Z is set when the bit is clear. Preserves C, sets H, clears N.
    pub(super) fn exec_cb_bit(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let bit = (ins.opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, ins.opcode & 0x07);
        self.set_flag(Flag::Z, value & (1 << bit) == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, true);
        Flow::Next
    }

    pub(super) fn exec_cb_res(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let bit = (ins.opcode >> 3) & 0x07;
        let z = ins.opcode & 0x07;
        let value = self.read_reg8(bus, z) & !(1 << bit);
        self.write_reg8(bus, z, value);
        Flow::Next
    }

    pub(super) fn exec_cb_set(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let bit = (ins.opcode >> 3) & 0x07;
        let z = ins.opcode & 0x07;
        let value = self.read_reg8(bus, z) | (1 << bit);
        self.write_reg8(bus, z, value);
        Flow::Next
    }
}
