use crate::cpu::instr::{Decoded, Flow};
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_ld_rr_d16(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(matches!(ins.opcode, 0x01 | 0x11 | 0x21 | 0x31));

        let rp = (ins.opcode >> 4) & 0x03;
        self.write_rp(rp, ins.operand.word());
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ld_r_d8(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(matches!(
            ins.opcode,
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E
        ));

        let reg = (ins.opcode >> 3) & 0x07;
        self.write_reg8(bus, reg, ins.operand.byte());
        Flow::Next
    }

    /// LD r1,r2 over the 0x40..=0x7F block (HALT at 0x76 has its own entry).
    pub(in crate::cpu) fn exec_ld_r_r(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!((0x40..=0x7F).contains(&ins.opcode) && ins.opcode != 0x76);

        let dst = (ins.opcode >> 3) & 0x07;
        let src = ins.opcode & 0x07;
        let value = self.read_reg8(bus, src);
        self.write_reg8(bus, dst, value);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ld_a16_sp(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        bus.write16(ins.operand.word(), self.regs.sp);
        Flow::Next
    }

    /// Address for LD (rr),A / LD A,(rr), applying the HL+ / HL- post step.
    fn indirect_addr(&mut self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.read_rp(0),
            1 => self.read_rp(1),
            2 => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            3 => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
            _ => unreachable!(),
        }
    }

    pub(in crate::cpu) fn exec_ld_indirect_a(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(matches!(ins.opcode, 0x02 | 0x12 | 0x22 | 0x32));

        let addr = self.indirect_addr(ins.opcode);
        bus.write8(addr, self.regs.a);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ld_a_indirect(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(matches!(ins.opcode, 0x0A | 0x1A | 0x2A | 0x3A));

        let addr = self.indirect_addr(ins.opcode);
        self.regs.a = bus.read8(addr);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ldh_a8(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(matches!(ins.opcode, 0xE0 | 0xF0));

        let addr = 0xFF00 | ins.operand.byte() as u16;
        match ins.opcode {
            0xE0 => bus.write8(addr, self.regs.a),
            _ => self.regs.a = bus.read8(addr),
        }
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ldh_c(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(matches!(ins.opcode, 0xE2 | 0xF2));

        let addr = 0xFF00 | self.regs.c as u16;
        match ins.opcode {
            0xE2 => bus.write8(addr, self.regs.a),
            _ => self.regs.a = bus.read8(addr),
        }
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ld_a16_a(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!(matches!(ins.opcode, 0xEA | 0xFA));

        let addr = ins.operand.word();
        match ins.opcode {
            0xEA => bus.write8(addr, self.regs.a),
            _ => self.regs.a = bus.read8(addr),
        }
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ld_hl_sp_r8(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let value = self.alu_add16_signed(self.regs.sp, ins.operand.byte());
        self.regs.set_hl(value);
        Flow::Next
    }

    pub(in crate::cpu) fn exec_ld_sp_hl(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        self.regs.sp = self.regs.hl();
        Flow::Next
    }
}
