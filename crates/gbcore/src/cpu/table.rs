//! Opcode lookup tables.
//!
//! Dispatch is a flat array indexed by the opcode byte. The unprefixed table
//! is written out as data below; the CB-prefixed table is regular enough
//! (operation in bits 7..3, operand register in bits 2..0) to be generated.

use std::borrow::Cow;

use lazy_static::lazy_static;

use super::instr::{Cycles, Effect, Instruction, OperandWidth};
use super::Cpu;

/// Opcode byte that selects the CB-prefixed table.
pub const PREFIX_CB: u8 = 0xCB;

/// Base cost of every unprefixed opcode in T-cycles.
///
/// Conditional branches list their not-taken cost; the extra cost for the
/// taken case comes from `taken_cycles`. Undefined opcodes cost 4.
#[rustfmt::skip]
pub const CYCLES: [u8; 256] = [
     4, 12,  8,  8,  4,  4,  8,  4, 20,  8,  8,  8,  4,  4,  8,  4, // 0x00
     4, 12,  8,  8,  4,  4,  8,  4, 12,  8,  8,  8,  4,  4,  8,  4, // 0x10
     8, 12,  8,  8,  4,  4,  8,  4,  8,  8,  8,  8,  4,  4,  8,  4, // 0x20
     8, 12,  8,  8, 12, 12, 12,  4,  8,  8,  8,  8,  4,  4,  8,  4, // 0x30
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0x40
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0x50
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0x60
     8,  8,  8,  8,  8,  8,  4,  8,  4,  4,  4,  4,  4,  4,  8,  4, // 0x70
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0x80
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0x90
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0xA0
     4,  4,  4,  4,  4,  4,  8,  4,  4,  4,  4,  4,  4,  4,  8,  4, // 0xB0
     8, 12, 12, 16, 12, 16,  8, 16,  8, 16, 12,  4, 12, 24,  8, 16, // 0xC0
     8, 12, 12,  4, 12, 16,  8, 16,  8, 16, 12,  4, 12,  4,  8, 16, // 0xD0
    12, 12,  8,  4,  4, 16,  8, 16, 16,  4, 16,  4,  4,  4,  8, 16, // 0xE0
    12, 12,  8,  4,  4, 16,  8, 16, 12,  8, 16,  4,  4,  4,  8, 16, // 0xF0
];

/// Cost of every CB-prefixed opcode in T-cycles, including the prefix fetch.
#[rustfmt::skip]
pub const CB_CYCLES: [u8; 256] = [
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0x00
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0x10
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0x20
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0x30
     8,  8,  8,  8,  8,  8, 12,  8,  8,  8,  8,  8,  8,  8, 12,  8, // 0x40
     8,  8,  8,  8,  8,  8, 12,  8,  8,  8,  8,  8,  8,  8, 12,  8, // 0x50
     8,  8,  8,  8,  8,  8, 12,  8,  8,  8,  8,  8,  8,  8, 12,  8, // 0x60
     8,  8,  8,  8,  8,  8, 12,  8,  8,  8,  8,  8,  8,  8, 12,  8, // 0x70
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0x80
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0x90
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0xA0
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0xB0
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0xC0
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0xD0
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0xE0
     8,  8,  8,  8,  8,  8, 16,  8,  8,  8,  8,  8,  8,  8, 16,  8, // 0xF0
];

const REG_NAMES: [&str; 8] = ["B", "C", "D", "E", "H", "L", "(HL)", "A"];

type Entry = (&'static str, OperandWidth, Effect);

macro_rules! op {
    ($mnemonic:expr, $width:ident, $exec:ident) => {
        ($mnemonic, OperandWidth::$width, Cpu::$exec as Effect)
    };
}

#[rustfmt::skip]
const PRIMARY: [Entry; 256] = [
    // 0x00
    op!("NOP", None, exec_nop),
    op!("LD BC,d16", Word, exec_ld_rr_d16),
    op!("LD (BC),A", None, exec_ld_indirect_a),
    op!("INC BC", None, exec_inc16),
    op!("INC B", None, exec_inc8),
    op!("DEC B", None, exec_dec8),
    op!("LD B,d8", Byte, exec_ld_r_d8),
    op!("RLCA", None, exec_rotate_a),
    op!("LD (a16),SP", Word, exec_ld_a16_sp),
    op!("ADD HL,BC", None, exec_add_hl_rr),
    op!("LD A,(BC)", None, exec_ld_a_indirect),
    op!("DEC BC", None, exec_dec16),
    op!("INC C", None, exec_inc8),
    op!("DEC C", None, exec_dec8),
    op!("LD C,d8", Byte, exec_ld_r_d8),
    op!("RRCA", None, exec_rotate_a),
    // 0x10
    op!("STOP", Byte, exec_stop),
    op!("LD DE,d16", Word, exec_ld_rr_d16),
    op!("LD (DE),A", None, exec_ld_indirect_a),
    op!("INC DE", None, exec_inc16),
    op!("INC D", None, exec_inc8),
    op!("DEC D", None, exec_dec8),
    op!("LD D,d8", Byte, exec_ld_r_d8),
    op!("RLA", None, exec_rotate_a),
    op!("JR r8", Byte, exec_jr),
    op!("ADD HL,DE", None, exec_add_hl_rr),
    op!("LD A,(DE)", None, exec_ld_a_indirect),
    op!("DEC DE", None, exec_dec16),
    op!("INC E", None, exec_inc8),
    op!("DEC E", None, exec_dec8),
    op!("LD E,d8", Byte, exec_ld_r_d8),
    op!("RRA", None, exec_rotate_a),
    // 0x20
    op!("JR NZ,r8", Byte, exec_jr_cc),
    op!("LD HL,d16", Word, exec_ld_rr_d16),
    op!("LD (HL+),A", None, exec_ld_indirect_a),
    op!("INC HL", None, exec_inc16),
    op!("INC H", None, exec_inc8),
    op!("DEC H", None, exec_dec8),
    op!("LD H,d8", Byte, exec_ld_r_d8),
    op!("DAA", None, exec_daa),
    op!("JR Z,r8", Byte, exec_jr_cc),
    op!("ADD HL,HL", None, exec_add_hl_rr),
    op!("LD A,(HL+)", None, exec_ld_a_indirect),
    op!("DEC HL", None, exec_dec16),
    op!("INC L", None, exec_inc8),
    op!("DEC L", None, exec_dec8),
    op!("LD L,d8", Byte, exec_ld_r_d8),
    op!("CPL", None, exec_cpl),
    // 0x30
    op!("JR NC,r8", Byte, exec_jr_cc),
    op!("LD SP,d16", Word, exec_ld_rr_d16),
    op!("LD (HL-),A", None, exec_ld_indirect_a),
    op!("INC SP", None, exec_inc16),
    op!("INC (HL)", None, exec_inc8),
    op!("DEC (HL)", None, exec_dec8),
    op!("LD (HL),d8", Byte, exec_ld_r_d8),
    op!("SCF", None, exec_scf),
    op!("JR C,r8", Byte, exec_jr_cc),
    op!("ADD HL,SP", None, exec_add_hl_rr),
    op!("LD A,(HL-)", None, exec_ld_a_indirect),
    op!("DEC SP", None, exec_dec16),
    op!("INC A", None, exec_inc8),
    op!("DEC A", None, exec_dec8),
    op!("LD A,d8", Byte, exec_ld_r_d8),
    op!("CCF", None, exec_ccf),
    // 0x40
    op!("LD B,B", None, exec_ld_r_r),
    op!("LD B,C", None, exec_ld_r_r),
    op!("LD B,D", None, exec_ld_r_r),
    op!("LD B,E", None, exec_ld_r_r),
    op!("LD B,H", None, exec_ld_r_r),
    op!("LD B,L", None, exec_ld_r_r),
    op!("LD B,(HL)", None, exec_ld_r_r),
    op!("LD B,A", None, exec_ld_r_r),
    op!("LD C,B", None, exec_ld_r_r),
    op!("LD C,C", None, exec_ld_r_r),
    op!("LD C,D", None, exec_ld_r_r),
    op!("LD C,E", None, exec_ld_r_r),
    op!("LD C,H", None, exec_ld_r_r),
    op!("LD C,L", None, exec_ld_r_r),
    op!("LD C,(HL)", None, exec_ld_r_r),
    op!("LD C,A", None, exec_ld_r_r),
    // 0x50
    op!("LD D,B", None, exec_ld_r_r),
    op!("LD D,C", None, exec_ld_r_r),
    op!("LD D,D", None, exec_ld_r_r),
    op!("LD D,E", None, exec_ld_r_r),
    op!("LD D,H", None, exec_ld_r_r),
    op!("LD D,L", None, exec_ld_r_r),
    op!("LD D,(HL)", None, exec_ld_r_r),
    op!("LD D,A", None, exec_ld_r_r),
    op!("LD E,B", None, exec_ld_r_r),
    op!("LD E,C", None, exec_ld_r_r),
    op!("LD E,D", None, exec_ld_r_r),
    op!("LD E,E", None, exec_ld_r_r),
    op!("LD E,H", None, exec_ld_r_r),
    op!("LD E,L", None, exec_ld_r_r),
    op!("LD E,(HL)", None, exec_ld_r_r),
    op!("LD E,A", None, exec_ld_r_r),
    // 0x60
    op!("LD H,B", None, exec_ld_r_r),
    op!("LD H,C", None, exec_ld_r_r),
    op!("LD H,D", None, exec_ld_r_r),
    op!("LD H,E", None, exec_ld_r_r),
    op!("LD H,H", None, exec_ld_r_r),
    op!("LD H,L", None, exec_ld_r_r),
    op!("LD H,(HL)", None, exec_ld_r_r),
    op!("LD H,A", None, exec_ld_r_r),
    op!("LD L,B", None, exec_ld_r_r),
    op!("LD L,C", None, exec_ld_r_r),
    op!("LD L,D", None, exec_ld_r_r),
    op!("LD L,E", None, exec_ld_r_r),
    op!("LD L,H", None, exec_ld_r_r),
    op!("LD L,L", None, exec_ld_r_r),
    op!("LD L,(HL)", None, exec_ld_r_r),
    op!("LD L,A", None, exec_ld_r_r),
    // 0x70
    op!("LD (HL),B", None, exec_ld_r_r),
    op!("LD (HL),C", None, exec_ld_r_r),
    op!("LD (HL),D", None, exec_ld_r_r),
    op!("LD (HL),E", None, exec_ld_r_r),
    op!("LD (HL),H", None, exec_ld_r_r),
    op!("LD (HL),L", None, exec_ld_r_r),
    op!("HALT", None, exec_halt),
    op!("LD (HL),A", None, exec_ld_r_r),
    op!("LD A,B", None, exec_ld_r_r),
    op!("LD A,C", None, exec_ld_r_r),
    op!("LD A,D", None, exec_ld_r_r),
    op!("LD A,E", None, exec_ld_r_r),
    op!("LD A,H", None, exec_ld_r_r),
    op!("LD A,L", None, exec_ld_r_r),
    op!("LD A,(HL)", None, exec_ld_r_r),
    op!("LD A,A", None, exec_ld_r_r),
    // 0x80
    op!("ADD A,B", None, exec_alu_r),
    op!("ADD A,C", None, exec_alu_r),
    op!("ADD A,D", None, exec_alu_r),
    op!("ADD A,E", None, exec_alu_r),
    op!("ADD A,H", None, exec_alu_r),
    op!("ADD A,L", None, exec_alu_r),
    op!("ADD A,(HL)", None, exec_alu_r),
    op!("ADD A,A", None, exec_alu_r),
    op!("ADC A,B", None, exec_alu_r),
    op!("ADC A,C", None, exec_alu_r),
    op!("ADC A,D", None, exec_alu_r),
    op!("ADC A,E", None, exec_alu_r),
    op!("ADC A,H", None, exec_alu_r),
    op!("ADC A,L", None, exec_alu_r),
    op!("ADC A,(HL)", None, exec_alu_r),
    op!("ADC A,A", None, exec_alu_r),
    // 0x90
    op!("SUB B", None, exec_alu_r),
    op!("SUB C", None, exec_alu_r),
    op!("SUB D", None, exec_alu_r),
    op!("SUB E", None, exec_alu_r),
    op!("SUB H", None, exec_alu_r),
    op!("SUB L", None, exec_alu_r),
    op!("SUB (HL)", None, exec_alu_r),
    op!("SUB A", None, exec_alu_r),
    op!("SBC A,B", None, exec_alu_r),
    op!("SBC A,C", None, exec_alu_r),
    op!("SBC A,D", None, exec_alu_r),
    op!("SBC A,E", None, exec_alu_r),
    op!("SBC A,H", None, exec_alu_r),
    op!("SBC A,L", None, exec_alu_r),
    op!("SBC A,(HL)", None, exec_alu_r),
    op!("SBC A,A", None, exec_alu_r),
    // 0xA0
    op!("AND B", None, exec_alu_r),
    op!("AND C", None, exec_alu_r),
    op!("AND D", None, exec_alu_r),
    op!("AND E", None, exec_alu_r),
    op!("AND H", None, exec_alu_r),
    op!("AND L", None, exec_alu_r),
    op!("AND (HL)", None, exec_alu_r),
    op!("AND A", None, exec_alu_r),
    op!("XOR B", None, exec_alu_r),
    op!("XOR C", None, exec_alu_r),
    op!("XOR D", None, exec_alu_r),
    op!("XOR E", None, exec_alu_r),
    op!("XOR H", None, exec_alu_r),
    op!("XOR L", None, exec_alu_r),
    op!("XOR (HL)", None, exec_alu_r),
    op!("XOR A", None, exec_alu_r),
    // 0xB0
    op!("OR B", None, exec_alu_r),
    op!("OR C", None, exec_alu_r),
    op!("OR D", None, exec_alu_r),
    op!("OR E", None, exec_alu_r),
    op!("OR H", None, exec_alu_r),
    op!("OR L", None, exec_alu_r),
    op!("OR (HL)", None, exec_alu_r),
    op!("OR A", None, exec_alu_r),
    op!("CP B", None, exec_alu_r),
    op!("CP C", None, exec_alu_r),
    op!("CP D", None, exec_alu_r),
    op!("CP E", None, exec_alu_r),
    op!("CP H", None, exec_alu_r),
    op!("CP L", None, exec_alu_r),
    op!("CP (HL)", None, exec_alu_r),
    op!("CP A", None, exec_alu_r),
    // 0xC0
    op!("RET NZ", None, exec_ret_cc),
    op!("POP BC", None, exec_pop),
    op!("JP NZ,a16", Word, exec_jp_cc),
    op!("JP a16", Word, exec_jp),
    op!("CALL NZ,a16", Word, exec_call_cc),
    op!("PUSH BC", None, exec_push),
    op!("ADD A,d8", Byte, exec_alu_d8),
    op!("RST 00H", None, exec_rst),
    op!("RET Z", None, exec_ret_cc),
    op!("RET", None, exec_ret),
    op!("JP Z,a16", Word, exec_jp_cc),
    op!("PREFIX CB", Byte, exec_prefix_cb),
    op!("CALL Z,a16", Word, exec_call_cc),
    op!("CALL a16", Word, exec_call),
    op!("ADC A,d8", Byte, exec_alu_d8),
    op!("RST 08H", None, exec_rst),
    // 0xD0
    op!("RET NC", None, exec_ret_cc),
    op!("POP DE", None, exec_pop),
    op!("JP NC,a16", Word, exec_jp_cc),
    op!("UNDEFINED", None, exec_undefined),
    op!("CALL NC,a16", Word, exec_call_cc),
    op!("PUSH DE", None, exec_push),
    op!("SUB d8", Byte, exec_alu_d8),
    op!("RST 10H", None, exec_rst),
    op!("RET C", None, exec_ret_cc),
    op!("RETI", None, exec_reti),
    op!("JP C,a16", Word, exec_jp_cc),
    op!("UNDEFINED", None, exec_undefined),
    op!("CALL C,a16", Word, exec_call_cc),
    op!("UNDEFINED", None, exec_undefined),
    op!("SBC A,d8", Byte, exec_alu_d8),
    op!("RST 18H", None, exec_rst),
    // 0xE0
    op!("LDH (a8),A", Byte, exec_ldh_a8),
    op!("POP HL", None, exec_pop),
    op!("LD (C),A", None, exec_ldh_c),
    op!("UNDEFINED", None, exec_undefined),
    op!("UNDEFINED", None, exec_undefined),
    op!("PUSH HL", None, exec_push),
    op!("AND d8", Byte, exec_alu_d8),
    op!("RST 20H", None, exec_rst),
    op!("ADD SP,r8", Byte, exec_add_sp_r8),
    op!("JP (HL)", None, exec_jp_hl),
    op!("LD (a16),A", Word, exec_ld_a16_a),
    op!("UNDEFINED", None, exec_undefined),
    op!("UNDEFINED", None, exec_undefined),
    op!("UNDEFINED", None, exec_undefined),
    op!("XOR d8", Byte, exec_alu_d8),
    op!("RST 28H", None, exec_rst),
    // 0xF0
    op!("LDH A,(a8)", Byte, exec_ldh_a8),
    op!("POP AF", None, exec_pop),
    op!("LD A,(C)", None, exec_ldh_c),
    op!("DI", None, exec_di),
    op!("UNDEFINED", None, exec_undefined),
    op!("PUSH AF", None, exec_push),
    op!("OR d8", Byte, exec_alu_d8),
    op!("RST 30H", None, exec_rst),
    op!("LD HL,SP+r8", Byte, exec_ld_hl_sp_r8),
    op!("LD SP,HL", None, exec_ld_sp_hl),
    op!("LD A,(a16)", Word, exec_ld_a16_a),
    op!("EI", None, exec_ei),
    op!("UNDEFINED", None, exec_undefined),
    op!("UNDEFINED", None, exec_undefined),
    op!("CP d8", Byte, exec_alu_d8),
    op!("RST 38H", None, exec_rst),
];

lazy_static! {
    static ref OPCODES: [Instruction; 256] = build_primary();
    static ref CB_OPCODES: [Instruction; 256] = build_cb();
}

/// Look up an unprefixed instruction.
#[inline]
pub fn lookup(opcode: u8) -> &'static Instruction {
    &OPCODES[opcode as usize]
}

/// Look up the instruction selected by the byte following `PREFIX_CB`.
#[inline]
pub fn lookup_cb(opcode: u8) -> &'static Instruction {
    &CB_OPCODES[opcode as usize]
}

/// Extra T-cycles charged when a conditional branch is taken.
fn taken_cycles(opcode: u8) -> u8 {
    match opcode {
        // JR cc,r8 / JP cc,a16
        0x20 | 0x28 | 0x30 | 0x38 | 0xC2 | 0xCA | 0xD2 | 0xDA => 4,
        // CALL cc,a16 / RET cc
        0xC4 | 0xCC | 0xD4 | 0xDC | 0xC0 | 0xC8 | 0xD0 | 0xD8 => 12,
        _ => 0,
    }
}

fn build_primary() -> [Instruction; 256] {
    std::array::from_fn(|i| {
        let opcode = i as u8;
        let (mnemonic, operand, effect) = PRIMARY[i];
        Instruction {
            opcode,
            prefixed: false,
            mnemonic: Cow::Borrowed(mnemonic),
            operand,
            cycles: Cycles {
                base: CYCLES[i],
                taken: taken_cycles(opcode),
            },
            effect,
        }
    })
}

fn build_cb() -> [Instruction; 256] {
    const SHIFTS: [&str; 8] = ["RLC", "RRC", "RL", "RR", "SLA", "SRA", "SWAP", "SRL"];

    std::array::from_fn(|i| {
        let opcode = i as u8;
        let y = (opcode >> 3) & 0x07;
        let reg = REG_NAMES[(opcode & 0x07) as usize];
        let (mnemonic, effect): (String, Effect) = match opcode >> 6 {
            0 => (format!("{} {reg}", SHIFTS[y as usize]), Cpu::exec_cb_shift as Effect),
            1 => (format!("BIT {y},{reg}"), Cpu::exec_cb_bit as Effect),
            2 => (format!("RES {y},{reg}"), Cpu::exec_cb_res as Effect),
            3 => (format!("SET {y},{reg}"), Cpu::exec_cb_set as Effect),
            _ => unreachable!(),
        };
        Instruction {
            opcode,
            prefixed: true,
            mnemonic: Cow::Owned(mnemonic),
            operand: OperandWidth::None,
            cycles: Cycles {
                base: CB_CYCLES[i],
                taken: 0,
            },
            effect,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNDEFINED: [u8; 11] = [
        0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
    ];

    #[test]
    fn entries_are_indexed_by_their_opcode() {
        for op in 0..=255u8 {
            assert_eq!(lookup(op).opcode, op);
            assert!(!lookup(op).prefixed);
            assert_eq!(lookup_cb(op).opcode, op);
            assert!(lookup_cb(op).prefixed);
        }
    }

    #[test]
    fn undefined_opcodes_are_one_byte_four_cycles() {
        for op in 0..=255u8 {
            let ins = lookup(op);
            if UNDEFINED.contains(&op) {
                assert_eq!(ins.mnemonic, "UNDEFINED");
                assert_eq!(ins.encoded_len(), 1);
                assert_eq!(ins.cycles.base, 4);
            } else {
                assert_ne!(ins.mnemonic, "UNDEFINED", "opcode {op:#04x}");
            }
        }
    }

    #[test]
    fn operand_widths_match_mnemonics() {
        for op in 0..=255u8 {
            let ins = lookup(op);
            let text = ins.mnemonic.as_ref();
            let expected = if text.contains("d16") || text.contains("a16") {
                OperandWidth::Word
            } else if text.contains("d8")
                || text.contains("a8")
                || text.contains("r8")
                || op == 0x10
                || op == PREFIX_CB
            {
                OperandWidth::Byte
            } else {
                OperandWidth::None
            };
            assert_eq!(ins.operand, expected, "{text}");
        }
    }

    #[test]
    fn only_conditional_branches_have_taken_cost() {
        let conditional = [
            0x20, 0x28, 0x30, 0x38, 0xC0, 0xC2, 0xC4, 0xC8, 0xCA, 0xCC, 0xD0, 0xD2, 0xD4, 0xD8,
            0xDA, 0xDC,
        ];
        for op in 0..=255u8 {
            let taken = lookup(op).cycles.taken;
            assert_eq!(taken != 0, conditional.contains(&op), "opcode {op:#04x}");
        }
        assert_eq!(lookup(0x20).cycles.base + lookup(0x20).cycles.taken, 12);
        assert_eq!(lookup(0xC2).cycles.base + lookup(0xC2).cycles.taken, 16);
        assert_eq!(lookup(0xC4).cycles.base + lookup(0xC4).cycles.taken, 24);
        assert_eq!(lookup(0xC0).cycles.base + lookup(0xC0).cycles.taken, 20);
    }

    #[test]
    fn cb_mnemonics_and_costs() {
        assert_eq!(lookup_cb(0x00).mnemonic, "RLC B");
        assert_eq!(lookup_cb(0x37).mnemonic, "SWAP A");
        assert_eq!(lookup_cb(0x7E).mnemonic, "BIT 7,(HL)");
        assert_eq!(lookup_cb(0x86).mnemonic, "RES 0,(HL)");
        assert_eq!(lookup_cb(0xFF).mnemonic, "SET 7,A");
        assert_eq!(lookup_cb(0x06).cycles.base, 16);
        assert_eq!(lookup_cb(0x46).cycles.base, 12);
        assert_eq!(lookup_cb(0x11).cycles.base, 8);
        assert_eq!(lookup_cb(0x11).encoded_len(), 2);
    }

    #[test]
    fn disassembly_substitutes_operands() {
        use crate::cpu::instr::Operand;

        assert_eq!(lookup(0x06).disassemble(Operand::Byte(0x42)), "LD B,$42");
        assert_eq!(lookup(0xC3).disassemble(Operand::Word(0x0150)), "JP $0150");
        assert_eq!(lookup(0x18).disassemble(Operand::Byte(0xFE)), "JR -2");
        assert_eq!(lookup(0xF8).disassemble(Operand::Byte(0x05)), "LD HL,SP+5");
        assert_eq!(lookup(0xE0).disassemble(Operand::Byte(0x40)), "LDH ($40),A");
        assert_eq!(lookup(0x80).to_string(), "ADD A,B");
    }
}
