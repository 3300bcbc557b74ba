//! Static instruction records used by the opcode tables.
//!
//! Every table entry carries everything `step` needs to run it: how many
//! operand bytes follow the opcode, what the instruction costs, and the
//! effect to invoke once the operand has been fetched.

use std::borrow::Cow;
use std::fmt;

use super::{Bus, Cpu};

/// Number of operand bytes that follow an opcode in the instruction stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandWidth {
    None,
    Byte,
    Word,
}

impl OperandWidth {
    #[inline]
    pub const fn bytes(self) -> u16 {
        match self {
            OperandWidth::None => 0,
            OperandWidth::Byte => 1,
            OperandWidth::Word => 2,
        }
    }
}

/// Operand as fetched from the instruction stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    None,
    Byte(u8),
    Word(u16),
}

impl Operand {
    #[inline]
    pub fn byte(self) -> u8 {
        match self {
            Operand::Byte(v) => v,
            Operand::Word(v) => v as u8,
            Operand::None => 0,
        }
    }

    #[inline]
    pub fn word(self) -> u16 {
        match self {
            Operand::Word(v) => v,
            Operand::Byte(v) => v as u16,
            Operand::None => 0,
        }
    }
}

/// Whether an effect took its conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Next,
    Taken,
}

/// Cost of an instruction in T-cycles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cycles {
    /// Cost when no branch is taken (or the instruction never branches).
    pub base: u8,
    /// Extra cost added when the effect reports `Flow::Taken`.
    pub taken: u8,
}

impl Cycles {
    #[inline]
    pub fn total(self, flow: Flow) -> u32 {
        match flow {
            Flow::Next => self.base as u32,
            Flow::Taken => self.base as u32 + self.taken as u32,
        }
    }
}

/// Opcode together with its fetched operand, handed to the execute effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub opcode: u8,
    pub operand: Operand,
}

pub type Effect = fn(&mut Cpu, &mut dyn Bus, Decoded) -> Flow;

#[derive(Clone, Debug)]
pub struct Instruction {
    pub opcode: u8,
    /// True for entries of the CB-prefixed table.
    pub prefixed: bool,
    pub mnemonic: Cow<'static, str>,
    pub operand: OperandWidth,
    pub cycles: Cycles,
    pub effect: Effect,
}

impl Instruction {
    /// Total encoded length in bytes, including the CB prefix if any.
    #[inline]
    pub fn encoded_len(&self) -> u16 {
        1 + self.prefixed as u16 + self.operand.bytes()
    }

    #[inline]
    pub fn execute(&self, cpu: &mut Cpu, bus: &mut dyn Bus, operand: Operand) -> Flow {
        (self.effect)(
            cpu,
            bus,
            Decoded {
                opcode: self.opcode,
                operand,
            },
        )
    }

    /// Render the mnemonic with its operand substituted, e.g. `LD B,$42`.
    pub fn disassemble(&self, operand: Operand) -> String {
        let text = self.mnemonic.as_ref();
        match operand {
            Operand::None => text.to_string(),
            Operand::Byte(v) => {
                if text.contains("r8") {
                    text.replacen("+r8", "r8", 1)
                        .replacen("r8", &format!("{:+}", v as i8), 1)
                } else if text.contains("a8") {
                    text.replacen("a8", &format!("${v:02X}"), 1)
                } else {
                    text.replacen("d8", &format!("${v:02X}"), 1)
                }
            }
            Operand::Word(v) => {
                if text.contains("a16") {
                    text.replacen("a16", &format!("${v:04X}"), 1)
                } else {
                    text.replacen("d16", &format!("${v:04X}"), 1)
                }
            }
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mnemonic)
    }
}
