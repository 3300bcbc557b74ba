//! Execute effects for the unprefixed opcode table, grouped by family.
//!
//! Each effect receives the opcode and its already-fetched operand. PC has
//! been advanced past the whole instruction before the effect runs, so only
//! control-flow effects touch PC, and they do so relative to the address of
//! the next instruction.

mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;
