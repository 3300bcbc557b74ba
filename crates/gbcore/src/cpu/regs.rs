use bitflags::bitflags;

bitflags! {
    /// Flag bits in the F register.
    ///
    /// Layout (bit index in the byte, from MSB to LSB):
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0–3 are always zero.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Flag: u8 {
        const Z = 0b1000_0000;
        const N = 0b0100_0000;
        const H = 0b0010_0000;
        const C = 0b0001_0000;
    }
}

impl Default for Flag {
    fn default() -> Self {
        Flag::empty()
    }
}

/// 16-bit views over two 8-bit registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterPair {
    AF,
    BC,
    DE,
    HL,
}

/// Registers for the Game Boy CPU (LR35902).
///
/// Pairs are not stored: `get_pair`/`set_pair` compose and split the 8-bit
/// halves on every access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: Flag,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    /// Register values the DMG boot ROM leaves behind when it jumps to the
    /// cartridge entry point at 0x0100.
    pub fn post_boot() -> Self {
        Self {
            a: 0x01,
            // Z, H, C set.
            f: Flag::from_bits_truncate(0xB0),
            b: 0x00,
            c: 0x13,
            d: 0x00,
            e: 0xD8,
            h: 0x01,
            l: 0x4D,
            sp: 0xFFFE,
            pc: 0x0100,
        }
    }

    #[inline]
    pub fn get_pair(&self, pair: RegisterPair) -> u16 {
        let (hi, lo) = match pair {
            RegisterPair::AF => (self.a, self.f.bits()),
            RegisterPair::BC => (self.b, self.c),
            RegisterPair::DE => (self.d, self.e),
            RegisterPair::HL => (self.h, self.l),
        };
        u16::from_be_bytes([hi, lo])
    }

    #[inline]
    pub fn set_pair(&mut self, pair: RegisterPair, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        match pair {
            RegisterPair::AF => {
                self.a = hi;
                // Lower 4 bits of F are always zero.
                self.f = Flag::from_bits_truncate(lo);
            }
            RegisterPair::BC => {
                self.b = hi;
                self.c = lo;
            }
            RegisterPair::DE => {
                self.d = hi;
                self.e = lo;
            }
            RegisterPair::HL => {
                self.h = hi;
                self.l = lo;
            }
        }
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        self.get_pair(RegisterPair::HL)
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        self.set_pair(RegisterPair::HL, value);
    }

    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.f.contains(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.f.set(flag, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bc_pair_round_trips_every_value() {
        let mut regs = Registers::default();
        for v in 0..=u16::MAX {
            regs.set_pair(RegisterPair::BC, v);
            assert_eq!(regs.get_pair(RegisterPair::BC), v);
            assert_eq!(regs.b, (v >> 8) as u8);
            assert_eq!(regs.c, (v & 0xFF) as u8);
        }
    }

    #[test]
    fn pairs_do_not_alias_each_other() {
        let mut regs = Registers::default();
        regs.set_pair(RegisterPair::BC, 0x1234);
        regs.set_pair(RegisterPair::DE, 0x5678);
        regs.set_pair(RegisterPair::HL, 0x9ABC);
        assert_eq!(regs.get_pair(RegisterPair::BC), 0x1234);
        assert_eq!(regs.get_pair(RegisterPair::DE), 0x5678);
        assert_eq!(regs.get_pair(RegisterPair::HL), 0x9ABC);
        assert_eq!((regs.d, regs.e, regs.h, regs.l), (0x56, 0x78, 0x9A, 0xBC));
    }

    #[test]
    fn af_write_masks_low_flag_bits() {
        let mut regs = Registers::default();
        regs.set_pair(RegisterPair::AF, 0x12FF);
        assert_eq!(regs.a, 0x12);
        assert_eq!(regs.f.bits(), 0xF0);
        assert_eq!(regs.get_pair(RegisterPair::AF), 0x12F0);
    }

    #[test]
    fn flags_set_and_clear_independently() {
        let mut regs = Registers::default();
        regs.set_flag(Flag::Z, true);
        regs.set_flag(Flag::C, true);
        assert!(regs.get_flag(Flag::Z));
        assert!(!regs.get_flag(Flag::N));
        assert!(!regs.get_flag(Flag::H));
        assert!(regs.get_flag(Flag::C));
        assert_eq!(regs.f.bits(), 0x90);

        regs.set_flag(Flag::Z, false);
        assert_eq!(regs.f.bits(), 0x10);
    }

    #[test]
    fn post_boot_values() {
        let regs = Registers::post_boot();
        assert_eq!(regs.get_pair(RegisterPair::BC), 0x0013);
        assert_eq!(regs.get_pair(RegisterPair::DE), 0x00D8);
        assert_eq!(regs.get_pair(RegisterPair::HL), 0x014D);
        assert_eq!(regs.sp, 0xFFFE);
        assert_eq!(regs.pc, 0x0100);
        assert_eq!(regs.get_pair(RegisterPair::AF), 0x01B0);
    }
}
