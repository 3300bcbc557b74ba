/// Abstraction over the Game Boy bus (memory and IO).
///
/// Only `read8`/`write8` are required. Word and stack helpers are built on
/// top of them and follow the CPU's little-endian byte order: the low byte
/// always lives at the lower address.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    #[inline]
    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }

    /// Push a word onto the stack.
    ///
    /// `sp` is decremented by two before the write, wrapping at the bottom
    /// of the address space (the CPU has no stack overflow trap).
    #[inline]
    fn push16(&mut self, value: u16, sp: &mut u16) {
        *sp = sp.wrapping_sub(2);
        self.write16(*sp, value);
    }

    /// Pop a word off the stack, incrementing `sp` by two afterwards.
    #[inline]
    fn pop16(&mut self, sp: &mut u16) -> u16 {
        let value = self.read16(*sp);
        *sp = sp.wrapping_add(2);
        value
    }
}
