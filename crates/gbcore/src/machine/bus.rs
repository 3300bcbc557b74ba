use std::ops::RangeInclusive;

use anyhow::{ensure, Result};

use crate::cpu::{Bus, Interrupt, IF_ADDR};
use crate::UNMAPPED_READ;

/// Size of the cartridge ROM window (two 16 KiB banks).
pub const ROM_SIZE: usize = 0x8000;
const VRAM_SIZE: usize = 0x2000;
const EXTERNAL_RAM_SIZE: usize = 0x2000;
const WRAM_SIZE: usize = 0x2000;
const OAM_SIZE: usize = 0xA0;
const IO_SIZE: usize = 0x80;
const HRAM_SIZE: usize = 0x7F;

/// A contiguous slice of the address space with one backing store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// 0x0000-0x7FFF, cartridge ROM. Writes are dropped.
    Rom,
    /// 0x8000-0x9FFF
    Vram,
    /// 0xA000-0xBFFF
    ExternalRam,
    /// 0xC000-0xDFFF
    WorkRam,
    /// 0xE000-0xFDFF, aliases the first 0x1E00 bytes of work RAM.
    Echo,
    /// 0xFE00-0xFE9F, sprite attribute table.
    Oam,
    /// 0xFEA0-0xFEFF. Reads return `UNMAPPED_READ`, writes are dropped.
    Unusable,
    /// 0xFF00-0xFF7F
    Io,
    /// 0xFF80-0xFFFE
    HighRam,
    /// 0xFFFF
    InterruptEnable,
}

/// Every region, in address order.
pub const REGIONS: [Region; 10] = [
    Region::Rom,
    Region::Vram,
    Region::ExternalRam,
    Region::WorkRam,
    Region::Echo,
    Region::Oam,
    Region::Unusable,
    Region::Io,
    Region::HighRam,
    Region::InterruptEnable,
];

impl Region {
    /// Resolve an address to its region and the offset into that region's
    /// backing store. Echo offsets index work RAM.
    #[inline]
    pub const fn of(addr: u16) -> (Region, usize) {
        match addr {
            0x0000..=0x7FFF => (Region::Rom, addr as usize),
            0x8000..=0x9FFF => (Region::Vram, (addr - 0x8000) as usize),
            0xA000..=0xBFFF => (Region::ExternalRam, (addr - 0xA000) as usize),
            0xC000..=0xDFFF => (Region::WorkRam, (addr - 0xC000) as usize),
            0xE000..=0xFDFF => (Region::Echo, (addr - 0xE000) as usize),
            0xFE00..=0xFE9F => (Region::Oam, (addr - 0xFE00) as usize),
            0xFEA0..=0xFEFF => (Region::Unusable, (addr - 0xFEA0) as usize),
            0xFF00..=0xFF7F => (Region::Io, (addr - 0xFF00) as usize),
            0xFF80..=0xFFFE => (Region::HighRam, (addr - 0xFF80) as usize),
            0xFFFF => (Region::InterruptEnable, 0),
        }
    }

    pub fn range(self) -> RangeInclusive<u16> {
        match self {
            Region::Rom => 0x0000..=0x7FFF,
            Region::Vram => 0x8000..=0x9FFF,
            Region::ExternalRam => 0xA000..=0xBFFF,
            Region::WorkRam => 0xC000..=0xDFFF,
            Region::Echo => 0xE000..=0xFDFF,
            Region::Oam => 0xFE00..=0xFE9F,
            Region::Unusable => 0xFEA0..=0xFEFF,
            Region::Io => 0xFF00..=0xFF7F,
            Region::HighRam => 0xFF80..=0xFFFE,
            Region::InterruptEnable => 0xFFFF..=0xFFFF,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::Rom => "ROM",
            Region::Vram => "VRAM",
            Region::ExternalRam => "external RAM",
            Region::WorkRam => "WRAM",
            Region::Echo => "echo RAM",
            Region::Oam => "OAM",
            Region::Unusable => "unusable",
            Region::Io => "IO",
            Region::HighRam => "HRAM",
            Region::InterruptEnable => "IE",
        }
    }
}

/// The DMG memory map.
///
/// Every region has its own zero-initialised backing store. Cartridge banking,
/// PPU and APU behaviour live in external collaborators that reach the raw
/// stores through the slice accessors below.
pub struct MemoryBus {
    rom: Box<[u8]>,
    vram: Box<[u8]>,
    external_ram: Box<[u8]>,
    wram: Box<[u8]>,
    oam: Box<[u8]>,
    io: Box<[u8]>,
    hram: Box<[u8]>,
    ie: u8,
}

impl Default for MemoryBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus {
    pub fn new() -> Self {
        Self {
            rom: vec![0; ROM_SIZE].into_boxed_slice(),
            vram: vec![0; VRAM_SIZE].into_boxed_slice(),
            external_ram: vec![0; EXTERNAL_RAM_SIZE].into_boxed_slice(),
            wram: vec![0; WRAM_SIZE].into_boxed_slice(),
            oam: vec![0; OAM_SIZE].into_boxed_slice(),
            io: vec![0; IO_SIZE].into_boxed_slice(),
            hram: vec![0; HRAM_SIZE].into_boxed_slice(),
            ie: 0,
        }
    }

    /// Copy a cartridge image into the ROM window.
    ///
    /// Images larger than the window are truncated; bank switching beyond the
    /// first 32 KiB belongs to the cartridge collaborator.
    pub fn load_rom(&mut self, image: &[u8]) -> Result<()> {
        ensure!(!image.is_empty(), "cartridge image is empty");

        if image.len() > ROM_SIZE {
            log::warn!(
                "GB bus: cartridge image is {} bytes, only the first {} are mapped",
                image.len(),
                ROM_SIZE
            );
        }

        let len = image.len().min(ROM_SIZE);
        self.rom.fill(0);
        self.rom[..len].copy_from_slice(&image[..len]);
        log::debug!("GB bus: loaded {} byte cartridge image", image.len());
        Ok(())
    }

    pub fn rom_mut(&mut self) -> &mut [u8] {
        &mut self.rom
    }

    pub fn external_ram_mut(&mut self) -> &mut [u8] {
        &mut self.external_ram
    }

    pub fn vram(&self) -> &[u8] {
        &self.vram
    }

    pub fn oam(&self) -> &[u8] {
        &self.oam
    }

    pub fn io(&self) -> &[u8] {
        &self.io
    }

    #[inline]
    pub fn interrupt_enable(&self) -> u8 {
        self.ie
    }

    #[inline]
    pub fn interrupt_flag(&self) -> u8 {
        self.io[(IF_ADDR - 0xFF00) as usize]
    }

    #[inline]
    pub fn set_interrupt_flag(&mut self, value: u8) {
        self.io[(IF_ADDR - 0xFF00) as usize] = value;
    }

    /// Raise `interrupt` in IF.
    pub fn request_interrupt(&mut self, interrupt: Interrupt) {
        let flags = self.interrupt_flag() | interrupt.bits();
        self.set_interrupt_flag(flags);
    }
}

impl Bus for MemoryBus {
    fn read8(&mut self, addr: u16) -> u8 {
        let (region, offset) = Region::of(addr);
        match region {
            Region::Rom => self.rom[offset],
            Region::Vram => self.vram[offset],
            Region::ExternalRam => self.external_ram[offset],
            Region::WorkRam | Region::Echo => self.wram[offset],
            Region::Oam => self.oam[offset],
            Region::Unusable => UNMAPPED_READ,
            Region::Io => self.io[offset],
            Region::HighRam => self.hram[offset],
            Region::InterruptEnable => self.ie,
        }
    }

    fn write8(&mut self, addr: u16, value: u8) {
        let (region, offset) = Region::of(addr);
        match region {
            Region::Rom | Region::Unusable => {
                log::trace!(
                    "GB bus: dropped write 0x{:02X} to {} at 0x{:04X}",
                    value,
                    region.name(),
                    addr
                );
            }
            Region::Vram => self.vram[offset] = value,
            Region::ExternalRam => self.external_ram[offset] = value,
            Region::WorkRam | Region::Echo => self.wram[offset] = value,
            Region::Oam => self.oam[offset] = value,
            Region::Io => self.io[offset] = value,
            Region::HighRam => self.hram[offset] = value,
            Region::InterruptEnable => self.ie = value,
        }
    }
}
