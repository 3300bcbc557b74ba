use anyhow::{ensure, Context, Result};
use typed_builder::TypedBuilder;

use crate::cpu::Cpu;
use crate::{CLOCK_HZ, FRAME_RATE};

use super::{InterruptController, MemoryBus};

/// Timing parameters for frame pacing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TypedBuilder)]
pub struct ConsoleConfig {
    #[builder(default = CLOCK_HZ)]
    pub clock_hz: u32,
    #[builder(default = FRAME_RATE)]
    pub frame_rate: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ConsoleConfig {
    /// T-cycles the CPU runs per frame.
    pub fn cycles_per_frame(&self) -> u32 {
        self.clock_hz.checked_div(self.frame_rate).unwrap_or(0)
    }
}

/// A collaborator that catches up on the cycles the CPU ran during a frame
/// (PPU, APU, timers).
pub trait Peripheral {
    fn run(&mut self, bus: &mut MemoryBus, cycles: u32);
}

/// CPU, memory map, and collaborators, paced one frame at a time.
pub struct Console {
    cpu: Cpu,
    bus: MemoryBus,
    interrupts: Box<dyn InterruptController>,
    peripherals: Vec<Box<dyn Peripheral>>,
    cycles_per_frame: u32,
    /// Cycles the previous frame ran past its budget.
    overshoot: u32,
    frames: u64,
}

impl Console {
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::default()
    }

    /// Run one instruction, or dispatch one interrupt, and return the cycles
    /// spent.
    pub fn step(&mut self) -> u32 {
        if let Some(interrupt) = self.interrupts.poll(&self.cpu, &mut self.bus) {
            self.cpu.wake();
            return self.cpu.service_interrupt(&mut self.bus, interrupt.vector());
        }
        self.cpu.step(&mut self.bus)
    }

    /// Run until this frame's cycle budget is spent, then hand the cycles to
    /// every peripheral. Returns the cycles run during this frame.
    ///
    /// Overshoot past the budget is charged to the next frame. A stopped CPU
    /// ends the frame early.
    pub fn run_frame(&mut self) -> u32 {
        let budget = self.cycles_per_frame;
        let mut elapsed = self.overshoot;
        let mut ran = 0u32;

        while elapsed < budget {
            let cycles = self.step();
            if cycles == 0 && self.cpu.is_stopped() {
                break;
            }
            elapsed += cycles;
            ran += cycles;
        }

        self.overshoot = elapsed.saturating_sub(budget);
        self.frames += 1;

        for peripheral in &mut self.peripherals {
            peripheral.run(&mut self.bus, ran);
        }

        ran
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &MemoryBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut MemoryBus {
        &mut self.bus
    }

    /// Frames completed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[derive(Default)]
pub struct ConsoleBuilder {
    config: ConsoleConfig,
    cartridge: Option<Vec<u8>>,
    interrupts: Option<Box<dyn InterruptController>>,
    peripherals: Vec<Box<dyn Peripheral>>,
}

impl ConsoleBuilder {
    pub fn config(mut self, config: ConsoleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn cartridge(mut self, image: &[u8]) -> Self {
        self.cartridge = Some(image.to_vec());
        self
    }

    pub fn interrupts(mut self, controller: impl InterruptController + 'static) -> Self {
        self.interrupts = Some(Box::new(controller));
        self
    }

    pub fn peripheral(mut self, peripheral: impl Peripheral + 'static) -> Self {
        self.peripherals.push(Box::new(peripheral));
        self
    }

    pub fn build(self) -> Result<Console> {
        let image = self.cartridge.context("no cartridge image supplied")?;
        let interrupts = self
            .interrupts
            .context("no interrupt controller attached")?;

        let cycles_per_frame = self.config.cycles_per_frame();
        ensure!(
            cycles_per_frame > 0,
            "invalid frame timing: {} Hz at {} frames per second",
            self.config.clock_hz,
            self.config.frame_rate
        );

        let mut bus = MemoryBus::new();
        bus.load_rom(&image).context("failed to load cartridge")?;

        log::debug!(
            "GB console: {} cycles per frame, {} peripheral(s)",
            cycles_per_frame,
            self.peripherals.len()
        );

        Ok(Console {
            cpu: Cpu::new(),
            bus,
            interrupts,
            peripherals: self.peripherals,
            cycles_per_frame,
            overshoot: 0,
            frames: 0,
        })
    }
}
