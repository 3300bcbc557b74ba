use crate::cpu::{Cpu, Interrupt};

use super::MemoryBus;

/// Decides which interrupt, if any, the console services before the next
/// instruction.
///
/// Implementations own the acknowledge policy: whatever they return has
/// already been cleared from IF.
pub trait InterruptController {
    fn poll(&mut self, cpu: &Cpu, bus: &mut MemoryBus) -> Option<Interrupt>;
}

/// Fixed-priority dispatch: with IME set, the lowest pending bit of IE & IF
/// wins (VBlank first, Joypad last).
#[derive(Clone, Copy, Debug, Default)]
pub struct PriorityInterrupts;

impl InterruptController for PriorityInterrupts {
    fn poll(&mut self, cpu: &Cpu, bus: &mut MemoryBus) -> Option<Interrupt> {
        if !cpu.ime {
            return None;
        }

        let iflags = bus.interrupt_flag();
        let interrupt = Interrupt::highest_priority(bus.interrupt_enable() & iflags)?;
        bus.set_interrupt_flag(iflags & !interrupt.bits());
        Some(interrupt)
    }
}
