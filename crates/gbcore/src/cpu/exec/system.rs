use crate::cpu::instr::{Decoded, Flow, Operand};
use crate::cpu::table::lookup_cb;
use crate::cpu::{Bus, Cpu, CpuEvent, CpuState};

impl Cpu {
    pub(in crate::cpu) fn exec_nop(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        Flow::Next
    }

    /// STOP. Officially a 2-byte instruction; the padding byte was fetched
    /// as the operand and is ignored.
    pub(in crate::cpu) fn exec_stop(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        log::debug!("GB CPU stopped at PC=0x{:04X}", self.regs.pc.wrapping_sub(2));
        self.state = CpuState::Stopped;
        Flow::Next
    }

    /// HALT. If an enabled interrupt is already requested while IME is
    /// clear, the CPU does not halt and simply continues.
    pub(in crate::cpu) fn exec_halt(&mut self, bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        if !self.ime && self.interrupt_pending(bus) {
            return Flow::Next;
        }
        log::debug!("GB CPU halted at PC=0x{:04X}", self.regs.pc.wrapping_sub(1));
        self.state = CpuState::Halted;
        Flow::Next
    }

    pub(in crate::cpu) fn exec_di(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        self.ime = false;
        self.ime_enable_pending = false;
        Flow::Next
    }

    /// EI. IME becomes 1 after the *next* instruction completes.
    pub(in crate::cpu) fn exec_ei(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        if !self.ime {
            self.ime_enable_pending = true;
        }
        Flow::Next
    }

    /// Opcode holes (D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD).
    ///
    /// Hardware locks up on these. We execute them as 1-byte no-ops and
    /// surface a `CpuEvent` so callers can notice.
    pub(in crate::cpu) fn exec_undefined(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let pc = self.regs.pc.wrapping_sub(1);
        log::warn!(
            "GB CPU: undefined opcode 0x{:02X} at PC=0x{:04X} (SP=0x{:04X}), treated as NOP",
            ins.opcode,
            pc,
            self.regs.sp,
        );
        self.last_event = Some(CpuEvent::UndefinedOpcode {
            opcode: ins.opcode,
            pc,
        });
        Flow::Next
    }

    /// The 0xCB entry of the unprefixed table. `step` resolves the prefix
    /// itself; this effect runs the selected CB instruction when the entry is
    /// executed directly.
    pub(in crate::cpu) fn exec_prefix_cb(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        lookup_cb(ins.operand.byte()).execute(self, bus, Operand::None)
    }
}
