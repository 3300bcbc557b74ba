use super::instr::{Operand, OperandWidth};
use super::table::{self, PREFIX_CB};
use super::{Bus, Cpu, CpuState};

/// Cost of one idle step while halted.
const HALT_IDLE_CYCLES: u32 = 4;

impl Cpu {
    /// Execute a single instruction and return the number of T-cycles taken.
    ///
    /// Fetches the opcode at PC (plus the second byte for CB-prefixed
    /// opcodes), fetches the operand the table entry declares, advancing PC
    /// past the whole instruction, then runs the entry's effect. The entry's
    /// base cost is charged, plus its taken cost if the effect branched.
    ///
    /// While stopped this is a no-op returning 0. While halted it idles for 4
    /// cycles until an enabled interrupt is requested.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let bus: &mut dyn Bus = bus;

        match self.state {
            CpuState::Stopped => return 0,
            CpuState::Halted => {
                if !self.interrupt_pending(bus) {
                    self.cycles += HALT_IDLE_CYCLES as u64;
                    return HALT_IDLE_CYCLES;
                }
                log::debug!("GB CPU leaving HALT at PC=0x{:04X}", self.regs.pc);
                self.state = CpuState::Running;
            }
            CpuState::Running => {}
        }

        // EI takes effect once the instruction after it has completed.
        let enable_ime = std::mem::take(&mut self.ime_enable_pending);

        let pc = self.regs.pc;
        let opcode = self.fetch8(bus);
        let ins = if opcode == PREFIX_CB {
            table::lookup_cb(self.fetch8(bus))
        } else {
            table::lookup(opcode)
        };

        let operand = match ins.operand {
            OperandWidth::None => Operand::None,
            OperandWidth::Byte => Operand::Byte(self.fetch8(bus)),
            OperandWidth::Word => Operand::Word(self.fetch16(bus)),
        };

        if log::log_enabled!(log::Level::Trace) {
            log::trace!("PC=0x{:04X} {}", pc, ins.disassemble(operand));
        }

        let flow = ins.execute(self, bus, operand);
        let cycles = ins.cycles.total(flow);
        self.cycles += cycles as u64;

        // DI inside the delay window cancels the pending enable.
        if enable_ime && opcode != OPCODE_DI {
            self.ime = true;
        }

        cycles
    }
}

const OPCODE_DI: u8 = 0xF3;
