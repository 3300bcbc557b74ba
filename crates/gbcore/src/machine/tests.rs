use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::cpu::{Bus, Cpu, CpuState, Interrupt};
use crate::{CYCLES_PER_FRAME, UNMAPPED_READ};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Cartridge image with `program` placed at the 0x0100 entry point.
fn cartridge(program: &[u8]) -> Vec<u8> {
    let mut image = vec![0u8; ROM_SIZE];
    image[0x0100..0x0100 + program.len()].copy_from_slice(program);
    image
}

fn writable(addr: u16) -> bool {
    !matches!(Region::of(addr).0, Region::Rom | Region::Unusable)
}

/// Records the cycle count handed to it each frame.
#[derive(Clone, Default)]
struct Recorder {
    runs: Rc<RefCell<Vec<u32>>>,
}

impl Peripheral for Recorder {
    fn run(&mut self, _bus: &mut MemoryBus, cycles: u32) {
        self.runs.borrow_mut().push(cycles);
    }
}

#[test]
fn word_round_trip_and_endianness() {
    let mut bus = MemoryBus::new();

    for addr in 0..0xFFFFu16 {
        if !writable(addr) || !writable(addr + 1) {
            continue;
        }
        let value = addr.rotate_left(5) ^ 0xA55A;
        bus.write16(addr, value);
        assert_eq!(bus.read16(addr), value, "word at {addr:#06x}");
        assert_eq!(bus.read8(addr), value as u8);
        assert_eq!(bus.read8(addr + 1), (value >> 8) as u8);
    }
}

#[test]
fn echo_aliases_work_ram_both_ways() {
    let mut bus = MemoryBus::new();

    for k in 0..0x1E00u16 {
        let value = (k as u8).wrapping_mul(7) ^ 0x3C;
        bus.write8(0xE000 + k, value);
        assert_eq!(bus.read8(0xC000 + k), value);

        bus.write8(0xC000 + k, !value);
        assert_eq!(bus.read8(0xE000 + k), !value);
    }

    // The tail of work RAM past the echo window has no alias.
    bus.write8(0xDE00, 0x99);
    assert_eq!(bus.read8(0xFE00), 0x00);
}

#[test]
fn vram_and_echo_scenario() {
    let mut bus = MemoryBus::new();

    bus.write8(0x9000, 0xAB);
    assert_eq!(bus.read8(0x9000), 0xAB);
    assert_eq!(bus.vram()[0x1000], 0xAB);

    bus.write8(0xC000, 0xCD);
    assert_eq!(bus.read8(0xE000), 0xCD);
}

#[test]
fn rom_and_unusable_writes_are_dropped() {
    init_logger();
    let mut bus = MemoryBus::new();
    bus.load_rom(&[0x31, 0x41, 0x59]).unwrap();

    bus.write8(0x0001, 0xFF);
    assert_eq!(bus.read8(0x0001), 0x41);

    for addr in Region::Unusable.range() {
        bus.write8(addr, 0x12);
        assert_eq!(bus.read8(addr), UNMAPPED_READ);
    }

    // Neighbouring OAM and IO are untouched.
    assert_eq!(bus.read8(0xFE9F), 0x00);
    assert_eq!(bus.read8(0xFF00), 0x00);
}

#[test]
fn collaborator_views_see_bus_writes() {
    let mut bus = MemoryBus::new();

    bus.rom_mut()[0x4000] = 0x77;
    assert_eq!(bus.read8(0x4000), 0x77);

    bus.external_ram_mut()[0x0010] = 0x88;
    assert_eq!(bus.read8(0xA010), 0x88);

    bus.write8(0xFE00, 0x01);
    bus.write8(0xFF40, 0x91);
    assert_eq!(bus.oam()[0], 0x01);
    assert_eq!(bus.io()[0x40], 0x91);
}

#[test]
fn push16_decrements_before_write() {
    let mut bus = MemoryBus::new();
    let mut sp = 0xFFFE;

    bus.push16(0xBEEF, &mut sp);
    assert_eq!(sp, 0xFFFC);
    assert_eq!(bus.read16(sp), 0xBEEF);
    assert_eq!(bus.read8(0xFFFC), 0xEF);
    assert_eq!(bus.read8(0xFFFD), 0xBE);

    assert_eq!(bus.pop16(&mut sp), 0xBEEF);
    assert_eq!(sp, 0xFFFE);
}

#[test]
fn stack_pointer_wraps() {
    let mut bus = MemoryBus::new();
    let mut sp = 0x0001;

    bus.push16(0x1234, &mut sp);
    assert_eq!(sp, 0xFFFF);
    // Low byte lands in IE, high byte in ROM where it is dropped.
    assert_eq!(bus.interrupt_enable(), 0x34);

    let _ = bus.pop16(&mut sp);
    assert_eq!(sp, 0x0001);
}

#[test]
fn interrupt_registers_are_plain_memory() {
    let mut bus = MemoryBus::new();

    bus.write8(0xFFFF, 0x1F);
    assert_eq!(bus.interrupt_enable(), 0x1F);

    bus.request_interrupt(Interrupt::TIMER);
    bus.request_interrupt(Interrupt::JOYPAD);
    assert_eq!(bus.interrupt_flag(), 0x14);
    assert_eq!(bus.read8(0xFF0F), 0x14);

    bus.set_interrupt_flag(0x01);
    assert_eq!(bus.read8(0xFF0F), 0x01);
}

#[test]
fn priority_controller_respects_ime_and_order() {
    let cpu = Cpu::new();
    let mut bus = MemoryBus::new();
    let mut controller = PriorityInterrupts;

    bus.write8(0xFFFF, 0x1F);
    bus.set_interrupt_flag(0x1C);

    // IME clear: nothing is dispatched and IF is untouched.
    assert_eq!(controller.poll(&cpu, &mut bus), None);
    assert_eq!(bus.interrupt_flag(), 0x1C);

    let mut cpu = cpu;
    cpu.ime = true;
    assert_eq!(controller.poll(&cpu, &mut bus), Some(Interrupt::TIMER));
    assert_eq!(bus.interrupt_flag(), 0x18);
    assert_eq!(controller.poll(&cpu, &mut bus), Some(Interrupt::SERIAL));
    assert_eq!(controller.poll(&cpu, &mut bus), Some(Interrupt::JOYPAD));
    assert_eq!(controller.poll(&cpu, &mut bus), None);

    // Requested but not enabled.
    bus.write8(0xFFFF, 0x00);
    bus.request_interrupt(Interrupt::VBLANK);
    assert_eq!(controller.poll(&cpu, &mut bus), None);
}

#[test]
fn config_defaults() {
    let config = ConsoleConfig::default();
    assert_eq!(config.clock_hz, 4_194_304);
    assert_eq!(config.frame_rate, 60);
    assert_eq!(config.cycles_per_frame(), CYCLES_PER_FRAME);
    assert_eq!(CYCLES_PER_FRAME, 69_905);

    let config = ConsoleConfig::builder().frame_rate(30).build();
    assert_eq!(config.cycles_per_frame(), 139_810);
}

#[test]
fn build_requires_cartridge_and_controller() {
    init_logger();

    let err = Console::builder()
        .interrupts(PriorityInterrupts)
        .build()
        .err()
        .unwrap();
    assert!(format!("{err:#}").contains("cartridge"));

    let err = Console::builder()
        .cartridge(&cartridge(&[]))
        .build()
        .err()
        .unwrap();
    assert!(format!("{err:#}").contains("interrupt controller"));

    let err = Console::builder()
        .cartridge(&[])
        .interrupts(PriorityInterrupts)
        .build()
        .err()
        .unwrap();
    assert!(format!("{err:#}").contains("empty"));

    let err = Console::builder()
        .cartridge(&cartridge(&[]))
        .interrupts(PriorityInterrupts)
        .config(ConsoleConfig::builder().frame_rate(0).build())
        .build()
        .err()
        .unwrap();
    assert!(format!("{err:#}").contains("frame timing"));
}

#[test]
fn console_starts_at_entry_point() {
    let console = Console::builder()
        .cartridge(&cartridge(&[0x00]))
        .interrupts(PriorityInterrupts)
        .build()
        .unwrap();

    assert_eq!(console.cpu().regs.pc, 0x0100);
    assert_eq!(console.cpu().regs.sp, 0xFFFE);
    assert_eq!(console.frames(), 0);
    assert_eq!(console.bus().io().len(), 0x80);
}

#[test]
fn run_frame_meets_budget_and_carries_overshoot() {
    let recorder = Recorder::default();
    let runs = recorder.runs.clone();

    // All NOPs: 4 cycles per step against a 10-cycle budget.
    let mut console = Console::builder()
        .config(ConsoleConfig::builder().clock_hz(600).frame_rate(60).build())
        .cartridge(&cartridge(&[]))
        .interrupts(PriorityInterrupts)
        .peripheral(recorder)
        .build()
        .unwrap();

    assert_eq!(console.run_frame(), 12);
    assert_eq!(console.run_frame(), 8);
    assert_eq!(console.run_frame(), 12);
    assert_eq!(console.run_frame(), 8);

    assert_eq!(console.frames(), 4);
    assert_eq!(*runs.borrow(), vec![12, 8, 12, 8]);
    assert_eq!(console.cpu().cycles(), 40);
    assert_eq!(console.cpu().regs.pc, 0x0100 + 10);
}

#[test]
fn default_frame_runs_full_budget() {
    let mut console = Console::builder()
        .cartridge(&cartridge(&[]))
        .interrupts(PriorityInterrupts)
        .build()
        .unwrap();

    let ran = console.run_frame();
    assert!(ran >= CYCLES_PER_FRAME);
    assert!(ran < CYCLES_PER_FRAME + 4);
}

#[test]
fn console_services_interrupt_after_ei_delay() {
    init_logger();

    // 0x0100: EI ; NOP ; NOP
    let mut console = Console::builder()
        .cartridge(&cartridge(&[0xFB, 0x00, 0x00]))
        .interrupts(PriorityInterrupts)
        .build()
        .unwrap();

    console.bus_mut().write8(0xFFFF, Interrupt::VBLANK.bits());
    console.bus_mut().request_interrupt(Interrupt::VBLANK);

    assert_eq!(console.step(), 4); // EI
    assert!(!console.cpu().ime);
    assert_eq!(console.step(), 4); // NOP, IME turns on afterwards
    assert!(console.cpu().ime);

    assert_eq!(console.step(), 20);
    assert_eq!(console.cpu().regs.pc, 0x0040);
    assert!(!console.cpu().ime);
    assert_eq!(console.bus().interrupt_flag(), 0x00);

    let sp = console.cpu().regs.sp;
    assert_eq!(sp, 0xFFFC);
    assert_eq!(console.bus_mut().read16(sp), 0x0102);
}

#[test]
fn console_wakes_halted_cpu_for_interrupt() {
    // 0x0100: EI ; HALT
    let mut console = Console::builder()
        .cartridge(&cartridge(&[0xFB, 0x76]))
        .interrupts(PriorityInterrupts)
        .build()
        .unwrap();
    console.bus_mut().write8(0xFFFF, Interrupt::TIMER.bits());

    console.step();
    console.step();
    assert_eq!(console.cpu().state(), CpuState::Halted);
    assert!(console.cpu().ime);

    assert_eq!(console.step(), 4);
    assert_eq!(console.cpu().state(), CpuState::Halted);

    console.bus_mut().request_interrupt(Interrupt::TIMER);
    assert_eq!(console.step(), 20);
    assert_eq!(console.cpu().state(), CpuState::Running);
    assert_eq!(console.cpu().regs.pc, 0x0050);
}

#[test]
fn stopped_cpu_ends_frame_early() {
    init_logger();
    let recorder = Recorder::default();
    let runs = recorder.runs.clone();

    // 0x0100: NOP ; STOP
    let mut console = Console::builder()
        .cartridge(&cartridge(&[0x00, 0x10, 0x00]))
        .interrupts(PriorityInterrupts)
        .peripheral(recorder)
        .build()
        .unwrap();

    assert_eq!(console.run_frame(), 8);
    assert!(console.cpu().is_stopped());
    assert_eq!(console.run_frame(), 0);
    assert_eq!(*runs.borrow(), vec![8, 0]);

    console.cpu_mut().wake();
    assert_eq!(console.step(), 4);
    assert_eq!(console.cpu().regs.pc, 0x0104);
}
