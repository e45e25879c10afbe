/* ╔═════════════════════════════════════════════════════════════════════════╗
   ║ Module: raster                                                          ║
   ╟─────────────────────────────────────────────────────────────────────────╢
   ║ Descr.: Raster interrupt configuration and dispatch. 'configure' is     ║
   ║         the one-shot setup routine: it masks and drains the CIA timer   ║
   ║         interrupts, programs the VIC-II trigger line, optionally maps   ║
   ║         RAM over the ROMs and installs a handler into one of the two    ║
   ║         interrupt vector slots, all under a disabled CPU interrupt      ║
   ║         mask. 'irq_trampoline' is the handler the hardware then calls   ║
   ║         on every matching scanline: it triggers the registered ISR      ║
   ║         and acknowledges the VIC interrupt latch.                       ║
   ╚═════════════════════════════════════════════════════════════════════════╝
*/

use spin::Mutex;

use crate::devices::cia;
use crate::devices::port_6510;
use crate::devices::vic;
use crate::kernel::hw;
use crate::kernel::hw::{C64Hw, Hw};
use crate::kernel::interrupts::isr;

// The two interrupt vector slots of the C64. The KERNAL slot is only
// dispatched through when the ROM is banked in; the hardware slot is
// jumped to directly by the CPU.
const KERNAL_IRQ_VECTOR: u16 = 0x0314;
const HARDWARE_IRQ_VECTOR: u16 = 0xfffe;

// A routine installable into a vector slot. On the machine it is entered
// in interrupt context and must end with interrupt-return semantics; the
// platform layer supplies that wrapping, see 'irq_trampoline'.
pub type IrqHandler = unsafe extern "C" fn();

// Selects which vector slot 'configure' writes. Keeping this a closed
// choice rules out installing a handler at an unrelated address that
// merely shares the function pointer type.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum VectorSlot {
    Kernal,
    Hardware,
}

impl VectorSlot {
    pub fn address(self) -> u16 {
        match self {
            VectorSlot::Kernal => KERNAL_IRQ_VECTOR,
            VectorSlot::Hardware => HARDWARE_IRQ_VECTOR,
        }
    }
}

// ISR called by the trampoline on every raster trigger. Written only by
// 'register' while interrupts are off, read only by the trampoline, so
// the lock can never be contended; 'try_lock' in the trampoline keeps
// the acknowledge path free of any chance of spinning.
static FRAME_ISR: Mutex<Option<&'static (dyn isr::ISR + Sync)>> = Mutex::new(None);

/**
 Description:
    Register the per-frame ISR called by 'irq_trampoline'. Must be called
    before interrupts are enabled for the raster source, i.e. before
    'configure' returns control with the mask re-enabled ('plugin' does
    both in the right order).

 Parameters: \
    `isr` the ISR to be registered
*/
pub fn register(isr: &'static (dyn isr::ISR + Sync)) {
    *FRAME_ISR.lock() = Some(isr);
}

/**
 Description:
    Write `handler`'s address into the given vector slot, low byte first.
    On the 6510 a function address is 16 bit; on wider hosts only the low
    16 bits are stored, which is what a simulated slot holds as well.

 Parameters: \
    `slot` vector slot to write \
    `handler` routine whose address is installed
*/
pub fn install<H: Hw>(hw: &mut H, slot: VectorSlot, handler: IrqHandler) {
    let addr = handler as usize;
    hw.poke(slot.address(), (addr & 0xff) as u8);
    hw.poke(slot.address().wrapping_add(1), ((addr >> 8) & 0xff) as u8);
}

/**
 Description:
    One-shot raster interrupt setup. Runs entirely with the CPU interrupt
    mask disabled and performs, in this order:

    1. mask all interrupt sources on both CIAs
    2. read both CIA control registers, draining any latched pending
       interrupt so it cannot fire against the not-yet-valid vector
    3. program the triggering raster line (bit 8 stays 0, so only
       lines 0..=255 can trigger)
    4. enable raster interrupt generation on the VIC
    5. if `exclusive`, map RAM over BASIC and KERNAL so no ROM-resident
       interrupt code can interfere
    6. install `handler` into `slot`

    Only then is the interrupt mask re-enabled. The ordering is a
    correctness requirement: the trigger condition must be complete before
    the source is enabled, and the vector must be valid before the mask
    opens.

    There is no error return. A handler that does not acknowledge, or an
    out-of-contract input, is not detectable at this layer: the system
    either misses frames silently or livelocks inside interrupt context.

    Calling 'configure' again with the same arguments re-executes the full
    cycle and ends in the same register state. Reconfiguration with
    different arguments while the interrupt is live is unsupported.

 Parameters: \
    `handler` interrupt-context-safe routine, ends via interrupt return \
    `trigger_line` raster line 0..=255 that fires the interrupt \
    `slot` which vector slot receives `handler` \
    `exclusive` bank out BASIC/KERNAL for exclusive hardware control
*/
pub fn configure<H: Hw>(
    hw: &mut H,
    handler: IrqHandler,
    trigger_line: u8,
    slot: VectorSlot,
    exclusive: bool,
) {
    hw::critical_section(hw, |hw| {
        cia::silence(hw);
        cia::drain(hw);
        vic::set_raster_line(hw, trigger_line);
        vic::enable_raster_irq(hw);
        if exclusive {
            port_6510::map_ram_over_roms(hw);
        }
        install(hw, slot, handler);
    });
}

/**
 Description:
    Trampoline body: trigger the frame ISR, then acknowledge the VIC
    interrupt latch. The ISR runs first so it observes the machine as of
    the trigger instant; the acknowledge must follow before returning,
    otherwise the interrupt line stays asserted and the CPU re-enters the
    handler forever.

 Parameters: \
    `isr` the ISR to trigger for this pass
*/
pub fn service<H: Hw>(hw: &mut H, isr: &dyn isr::ISR) {
    isr.trigger();
    vic::acknowledge(hw);
}

/**
 Description:
    The handler installed by 'plugin'. Entered by the CPU on every
    matching raster line; calls the registered frame ISR and acknowledges
    the VIC latch. The latch is acknowledged even when no ISR is
    registered, so a missing registration degrades to missed frames
    instead of a livelock.

    On hardware this must run inside the platform's interrupt prologue and
    epilogue (register save/restore, return via rti); the platform layer
    generates that wrapping, the body here is ordinary code.
*/
pub extern "C" fn irq_trampoline() {
    let mut hw = unsafe { C64Hw::new() };
    if let Some(frame_isr) = FRAME_ISR.try_lock() {
        if let Some(isr) = *frame_isr {
            isr.trigger();
        }
    }
    vic::acknowledge(&mut hw);
}

/**
 Description:
    Plug the raster interrupt in with the built-in trampoline: register
    `isr` as the per-frame ISR, then configure the hardware vector slot
    in exclusive mode. This is the whole lifecycle for the common case of
    one callback per frame.

 Parameters: \
    `isr` per-frame ISR \
    `trigger_line` raster line 0..=255 that fires the interrupt
*/
pub fn plugin<H: Hw>(hw: &mut H, isr: &'static (dyn isr::ISR + Sync), trigger_line: u8) {
    register(isr);
    configure(
        hw,
        irq_trampoline as IrqHandler,
        trigger_line,
        VectorSlot::Hardware,
        true,
    );
}
