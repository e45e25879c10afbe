/* ╔═════════════════════════════════════════════════════════════════════════╗
   ║ Module: cia                                                             ║
   ╟─────────────────────────────────────────────────────────────────────────╢
   ║ Descr.: The two CIA 6526 chips as competing interrupt sources. The      ║
   ║         KERNAL drives its keyboard scan and cursor blink off a CIA      ║
   ║         timer interrupt; before the raster interrupt takes over, both   ║
   ║         chips are masked and any latched pending interrupt is drained   ║
   ║         so it cannot fire into a not-yet-valid vector.                  ║
   ╚═════════════════════════════════════════════════════════════════════════╝
*/

use bitflags::bitflags;

use crate::kernel::hw::Hw;

// Interrupt control registers of both CIAs. Reading clears the latched
// pending state; writing sets or clears mask bits depending on bit 7.
pub const CIA1_ICR: u16 = 0xdc0d;
pub const CIA2_ICR: u16 = 0xdd0d;

bitflags! {
    /// Interrupt sources of a CIA 6526. On write, 'SET_CLEAR' selects
    /// whether the addressed mask bits are set (1) or cleared (0).
    pub struct InterruptControlFlags: u8 {
        const TIMER_A   = 0b0000_0001;
        const TIMER_B   = 0b0000_0010;
        const TOD_ALARM = 0b0000_0100;
        const SERIAL    = 0b0000_1000;
        const FLAG_LINE = 0b0001_0000;
        const SET_CLEAR = 0b1000_0000;
    }
}

// Bit 7 clear selects mask-clear mode, bits 0..=6 address every source:
// one write masks everything the chip can generate.
pub const DISABLE_ALL_SOURCES: u8 = 0x7f;

/**
 Description: Mask every interrupt source on both CIAs, including the
              timer the KERNAL uses for keyboard scanning.
*/
pub fn silence<H: Hw>(hw: &mut H) {
    hw.poke(CIA1_ICR, DISABLE_ALL_SOURCES);
    hw.poke(CIA2_ICR, DISABLE_ALL_SOURCES);
}

/**
 Description:
    Read both interrupt control registers, discarding the values. The
    read itself clears latched pending state, so an interrupt that was
    already queued when 'silence' took effect is negated here instead of
    firing after configuration finishes.
*/
pub fn drain<H: Hw>(hw: &mut H) {
    let _ = hw.peek(CIA1_ICR);
    let _ = hw.peek(CIA2_ICR);
}
