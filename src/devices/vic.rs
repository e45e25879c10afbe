/* ╔═════════════════════════════════════════════════════════════════════════╗
   ║ Module: vic                                                             ║
   ╟─────────────────────────────────────────────────────────────────────────╢
   ║ Descr.: The raster interrupt side of the VIC-II video chip: trigger     ║
   ║         line, interrupt enable mask and the interrupt latch. Nothing    ║
   ║         here renders; the chip is only touched as an interrupt source.  ║
   ╚═════════════════════════════════════════════════════════════════════════╝
*/

use bitflags::bitflags;

use crate::kernel::hw::Hw;

// VIC-II registers used for raster interrupt control
pub const CONTROL_Y: u16 = 0xd011; // screen control 1, bit 7 = raster bit 8
pub const RASTER_COUNTER: u16 = 0xd012; // low 8 bits of the trigger line
pub const IRQ_STATUS: u16 = 0xd019; // interrupt latch, write 1 to clear
pub const IRQ_ENABLE: u16 = 0xd01a; // interrupt enable mask

bitflags! {
    /// Bits of the $d011 screen control register.
    pub struct ScreenControlFlags: u8 {
        const YSCROLL_MASK   = 0b0000_0111;
        const ROWS_25        = 0b0000_1000;
        const SCREEN_ON      = 0b0001_0000;
        const BITMAP_MODE    = 0b0010_0000;
        const EXTENDED_COLOR = 0b0100_0000;
        const RASTER_LINE_8  = 0b1000_0000;
    }
}

bitflags! {
    /// Interrupt sources of the VIC-II, shared bit layout between the
    /// latch ($d019) and the enable mask ($d01a).
    pub struct InterruptFlags: u8 {
        const RASTER                      = 0b0000_0001;
        const SPRITE_BACKGROUND_COLLISION = 0b0000_0010;
        const SPRITE_SPRITE_COLLISION     = 0b0000_0100;
        const LIGHTPEN                    = 0b0000_1000;
    }
}

// Plain character screen: screen on, 25 rows, y-scroll 3, RASTER_LINE_8
// clear. Writing this as the control byte keeps bit 8 of the trigger
// line at 0, which restricts triggers to lines 0..=255.
pub const TEXT_MODE_CONTROL: u8 = 0x1b;

/**
 Description:
    Program the raster line at which the interrupt fires. The control
    register is rewritten with 'TEXT_MODE_CONTROL' so the 9th trigger bit
    is defined (and zero); lines 256 and above are not representable here,
    a known boundary of this design rather than a wrap-around.

    Must run before 'enable_raster_irq', otherwise an enable against a
    stale trigger condition could fire immediately.

 Parameters: \
    `line` raster line 0..=255
*/
pub fn set_raster_line<H: Hw>(hw: &mut H, line: u8) {
    hw.poke(RASTER_COUNTER, line);
    hw.poke(CONTROL_Y, TEXT_MODE_CONTROL);
}

/**
 Description: Tell the VIC to generate an interrupt when the raster
              counter reaches the programmed line.
*/
pub fn enable_raster_irq<H: Hw>(hw: &mut H) {
    hw.poke(IRQ_ENABLE, InterruptFlags::RASTER.bits());
}

/**
 Description:
    Acknowledge a fired raster interrupt by clearing the latch bit
    (write 1 to clear). Every handler pass must do this before returning;
    a latch left set keeps the interrupt line asserted and the CPU
    re-enters the handler immediately, forever.
*/
pub fn acknowledge<H: Hw>(hw: &mut H) {
    hw.poke(IRQ_STATUS, InterruptFlags::RASTER.bits());
}
