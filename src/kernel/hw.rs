/* ╔═════════════════════════════════════════════════════════════════════════╗
   ║ Module: hw                                                              ║
   ╟─────────────────────────────────────────────────────────────────────────╢
   ║ Descr.: Hardware access boundary. Every register the crate touches is   ║
   ║         reached through the 'Hw' trait: one byte read or write per      ║
   ║         memory-mapped register plus control over the CPU interrupt      ║
   ║         mask. 'C64Hw' is the implementation for the real machine;       ║
   ║         tests provide a recording implementation instead.               ║
   ╚═════════════════════════════════════════════════════════════════════════╝
*/

use crate::kernel::cpu;

/**
 Description:
    Access to the machine as seen from the interrupt code: memory-mapped
    registers and the CPU interrupt mask.

    Reads take '&mut self' since several chip registers (the CIA interrupt
    control registers among them) clear latched state when read.
*/
pub trait Hw {
    fn peek(&mut self, addr: u16) -> u8;
    fn poke(&mut self, addr: u16, value: u8);
    fn disable_int(&mut self);
    fn enable_int(&mut self);
}

/**
 Description:
    Run `body` with the CPU interrupt mask held disabled, re-enabling it
    afterwards. The whole raster configuration sequence runs inside one
    such section so no interrupt can fire against half-written registers.
*/
#[inline]
pub fn critical_section<H: Hw, R>(hw: &mut H, body: impl FnOnce(&mut H) -> R) -> R {
    hw.disable_int();
    let result = body(hw);
    hw.enable_int();
    result
}

// Register access on the machine itself. Zero-sized; a value of this type
// stands for exclusive write authority over the registers it touches.
pub struct C64Hw {
    _private: (),
}

impl C64Hw {
    /**
     Description:
        Create the hardware accessor.

        Unsafe because peek/poke dereference the literal address given to
        them; this is only meaningful when running on a C64 (or an emulator
        of one), and the caller asserts that nothing else is writing the
        interrupt registers during configuration.
    */
    pub const unsafe fn new() -> Self {
        C64Hw { _private: () }
    }
}

impl Hw for C64Hw {
    #[inline]
    fn peek(&mut self, addr: u16) -> u8 {
        unsafe { core::ptr::read_volatile(addr as usize as *const u8) }
    }

    #[inline]
    fn poke(&mut self, addr: u16, value: u8) {
        unsafe {
            core::ptr::write_volatile(addr as usize as *mut u8, value);
        }
    }

    #[inline]
    fn disable_int(&mut self) {
        cpu::disable_int();
    }

    #[inline]
    fn enable_int(&mut self) {
        cpu::enable_int();
    }
}
