/* ╔═════════════════════════════════════════════════════════════════════════╗
   ║ Module: lib                                                             ║
   ╟─────────────────────────────────────────────────────────────────────────╢
   ║ Descr.: Raster interrupt support for the C64. The crate configures the  ║
   ║         VIC-II to fire an interrupt on a programmable scanline and      ║
   ║         services it: competing CIA timer interrupts are masked and      ║
   ║         drained, the trigger condition is programmed, a handler is      ║
   ║         installed into one of the two interrupt vector slots, and on    ║
   ║         every firing a per-frame ISR is called before the VIC latch     ║
   ║         is acknowledged.                                                ║
   ║                                                                         ║
   ║         All register traffic goes through the 'Hw' trait in             ║
   ║         'kernel::hw'. On the machine this is a single volatile access   ║
   ║         per register; tests substitute a recording implementation.      ║
   ╚═════════════════════════════════════════════════════════════════════════╝
*/
#![no_std]
#![allow(dead_code)] // avoid warnings

extern crate spin;

pub mod devices;
pub mod kernel;

pub use kernel::hw::{critical_section, C64Hw, Hw};
pub use kernel::interrupts::isr::ISR;
pub use kernel::interrupts::raster::{
    configure, install, irq_trampoline, plugin, register, service, IrqHandler, VectorSlot,
};
