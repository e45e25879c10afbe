/* ╔═════════════════════════════════════════════════════════════════════════╗
   ║ Module: isr                                                             ║
   ╟─────────────────────────────────────────────────────────────────────────╢
   ║ Descr.: Definition of the interface for the per-frame Interrupt         ║
   ║         Service Routine. The application implements this trait and      ║
   ║         registers the ISR using 'register' in 'raster.rs'; it is then   ║
   ║         called once for every raster trigger, before the interrupt      ║
   ║         is acknowledged.                                                ║
   ╚═════════════════════════════════════════════════════════════════════════╝
*/

// Definition of the per-frame Interrupt Service Routine.
//
// 'trigger' runs in interrupt context: it must not block, must not
// recurse into anything that re-enables interrupts, and has no way to
// report failure.
pub trait ISR {
    fn trigger(&self);
}
