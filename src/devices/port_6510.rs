/* ╔═════════════════════════════════════════════════════════════════════════╗
   ║ Module: port_6510                                                       ║
   ╟─────────────────────────────────────────────────────────────────────────╢
   ║ Descr.: The 6510 on-chip I/O port at $0001 controls which parts of      ║
   ║         the address space show ROM. Mapping RAM over BASIC and KERNAL   ║
   ║         guarantees no ROM-resident interrupt logic can intercept the    ║
   ║         raster interrupt (the hardware vector at $fffe normally lies    ║
   ║         inside the KERNAL ROM).                                         ║
   ╚═════════════════════════════════════════════════════════════════════════╝
*/

use crate::kernel::hw::Hw;

// Processor port data register
pub const PORT_DATA: u16 = 0x0001;

// LORAM and HIRAM cleared: RAM at $a000-$bfff and $e000-$ffff, the I/O
// area at $d000 stays mapped so the VIC and CIA registers remain visible.
pub const RAM_IO_RAM: u8 = 0x35;

// Power-on banking: BASIC, I/O and KERNAL all visible.
pub const DEFAULT_MAP: u8 = 0x37;

/**
 Description: Bank BASIC and KERNAL out of the address space for
              exclusive hardware control.
*/
pub fn map_ram_over_roms<H: Hw>(hw: &mut H) {
    hw.poke(PORT_DATA, RAM_IO_RAM);
}
