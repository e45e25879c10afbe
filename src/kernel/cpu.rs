/* ╔═════════════════════════════════════════════════════════════════════════╗
   ║ Module: cpu                                                             ║
   ╟─────────────────────────────────────────────────────────────────────────╢
   ║ Descr.: Primitives for the 6510 processor flags. Only the interrupt     ║
   ║         mask is needed here: 'sei' holds off all maskable interrupts    ║
   ║         during configuration, 'cli' releases them again.                ║
   ║                                                                         ║
   ║         The asm forms exist only for the 'mos' target; on any other     ║
   ║         architecture these functions compile to nothing so that the     ║
   ║         'Hw'-generic layer above can be exercised on a host.            ║
   ╚═════════════════════════════════════════════════════════════════════════╝
*/

/**
 Description: Set the I flag, blocking all maskable interrupts.
*/
#[inline]
#[cfg(target_arch = "mos")]
pub fn disable_int() {
    unsafe {
        core::arch::asm!("sei");
    }
}

/**
 Description: Clear the I flag, allowing the CPU to respond to
              interrupt requests again.
*/
#[inline]
#[cfg(target_arch = "mos")]
pub fn enable_int() {
    unsafe {
        core::arch::asm!("cli");
    }
}

#[inline]
#[cfg(not(target_arch = "mos"))]
pub fn disable_int() {}

#[inline]
#[cfg(not(target_arch = "mos"))]
pub fn enable_int() {}
