pub mod cpu;
pub mod hw;
pub mod interrupts;
