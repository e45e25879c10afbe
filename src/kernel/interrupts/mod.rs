pub mod isr;
pub mod raster;
