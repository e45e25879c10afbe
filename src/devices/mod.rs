pub mod cia;
pub mod port_6510;
pub mod vic;
