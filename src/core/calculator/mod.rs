pub mod delta;
pub mod interval;
pub mod resolve;
