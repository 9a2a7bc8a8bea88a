pub mod calculator;
pub mod log;
pub mod logic;
pub mod record;
