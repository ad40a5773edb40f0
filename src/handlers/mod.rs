pub mod power;
pub mod readings;
