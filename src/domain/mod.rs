pub mod parameters;
pub mod risk;
