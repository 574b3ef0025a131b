pub mod errors;
pub mod ports;
pub mod ticket;
