pub mod errors;
pub mod filter;
pub mod form;
pub mod order;
pub mod ports;
