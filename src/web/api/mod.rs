pub mod error;
pub mod slowc;
