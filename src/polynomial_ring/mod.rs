pub mod error;
mod parse;
pub mod poly;
pub mod term;
