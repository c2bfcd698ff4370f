pub mod tokens;

pub mod theme;

mod emit;
pub use emit::*;
