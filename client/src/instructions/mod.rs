pub mod exchange;
pub mod initialize;

pub use exchange::*;
pub use initialize::*;
