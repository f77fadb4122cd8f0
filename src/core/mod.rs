pub mod field;
pub mod star;

pub use field::*;
pub use star::*;
