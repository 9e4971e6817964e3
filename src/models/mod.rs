pub mod enums;
pub mod object;

pub use enums::*;
pub use object::*;
