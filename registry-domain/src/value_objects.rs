// Domain value objects
pub mod identifiers;
pub mod item_type;

pub use identifiers::*;
pub use item_type::*;
