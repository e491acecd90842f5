pub mod ops_handlers;
pub mod registry_handlers;

pub use ops_handlers::*;
pub use registry_handlers::*;
