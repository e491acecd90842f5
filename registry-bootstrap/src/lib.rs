pub mod context;
pub mod lifecycle;
pub mod logging;

pub use lifecycle::{print_routes, run_export, run_standalone};
