pub mod imports;
pub mod paths;
pub mod routes;
pub mod validation;

pub use imports::*;
pub use paths::*;
pub use routes::*;
pub use validation::*;
