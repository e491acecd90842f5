// Domain entities

pub mod config;
pub mod item;
pub mod manifest;
pub mod route;

pub use config::*;
pub use item::*;
pub use manifest::*;
pub use route::*;
