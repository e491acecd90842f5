pub mod export_files;
pub mod manifest_files;
pub mod source_files;

pub use export_files::*;
pub use manifest_files::*;
pub use source_files::*;
