use thiserror::Error;

/// Reasons a registry entry is rejected before or after resolution.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("item name is empty")]
    EmptyName,
    #[error("item '{name}' has unknown type '{value}'")]
    UnknownItemType { name: String, value: String },
    #[error("file #{index} of '{name}' has an empty path")]
    EmptyFilePath { name: String, index: usize },
    #[error("file '{path}' of '{name}' must be a relative path")]
    AbsoluteFilePath { name: String, path: String },
    #[error("file '{path}' of '{name}' points outside the source root")]
    EscapingFilePath { name: String, path: String },
    #[error("file '{path}' of '{name}' has unknown type '{value}'")]
    UnknownFileType {
        name: String,
        path: String,
        value: String,
    },
    #[error("file '{path}' of '{name}' has no content")]
    MissingContent { name: String, path: String },
    #[error("file '{path}' of '{name}' has no install target")]
    MissingTarget { name: String, path: String },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ManifestError {
    #[error("duplicate registry item '{0}'")]
    DuplicateName(String),
}
