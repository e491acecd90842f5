// Shape validation for registry entries
// `validate_entry` runs before any file I/O, `validate_resolved` after.

use std::path::Path;

use crate::entities::{ManifestEntry, RegistryFile, RegistryItem};
use crate::error::ValidationError;
use crate::services::paths::{escapes_root, normalize_path};
use crate::value_objects::RegistryItemType;

fn is_absolute(path: &str) -> bool {
    path.starts_with('/') || path.starts_with('\\') || Path::new(path).is_absolute()
}

/// Turns a declared entry into a typed item. Bare-string files inherit the
/// item type; paths are normalized but not yet relativized.
pub fn validate_entry(entry: &ManifestEntry) -> Result<RegistryItem, ValidationError> {
    let name = entry.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let item_type =
        RegistryItemType::parse(&entry.item_type).ok_or_else(|| ValidationError::UnknownItemType {
            name: name.to_string(),
            value: entry.item_type.clone(),
        })?;

    let mut files = Vec::with_capacity(entry.files.len());
    for (index, declared) in entry.files.iter().enumerate() {
        let descriptor = declared.to_descriptor();
        let raw_path = descriptor.path.trim();
        if raw_path.is_empty() {
            return Err(ValidationError::EmptyFilePath {
                name: name.to_string(),
                index,
            });
        }
        if is_absolute(raw_path) {
            return Err(ValidationError::AbsoluteFilePath {
                name: name.to_string(),
                path: raw_path.to_string(),
            });
        }
        if escapes_root(raw_path) {
            return Err(ValidationError::EscapingFilePath {
                name: name.to_string(),
                path: raw_path.to_string(),
            });
        }
        let file_type = match descriptor.file_type.as_deref() {
            Some(value) => {
                RegistryItemType::parse(value).ok_or_else(|| ValidationError::UnknownFileType {
                    name: name.to_string(),
                    path: raw_path.to_string(),
                    value: value.to_string(),
                })?
            }
            None => item_type,
        };
        files.push(RegistryFile {
            path: normalize_path(raw_path),
            content: descriptor.content,
            file_type,
            target: descriptor.target,
        });
    }

    Ok(RegistryItem {
        name: name.to_string(),
        item_type,
        description: entry.description.clone(),
        dependencies: entry.dependencies.clone(),
        dev_dependencies: entry.dev_dependencies.clone(),
        registry_dependencies: entry.registry_dependencies.clone(),
        files,
        source: entry.source.clone(),
        category: entry.category.clone(),
        subcategory: entry.subcategory.clone(),
    })
}

/// Checks a fully resolved item: content loaded, paths relative, targets set.
pub fn validate_resolved(item: &RegistryItem) -> Result<(), ValidationError> {
    if item.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    for file in &item.files {
        if file.content.is_none() {
            return Err(ValidationError::MissingContent {
                name: item.name.clone(),
                path: file.path.clone(),
            });
        }
        if is_absolute(&file.path) {
            return Err(ValidationError::AbsoluteFilePath {
                name: item.name.clone(),
                path: file.path.clone(),
            });
        }
        if file.target.as_deref().map(str::is_empty).unwrap_or(true) {
            return Err(ValidationError::MissingTarget {
                name: item.name.clone(),
                path: file.path.clone(),
            });
        }
    }
    Ok(())
}
