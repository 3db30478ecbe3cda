//! Migration manifest parsing for `migrations.yml`
//!
//! A manifest lists the migrations an application registers at startup and,
//! optionally, the schema it expects to run against. Each entry carries its
//! payload either inline (`sql`) or in a file next to the manifest (`file`).

use crate::error::{CoreError, CoreResult};
use crate::migration::{Migration, MigrationKey};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// File names probed by [`Manifest::load_from_dir`], in order
pub const MANIFEST_FILE_NAMES: &[&str] = &["migrations.yml", "migrations.yaml"];

/// Raw manifest as written in YAML
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestFile {
    /// Schema the application expects
    #[serde(default)]
    pub target: Option<String>,

    /// Migration entries
    #[serde(default)]
    pub migrations: Vec<MigrationEntry>,
}

/// One migration entry in the manifest
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MigrationEntry {
    /// Origin schema; omitted means an empty database
    #[serde(default)]
    pub from: String,

    /// Destination schema
    pub to: String,

    /// Inline payload
    #[serde(default)]
    pub sql: Option<String>,

    /// Payload file, relative to the manifest's directory
    #[serde(default)]
    pub file: Option<String>,
}

/// A loaded manifest with every payload resolved
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Schema the application expects, if declared
    pub target: Option<String>,

    /// Migrations in manifest order
    pub migrations: Vec<Migration>,

    /// Directory payload files were resolved against
    pub root: PathBuf,
}

impl Manifest {
    /// Load a manifest from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ManifestNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::from_yaml(&content, &root)
    }

    /// Load a manifest from a directory.
    /// Looks for migrations.yml or migrations.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        for name in MANIFEST_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.exists() {
                return Self::load(&candidate);
            }
        }
        Err(CoreError::ManifestNotFound {
            path: dir.join(MANIFEST_FILE_NAMES[0]).display().to_string(),
        })
    }

    /// Load from either a manifest file or a directory containing one
    pub fn discover(path: &Path) -> CoreResult<Self> {
        if path.is_dir() {
            Self::load_from_dir(path)
        } else {
            Self::load(path)
        }
    }

    /// Parse manifest YAML, resolving payload files against `root`
    pub fn from_yaml(content: &str, root: &Path) -> CoreResult<Self> {
        let file: ManifestFile = serde_yaml::from_str(content)?;
        Self::resolve(file, root)
    }

    fn resolve(file: ManifestFile, root: &Path) -> CoreResult<Self> {
        if let Some(target) = &file.target {
            if target.is_empty() {
                return Err(CoreError::ManifestInvalid {
                    message: "target must not be empty".to_string(),
                });
            }
        }

        let mut seen: HashSet<MigrationKey> = HashSet::new();
        let mut migrations = Vec::with_capacity(file.migrations.len());

        for entry in file.migrations {
            let payload = match (entry.sql, entry.file) {
                (Some(sql), None) => sql,
                (None, Some(rel)) => {
                    let path = root.join(&rel);
                    std::fs::read_to_string(&path).map_err(|e| CoreError::IoWithPath {
                        path: path.display().to_string(),
                        source: e,
                    })?
                }
                (Some(_), Some(_)) => {
                    return Err(CoreError::ManifestInvalid {
                        message: format!(
                            "migration '{}' -> '{}' sets both 'sql' and 'file'",
                            entry.from, entry.to
                        ),
                    })
                }
                (None, None) => {
                    return Err(CoreError::ManifestInvalid {
                        message: format!(
                            "migration '{}' -> '{}' needs either 'sql' or 'file'",
                            entry.from, entry.to
                        ),
                    })
                }
            };

            let migration = Migration::new(entry.from, entry.to, payload)?;
            if !seen.insert(migration.key()) {
                return Err(CoreError::ManifestInvalid {
                    message: format!("duplicate migration {migration}"),
                });
            }
            migrations.push(migration);
        }

        log::debug!(
            "Loaded {} migration(s) from manifest in {}",
            migrations.len(),
            root.display()
        );

        Ok(Self {
            target: file.target,
            migrations,
            root: root.to_path_buf(),
        })
    }
}

#[cfg(test)]
#[path = "manifest_test.rs"]
mod tests;
