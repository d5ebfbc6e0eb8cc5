//! Append-only build catalog
//!
//! Each submitted build becomes one `web/_builds/<folderId>.md` document:
//! a YAML front-matter block the external site generator turns into a
//! catalog page. Entries are immutable once written.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{Result, SiteError};
use crate::record::BuildRecord;
use crate::site_config::{SiteConfigStore, KEY_INITIALIZED};

/// Append-only store of catalog documents
#[derive(Debug, Clone)]
pub struct CatalogStore {
    builds_dir: PathBuf,
}

impl CatalogStore {
    pub fn new(builds_dir: impl Into<PathBuf>) -> Self {
        Self {
            builds_dir: builds_dir.into(),
        }
    }

    /// Append one entry, keyed by folder id.
    ///
    /// The document is created with `create_new` so a colliding folder id
    /// (two submissions racing on the same key) surfaces as an error
    /// instead of overwriting an existing record.
    pub fn append(&self, record: &BuildRecord) -> Result<()> {
        std::fs::create_dir_all(&self.builds_dir)?;
        let path = self.entry_path(record.folder_path);

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::AlreadyExists {
                    SiteError::DuplicateBuild(record.folder_path)
                } else {
                    SiteError::Io(e)
                }
            })?;

        let yaml = serde_yaml::to_string(record)?;
        file.write_all(format!("---\n{}---\n", yaml).as_bytes())?;
        info!(path = %path.display(), "catalog entry recorded");
        Ok(())
    }

    /// List all recorded builds, newest first.
    pub fn list(&self) -> Result<Vec<BuildRecord>> {
        let mut records = Vec::new();
        if !self.builds_dir.exists() {
            return Ok(records);
        }

        for entry in std::fs::read_dir(&self.builds_dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "md") {
                let content = std::fs::read_to_string(&path)?;
                match parse_front_matter(&content) {
                    Some(yaml) => records.push(serde_yaml::from_str(yaml)?),
                    None => debug!(path = %path.display(), "skipping document without front matter"),
                }
            }
        }

        records.sort_by(|a, b| b.folder_path.cmp(&a.folder_path));
        Ok(records)
    }

    fn entry_path(&self, folder_id: u64) -> PathBuf {
        self.builds_dir.join(format!("{}.md", folder_id))
    }

    pub fn builds_dir(&self) -> &Path {
        &self.builds_dir
    }
}

/// Extract the YAML block between the leading `---` markers.
fn parse_front_matter(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---\n")?;
    let end = rest.find("\n---")?;
    Some(&rest[..end + 1])
}

/// The Catalog Bridge: records builds and keeps the shared site
/// configuration in step.
#[derive(Debug, Clone)]
pub struct CatalogBridge {
    catalog: CatalogStore,
    site_config: SiteConfigStore,
}

impl CatalogBridge {
    pub fn new(catalog: CatalogStore, site_config: SiteConfigStore) -> Self {
        Self {
            catalog,
            site_config,
        }
    }

    /// Append one build record.
    ///
    /// The very first successful append also flips the site
    /// configuration's `initialized` flag, exactly once; later appends see
    /// the flag set and leave the configuration untouched.
    pub fn record_build(&self, record: &BuildRecord) -> Result<()> {
        self.catalog.append(record)?;

        if !self.site_config.is_initialized()? {
            let mut partial = Map::new();
            partial.insert(KEY_INITIALIZED.to_string(), Value::Bool(true));
            self.site_config.merge(partial)?;
        }
        Ok(())
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn site_config(&self) -> &SiteConfigStore {
        &self.site_config
    }
}
