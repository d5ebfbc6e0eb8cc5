//! iOS install manifest generation
//!
//! An over-the-air install manifest is a plist the device fetches through
//! an `itms-services://` link. Rendering clones the pre-provisioned
//! template and rewrites exactly four fields: bundle version, bundle
//! identifier, title, and the first asset's download URL. Everything else
//! passes through untouched.
//!
//! The serialized manifest is prefixed with an empty Jekyll front-matter
//! block so the site generator runs it through the Liquid templating pass
//! (the asset URL contains a `{{site.data.config.*}}` placeholder) instead
//! of serving it as a static file.

use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use hangar_extract::IosBuild;

use crate::error::{PublishError, Result};

/// Two-line empty front-matter marker the site generator keys on
pub const JEKYLL_FRONT_MATTER: &str = "---\n---\n\n";

/// Which configured base URL the manifest's asset link goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrl {
    /// Local network address (`site.data.config.localBaseURL`)
    Local,
    /// Public tunnel address (`site.data.config.webBaseURL`)
    Web,
}

impl BaseUrl {
    /// Liquid placeholder resolved by the site generator at render time.
    pub fn placeholder(self) -> &'static str {
        match self {
            BaseUrl::Local => "{{site.data.config.localBaseURL}}",
            BaseUrl::Web => "{{site.data.config.webBaseURL}}",
        }
    }

    /// Full asset URL for a site-relative artifact path.
    pub fn asset_url(self, artifact_url_path: &str) -> String {
        format!("{}/{}", self.placeholder(), artifact_url_path)
    }
}

/// A rendered install manifest, ready to be written.
#[derive(Debug, Clone)]
pub struct ManifestDocument {
    value: plist::Value,
}

/// Load the manifest template from its pre-provisioned location.
pub fn load_template(path: &Path) -> Result<plist::Value> {
    if !path.exists() {
        return Err(PublishError::TemplateMissing(path.to_path_buf()));
    }
    debug!(path = %path.display(), "loading manifest template");
    Ok(plist::Value::from_file(path)?)
}

/// Render a manifest from the template for one build.
///
/// Rewrites `items[0].metadata.bundle-version`, `.bundle-identifier`,
/// `.title` and `items[0].assets[0].url`; all other template fields are
/// carried over byte-identically.
pub fn render(template: &plist::Value, build: &IosBuild, asset_url: &str) -> Result<ManifestDocument> {
    let mut value = template.clone();

    let item = value
        .as_dictionary_mut()
        .and_then(|dict| dict.get_mut("items"))
        .and_then(|items| items.as_array_mut())
        .and_then(|items| items.first_mut())
        .and_then(|item| item.as_dictionary_mut())
        .ok_or_else(|| PublishError::ManifestMalformed("missing items[0] dictionary".to_string()))?;

    let metadata = item
        .get_mut("metadata")
        .and_then(|m| m.as_dictionary_mut())
        .ok_or_else(|| PublishError::ManifestMalformed("missing items[0].metadata".to_string()))?;

    metadata.insert(
        "bundle-version".to_string(),
        plist::Value::String(build.version.clone()),
    );
    metadata.insert(
        "bundle-identifier".to_string(),
        plist::Value::String(build.bundle_id.clone()),
    );
    metadata.insert(
        "title".to_string(),
        plist::Value::String(build.display_name.clone()),
    );

    let asset = item
        .get_mut("assets")
        .and_then(|a| a.as_array_mut())
        .and_then(|a| a.first_mut())
        .and_then(|a| a.as_dictionary_mut())
        .ok_or_else(|| PublishError::ManifestMalformed("missing items[0].assets[0]".to_string()))?;

    asset.insert("url".to_string(), plist::Value::String(asset_url.to_string()));

    Ok(ManifestDocument { value })
}

impl ManifestDocument {
    /// Serialized document: front matter marker followed by plist XML.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::from(JEKYLL_FRONT_MATTER.as_bytes());
        self.value.to_writer_xml(&mut buf)?;
        Ok(buf)
    }

    /// Write the document to `path` via a temp file and atomic rename, so
    /// no reader ever observes a half-written manifest.
    pub fn write_atomic(&self, path: &Path) -> Result<()> {
        let parent = path.parent().ok_or_else(|| {
            PublishError::ManifestMalformed(format!("manifest path {} has no parent", path.display()))
        })?;
        std::fs::create_dir_all(parent)?;

        let mut temp = tempfile::NamedTempFile::new_in(parent)?;
        temp.write_all(&self.to_bytes()?)?;
        temp.persist(path).map_err(|e| PublishError::Io(e.error))?;

        info!(path = %path.display(), "manifest written");
        Ok(())
    }

    pub fn as_value(&self) -> &plist::Value {
        &self.value
    }
}
