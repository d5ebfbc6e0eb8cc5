//! Submission orchestration
//!
//! One submission is a single sequential pipeline run: preconditions →
//! extraction → storage plan → manifest render (iOS) → placement (local
//! copy or remote upload) → catalog record. A fatal error at any stage
//! aborts the remaining stages; side effects already written stay in
//! place.

use std::path::PathBuf;

use chrono::Utc;
use tracing::{info, instrument};

use hangar_core::{Config, RuntimeState, Visibility};
use hangar_extract::{ExtractedBuild, MetadataExtractor};
use hangar_site::{BuildRecord, CatalogBridge, CatalogStore, SiteConfigStore};

use crate::error::{PublishError, Result};
use crate::layout::{plan, FolderId, StorageLayout};
use crate::manifest::{load_template, render, BaseUrl};
use crate::placer::{copy_artifact, remove_source_best_effort};
use crate::remote::{RemoteOverrides, RemoteSettings, RemoteStore, S3RemoteStore};

/// Options for one submission
#[derive(Debug, Clone, Default)]
pub struct SubmitOptions {
    /// Path to the build artifact to submit
    pub artifact: PathBuf,
    /// Branch the build came from
    pub branch: Option<String>,
    /// Release notes shown in the catalog
    pub notes: Option<String>,
    /// Expose the build through the public tunnel
    pub public: bool,
    /// Delete the source artifact after a successful submission
    pub delete_artifact: bool,
    /// Remote storage overrides from CLI flags
    pub remote: RemoteOverrides,
}

/// Result of a completed submission
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub record: BuildRecord,
    pub layout: StorageLayout,
}

/// Run one submission end to end with the default remote store.
pub fn submit(
    config: &Config,
    state: &RuntimeState,
    extractor: &dyn MetadataExtractor,
    options: &SubmitOptions,
) -> Result<SubmitOutcome> {
    // Remote settings completeness is checked before any extraction or
    // upload work begins.
    let settings = RemoteSettings::resolve(config.remote_storage.as_ref(), &options.remote)?;
    let store = settings.map(S3RemoteStore::new);

    submit_with(
        config,
        state,
        extractor,
        store.as_ref().map(|s| s as &dyn RemoteStore),
        options,
    )
}

/// Run one submission with an explicit (possibly absent) remote store.
#[instrument(skip_all, fields(artifact = %options.artifact.display()))]
pub fn submit_with(
    config: &Config,
    state: &RuntimeState,
    extractor: &dyn MetadataExtractor,
    remote_store: Option<&dyn RemoteStore>,
    options: &SubmitOptions,
) -> Result<SubmitOutcome> {
    // Preconditions: no side effects before these pass.
    state.require_current_url()?;
    if !options.artifact.exists() {
        return Err(PublishError::ArtifactNotFound(options.artifact.clone()));
    }

    let build = extractor.extract(&options.artifact)?;
    let visibility = if options.public {
        Visibility::Public
    } else {
        Visibility::Local
    };

    let folder_id = FolderId::allocate();
    let layout = plan(&build, visibility, config, folder_id);
    let submitted_at = Utc::now();

    let remote_url = match remote_store {
        Some(store) => Some(place_remote(config, &build, &layout, store, options)?),
        None => {
            place_local(config, &build, &layout, options)?;
            None
        }
    };

    let record = BuildRecord {
        version: build.version().to_string(),
        build_number: build.build_number().to_string(),
        bundle: build.bundle_id().to_string(),
        folder_path: folder_id.value(),
        date: submitted_at,
        branch: options.branch.clone().unwrap_or_default(),
        notes: options.notes.clone().unwrap_or_default(),
        public: options.public,
        platform: build.platform(),
        file_name: match &build {
            ExtractedBuild::Android(b) => Some(b.file_name.clone()),
            ExtractedBuild::Ios(_) => None,
        },
        remote_url,
    };

    // Catalog write failures are fatal: a placed build without a catalog
    // record would be invisible to the front end.
    let bridge = CatalogBridge::new(
        CatalogStore::new(config.builds_dir()),
        SiteConfigStore::new(config.site_config_path()),
    );
    bridge.record_build(&record)?;

    if options.delete_artifact {
        remove_source_best_effort(&options.artifact);
    }

    info!(folder_id = folder_id.value(), platform = %record.platform, "build submitted");

    Ok(SubmitOutcome { record, layout })
}

/// Local placement: copy the artifact and write the planned manifests.
fn place_local(
    config: &Config,
    build: &ExtractedBuild,
    layout: &StorageLayout,
    options: &SubmitOptions,
) -> Result<()> {
    copy_artifact(&options.artifact, &layout.artifact_path)?;

    if let ExtractedBuild::Ios(ios) = build {
        let template = load_template(&config.manifest_template_path())?;
        let url_path = layout.artifact_url_path();

        if let Some(path) = &layout.local_manifest_path {
            render(&template, ios, &BaseUrl::Local.asset_url(&url_path))?.write_atomic(path)?;
        }
        if let Some(path) = &layout.web_manifest_path {
            render(&template, ios, &BaseUrl::Web.asset_url(&url_path))?.write_atomic(path)?;
        }
    }
    Ok(())
}

/// Remote placement: upload the artifact; for iOS, serve a single local
/// manifest whose asset URL is the remote object URL (reachable from
/// anywhere, so no separate web manifest is needed).
fn place_remote(
    config: &Config,
    build: &ExtractedBuild,
    layout: &StorageLayout,
    store: &dyn RemoteStore,
    options: &SubmitOptions,
) -> Result<String> {
    let url = store.upload(&options.artifact)?;

    if let ExtractedBuild::Ios(ios) = build {
        let template = load_template(&config.manifest_template_path())?;
        if let Some(path) = &layout.local_manifest_path {
            render(&template, ios, &url)?.write_atomic(path)?;
        }
    }
    Ok(url)
}
