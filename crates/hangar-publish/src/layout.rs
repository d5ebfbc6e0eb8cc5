//! Storage planning
//!
//! Computes the unique storage folder for a submission and the set of
//! destination paths implied by platform and visibility. Planning is pure
//! computation; directories are created later by the placer.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use hangar_core::{Config, Visibility};
use hangar_extract::ExtractedBuild;

/// Subtree (relative to a web root) that build folders live under
pub const BUILD_ASSETS_SUBTREE: &str = "assets/b";

/// Last folder id issued by this process. Folder ids are wall-clock
/// milliseconds, but allocation never reissues or goes below a previously
/// issued value, so two allocations in the same millisecond still differ.
static LAST_ISSUED: AtomicU64 = AtomicU64::new(0);

/// Unique, human-sortable key for one submission's storage folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FolderId(u64);

impl FolderId {
    /// Allocate a folder id from the current wall-clock time.
    pub fn allocate() -> Self {
        Self::from_timestamp(Utc::now().timestamp_millis().max(0) as u64)
    }

    /// Allocate a folder id for the given millisecond timestamp, bumping
    /// past any id this process already issued.
    pub fn from_timestamp(now_ms: u64) -> Self {
        let mut prev = LAST_ISSUED.load(Ordering::Relaxed);
        loop {
            let candidate = now_ms.max(prev + 1);
            match LAST_ISSUED.compare_exchange(
                prev,
                candidate,
                Ordering::SeqCst,
                Ordering::Relaxed,
            ) {
                Ok(_) => return FolderId(candidate),
                Err(actual) => prev = actual,
            }
        }
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for FolderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Destination paths for one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub folder_id: FolderId,
    /// iOS install manifest served on the local network
    pub local_manifest_path: Option<PathBuf>,
    /// iOS install manifest served through the public tunnel
    pub web_manifest_path: Option<PathBuf>,
    /// Where the raw artifact bytes are copied to
    pub artifact_path: PathBuf,
    /// Filename the artifact is served under
    pub artifact_file_name: String,
}

impl StorageLayout {
    /// Site-relative URL path of the artifact, appended to a base URL by
    /// the manifest generator.
    pub fn artifact_url_path(&self) -> String {
        format!(
            "{}/{}/{}",
            BUILD_ASSETS_SUBTREE, self.folder_id, self.artifact_file_name
        )
    }
}

/// Compute the storage layout for one submission.
///
/// iOS builds get a local manifest under the assets root (the dedicated
/// assets server when one is configured, the main web root otherwise) and,
/// when public and not already served from a separate public root, a second
/// manifest under the main web root. Android builds are served directly;
/// no manifest paths are produced.
pub fn plan(
    build: &ExtractedBuild,
    visibility: Visibility,
    config: &Config,
    folder_id: FolderId,
) -> StorageLayout {
    let artifact_file_name = build.artifact_file_name();
    let folder = folder_id.to_string();

    // The raw artifact always lives under the main web root.
    let artifact_path = config
        .web_root()
        .join(BUILD_ASSETS_SUBTREE)
        .join(&folder)
        .join(&artifact_file_name);

    match build {
        ExtractedBuild::Ios(_) => {
            let local_manifest_path = config
                .local_assets_root()
                .join(BUILD_ASSETS_SUBTREE)
                .join(&folder)
                .join("local")
                .join("manifest.plist");

            let web_manifest_path = (visibility.is_public() && !config.assets_web).then(|| {
                config
                    .web_root()
                    .join(BUILD_ASSETS_SUBTREE)
                    .join(&folder)
                    .join("web")
                    .join("manifest.plist")
            });

            StorageLayout {
                folder_id,
                local_manifest_path: Some(local_manifest_path),
                web_manifest_path,
                artifact_path,
                artifact_file_name,
            }
        }
        ExtractedBuild::Android(_) => StorageLayout {
            folder_id,
            local_manifest_path: None,
            web_manifest_path: None,
            artifact_path,
            artifact_file_name,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangar_extract::{AndroidBuild, IosBuild};
    use std::path::PathBuf;

    fn config(assets_web: bool) -> Config {
        Config {
            working_directory: PathBuf::from("/srv/hangar"),
            local_base_url: "http://10.0.0.2:5000".to_string(),
            web_port: 5000,
            assets_port: 5001,
            assets_web,
            private_web: false,
            remote_storage: None,
        }
    }

    fn ios() -> ExtractedBuild {
        ExtractedBuild::Ios(IosBuild {
            bundle_id: "com.acme.app".into(),
            display_name: "Acme".into(),
            version: "1.2.0".into(),
            build_number: "45".into(),
        })
    }

    fn android() -> ExtractedBuild {
        ExtractedBuild::Android(AndroidBuild {
            bundle_id: "com.acme.app".into(),
            file_name: "app-release.apk".into(),
            version: "1.2.0".into(),
            build_number: "45".into(),
        })
    }

    #[test]
    fn test_folder_ids_distinct_across_milliseconds() {
        let a = FolderId::from_timestamp(1_700_000_000_000);
        let b = FolderId::from_timestamp(1_700_000_000_001);
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_folder_ids_distinct_within_one_millisecond() {
        // Wall-clock collision: the original timestamp-only scheme would
        // hand out the same id twice here.
        let a = FolderId::from_timestamp(1_800_000_000_000);
        let b = FolderId::from_timestamp(1_800_000_000_000);
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_ios_private_layout() {
        let layout = plan(
            &ios(),
            Visibility::Local,
            &config(false),
            FolderId::from_timestamp(1_700_000_100_000),
        );
        let id = layout.folder_id.to_string();

        assert_eq!(
            layout.local_manifest_path.unwrap(),
            PathBuf::from(format!("/srv/hangar/web/assets/b/{}/local/manifest.plist", id))
        );
        assert!(layout.web_manifest_path.is_none());
        assert_eq!(
            layout.artifact_path,
            PathBuf::from(format!("/srv/hangar/web/assets/b/{}/Acme.ipa", id))
        );
    }

    #[test]
    fn test_ios_public_layout_adds_web_manifest() {
        let layout = plan(
            &ios(),
            Visibility::Public,
            &config(false),
            FolderId::from_timestamp(1_700_000_200_000),
        );
        let id = layout.folder_id.to_string();

        assert_eq!(
            layout.web_manifest_path.unwrap(),
            PathBuf::from(format!("/srv/hangar/web/assets/b/{}/web/manifest.plist", id))
        );
    }

    #[test]
    fn test_separate_assets_host_skips_web_manifest() {
        let layout = plan(
            &ios(),
            Visibility::Public,
            &config(true),
            FolderId::from_timestamp(1_700_000_300_000),
        );

        // Local manifest moves under the assets server; the public root is
        // already separate, so no second manifest is planned.
        assert!(layout
            .local_manifest_path
            .unwrap()
            .starts_with("/srv/hangar/asset_server"));
        assert!(layout.web_manifest_path.is_none());
    }

    #[test]
    fn test_android_layout_has_no_manifests() {
        let layout = plan(
            &android(),
            Visibility::Public,
            &config(false),
            FolderId::from_timestamp(1_700_000_400_000),
        );
        let id = layout.folder_id.to_string();

        assert!(layout.local_manifest_path.is_none());
        assert!(layout.web_manifest_path.is_none());
        assert_eq!(
            layout.artifact_path,
            PathBuf::from(format!("/srv/hangar/web/assets/b/{}/app-release.apk", id))
        );
        assert_eq!(
            layout.artifact_url_path(),
            format!("assets/b/{}/app-release.apk", id)
        );
    }
}
