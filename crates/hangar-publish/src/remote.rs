//! Remote object storage (S3-compatible)
//!
//! When remote mode is active the artifact is uploaded to a bucket with
//! public-read visibility and the durable object URL replaces the local
//! artifact path in manifests and catalog entries. Settings completeness
//! is a precondition checked before any extraction or upload work begins.

use std::path::Path;

use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use tracing::info;

use hangar_core::RemoteStorageConfig;

use crate::error::{PublishError, Result};

/// Complete, validated remote storage settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSettings {
    pub region: String,
    pub bucket: String,
    pub access_key: String,
    pub secret_key: String,
}

/// Per-invocation overrides from CLI flags
#[derive(Debug, Clone, Default)]
pub struct RemoteOverrides {
    pub region: Option<String>,
    pub bucket: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

impl RemoteOverrides {
    fn is_empty(&self) -> bool {
        self.region.is_none()
            && self.bucket.is_none()
            && self.access_key.is_none()
            && self.secret_key.is_none()
    }
}

impl RemoteSettings {
    /// Resolve settings from CLI overrides layered over the configuration
    /// file.
    ///
    /// Returns `Ok(None)` when remote mode is not requested at all, a
    /// complete settings value when every field is present, and
    /// [`PublishError::RemoteSettingsIncomplete`] when remote mode is
    /// requested but any field is missing.
    pub fn resolve(
        base: Option<&RemoteStorageConfig>,
        overrides: &RemoteOverrides,
    ) -> Result<Option<Self>> {
        if overrides.is_empty() && base.is_none() {
            return Ok(None);
        }

        let field = |over: &Option<String>, conf: fn(&RemoteStorageConfig) -> Option<String>| {
            over.clone().or_else(|| base.and_then(conf))
        };

        let region = field(&overrides.region, |c| c.region.clone());
        let bucket = field(&overrides.bucket, |c| c.bucket.clone());
        let access_key = field(&overrides.access_key, |c| c.access_key.clone());
        let secret_key = field(&overrides.secret_key, |c| c.secret_key.clone());

        let mut missing = Vec::new();
        if region.is_none() {
            missing.push("region");
        }
        if bucket.is_none() {
            missing.push("bucket");
        }
        if access_key.is_none() {
            missing.push("access key");
        }
        if secret_key.is_none() {
            missing.push("secret key");
        }

        if !missing.is_empty() {
            return Err(PublishError::RemoteSettingsIncomplete(missing.join(", ")));
        }

        // All four checked above
        Ok(Some(Self {
            region: region.unwrap_or_default(),
            bucket: bucket.unwrap_or_default(),
            access_key: access_key.unwrap_or_default(),
            secret_key: secret_key.unwrap_or_default(),
        }))
    }
}

/// Boundary trait for remote artifact stores.
///
/// Blocking from the caller's perspective; implementations own any async
/// bridging internally.
pub trait RemoteStore {
    /// Upload the artifact, returning its durable public object URL.
    fn upload(&self, path: &Path) -> Result<String>;
}

/// S3 remote store driven through the AWS SDK
#[derive(Debug, Clone)]
pub struct S3RemoteStore {
    settings: RemoteSettings,
}

impl S3RemoteStore {
    pub fn new(settings: RemoteSettings) -> Self {
        Self { settings }
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.settings.bucket, self.settings.region, key
        )
    }

    async fn upload_async(&self, path: &Path, key: &str) -> Result<()> {
        let credentials = Credentials::new(
            self.settings.access_key.clone(),
            self.settings.secret_key.clone(),
            None,
            None,
            "hangar",
        );
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(self.settings.region.clone()))
            .credentials_provider(credentials)
            .build();
        let client = aws_sdk_s3::Client::from_conf(config);

        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| PublishError::UploadFailed(format!("failed to read artifact: {}", e)))?;

        client
            .put_object()
            .bucket(&self.settings.bucket)
            .key(key)
            .acl(ObjectCannedAcl::PublicRead)
            .body(body)
            .send()
            .await
            .map_err(|e| PublishError::UploadFailed(e.to_string()))?;

        Ok(())
    }
}

impl RemoteStore for S3RemoteStore {
    fn upload(&self, path: &Path) -> Result<String> {
        let key = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| PublishError::ArtifactNotFound(path.to_path_buf()))?
            .to_string();

        info!(bucket = %self.settings.bucket, key, "uploading artifact to remote storage");

        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(self.upload_async(path, &key))?;

        Ok(self.object_url(&key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(region: bool, bucket: bool, key: bool, secret: bool) -> RemoteOverrides {
        RemoteOverrides {
            region: region.then(|| "eu-west-1".to_string()),
            bucket: bucket.then(|| "builds".to_string()),
            access_key: key.then(|| "AKIA".to_string()),
            secret_key: secret.then(|| "shh".to_string()),
        }
    }

    #[test]
    fn test_no_remote_settings_means_local_mode() {
        let resolved = RemoteSettings::resolve(None, &RemoteOverrides::default()).unwrap();
        assert!(resolved.is_none());
    }

    #[test]
    fn test_complete_overrides_resolve() {
        let resolved = RemoteSettings::resolve(None, &overrides(true, true, true, true))
            .unwrap()
            .unwrap();
        assert_eq!(resolved.bucket, "builds");
        assert_eq!(resolved.region, "eu-west-1");
    }

    #[test]
    fn test_incomplete_settings_name_missing_fields() {
        let err = RemoteSettings::resolve(None, &overrides(true, false, true, false)).unwrap_err();
        match err {
            PublishError::RemoteSettingsIncomplete(missing) => {
                assert_eq!(missing, "bucket, secret key");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_overrides_layer_over_config() {
        let base = RemoteStorageConfig {
            region: Some("us-east-1".to_string()),
            bucket: Some("builds".to_string()),
            access_key: Some("AKIA".to_string()),
            secret_key: Some("shh".to_string()),
        };
        let resolved =
            RemoteSettings::resolve(Some(&base), &overrides(true, false, false, false))
                .unwrap()
                .unwrap();
        // CLI region wins, the rest come from config
        assert_eq!(resolved.region, "eu-west-1");
        assert_eq!(resolved.bucket, "builds");
    }

    #[test]
    fn test_object_url_shape() {
        let store = S3RemoteStore::new(RemoteSettings {
            region: "eu-west-1".to_string(),
            bucket: "builds".to_string(),
            access_key: "AKIA".to_string(),
            secret_key: "shh".to_string(),
        });
        assert_eq!(
            store.object_url("app-release.apk"),
            "https://builds.s3.eu-west-1.amazonaws.com/app-release.apk"
        );
    }
}
