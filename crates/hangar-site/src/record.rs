//! Build catalog entry

use chrono::{DateTime, Utc};
use hangar_core::Platform;
use serde::{Deserialize, Serialize};

/// The durable record of a completed submission.
///
/// Field names are camelCase on disk because the external web front end
/// reads these documents directly. Records are immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRecord {
    pub version: String,
    pub build_number: String,
    pub bundle: String,
    /// Folder id the build's assets live under; also the catalog key
    pub folder_path: u64,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub notes: String,
    pub public: bool,
    pub platform: Platform,
    /// Original artifact filename (Android only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Remote object URL replacing the local artifact path (remote mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_camel_case_field_names() {
        let record = BuildRecord {
            version: "1.2.0".into(),
            build_number: "45".into(),
            bundle: "com.acme.app".into(),
            folder_path: 1700000000000,
            date: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            branch: "main".into(),
            notes: String::new(),
            public: false,
            platform: Platform::Ios,
            file_name: None,
            remote_url: None,
        };

        let yaml = serde_yaml::to_string(&record).unwrap();
        assert!(yaml.contains("buildNumber: '45'"));
        assert!(yaml.contains("folderPath: 1700000000000"));
        assert!(yaml.contains("platform: ios"));
        assert!(!yaml.contains("fileName"));
    }
}
