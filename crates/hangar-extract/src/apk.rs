//! Android `.apk`/`.aab` metadata extraction
//!
//! Android manifests inside the archive are binary XML, so extraction
//! shells out to `aapt2 dump badging` from the Android build tools.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::types::AndroidBuild;

/// Extract identifying metadata from an `.apk` or `.aab` archive.
pub fn extract_apk(path: &Path) -> Result<AndroidBuild> {
    let aapt2 =
        which::which("aapt2").map_err(|_| ExtractError::ToolNotFound("aapt2".to_string()))?;

    let output = Command::new(aapt2)
        .arg("dump")
        .arg("badging")
        .arg(path)
        .output()
        .map_err(|e| ExtractError::CommandFailed(format!("aapt2 failed to run: {}", e)))?;

    if !output.status.success() {
        return Err(ExtractError::CommandFailed(format!(
            "aapt2 dump badging exited with {}",
            output.status
        )));
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .ok_or(ExtractError::MissingField("file name"))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_badging(&stdout, file_name)
}

/// Parse the `package:` line of `aapt2 dump badging` output.
///
/// Example: `package: name='com.acme.app' versionCode='45' versionName='1.2.0'`
fn parse_badging(stdout: &str, file_name: String) -> Result<AndroidBuild> {
    let mut bundle_id = None;
    let mut version = None;
    let mut build_number = None;

    for line in stdout.lines() {
        if let Some(rest) = line.strip_prefix("package:") {
            for part in rest.split_whitespace() {
                if let Some(v) = quoted_value(part, "name") {
                    bundle_id = Some(v);
                } else if let Some(v) = quoted_value(part, "versionName") {
                    version = Some(v);
                } else if let Some(v) = quoted_value(part, "versionCode") {
                    build_number = Some(v);
                }
            }
        }
    }

    let bundle_id = bundle_id
        .filter(|v| !v.is_empty())
        .ok_or(ExtractError::MissingField("package name"))?;
    let version = version
        .filter(|v| !v.is_empty())
        .ok_or(ExtractError::MissingField("versionName"))?;
    let build_number = build_number
        .filter(|v| !v.is_empty())
        .ok_or(ExtractError::MissingField("versionCode"))?;

    debug!(bundle_id, version, build_number, "apk metadata extracted");

    Ok(AndroidBuild {
        bundle_id,
        file_name,
        version,
        build_number,
    })
}

fn quoted_value(part: &str, key: &str) -> Option<String> {
    part.strip_prefix(key)?
        .strip_prefix("='")?
        .strip_suffix('\'')
        .map(|v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BADGING: &str = "package: name='com.acme.app' versionCode='45' versionName='1.2.0' platformBuildVersionName='14'\napplication-label:'Acme'\nsdkVersion:'24'";

    #[test]
    fn test_parse_badging() {
        let build = parse_badging(BADGING, "app-release.apk".to_string()).unwrap();
        assert_eq!(build.bundle_id, "com.acme.app");
        assert_eq!(build.version, "1.2.0");
        assert_eq!(build.build_number, "45");
        assert_eq!(build.file_name, "app-release.apk");
    }

    #[test]
    fn test_missing_version_name_is_fatal() {
        let out = "package: name='com.acme.app' versionCode='45'";
        assert!(matches!(
            parse_badging(out, "a.apk".to_string()).unwrap_err(),
            ExtractError::MissingField("versionName")
        ));
    }

    #[test]
    fn test_empty_package_name_is_fatal() {
        let out = "package: name='' versionCode='45' versionName='1.0'";
        assert!(matches!(
            parse_badging(out, "a.apk".to_string()).unwrap_err(),
            ExtractError::MissingField("package name")
        ));
    }
}
