//! iOS `.ipa` metadata extraction
//!
//! An `.ipa` is a zip archive containing `Payload/<Name>.app/Info.plist`.
//! The plist may be XML or binary; `plist::Value::from_reader` handles both.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::types::IosBuild;

/// Extract identifying metadata from an `.ipa` archive.
pub fn extract_ipa(path: &Path) -> Result<IosBuild> {
    let file = std::fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| ExtractError::InvalidArtifact(format!("Invalid ipa archive: {}", e)))?;

    // First pass: find the app bundle's Info.plist index
    let mut plist_index: Option<usize> = None;
    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .map_err(|e| ExtractError::InvalidArtifact(format!("Failed to read ipa entry: {}", e)))?;

        let name = entry.name().to_string();
        drop(entry);

        if is_app_info_plist(&name) {
            plist_index = Some(i);
            break;
        }
    }

    let index = plist_index.ok_or_else(|| {
        ExtractError::InvalidArtifact("No Payload/*.app/Info.plist in ipa".to_string())
    })?;

    // Second pass: extract and parse it
    let mut entry = archive
        .by_index(index)
        .map_err(|e| ExtractError::InvalidArtifact(format!("Failed to read ipa entry: {}", e)))?;
    let mut contents = Vec::new();
    entry.read_to_end(&mut contents)?;
    drop(entry);

    let value: plist::Value = plist::Value::from_reader(std::io::Cursor::new(&contents))
        .map_err(|e| ExtractError::InvalidArtifact(format!("Failed to parse Info.plist: {}", e)))?;

    let dict = value
        .as_dictionary()
        .ok_or_else(|| ExtractError::InvalidArtifact("Info.plist is not a dictionary".to_string()))?;

    // All four identifying fields are mandatory; no defaults.
    let bundle_id = required(dict, "CFBundleIdentifier")?;
    let version = required(dict, "CFBundleShortVersionString")?;
    let build_number = required(dict, "CFBundleVersion")?;
    let display_name = dict
        .get("CFBundleDisplayName")
        .or_else(|| dict.get("CFBundleName"))
        .and_then(|v| v.as_string())
        .map(|s| s.to_string())
        .ok_or(ExtractError::MissingField("CFBundleDisplayName"))?;

    debug!(bundle_id, version, build_number, "ipa metadata extracted");

    Ok(IosBuild {
        bundle_id,
        display_name,
        version,
        build_number,
    })
}

fn required(dict: &plist::Dictionary, key: &'static str) -> Result<String> {
    dict.get(key)
        .and_then(|v| v.as_string())
        .map(|s| s.to_string())
        .ok_or(ExtractError::MissingField(key))
}

/// Matches `Payload/<Name>.app/Info.plist` exactly, skipping plists of
/// nested bundles (extensions, watch apps).
fn is_app_info_plist(name: &str) -> bool {
    let mut parts = name.split('/');
    matches!(
        (parts.next(), parts.next(), parts.next(), parts.next()),
        (Some("Payload"), Some(app), Some("Info.plist"), None) if app.ends_with(".app")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn info_plist(fields: &[(&str, &str)]) -> String {
        let entries: String = fields
            .iter()
            .map(|(k, v)| format!("<key>{}</key>\n<string>{}</string>\n", k, v))
            .collect();
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
{}</dict>
</plist>"#,
            entries
        )
    }

    fn write_ipa(dir: &TempDir, plist: &str) -> std::path::PathBuf {
        let path = dir.path().join("app.ipa");
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default();
        writer
            .start_file("Payload/Acme.app/Info.plist", options)
            .unwrap();
        writer.write_all(plist.as_bytes()).unwrap();
        writer.start_file("Payload/Acme.app/Acme", options).unwrap();
        writer.write_all(b"binary").unwrap();
        writer.finish().unwrap();
        path
    }

    #[test]
    fn test_extract_complete_ipa() {
        let temp = TempDir::new().unwrap();
        let path = write_ipa(
            &temp,
            &info_plist(&[
                ("CFBundleIdentifier", "com.acme.app"),
                ("CFBundleDisplayName", "Acme"),
                ("CFBundleShortVersionString", "1.2.0"),
                ("CFBundleVersion", "45"),
            ]),
        );

        let build = extract_ipa(&path).unwrap();
        assert_eq!(build.bundle_id, "com.acme.app");
        assert_eq!(build.display_name, "Acme");
        assert_eq!(build.version, "1.2.0");
        assert_eq!(build.build_number, "45");
    }

    #[test]
    fn test_missing_version_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = write_ipa(
            &temp,
            &info_plist(&[
                ("CFBundleIdentifier", "com.acme.app"),
                ("CFBundleDisplayName", "Acme"),
                ("CFBundleVersion", "45"),
            ]),
        );

        let err = extract_ipa(&path).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingField("CFBundleShortVersionString")
        ));
    }

    #[test]
    fn test_falls_back_to_bundle_name() {
        let temp = TempDir::new().unwrap();
        let path = write_ipa(
            &temp,
            &info_plist(&[
                ("CFBundleIdentifier", "com.acme.app"),
                ("CFBundleName", "Acme"),
                ("CFBundleShortVersionString", "1.2.0"),
                ("CFBundleVersion", "45"),
            ]),
        );

        assert_eq!(extract_ipa(&path).unwrap().display_name, "Acme");
    }

    #[test]
    fn test_not_a_zip_is_invalid() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.ipa");
        std::fs::write(&path, b"not a zip").unwrap();
        assert!(matches!(
            extract_ipa(&path).unwrap_err(),
            ExtractError::InvalidArtifact(_)
        ));
    }

    #[test]
    fn test_nested_bundle_plists_skipped() {
        assert!(is_app_info_plist("Payload/Acme.app/Info.plist"));
        assert!(!is_app_info_plist(
            "Payload/Acme.app/Watch/Acme Watch.app/Info.plist"
        ));
        assert!(!is_app_info_plist("Payload/Acme.app/Frameworks/Info.plist"));
    }
}
