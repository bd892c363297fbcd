use crate::xml::escape;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Content type recorded for the manifest's own extension.
const MANIFEST_CONTENT_TYPE: (&str, &str) = (".vsixmanifest", "text/xml");

/// Fixed content-type overrides. `.ts` is MPEG transport stream as far as
/// the hosting marketplace is concerned; keep the mapping as-is.
const CONTENT_TYPE_OVERRIDES: &[(&str, &str)] = &[
    MANIFEST_CONTENT_TYPE,
    (".js", "application/javascript"),
    (".map", "application/json"),
    (".json", "application/json"),
    (".ts", "video/mp2t"),
];

fn override_for(extension: &str) -> Option<&'static str> {
    CONTENT_TYPE_OVERRIDES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, content_type)| *content_type)
}

/// Map every distinct file extension in the file set to a MIME type.
///
/// Extensionless files are skipped; extensions outside the override table
/// fall back to a MIME guess and are dropped when no guess exists. The
/// table always carries the manifest's own extension.
pub fn resolve(files: &[PathBuf]) -> BTreeMap<String, String> {
    let mut content_types = BTreeMap::new();
    content_types.insert(
        MANIFEST_CONTENT_TYPE.0.to_string(),
        MANIFEST_CONTENT_TYPE.1.to_string(),
    );

    for path in files {
        let Some(ext) = path.extension().map(|e| e.to_string_lossy()) else {
            continue;
        };
        let dotted = format!(".{}", ext);
        if let Some(content_type) = override_for(&dotted) {
            content_types.insert(dotted, content_type.to_string());
        } else if let Some(guess) = mime_guess::from_ext(&ext).first_raw() {
            content_types.insert(dotted, guess.to_string());
        }
    }

    content_types
}

/// Serialize the extension table as the `[Content_Types].xml` document
pub fn build(content_types: &BTreeMap<String, String>) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
    xml.push('\n');
    xml.push_str(
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    );
    xml.push('\n');
    for (extension, content_type) in content_types {
        xml.push_str(&format!(
            r#"  <Default Extension="{}" ContentType="{}"/>"#,
            escape(extension),
            escape(content_type)
        ));
        xml.push('\n');
    }
    xml.push_str("</Types>\n");
    xml
}
