//! package.json patching
//!
//! The manifest is handled as a generic JSON object so unknown fields survive untouched
//! and keys keep their original order.

use crate::error::{Error, Result};
use crate::types::InitAnswers;
use camino::Utf8Path;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Manifest file name inside the project directory
pub const MANIFEST_FILE: &str = "package.json";

/// Fields written into the downloaded manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPatch {
    /// Always written
    pub name: String,
    /// Written only when `Some`
    pub author: Option<String>,
    /// Written only when `Some`
    pub description: Option<String>,
    /// Always written
    pub version: String,
}

impl ManifestPatch {
    /// Build a patch from the project name and the collected answers
    ///
    /// Blank author and description answers leave the template's values in place.
    pub fn from_answers(name: impl Into<String>, answers: &InitAnswers) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            name: name.into(),
            author: non_empty(&answers.author),
            description: non_empty(&answers.description),
            version: answers.version.clone(),
        }
    }

    /// Apply the patch to a parsed manifest
    pub fn apply(&self, manifest: &mut Map<String, Value>) {
        manifest.insert("name".to_string(), Value::String(self.name.clone()));
        if let Some(author) = &self.author {
            manifest.insert("author".to_string(), Value::String(author.clone()));
        }
        if let Some(description) = &self.description {
            manifest.insert("description".to_string(), Value::String(description.clone()));
        }
        manifest.insert("version".to_string(), Value::String(self.version.clone()));
    }
}

/// Patch `<project_dir>/package.json` in place
///
/// Returns `Ok(false)` without touching anything when the project has no manifest.
pub async fn patch_manifest(project_dir: &Utf8Path, patch: &ManifestPatch) -> Result<bool> {
    let path = project_dir.join(MANIFEST_FILE);
    if !path.exists() {
        debug!("No {} in {}, skipping patch", MANIFEST_FILE, project_dir);
        return Ok(false);
    }

    let content = tokio::fs::read_to_string(&path).await?;
    let mut manifest = match serde_json::from_str::<Value>(&content)? {
        Value::Object(map) => map,
        other => {
            return Err(Error::invalid_manifest(
                path.as_str(),
                format!("expected a JSON object, found {}", json_kind(&other)),
            ))
        }
    };

    patch.apply(&mut manifest);
    tokio::fs::write(&path, to_tab_indented(&Value::Object(manifest))?).await?;

    info!("Patched {}", path);
    Ok(true)
}

/// Serialize a JSON value with tab indentation
pub fn to_tab_indented(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut serializer)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TemplateFlavor;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    const TEMPLATE_MANIFEST: &str = r#"{
  "name": "react-app-template",
  "version": "0.0.1",
  "description": "React app template",
  "author": "maxiximxx",
  "scripts": {
    "start": "node server.js",
    "dev": "webpack serve",
    "build": "webpack"
  },
  "license": "MIT"
}"#;

    fn project_dir() -> (Utf8PathBuf, TempDir) {
        let temp = TempDir::new().unwrap();
        let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        (dir, temp)
    }

    fn read_manifest(dir: &Utf8Path) -> Map<String, Value> {
        let content = std::fs::read_to_string(dir.join(MANIFEST_FILE)).unwrap();
        match serde_json::from_str(&content).unwrap() {
            Value::Object(map) => map,
            _ => panic!("manifest is not an object"),
        }
    }

    #[tokio::test]
    async fn test_blank_answers_keep_template_values() {
        let (dir, _temp) = project_dir();
        std::fs::write(dir.join(MANIFEST_FILE), TEMPLATE_MANIFEST).unwrap();

        let answers = InitAnswers::with_defaults(TemplateFlavor::JavaScript);
        let patch = ManifestPatch::from_answers("demo", &answers);
        assert!(patch_manifest(&dir, &patch).await.unwrap());

        let manifest = read_manifest(&dir);
        assert_eq!(manifest["name"], "demo");
        assert_eq!(manifest["author"], "maxiximxx");
        assert_eq!(manifest["description"], "React app template");
        assert_eq!(manifest["version"], "1.0.0");
        assert_eq!(manifest["scripts"]["dev"], "webpack serve");
    }

    #[tokio::test]
    async fn test_answers_overwrite_fields() {
        let (dir, _temp) = project_dir();
        std::fs::write(dir.join(MANIFEST_FILE), TEMPLATE_MANIFEST).unwrap();

        let answers = InitAnswers {
            template: TemplateFlavor::TypeScript,
            author: "Ada".to_string(),
            description: "My app".to_string(),
            version: "2.1.0".to_string(),
        };
        patch_manifest(&dir, &ManifestPatch::from_answers("demo", &answers))
            .await
            .unwrap();

        let manifest = read_manifest(&dir);
        assert_eq!(manifest["author"], "Ada");
        assert_eq!(manifest["description"], "My app");
        assert_eq!(manifest["version"], "2.1.0");
    }

    #[tokio::test]
    async fn test_output_is_tab_indented_and_ordered() {
        let (dir, _temp) = project_dir();
        std::fs::write(dir.join(MANIFEST_FILE), TEMPLATE_MANIFEST).unwrap();

        let answers = InitAnswers::with_defaults(TemplateFlavor::JavaScript);
        patch_manifest(&dir, &ManifestPatch::from_answers("demo", &answers))
            .await
            .unwrap();

        let content = std::fs::read_to_string(dir.join(MANIFEST_FILE)).unwrap();
        assert!(content.starts_with("{\n\t\"name\": \"demo\",\n\t\"version\": \"1.0.0\""));
        assert!(content.contains("\n\t\t\"start\": \"node server.js\""));
        let keys: Vec<_> = read_manifest(&dir).keys().cloned().collect();
        assert_eq!(
            keys,
            vec!["name", "version", "description", "author", "scripts", "license"]
        );
    }

    #[tokio::test]
    async fn test_absent_fields_stay_absent() {
        let (dir, _temp) = project_dir();
        std::fs::write(dir.join(MANIFEST_FILE), r#"{"private": true}"#).unwrap();

        let answers = InitAnswers::with_defaults(TemplateFlavor::JavaScript);
        patch_manifest(&dir, &ManifestPatch::from_answers("demo", &answers))
            .await
            .unwrap();

        let manifest = read_manifest(&dir);
        assert!(!manifest.contains_key("author"));
        assert!(!manifest.contains_key("description"));
        let keys: Vec<_> = manifest.keys().cloned().collect();
        assert_eq!(keys, vec!["private", "name", "version"]);
    }

    #[tokio::test]
    async fn test_missing_manifest_is_skipped() {
        let (dir, _temp) = project_dir();
        let answers = InitAnswers::with_defaults(TemplateFlavor::JavaScript);
        let patched = patch_manifest(&dir, &ManifestPatch::from_answers("demo", &answers))
            .await
            .unwrap();
        assert!(!patched);
        assert!(!dir.join(MANIFEST_FILE).exists());
    }

    #[tokio::test]
    async fn test_malformed_manifest_fails() {
        let (dir, _temp) = project_dir();
        std::fs::write(dir.join(MANIFEST_FILE), "{ \"name\": ").unwrap();

        let answers = InitAnswers::with_defaults(TemplateFlavor::JavaScript);
        let result = patch_manifest(&dir, &ManifestPatch::from_answers("demo", &answers)).await;
        assert!(matches!(result, Err(Error::JsonParse(_))));
    }

    #[tokio::test]
    async fn test_non_object_manifest_fails() {
        let (dir, _temp) = project_dir();
        std::fs::write(dir.join(MANIFEST_FILE), "[1, 2]").unwrap();

        let answers = InitAnswers::with_defaults(TemplateFlavor::JavaScript);
        let result = patch_manifest(&dir, &ManifestPatch::from_answers("demo", &answers)).await;
        assert!(matches!(result, Err(Error::InvalidManifest { .. })));
    }
}
