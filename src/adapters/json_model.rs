use crate::domain::model::ClassModel;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk form of a generated-class model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDocument {
    pub classes: Vec<ClassModel>,
}

impl ModelDocument {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut json = self.to_json_string(pretty)?;
        json.push('\n');
        fs::write(path, json)?;
        tracing::debug!("Wrote {} classes to {}", self.classes.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AttrInitError;
    use tempfile::TempDir;

    const DOC: &str = r#"{
        "classes": [
            {
                "name": "Host",
                "fields": [
                    { "name": "retries", "property": { "kind": "attribute", "default": "3" }, "declaration": { "ty": "int" } }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_document() {
        let doc = ModelDocument::from_json_str(DOC).unwrap();
        assert_eq!(doc.classes.len(), 1);
        assert_eq!(doc.classes[0].fields[0].name, "retries");
    }

    #[test]
    fn test_rejects_malformed_document() {
        let err = ModelDocument::from_json_str(r#"{ "classes": 3 }"#).unwrap_err();
        assert!(matches!(err, AttrInitError::SerializationError(_)));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/out/model.json");

        let doc = ModelDocument::from_json_str(DOC).unwrap();
        doc.write_to(&path, true).unwrap();

        let back = ModelDocument::from_file(&path).unwrap();
        assert_eq!(back, doc);
    }
}
