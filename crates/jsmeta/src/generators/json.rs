use serde::Serialize;

use crate::{
    error::{JsmetaError, Result},
    model::FileMetadata,
};

/// Pretty-printed JSON representation of the metadata model.
///
/// Unlike the XML document this carries the crate version, but no timestamp,
/// so output stays deterministic.
pub fn render_json(metadata: &FileMetadata, file_label: &str) -> Result<String> {
    let payload = JsonPayload {
        version: env!("CARGO_PKG_VERSION"),
        name: file_label,
        metadata,
    };

    serde_json::to_string_pretty(&payload)
        .map(|mut json| {
            json.push('\n');
            json
        })
        .map_err(|error| JsmetaError::Render {
            message: error.to_string(),
        })
}

#[derive(Serialize)]
struct JsonPayload<'a> {
    version: &'static str,
    name: &'a str,
    #[serde(flatten)]
    metadata: &'a FileMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassRecord, ImportRecord};

    #[test]
    fn flattens_model_next_to_name() {
        let mut metadata = FileMetadata::default();
        metadata.imports.push(ImportRecord::new("lwc"));
        metadata.classes.push(ClassRecord::new("Widget"));

        let json = render_json(&metadata, "widget.js").expect("should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["name"], "widget.js");
        assert_eq!(value["imports"][0]["source"], "lwc");
        assert_eq!(value["classes"][0]["name"], "Widget");
        assert!(value["classes"][0].get("superClass").is_none());
        assert!(value["classes"][0].get("methods").is_none());
    }
}
