//! Document renderers for [`FileMetadata`](crate::model::FileMetadata).

#[cfg(feature = "json")]
pub mod json;
pub mod xml;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::FileMetadata;

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Xml,
    #[cfg(feature = "json")]
    Json,
}

impl OutputFormat {
    /// File extension used for documents of this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Xml => "xml",
            #[cfg(feature = "json")]
            Self::Json => "json",
        }
    }

    /// Render `metadata` in this format.
    pub fn render(self, metadata: &FileMetadata, file_label: &str) -> Result<String> {
        match self {
            Self::Xml => Ok(xml::render_xml(metadata, file_label)),
            #[cfg(feature = "json")]
            Self::Json => json::render_json(metadata, file_label),
        }
    }
}
