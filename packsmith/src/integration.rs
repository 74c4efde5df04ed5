//! Integration descriptors
//!
//! An integration describes the package being built: its name, optional
//! display metadata, and the data streams whose samples drive field
//! inference. Descriptors are externally supplied and read-only to the
//! build pipeline.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One data stream of an integration: a name plus the observed samples.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataStream {
    pub name: String,
    #[serde(default)]
    pub samples: Vec<Value>,
}

impl DataStream {
    pub fn new(name: impl Into<String>, samples: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            samples,
        }
    }
}

/// An integration package descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Integration {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub data_streams: Vec<DataStream>,
}

impl Integration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            description: None,
            data_streams: Vec::new(),
        }
    }

    /// Add a data stream.
    pub fn data_stream(mut self, stream: DataStream) -> Self {
        self.data_streams.push(stream);
        self
    }

    /// Attach a display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_style_construction() {
        let integration = Integration::new("nginx")
            .with_title("Nginx")
            .data_stream(DataStream::new("access", vec![json!({"a": 1})]))
            .data_stream(DataStream::new("error", vec![]));

        assert_eq!(integration.name, "nginx");
        assert_eq!(integration.title.as_deref(), Some("Nginx"));
        assert_eq!(integration.data_streams.len(), 2);
    }

    #[test]
    fn deserializes_from_json() {
        let integration: Integration = serde_json::from_str(
            r#"{
                "name": "nginx",
                "data_streams": [
                    {"name": "access", "samples": [{"message": "GET /"}]}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(integration.name, "nginx");
        assert_eq!(integration.data_streams[0].samples.len(), 1);
        assert!(integration.title.is_none());
    }
}
