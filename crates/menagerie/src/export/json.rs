//! JSON rendering of class diagrams.

use serde::Serialize;
use serde_json::{Serializer, ser::PrettyFormatter};

use menagerie_core::descriptor::DiagramDocument;

use super::{Error, Exporter};

/// Renders diagrams as JSON, pretty-printed unless the indent is zero.
#[derive(Debug, Clone, Copy)]
pub struct JsonExporter {
    indent: usize,
}

impl JsonExporter {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Exporter for JsonExporter {
    fn export(&self, document: &DiagramDocument) -> Result<String, Error> {
        if self.indent == 0 {
            return Ok(serde_json::to_string(document)?);
        }

        let indent = vec![b' '; self.indent];
        let mut serializer =
            Serializer::with_formatter(Vec::new(), PrettyFormatter::with_indent(&indent));
        document.serialize(&mut serializer)?;

        String::from_utf8(serializer.into_inner()).map_err(|err| Error::Render(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde_json::{Value, json};

    use menagerie_core::descriptor::{DescriptorBody, FieldDescriptor, TypeDescriptor};

    use super::*;

    fn document() -> DiagramDocument {
        DiagramDocument::new(
            DateTime::<Utc>::UNIX_EPOCH,
            "zoo",
            vec![
                TypeDescriptor::new(
                    "Cat",
                    "zoo::Cat",
                    false,
                    vec!["purrs".to_string()],
                    DescriptorBody::Class {
                        base_type: Some("Animal".to_string()),
                        fields: vec![FieldDescriptor::new("lives", "u8")],
                        operations: Vec::new(),
                    },
                ),
                TypeDescriptor::new(
                    "Color",
                    "zoo::Color",
                    false,
                    Vec::new(),
                    DescriptorBody::Enum {
                        values: vec!["Red".to_string()],
                    },
                ),
            ],
        )
    }

    #[test]
    fn test_renders_serde_form() {
        let rendered = JsonExporter::default().export(&document()).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["hierarchy"], "zoo");
        assert_eq!(value["generated_at"], "1970-01-01T00:00:00Z");
        assert_eq!(
            value["types"][0],
            json!({
                "name": "Cat",
                "full_name": "zoo::Cat",
                "is_abstract": false,
                "annotations": ["purrs"],
                "kind": "class",
                "base_type": "Animal",
                "fields": [{ "name": "lives", "type_name": "u8" }],
                "operations": [],
            })
        );
        assert_eq!(value["types"][1]["kind"], "enum");
        assert_eq!(value["types"][1]["values"], json!(["Red"]));
        assert!(value["types"][1].get("fields").is_none());
    }

    #[test]
    fn test_indent_controls_layout() {
        let pretty = JsonExporter::new(4).export(&document()).unwrap();
        let compact = JsonExporter::new(0).export(&document()).unwrap();

        assert!(pretty.contains("\n    \"generated_at\""));
        assert!(!compact.contains('\n'));
    }
}
