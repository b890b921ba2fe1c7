pub mod json;
pub mod xml;

use std::{fmt, str::FromStr};

use serde::Deserialize;

use menagerie_core::descriptor::DiagramDocument;

pub use json::JsonExporter;
pub use xml::XmlExporter;

/// Renders a [`DiagramDocument`] into a textual format.
///
/// Renderers hold no state between calls: the same document always renders
/// to the same text.
pub trait Exporter {
    fn export(&self, document: &DiagramDocument) -> Result<String, Error>;
}

/// Output format of a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Xml,
    Json,
}

impl OutputFormat {
    /// Conventional file extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Json => "json",
        }
    }

    /// Creates the exporter for this format.
    pub fn exporter(self, indent: usize) -> Box<dyn Exporter> {
        match self {
            Self::Xml => Box::new(XmlExporter::new(indent)),
            Self::Json => Box::new(JsonExporter::new(indent)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xml" => Ok(Self::Xml),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[derive(Debug)]
pub enum Error {
    Render(String),
    Json(serde_json::Error),
    UnknownFormat(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Json(err) => write!(f, "JSON error: {err}"),
            Self::UnknownFormat(name) => {
                write!(f, "Unknown output format `{name}` (expected xml or json)")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) | Self::UnknownFormat(_) => None,
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
