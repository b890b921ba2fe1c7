//! Menagerie - class diagrams for declaratively-tagged type hierarchies.
//!
//! Generation walks the metadata a hierarchy registers and produces an
//! ordered [`DiagramDocument`](descriptor::DiagramDocument); rendering turns
//! that document into XML or JSON. The two steps are kept apart so the
//! extracted structure can be inspected without any output format.

pub mod config;
pub mod export;
pub mod generate;

mod error;

pub use menagerie_core::{descriptor, meta, registry};

pub use error::MenagerieError;

use chrono::{DateTime, Utc};
use log::{debug, info, trace};

use config::AppConfig;
use descriptor::DiagramDocument;
use registry::{HierarchyMarker, MetadataSource};

/// Builder for generating and rendering class diagrams.
///
/// # Examples
///
/// ```rust
/// use chrono::Utc;
/// use menagerie::{DiagramBuilder, config::AppConfig};
///
/// let registry = menagerie_animals::registry().expect("Failed to register");
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// let document = builder
///     .generate(registry, &menagerie_animals::marker(), Utc::now())
///     .expect("Failed to generate");
/// let xml = builder.render(&document).expect("Failed to render");
///
/// assert!(xml.contains("<ClassDiagram"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including output settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration the builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Generate the class diagram of the hierarchy selected by `marker`.
    ///
    /// # Arguments
    ///
    /// * `source` - Metadata of the hierarchy's types
    /// * `marker` - Selects the hierarchy
    /// * `generated_at` - Timestamp recorded on the document
    ///
    /// # Errors
    ///
    /// Returns `MenagerieError::Generate` for an empty or malformed hierarchy.
    pub fn generate<S>(
        &self,
        source: &S,
        marker: &HierarchyMarker,
        generated_at: DateTime<Utc>,
    ) -> Result<DiagramDocument, MenagerieError>
    where
        S: MetadataSource + ?Sized,
    {
        info!(hierarchy = marker.namespace(); "Generating class diagram");

        let document = generate::generate(source, marker, generated_at)?;

        debug!(types_count = document.types().len(); "Class diagram generated");
        trace!(document:?; "Generated document");

        Ok(document)
    }

    /// Render a document in the configured output format.
    ///
    /// # Errors
    ///
    /// Returns `MenagerieError::Export` if rendering fails.
    pub fn render(&self, document: &DiagramDocument) -> Result<String, MenagerieError> {
        let output = self.config.output();
        info!(format:% = output.format(); "Rendering class diagram");

        let rendered = output.format().exporter(output.indent()).export(document)?;

        debug!(bytes = rendered.len(); "Class diagram rendered");
        Ok(rendered)
    }
}
