//! Configuration types for Menagerie.
//!
//! This module provides configuration structures that control how class
//! diagrams are rendered and which diet data the animals are described with.
//! All types implement [`serde::Deserialize`] for loading from external
//! sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`OutputConfig`] - Output format and indentation.
//! - [`DietTable`] - Caller-supplied classification and favourite food per species.
//!
//! # Example
//!
//! ```
//! # use menagerie::config::AppConfig;
//! # use menagerie::export::OutputFormat;
//! let config = AppConfig::default();
//! assert_eq!(config.output().format(), OutputFormat::Xml);
//! assert_eq!(config.output().indent(), 2);
//! ```

use serde::Deserialize;

pub use menagerie_animals::DietTable;

use crate::export::OutputFormat;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,

    /// Diet per species, keyed by species name.
    #[serde(default)]
    diet: DietTable,
}

impl AppConfig {
    /// Creates a new [`AppConfig`].
    ///
    /// # Arguments
    ///
    /// * `output` - Rendering settings.
    /// * `diet` - Diet data for the animal species.
    pub fn new(output: OutputConfig, diet: DietTable) -> Self {
        Self { output, diet }
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns the diet table.
    pub fn diet(&self) -> &DietTable {
        &self.diet
    }

    /// Replaces the output format, keeping everything else.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output.format = format;
        self
    }
}

/// Rendering settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    format: OutputFormat,

    /// Spaces per nesting level. Zero renders compactly.
    #[serde(default = "default_indent")]
    indent: usize,
}

impl OutputConfig {
    pub fn new(format: OutputFormat, indent: usize) -> Self {
        Self { format, indent }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn indent(&self) -> usize {
        self.indent
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(OutputFormat::default(), default_indent())
    }
}

fn default_indent() -> usize {
    2
}

#[cfg(test)]
mod tests {
    use menagerie_animals::{Classification, FoodKind, Species};

    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config.output().format(), OutputFormat::Xml);
        assert_eq!(config.output().indent(), 2);
        assert!(config.diet().is_empty());
    }

    #[test]
    fn test_full_toml() {
        let source = r#"
            [output]
            format = "json"
            indent = 4

            [diet.pig]
            classification = "carnivore"
            favourite_food = "meat"
        "#;

        let config: AppConfig = toml::from_str(source).unwrap();

        assert_eq!(config.output().format(), OutputFormat::Json);
        assert_eq!(config.output().indent(), 4);

        let pig = config.diet().lookup(Species::Pig).unwrap();
        assert_eq!(pig.classification(), Classification::Carnivore);
        assert_eq!(pig.favourite_food(), FoodKind::Meat);
    }

    #[test]
    fn test_partial_output_section_keeps_indent_default() {
        let config: AppConfig = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output().indent(), 2);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(toml::from_str::<AppConfig>("[output]\nformat = \"yaml\"\n").is_err());
    }

    #[test]
    fn test_with_format_overrides() {
        let config = AppConfig::default().with_format(OutputFormat::Json);
        assert_eq!(config.output().format(), OutputFormat::Json);
    }
}
