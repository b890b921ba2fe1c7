//! CLI logic for the Menagerie class diagram generator.
//!
//! This module contains the core CLI logic: it describes the animal
//! hierarchy and writes the rendered class diagram to the output file.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::PathBuf};

use chrono::{DateTime, Utc};
use log::{info, warn};

use menagerie::{DiagramBuilder, MenagerieError, config::DietTable, export::OutputFormat};
use menagerie_animals::sample_animals;

/// Run the Menagerie CLI application
///
/// This function generates the class diagram of the animal hierarchy and
/// writes it to the output file, replacing any previous content.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `MenagerieError` for:
/// - Invalid arguments
/// - Configuration loading errors
/// - Registration or generation errors
/// - Rendering errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), MenagerieError> {
    // Load configuration
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(format) = &args.format {
        let format = format
            .parse::<OutputFormat>()
            .map_err(|err| MenagerieError::InvalidArgument(err.to_string()))?;
        app_config = app_config.with_format(format);
    }

    let output = output_path(args.output.as_deref(), app_config.output().format());
    info!(output_path:? = output; "Generating class diagram");

    let generated_at = parse_generated_at(args.generated_at.as_deref())?;

    if args.roll_call {
        roll_call(app_config.diet());
    }

    // Generate and render fully before touching the destination
    let registry = menagerie_animals::registry()?;
    let builder = DiagramBuilder::new(app_config);
    let document = builder.generate(registry, &menagerie_animals::marker(), generated_at)?;
    let rendered = builder.render(&document)?;

    fs::write(&output, rendered)?;

    info!(output_file:? = output; "Class diagram written successfully");

    Ok(())
}

/// Output path, defaulting to `ClassDiagram` with the format's extension.
fn output_path(explicit: Option<&str>, format: OutputFormat) -> PathBuf {
    match explicit {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(format!("ClassDiagram.{}", format.extension())),
    }
}

fn parse_generated_at(value: Option<&str>) -> Result<DateTime<Utc>, MenagerieError> {
    match value {
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|timestamp| timestamp.with_timezone(&Utc))
            .map_err(|err| {
                MenagerieError::InvalidArgument(format!("invalid --generated-at `{value}`: {err}"))
            }),
        None => Ok(Utc::now()),
    }
}

fn roll_call(diet: &DietTable) {
    if diet.is_empty() {
        warn!("No diet configured; classifications are unknown");
    }

    for animal in sample_animals() {
        let classification = animal
            .classification(diet)
            .map_or_else(|| "unknown".to_string(), |c| c.to_string());
        let favourite_food = animal
            .favourite_food(diet)
            .map_or_else(|| "unknown".to_string(), |f| f.to_string());

        info!(
            species:% = animal.species(),
            classification = classification,
            favourite_food = favourite_food;
            "{}", animal.say_hello()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_follows_format() {
        let xml = output_path(None, OutputFormat::Xml);
        let json = output_path(None, OutputFormat::Json);

        assert_eq!(xml, PathBuf::from("ClassDiagram.xml"));
        assert_eq!(json, PathBuf::from("ClassDiagram.json"));
    }

    #[test]
    fn test_explicit_output_is_kept() {
        let path = output_path(Some("out/diagram.txt"), OutputFormat::Json);
        assert_eq!(path, PathBuf::from("out/diagram.txt"));
    }

    #[test]
    fn test_parse_generated_at_normalises_to_utc() {
        let timestamp = parse_generated_at(Some("2024-05-01T14:00:00+02:00")).unwrap();
        assert_eq!(timestamp.to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }

    #[test]
    fn test_parse_generated_at_rejects_garbage() {
        let err = parse_generated_at(Some("yesterday")).unwrap_err();
        assert!(matches!(err, MenagerieError::InvalidArgument(msg) if msg.contains("yesterday")));
    }
}
