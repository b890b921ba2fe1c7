//! Error types for Menagerie operations.
//!
//! This module provides the main error type [`MenagerieError`] which wraps
//! the error conditions that can occur while building a class diagram.

use std::io;

use thiserror::Error;

use menagerie_core::registry::RegistryError;

use crate::generate::GenerateError;

/// The main error type for Menagerie operations.
#[derive(Debug, Error)]
pub enum MenagerieError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Generation error: {0}")]
    Generate(#[from] GenerateError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<crate::export::Error> for MenagerieError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
