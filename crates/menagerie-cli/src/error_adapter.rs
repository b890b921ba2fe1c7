//! Error adapter for converting MenagerieError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use menagerie::{MenagerieError, generate::GenerateError};

/// Adapter giving a [`MenagerieError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a MenagerieError);

impl ErrorAdapter<'_> {
    fn code_str(&self) -> &'static str {
        match self.0 {
            MenagerieError::Io(_) => "menagerie::io",
            MenagerieError::Registry(_) => "menagerie::registry",
            MenagerieError::Generate(err) => match err {
                GenerateError::EmptyHierarchy(_) => "menagerie::generate::empty_hierarchy",
                GenerateError::AmbiguousBaseType { .. } => {
                    "menagerie::generate::ambiguous_base_type"
                }
                GenerateError::DuplicateType(_) => "menagerie::generate::duplicate_type",
                GenerateError::CyclicInheritance(_) => "menagerie::generate::cyclic_inheritance",
            },
            MenagerieError::Export(_) => "menagerie::export",
            MenagerieError::Config(_) => "menagerie::config",
            MenagerieError::InvalidArgument(_) => "menagerie::argument",
        }
    }

    fn help_str(&self) -> Option<&'static str> {
        match self.0 {
            MenagerieError::Registry(_) => {
                Some("every type of a hierarchy must register under a unique name")
            }
            MenagerieError::Generate(GenerateError::EmptyHierarchy(_)) => Some(
                "check that the hierarchy marker names the namespace the types register under",
            ),
            MenagerieError::Generate(GenerateError::AmbiguousBaseType { .. }) => {
                Some("a base type must be a class registered in the same hierarchy")
            }
            MenagerieError::Generate(GenerateError::CyclicInheritance(_)) => {
                Some("base type links must not loop back to the type itself")
            }
            MenagerieError::Config(_) => {
                Some("check the path and TOML syntax of the configuration file")
            }
            MenagerieError::InvalidArgument(_) => {
                Some("run with --help to see the accepted values")
            }
            MenagerieError::Io(_)
            | MenagerieError::Generate(GenerateError::DuplicateType(_))
            | MenagerieError::Export(_) => None,
        }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code_str()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help_str()
            .map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`MenagerieError`] into a reportable diagnostic.
pub fn to_reportable(err: &MenagerieError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}
