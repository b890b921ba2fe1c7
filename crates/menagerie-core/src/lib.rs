//! Menagerie Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Menagerie class
//! diagram generator. It includes:
//!
//! - **Metadata**: Declared structural facts about a type ([`meta`] module)
//! - **Registry**: The capability-indexed table of described types ([`registry`] module)
//! - **Descriptors**: The extracted, read-only output model ([`descriptor`] module)

pub mod descriptor;
pub mod meta;
pub mod registry;
