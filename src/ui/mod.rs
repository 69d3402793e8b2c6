//! Terminal and CI output for the CLI

pub mod ci;
pub mod error;
pub mod json;
