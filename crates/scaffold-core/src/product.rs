//! Product configuration trait for CLI binaries
//!
//! This trait defines what a binary built on this library must supply: its
//! identity, the formatter to run over generated files, and the hints shown
//! once a component has been written.

use crate::runtime::Formatter;
use crate::templates::TemplateInfo;
use std::path::Path;

/// Configuration trait for CLI products
///
/// Each product implements this trait to define:
/// - Product identity (binary name, display name, CLI description)
/// - Formatter candidates and the environment override for them
/// - The package generated code depends on
/// - Post-generation instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Product name used as the command name (e.g., "fish-redux")
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Formatters to try, in order of preference
    fn formatter_candidates(&self) -> Vec<Formatter>;

    /// Environment variable name for overriding the formatter command
    fn formatter_env(&self) -> &'static str;

    /// Dart package the generated code imports (checked against pubspec.yaml)
    fn package_import(&self) -> &'static str;

    /// Generate the "next steps" instructions after generation
    fn next_steps(&self, dir: &Path, info: &TemplateInfo) -> Vec<String>;

    /// One-line description shown in `--help`
    fn cli_description(&self) -> &'static str;
}
