//! Scaffold Core - Shared library for fish_redux boilerplate generation
//!
//! This library generates the six Dart files of a fish_redux page (action,
//! state, reducer, effect, page, view) from a component name and two short
//! lists typed by the user. It is designed to be driven by a CLI binary that
//! supplies its own product configuration.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure functions for name casing, list parsing and rendering
//! - **Layer 2: Project Integration** - Default path inference, pubspec inspection,
//!   file writing, and the detached formatter pass
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```no_run
//! use scaffold_core::templates::{component_dir, generate_component, TemplateInfo};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let info = TemplateInfo::parse("counter", "increment, addBy: int", "count: int");
//! let dir = component_dir(std::path::Path::new("lib"), &info.name);
//! generate_component(&dir, &info).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod naming;
pub mod product;
pub mod runtime;
pub mod templates;
pub mod workspace;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use product::ProductConfig;
pub use runtime::Formatter;
pub use templates::{FileKind, GeneratedFileSet, NamedEntry, TemplateInfo};
pub use workspace::{resolve_default_path, WorkspaceContext};

#[cfg(feature = "tui")]
pub use tui::run;
