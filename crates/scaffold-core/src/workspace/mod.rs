//! Flutter project discovery
//!
//! This module provides:
//! - Default output directory inference from editor/workspace context
//! - `pubspec.yaml` detection and inspection

pub mod pubspec;
pub mod resolver;

pub use pubspec::{find_project_root, Pubspec};
pub use resolver::{is_project_root, resolve_default_path, WorkspaceContext, PROJECT_MARKER};
