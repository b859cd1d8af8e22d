//! Default output directory inference

use std::path::{Path, PathBuf};

/// Manifest file whose presence marks a Flutter project root
pub const PROJECT_MARKER: &str = "pubspec.yaml";

/// Conventional source directory inside a Flutter project
const LIB_DIR: &str = "lib";

/// Where the user is working from
#[derive(Debug, Clone, Default)]
pub struct WorkspaceContext {
    /// The user's home directory, used when nothing better is known
    pub home_dir: PathBuf,

    /// File currently open in the editor, if any
    pub active_file: Option<PathBuf>,

    /// Workspace root folders, in order
    pub roots: Vec<PathBuf>,
}

impl WorkspaceContext {
    /// Context for a shell invocation: the given roots, or the current directory
    /// when none are given
    pub fn from_env(active_file: Option<PathBuf>, roots: Vec<PathBuf>) -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let roots = if roots.is_empty() {
            vec![current_dir.clone()]
        } else {
            roots
                .into_iter()
                .map(|root| absolutize(&current_dir, root))
                .collect()
        };

        Self {
            home_dir: home_dir().unwrap_or(current_dir.clone()),
            active_file: active_file.map(|file| absolutize(&current_dir, file)),
            roots,
        }
    }
}

fn absolutize(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

/// Check whether `dir` contains a `pubspec.yaml` regular file
pub fn is_project_root(dir: &Path) -> bool {
    dir.join(PROJECT_MARKER).is_file()
}

/// Suggest the directory a new component should be created in.
///
/// Precedence: home dir, then the active file's directory, then the only
/// workspace root, then the only root recognised by `is_project_root`. With
/// several candidates the root containing the active file wins, preferring
/// project roots. A `lib` subdirectory of the result is used when present.
///
/// The active file contributes its parent directory, never the file path
/// itself, so the suggestion is always a directory to create the component in.
pub fn resolve_default_path<F>(ctx: &WorkspaceContext, is_project_root: F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    let mut path = ctx.home_dir.clone();

    if let Some(active) = &ctx.active_file {
        path = active.parent().unwrap_or(active).to_path_buf();
    }

    match ctx.roots.as_slice() {
        [] => {}
        [only] => path = only.clone(),
        roots => {
            let project_roots: Vec<&PathBuf> =
                roots.iter().filter(|root| is_project_root(root)).collect();

            if let [only] = project_roots.as_slice() {
                path = (*only).clone();
            } else if let Some(active) = &ctx.active_file {
                let containing_project = project_roots.iter().find(|root| active.starts_with(root));
                let containing_root = roots.iter().find(|root| active.starts_with(root));

                if let Some(root) = containing_project {
                    path = (*root).clone();
                } else if let Some(root) = containing_root {
                    path = root.clone();
                } else if let Some(root) = project_roots.first() {
                    path = (*root).clone();
                }
            }
        }
    }

    let lib = path.join(LIB_DIR);
    if lib.is_dir() {
        lib
    } else {
        path
    }
}
