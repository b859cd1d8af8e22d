//! External Dart formatter invocation
//!
//! The formatter is a convenience pass over freshly generated files. It is
//! launched in the background and its outcome is never inspected.

use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// An external formatter command, run as `<program> <args...> <dir>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    /// Binary to run (e.g., "dart")
    pub program: String,
    /// Arguments placed before the target directory (e.g., ["format"])
    pub args: Vec<String>,
}

impl Formatter {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Parse a command line such as `"dart format"` (whitespace separated, no quoting)
    pub fn from_command_line(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace();
        let program = parts.next()?;
        Some(Self {
            program: program.to_string(),
            args: parts.map(str::to_string).collect(),
        })
    }

    /// The command as shown to the user
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Launch the formatter on `dir` without waiting for it.
    ///
    /// Returns whether the process could be started. Its exit status and output
    /// are discarded. Must be called from within a tokio runtime.
    pub fn spawn_detached(&self, dir: &Path) -> bool {
        let child = TokioCommand::new(&self.program)
            .args(&self.args)
            .arg(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match child {
            Ok(mut child) => {
                // Reap the process if it finishes while we are still running
                tokio::spawn(async move {
                    let _ = child.wait().await;
                });
                true
            }
            Err(_) => false,
        }
    }
}

/// Launch the first candidate that starts on `dir`, without waiting for it.
///
/// A missing program fails at spawn time, so candidates are tried in order
/// and nothing is run ahead of the launch. Returns the one that started.
pub fn spawn_first<'a>(candidates: &'a [Formatter], dir: &Path) -> Option<&'a Formatter> {
    candidates
        .iter()
        .find(|formatter| formatter.spawn_detached(dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_command_line() {
        let formatter = Formatter::from_command_line("  dart   format --fix ").unwrap();
        assert_eq!(formatter, Formatter::new("dart", &["format", "--fix"]));
        assert_eq!(formatter.command_line(), "dart format --fix");

        assert!(Formatter::from_command_line("   ").is_none());
    }

    #[tokio::test]
    async fn test_spawn_first_with_no_startable_candidate() {
        let temp = tempfile::tempdir().unwrap();
        let candidates = vec![
            Formatter::new("missing-formatter-one-7f3a", &["format"]),
            Formatter::new("missing-formatter-two-7f3a", &["format"]),
        ];
        assert_eq!(spawn_first(&candidates, temp.path()), None);
        assert_eq!(spawn_first(&[], temp.path()), None);
    }

    #[tokio::test]
    async fn test_spawn_failure_is_swallowed() {
        let temp = tempfile::tempdir().unwrap();
        let formatter = Formatter::new("definitely-not-a-formatter-7f3a", &["format"]);
        assert!(!formatter.spawn_detached(temp.path()));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_spawn_does_not_wait() {
        let temp = tempfile::tempdir().unwrap();
        let formatter = Formatter::new("true", &[]);
        assert!(formatter.spawn_detached(temp.path()));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_spawn_first_skips_missing_and_does_not_wait() {
        let temp = tempfile::tempdir().unwrap();
        let slow = Formatter::new("sh", &["-c", "sleep 3"]);
        let candidates = vec![
            Formatter::new("missing-formatter-7f3a", &["format"]),
            slow.clone(),
        ];

        let started = std::time::Instant::now();
        let chosen = spawn_first(&candidates, temp.path());

        assert_eq!(chosen, Some(&slow));
        assert!(
            started.elapsed() < std::time::Duration::from_secs(1),
            "launching took {:?}",
            started.elapsed()
        );
    }
}
