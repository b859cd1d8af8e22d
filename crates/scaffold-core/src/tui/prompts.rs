//! Charm-style CLI prompts using cliclack

use crate::config::{formatter_from_config, FormatterSource};
use crate::product::ProductConfig;
use crate::runtime::spawn_first;
use crate::templates::{self, writer, TemplateInfo};
use crate::workspace::{self, Pubspec, WorkspaceContext};
use anyhow::Result;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// CLI arguments for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Directory the component folder is created in
    pub path: Option<PathBuf>,

    /// Component name (snake_case)
    pub name: Option<String>,

    /// Actions, e.g. `clear, add: Item`
    pub actions: Option<String>,

    /// State properties, e.g. `items: List<Item>, loading: bool`
    pub state: Option<String>,

    /// File open in the editor, used to suggest a path
    pub active_file: Option<PathBuf>,

    /// Workspace roots, used to suggest a path
    pub workspace_roots: Vec<PathBuf>,

    /// Formatter command overriding the product candidates
    pub formatter: Option<String>,

    /// Skip the formatter pass
    pub no_format: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Everything collected from the user before touching the filesystem
struct Request {
    parent: PathBuf,
    info: TemplateInfo,
}

impl Request {
    fn component_dir(&self) -> PathBuf {
        templates::component_dir(&self.parent, &self.info.name)
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: GenerateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Collect path, name, actions and state
    let Some(request) = collect_request(&args)? else {
        cliclack::outro_cancel("Cancelled, nothing was written.")?;
        return Ok(());
    };
    let dir = request.component_dir();

    // Step 2: Inspect the enclosing Flutter project (advisory)
    inspect_project(config, &request.parent)?;

    // Step 3: Confirm before writing into a non-empty directory, then render and write
    if !confirm_and_generate(&request, &dir, args.yes, ask_overwrite).await? {
        cliclack::outro_cancel("Cancelled, nothing was written.")?;
        return Ok(());
    }

    // Step 4: Format in the background
    start_formatter(config, &args, &dir)?;

    // Step 5: Show next steps
    print_next_steps(config, &dir, &request.info)?;

    Ok(())
}

/// Turn a cancelled prompt into `None`
fn cancellable<T>(result: std::io::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn collect_request(args: &GenerateArgs) -> Result<Option<Request>> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let Some(parent) = select_path(args, &current_dir)? else {
        return Ok(None);
    };

    let Some(name) = text_field(
        args.name.as_deref(),
        false,
        "Type the name for new component",
        "name_in_snake_case",
        "Component",
    )?
    else {
        return Ok(None);
    };

    let Some(actions) = text_field(
        args.actions.as_deref(),
        args.yes,
        "Type actions and optionally payload type",
        "clear, addAll: List<Item>, add: Item",
        "Actions",
    )?
    else {
        return Ok(None);
    };

    let Some(state) = text_field(
        args.state.as_deref(),
        args.yes,
        "Type state properties and their type (default is dynamic)",
        "itemName: String, subItems: List<Item>, payload",
        "State",
    )?
    else {
        return Ok(None);
    };

    Ok(Some(Request {
        parent,
        info: TemplateInfo::parse(&name, &actions, &state),
    }))
}

fn select_path(args: &GenerateArgs, current_dir: &Path) -> Result<Option<PathBuf>> {
    // Use --path flag if provided
    if let Some(path) = &args.path {
        let p = absolute(current_dir, path);
        cliclack::log::info(format!("Using path: {}", p.display()))?;
        return Ok(Some(p));
    }

    let ctx = WorkspaceContext::from_env(args.active_file.clone(), args.workspace_roots.clone());
    let default_path = workspace::resolve_default_path(&ctx, workspace::is_project_root);

    if args.yes {
        cliclack::log::info(format!("Using path: {}", default_path.display()))?;
        return Ok(Some(default_path));
    }

    let default_str = default_path.display().to_string();
    let Some(input) = cancellable(
        cliclack::input("Type the path where new folder will be created")
            .default_input(&default_str)
            .interact::<String>(),
    )?
    else {
        return Ok(None);
    };

    let input = input.trim();
    if input.is_empty() {
        Ok(Some(default_path))
    } else {
        Ok(Some(absolute(current_dir, Path::new(input))))
    }
}

fn absolute(current_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        current_dir.join(path)
    }
}

/// Value from a flag, or the empty string when `skip` is set, or a prompt
fn text_field(
    flag: Option<&str>,
    skip: bool,
    prompt: &str,
    placeholder: &str,
    label: &str,
) -> Result<Option<String>> {
    if let Some(value) = flag {
        cliclack::log::info(format!("{}: {}", label, value))?;
        return Ok(Some(value.to_string()));
    }
    if skip {
        return Ok(Some(String::new()));
    }

    cancellable(
        cliclack::input(prompt)
            .placeholder(placeholder)
            .required(false)
            .interact::<String>(),
    )
}

fn inspect_project<C: ProductConfig>(config: &C, parent: &Path) -> Result<()> {
    let Some(root) = workspace::find_project_root(parent) else {
        cliclack::log::warning(format!(
            "No {} found above {}",
            workspace::PROJECT_MARKER,
            parent.display()
        ))?;
        return Ok(());
    };

    match Pubspec::load(&root) {
        Ok(pubspec) => {
            if let Some(name) = &pubspec.name {
                cliclack::log::info(format!("Flutter project: {} ({})", name, root.display()))?;
            }
            if !pubspec.depends_on(config.package_import()) {
                cliclack::log::warning(format!(
                    "{} is not listed in the dependencies of {}",
                    config.package_import(),
                    root.join(workspace::PROJECT_MARKER).display()
                ))?;
            }
        }
        Err(e) => {
            cliclack::log::warning(format!("{:#}", e))?;
        }
    }

    Ok(())
}

/// Returns `false` when the user declined or cancelled, in which case nothing
/// was written.
async fn confirm_and_generate<F>(request: &Request, dir: &Path, yes: bool, ask: F) -> Result<bool>
where
    F: FnOnce() -> std::io::Result<bool>,
{
    if !confirm_target(dir, yes, ask)? {
        return Ok(false);
    }
    generate(request, dir).await?;
    Ok(true)
}

fn ask_overwrite() -> std::io::Result<bool> {
    cliclack::confirm("Continue anyway?")
        .initial_value(true)
        .interact()
}

fn confirm_target<F>(dir: &Path, yes: bool, ask: F) -> Result<bool>
where
    F: FnOnce() -> std::io::Result<bool>,
{
    let count = writer::existing_entries(dir);
    if count == 0 {
        return Ok(true);
    }

    cliclack::log::warning(format!(
        "{} already has {} existing items; generated files will overwrite same-named ones",
        dir.display(),
        count
    ))?;

    // Auto-confirm with --yes flag
    if yes {
        return Ok(true);
    }

    // Esc counts as declining
    Ok(cancellable(ask())?.unwrap_or(false))
}

async fn generate(request: &Request, dir: &Path) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Generating files...");

    match templates::generate_component(dir, &request.info).await {
        Ok(written) => {
            spinner.stop(format!(
                "Created {} files in {}",
                written.len(),
                dir.display()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Failed to generate files");
            Err(e)
        }
    }
}

fn start_formatter<C: ProductConfig>(config: &C, args: &GenerateArgs, dir: &Path) -> Result<()> {
    let Some((candidates, source)) =
        formatter_from_config(config, args.no_format, args.formatter.as_deref())
    else {
        return Ok(());
    };

    // Launch failures are not reported
    if let Some(formatter) = spawn_first(&candidates, dir) {
        let origin = match source {
            FormatterSource::Env => format!(" (from {})", config.formatter_env()),
            FormatterSource::Flag | FormatterSource::Detected => String::new(),
        };
        cliclack::log::info(format!(
            "Formatting in background: {}{}",
            formatter.command_line(),
            origin
        ))?;
    }

    Ok(())
}

fn print_next_steps<C: ProductConfig>(config: &C, dir: &Path, info: &TemplateInfo) -> Result<()> {
    let steps = config.next_steps(dir, info);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Files generated!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;

    fn request(parent: &Path) -> Request {
        Request {
            parent: parent.to_path_buf(),
            info: TemplateInfo::parse("counter", "increment", "count: int"),
        }
    }

    fn listing(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_cancellable_maps_interrupted_to_none() {
        let result: io::Result<String> = Err(io::Error::new(ErrorKind::Interrupted, "esc"));
        assert!(cancellable(result).unwrap().is_none());

        assert_eq!(cancellable(Ok(3)).unwrap(), Some(3));
    }

    #[test]
    fn test_cancellable_propagates_other_errors() {
        let result: io::Result<String> = Err(io::Error::new(ErrorKind::BrokenPipe, "closed"));
        let err = cancellable(result).unwrap_err();
        assert!(err.to_string().contains("closed"));
    }

    #[test]
    fn test_empty_target_needs_no_confirmation() {
        let temp = tempfile::tempdir().unwrap();
        let confirmed = confirm_target(&temp.path().join("counter"), false, || {
            panic!("should not ask for an empty target")
        })
        .unwrap();
        assert!(confirmed);
    }

    #[test]
    fn test_yes_skips_the_question() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("notes.txt"), "keep").unwrap();
        let confirmed =
            confirm_target(temp.path(), true, || panic!("--yes should not ask")).unwrap();
        assert!(confirmed);
    }

    #[tokio::test]
    async fn test_declined_overwrite_writes_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let request = request(temp.path());
        let dir = request.component_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("notes.txt"), "keep").unwrap();

        let written = confirm_and_generate(&request, &dir, false, || Ok(false))
            .await
            .unwrap();

        assert!(!written);
        assert_eq!(listing(&dir), vec!["notes.txt"]);
    }

    #[tokio::test]
    async fn test_cancelled_overwrite_writes_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let request = request(temp.path());
        let dir = request.component_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("state.dart"), "// hand-written").unwrap();

        let written = confirm_and_generate(&request, &dir, false, || {
            Err(io::Error::new(ErrorKind::Interrupted, "esc"))
        })
        .await
        .unwrap();

        assert!(!written);
        assert_eq!(listing(&dir), vec!["state.dart"]);
        assert_eq!(fs::read_to_string(dir.join("state.dart")).unwrap(), "// hand-written");
    }
}
