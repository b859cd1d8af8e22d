//! fish-redux CLI - Boilerplate generation for fish_redux pages

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use colored::Colorize;
use scaffold_core::templates::print_preview;
use scaffold_core::tui::GenerateArgs;
use scaffold_core::{FileKind, Formatter, ProductConfig, TemplateInfo};
use std::path::{Path, PathBuf};

/// fish_redux product configuration
#[derive(Clone)]
pub struct FishReduxConfig;

impl ProductConfig for FishReduxConfig {
    fn name(&self) -> &'static str {
        "fish-redux"
    }

    fn display_name(&self) -> &'static str {
        "fish_redux boilerplate"
    }

    fn formatter_candidates(&self) -> Vec<Formatter> {
        vec![
            Formatter::new("dart", &["format"]),
            Formatter::new("flutter", &["format"]),
        ]
    }

    fn formatter_env(&self) -> &'static str {
        "FISH_REDUX_FORMATTER"
    }

    fn package_import(&self) -> &'static str {
        "fish_redux"
    }

    fn next_steps(&self, dir: &Path, info: &TemplateInfo) -> Vec<String> {
        let cap = info.capitalized();
        let mut steps = Vec::new();

        steps.push(format!(
            "Fill in the reducers in {}",
            dir.join(FileKind::Reducer.file_name()).display()
        ));
        if !info.actions.is_empty() {
            steps.push(format!(
                "Dispatch actions with {}ActionCreator from the view",
                cap
            ));
        }
        steps.push(format!("Register {}Page() in your routes", cap));

        steps
    }

    fn cli_description(&self) -> &'static str {
        "Generate fish_redux page boilerplate (action, state, reducer, effect, page, view)"
    }
}

#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new component folder
    Generate(CliGenerateArgs),
    /// Print the generated files without writing anything
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
pub struct CliGenerateArgs {
    /// Directory the component folder is created in
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Component name (snake_case)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Actions, comma-separated, with optional payload type (e.g. "clear, add: Item")
    #[arg(short, long)]
    pub actions: Option<String>,

    /// State properties, comma-separated, with optional type (default is dynamic)
    #[arg(short, long)]
    pub state: Option<String>,

    /// File currently open in the editor (used to suggest a path)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Workspace root folders (used to suggest a path; defaults to the current directory)
    #[arg(short, long, value_delimiter = ',')]
    pub workspace: Vec<PathBuf>,

    /// Formatter command to run on the generated folder (e.g. "dart format")
    #[arg(long)]
    pub formatter: Option<String>,

    /// Skip formatting the generated files
    #[arg(long = "no-format")]
    pub no_format: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliGenerateArgs> for GenerateArgs {
    fn from(args: CliGenerateArgs) -> Self {
        GenerateArgs {
            path: args.path,
            name: args.name,
            actions: args.actions,
            state: args.state,
            active_file: args.file,
            workspace_roots: args.workspace,
            formatter: args.formatter,
            no_format: args.no_format,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Component name (snake_case)
    #[arg(short, long)]
    pub name: String,

    /// Actions, comma-separated, with optional payload type
    #[arg(short, long, default_value = "")]
    pub actions: String,

    /// State properties, comma-separated, with optional type
    #[arg(short, long, default_value = "")]
    pub state: String,

    /// Only print this file
    #[arg(short, long, value_enum)]
    pub kind: Option<FileKind>,
}

/// The clap command, named and described by the product
fn cli<C: ProductConfig>(config: &C) -> clap::Command {
    Args::command()
        .name(config.name())
        .bin_name(config.name())
        .about(config.cli_description())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = FishReduxConfig;
    let args = Args::from_arg_matches(&cli(&config).get_matches()).unwrap_or_else(|e| e.exit());

    match args.command {
        Some(Command::Preview(preview)) => {
            let info = TemplateInfo::parse(&preview.name, &preview.actions, &preview.state);
            if info.name.is_empty() {
                eprintln!("{} component name is empty", "Warning:".yellow());
            }
            print_preview(&info, preview.kind);
            Ok(())
        }
        Some(Command::Generate(generate_args)) => {
            let result = scaffold_core::run(&config, generate_args.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        None => {
            // No subcommand provided, default to generate behavior (interactive mode)
            let result = scaffold_core::run(&config, GenerateArgs::default()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}
