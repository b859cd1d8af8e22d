//! Component description shared by every renderer, and the generated file set

use super::entries::{parse_entries, parse_state_entries, NamedEntry};
use super::render;
use crate::naming;

/// Everything the renderers need to know about one component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    /// Component name as typed (expected snake_case)
    pub name: String,

    /// Actions in input order
    pub actions: Vec<NamedEntry>,

    /// State properties in input order, each with a type
    pub state_properties: Vec<NamedEntry>,
}

impl TemplateInfo {
    /// Build from already-parsed entries
    pub fn new(
        name: impl Into<String>,
        actions: Vec<NamedEntry>,
        state_properties: Vec<NamedEntry>,
    ) -> Self {
        Self {
            name: name.into(),
            actions,
            state_properties,
        }
    }

    /// Parse the raw action and state lists typed by the user.
    ///
    /// Entries whose name is empty (an empty list, or a stray comma) are dropped,
    /// so an empty actions field produces an empty enum rather than a nameless member.
    pub fn parse(name: &str, actions: &str, state: &str) -> Self {
        let named = |entry: &NamedEntry| !entry.name.is_empty();
        Self::new(
            name,
            parse_entries(actions).into_iter().filter(named).collect(),
            parse_state_entries(state).into_iter().filter(named).collect(),
        )
    }

    /// `todo_list` -> `todoList`
    pub fn camel_cased(&self) -> String {
        naming::camel_case(&self.name)
    }

    /// `todo_list` -> `TodoList`, the prefix of every generated type
    pub fn capitalized(&self) -> String {
        naming::capitalize(&self.name)
    }
}

/// The six files that make up a fish_redux page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum FileKind {
    Action,
    State,
    Reducer,
    Effect,
    Page,
    View,
}

impl FileKind {
    /// Write order
    pub const ALL: [FileKind; 6] = [
        FileKind::Action,
        FileKind::State,
        FileKind::Reducer,
        FileKind::Effect,
        FileKind::Page,
        FileKind::View,
    ];

    /// Name used by the other files' imports, without extension
    pub fn stem(&self) -> &'static str {
        match self {
            FileKind::Action => "action",
            FileKind::State => "state",
            FileKind::Reducer => "reducer",
            FileKind::Effect => "effect",
            FileKind::Page => "page",
            FileKind::View => "view",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.dart", self.stem())
    }

    pub fn render(&self, info: &TemplateInfo) -> String {
        match self {
            FileKind::Action => render::action(info),
            FileKind::State => render::state(info),
            FileKind::Reducer => render::reducer(info),
            FileKind::Effect => render::effect(info),
            FileKind::Page => render::page(info),
            FileKind::View => render::view(info),
        }
    }
}

/// One rendered file, not yet written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub kind: FileKind,
    pub contents: String,
}

impl GeneratedFile {
    pub fn file_name(&self) -> String {
        self.kind.file_name()
    }
}

/// All six rendered files for a component, in write order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFileSet {
    pub files: Vec<GeneratedFile>,
}

impl GeneratedFileSet {
    pub fn render(info: &TemplateInfo) -> Self {
        let files = FileKind::ALL
            .iter()
            .map(|kind| GeneratedFile {
                kind: *kind,
                contents: kind.render(info),
            })
            .collect();
        Self { files }
    }

    pub fn get(&self, kind: FileKind) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.kind == kind)
    }
}
