//! Parsing of the `name: Type, other` lists typed by the user

/// Type given to state properties declared without one
pub const DYNAMIC_TYPE: &str = "dynamic";

/// An action or state property with its optional type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedEntry {
    /// Trimmed name
    pub name: String,

    /// Type exactly as typed after the first `:` (not trimmed)
    pub ty: Option<String>,
}

impl NamedEntry {
    pub fn new(name: impl Into<String>, ty: Option<&str>) -> Self {
        Self {
            name: name.into(),
            ty: ty.map(str::to_string),
        }
    }

    /// Declared type, or the dynamic sentinel when absent
    pub fn type_or_dynamic(&self) -> &str {
        self.ty.as_deref().unwrap_or(DYNAMIC_TYPE)
    }
}

/// Parse a comma-separated list of `name` or `name:Type` tokens.
///
/// Order is preserved. Only the name is trimmed; an empty type (`name:`) counts
/// as no type. An empty input yields a single entry with an empty name.
pub fn parse_entries(raw: &str) -> Vec<NamedEntry> {
    raw.split(',')
        .map(|piece| match piece.split_once(':') {
            Some((name, ty)) if !ty.is_empty() => NamedEntry::new(name.trim(), Some(ty)),
            Some((name, _)) => NamedEntry::new(name.trim(), None),
            None => NamedEntry::new(piece.trim(), None),
        })
        .collect()
}

/// Parse state properties, defaulting absent types to [`DYNAMIC_TYPE`]
pub fn parse_state_entries(raw: &str) -> Vec<NamedEntry> {
    parse_entries(raw)
        .into_iter()
        .map(|entry| NamedEntry {
            ty: Some(entry.type_or_dynamic().to_string()),
            name: entry.name,
        })
        .collect()
}
