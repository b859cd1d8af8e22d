//! Identifier casing used by the generated Dart code
//!
//! Component names arrive as snake_case (`todo_list`) and payload types as
//! Dart type expressions (`List<Item>`). Both are turned into camelCase local
//! names and PascalCase type prefixes here.

/// Word characters as understood by the casing rules (ASCII alphanumerics and `_`)
fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_separator(c: char) -> bool {
    c == '_' || !is_word(c)
}

/// Convert an arbitrary string to camelCase.
///
/// A run of separators (`_` or any non-word character) followed by a word
/// character collapses into that character upper-cased. Any other non-word
/// character is dropped, and the first character of the result is lower-cased.
/// A trailing run of separators keeps only its underscores.
///
/// ```
/// use scaffold_core::naming::camel_case;
///
/// assert_eq!(camel_case("todo_list"), "todoList");
/// assert_eq!(camel_case("List<Item>"), "listItem");
/// ```
pub fn camel_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        if !is_separator(chars[i]) {
            result.push(chars[i]);
            i += 1;
            continue;
        }

        let run_start = i;
        while i < chars.len() && is_separator(chars[i]) {
            i += 1;
        }

        match chars.get(i) {
            Some(next) => {
                result.extend(next.to_uppercase());
                i += 1;
            }
            None => result.extend(chars[run_start..].iter().filter(|c| **c == '_')),
        }
    }

    lower_first(&result)
}

/// camelCase that never returns its input unchanged.
///
/// Used for payload variable names: when the type is already a valid camelCase
/// word (`item`), the variable becomes `_item` so it does not read as the type.
pub fn distinct_camel_case(input: &str) -> String {
    let result = camel_case(input);
    if result == input {
        format!("_{}", result)
    } else {
        result
    }
}

/// camelCase with the first character upper-cased (`todo_list` -> `TodoList`)
pub fn capitalize(input: &str) -> String {
    upper_first(&camel_case(input))
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
