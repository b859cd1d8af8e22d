//! Formatter selection: command-line flag, then environment, then the product's candidates

use crate::product::ProductConfig;
use crate::runtime::Formatter;

/// Where the formatter setting came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterSource {
    Flag,
    Env,
    Detected,
}

/// Choose the formatters to try, in order, or `None` if formatting is
/// disabled or no candidate exists.
///
/// An override yields a single formatter. Otherwise every product candidate
/// is returned and the first one that launches wins.
///
/// `env_value` is the value of the product's override variable, passed in so
/// the precedence stays testable.
pub fn select_formatter(
    disabled: bool,
    flag: Option<&str>,
    env_value: Option<&str>,
    candidates: &[Formatter],
) -> Option<(Vec<Formatter>, FormatterSource)> {
    if disabled {
        return None;
    }
    if let Some(formatter) = flag.and_then(Formatter::from_command_line) {
        return Some((vec![formatter], FormatterSource::Flag));
    }
    if let Some(formatter) = env_value.and_then(Formatter::from_command_line) {
        return Some((vec![formatter], FormatterSource::Env));
    }
    if candidates.is_empty() {
        return None;
    }
    Some((candidates.to_vec(), FormatterSource::Detected))
}

/// [`select_formatter`] reading the override variable named by the product
pub fn formatter_from_config<C: ProductConfig>(
    config: &C,
    disabled: bool,
    flag: Option<&str>,
) -> Option<(Vec<Formatter>, FormatterSource)> {
    let env_value = std::env::var(config.formatter_env()).ok();
    select_formatter(
        disabled,
        flag,
        env_value.as_deref(),
        &config.formatter_candidates(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<Formatter> {
        vec![
            Formatter::new("missing-dart-7f3a", &["format"]),
            Formatter::new("missing-flutter-7f3a", &["format"]),
        ]
    }

    #[test]
    fn test_disabled_wins() {
        assert!(select_formatter(true, Some("dart format"), None, &candidates()).is_none());
    }

    #[test]
    fn test_flag_over_env() {
        let (formatters, source) =
            select_formatter(false, Some("flutter format"), Some("dart format"), &candidates())
                .unwrap();
        assert_eq!(formatters, vec![Formatter::new("flutter", &["format"])]);
        assert_eq!(source, FormatterSource::Flag);
    }

    #[test]
    fn test_env_over_candidates() {
        let (formatters, source) =
            select_formatter(false, None, Some("dart format"), &candidates()).unwrap();
        assert_eq!(formatters.len(), 1);
        assert_eq!(formatters[0].command_line(), "dart format");
        assert_eq!(source, FormatterSource::Env);
    }

    #[test]
    fn test_blank_override_falls_through() {
        let (formatters, source) =
            select_formatter(false, Some(" "), Some(""), &candidates()).unwrap();
        assert_eq!(formatters, candidates());
        assert_eq!(source, FormatterSource::Detected);
    }

    #[test]
    fn test_no_candidates() {
        assert!(select_formatter(false, None, None, &[]).is_none());
    }
}
