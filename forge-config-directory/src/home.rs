//! Home directory resolution for bounding upward searches.
//!
//! The lookup order is `HOME`, then `HOMEDRIVE` + `HOMEPATH` (Windows shells
//! frequently leave `HOME` unset), then whatever `dirs` reports for the
//! platform. Trailing separators are trimmed so that the parent of the result
//! is well defined.

use std::env;
use std::path::PathBuf;

/// Resolve the current user's home directory from the process environment.
///
/// Returns `None` when no source yields a non-empty value.
pub fn resolve_home_dir() -> Option<PathBuf> {
    let home = home_from_vars(|key| env::var(key).ok())
        .or_else(|| dirs::home_dir().and_then(|p| p.to_str().and_then(trim_separators)));
    tracing::trace!("Resolved home directory: {:?}", home);
    home
}

/// Resolve the home directory through an arbitrary variable lookup.
///
/// Split out from [`resolve_home_dir`] so callers can resolve against a
/// captured environment instead of the live process one.
pub fn home_from_vars<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(home) = lookup("HOME").filter(|h| !h.is_empty()) {
        return trim_separators(&home);
    }

    let drive = lookup("HOMEDRIVE").unwrap_or_default();
    let path = lookup("HOMEPATH").unwrap_or_default();
    trim_separators(&format!("{drive}{path}"))
}

fn trim_separators(raw: &str) -> Option<PathBuf> {
    if raw.is_empty() {
        return None;
    }

    let trimmed = raw.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        // Nothing but separators: keep the root itself.
        return Some(PathBuf::from(&raw[..1]));
    }
    Some(PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_home_variable_wins() {
        let home = home_from_vars(lookup_in(&[
            ("HOME", "/home/alex"),
            ("HOMEDRIVE", "C:"),
            ("HOMEPATH", "\\Users\\alex"),
        ]));
        assert_eq!(home, Some(PathBuf::from("/home/alex")));
    }

    #[test]
    fn test_drive_and_path_fallback() {
        let home = home_from_vars(lookup_in(&[("HOMEDRIVE", "C:"), ("HOMEPATH", "\\Users\\alex")]));
        assert_eq!(home, Some(PathBuf::from("C:\\Users\\alex")));
    }

    #[test]
    fn test_empty_home_falls_back_to_drive_and_path() {
        let home = home_from_vars(lookup_in(&[
            ("HOME", ""),
            ("HOMEDRIVE", "D:"),
            ("HOMEPATH", "\\me"),
        ]));
        assert_eq!(home, Some(PathBuf::from("D:\\me")));
    }

    #[test]
    fn test_trailing_separators_trimmed() {
        assert_eq!(
            home_from_vars(lookup_in(&[("HOME", "/home/alex///")])),
            Some(PathBuf::from("/home/alex"))
        );
        assert_eq!(
            home_from_vars(lookup_in(&[("HOMEDRIVE", "C:"), ("HOMEPATH", "\\Users\\alex\\")])),
            Some(PathBuf::from("C:\\Users\\alex"))
        );
    }

    #[test]
    fn test_root_home_is_kept() {
        assert_eq!(
            home_from_vars(lookup_in(&[("HOME", "/")])),
            Some(PathBuf::from("/"))
        );
    }

    #[test]
    fn test_nothing_set() {
        assert_eq!(home_from_vars(lookup_in(&[])), None);
    }
}
