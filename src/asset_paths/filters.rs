use std::path::{Component, Path};

use regex::Regex;

fn test_file_patterns() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^test_").expect("invalid test prefix regex"),
                Regex::new(r"(?i)_tests?\.[^.]+$").expect("invalid test suffix regex"),
                Regex::new(r"(?i)^conftest\.[^.]+$").expect("invalid conftest regex"),
            ]
        })
        .as_slice()
}

/// Determine whether a collected file looks like test code or test data.
///
/// `path` should be relative to the asset root: any `test` or `tests` directory component
/// marks the file, as does a file name such as `test_load.py` or `report_test.json`.
pub fn is_test_file(path: &Path) -> bool {
    let mut components = path.components().peekable();
    while let Some(component) = components.next() {
        let Component::Normal(part) = component else {
            continue;
        };
        let name = part.to_string_lossy();

        if components.peek().is_some() {
            if name.eq_ignore_ascii_case("test") || name.eq_ignore_ascii_case("tests") {
                return true;
            }
        } else if test_file_patterns()
            .iter()
            .any(|pattern| pattern.is_match(&name))
        {
            return true;
        }
    }
    false
}
