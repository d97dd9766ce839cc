use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PlaceholderError {
    #[error("template is missing placeholder {0}")]
    Missing(String),
}

/// Replaces every occurrence of each `(placeholder, value)` pair in a single pass.
///
/// Substituted values are never rescanned, so a value that happens to contain
/// another placeholder is inserted literally. Every placeholder must occur at
/// least once in `template`.
pub fn substitute(template: &str, slots: &[(&str, &str)]) -> Result<String, PlaceholderError> {
    if let Some((missing, _)) = slots.iter().find(|(key, _)| !template.contains(key)) {
        return Err(PlaceholderError::Missing(missing.to_string()));
    }

    let extra: usize = slots.iter().map(|(_, value)| value.len()).sum();
    let mut output = String::with_capacity(template.len() + extra);
    let mut rest = template;

    loop {
        let next = slots
            .iter()
            .filter_map(|(key, value)| rest.find(key).map(|at| (at, *key, *value)))
            .min_by_key(|(at, _, _)| *at);

        match next {
            Some((at, key, value)) => {
                output.push_str(&rest[..at]);
                output.push_str(value);
                rest = &rest[at + key.len()..];
            }
            None => {
                output.push_str(rest);
                return Ok(output);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_all_occurrences() {
        let out = substitute("{a}-{b}-{a}", &[("{a}", "1"), ("{b}", "2")]).unwrap();
        assert_eq!(out, "1-2-1");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let out = substitute("[{a}][{b}]", &[("{a}", "{b}"), ("{b}", "x")]).unwrap();
        assert_eq!(out, "[{b}][x]");
    }

    #[test]
    fn test_missing_placeholder_is_an_error() {
        let err = substitute("only {a}", &[("{a}", "1"), ("{b}", "2")]).unwrap_err();
        assert_eq!(err, PlaceholderError::Missing("{b}".to_string()));
    }

    #[test]
    fn test_text_outside_placeholders_is_untouched() {
        let out = substitute("a { b } {c}", &[("{c}", "C")]).unwrap();
        assert_eq!(out, "a { b } C");
    }
}
