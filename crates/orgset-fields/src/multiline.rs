//! Multiline text fields
//!
//! A multiline field's backing value is an ordered list of strings. At the
//! UI boundary the list is displayed newline-joined; on the way back in the
//! free-text block is split into trimmed, non-empty lines.

/// Parse a free-text block into its ordered, trimmed, non-empty lines.
///
/// Blank lines and surrounding whitespace are dropped; line order is
/// preserved.
#[must_use]
pub fn extract_multiline_fields(value: &str) -> Vec<String> {
    value
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Serialize an ordered list of lines back to a newline-joined block.
///
/// An empty list serializes to an empty string.
#[must_use]
pub fn join_multiline_fields(lines: &[String]) -> String {
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_drops_blank_lines() {
        assert_eq!(extract_multiline_fields("a\n\nb"), vec!["a", "b"]);
    }

    #[test]
    fn extract_trims_whitespace() {
        assert_eq!(
            extract_multiline_fields("  email \n\tbusiness-email\t\n"),
            vec!["email", "business-email"]
        );
    }

    #[test]
    fn extract_empty_input() {
        assert!(extract_multiline_fields("").is_empty());
        assert!(extract_multiline_fields("\n\n  \n").is_empty());
    }

    #[test]
    fn join_round_trip_is_idempotent() {
        let input = "a\nb\nc";
        let once = join_multiline_fields(&extract_multiline_fields(input));
        let twice = join_multiline_fields(&extract_multiline_fields(&once));
        assert_eq!(once, input);
        assert_eq!(twice, once);
    }

    #[test]
    fn join_empty_list() {
        assert_eq!(join_multiline_fields(&[]), "");
    }
}
