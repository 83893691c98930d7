//! Flag string tokenization and multi-line input splitting.

/// Split a raw flags string into tokens.
///
/// The input is trimmed and split on single spaces. `None`, empty and
/// whitespace-only input yield no tokens. Consecutive spaces inside the
/// string produce empty tokens; callers that care use [`has_empty_tokens`].
pub fn parse_flags(flags: Option<&str>) -> Vec<String> {
    let Some(flags) = flags else {
        return Vec::new();
    };
    let trimmed = flags.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split(' ').map(str::to_string).collect()
}

/// True if tokenization produced at least one empty token.
pub fn has_empty_tokens(tokens: &[String]) -> bool {
    tokens.iter().any(|t| t.is_empty())
}

/// Split a multi-line value: one entry per line, each trimmed, blanks dropped.
pub fn split_lines(value: &str) -> Vec<String> {
    value
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, vec![])]
    #[case(Some(""), vec![])]
    #[case(Some("   "), vec![])]
    #[case(Some("-d --build"), vec!["-d", "--build"])]
    #[case(Some("  --remove-orphans  "), vec!["--remove-orphans"])]
    #[case(Some("-d  --build"), vec!["-d", "", "--build"])]
    fn test_parse_flags(#[case] input: Option<&str>, #[case] expected: Vec<&str>) {
        assert_eq!(parse_flags(input), expected);
    }

    #[test]
    fn test_has_empty_tokens() {
        assert!(has_empty_tokens(&parse_flags(Some("-d   -t"))));
        assert!(!has_empty_tokens(&parse_flags(Some("-d -t"))));
        assert!(!has_empty_tokens(&parse_flags(None)));
    }

    #[test]
    fn test_split_lines_trims_and_drops_blanks() {
        let lines = split_lines("  docker-compose.yml\n\n docker-compose.ci.yml \r\n");
        assert_eq!(lines, vec!["docker-compose.yml", "docker-compose.ci.yml"]);
    }
}
