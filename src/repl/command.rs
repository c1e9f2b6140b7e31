//! FPI command parsing

/// Parse an FPI command string
pub fn parse_command(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    Some(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_trims_and_drops_blanks() {
        assert_eq!(parse_command("  go movetime 50 "), Some("go movetime 50".into()));
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command(""), None);
    }
}
