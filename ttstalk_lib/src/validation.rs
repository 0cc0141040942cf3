//! Input validation for user-supplied handles.

use crate::error::StalkError;

/// TikTok caps usernames at 24 characters.
pub const MAX_HANDLE_LENGTH: usize = 24;

/// Validates a handle: trims, strips one leading `@`, and restricts to
/// the username alphabet (ASCII alphanumerics, `.`, `_`).
pub fn validate_handle(input: &str) -> Result<String, StalkError> {
    let trimmed = input.trim();
    let handle = trimmed.strip_prefix('@').unwrap_or(trimmed);
    if handle.is_empty() {
        return Err(StalkError::InvalidInput(
            "handle must not be empty".to_string(),
        ));
    }
    if handle.len() > MAX_HANDLE_LENGTH {
        return Err(StalkError::InvalidInput(format!(
            "handle exceeds {} characters",
            MAX_HANDLE_LENGTH
        )));
    }
    if !handle
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_')
    {
        return Err(StalkError::InvalidInput(format!(
            "handle '{}' contains characters outside a-z, 0-9, '.', '_'",
            handle
        )));
    }
    Ok(handle.to_string())
}

/// Splits a comma-separated list and validates every handle in it.
pub fn parse_handle_list(input: &str) -> Result<Vec<String>, StalkError> {
    let handles = input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(validate_handle)
        .collect::<Result<Vec<_>, _>>()?;
    if handles.is_empty() {
        return Err(StalkError::InvalidInput(
            "no handles given".to_string(),
        ));
    }
    Ok(handles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_at_and_whitespace_are_stripped() {
        assert_eq!(validate_handle(" @alice ").unwrap(), "alice");
        assert_eq!(validate_handle("bob_the.2nd").unwrap(), "bob_the.2nd");
    }

    #[test]
    fn empty_and_oversized_handles_are_rejected() {
        assert!(validate_handle("").is_err());
        assert!(validate_handle("@").is_err());
        assert!(validate_handle(&"a".repeat(25)).is_err());
    }

    #[test]
    fn url_ish_input_is_rejected() {
        assert!(validate_handle("alice/videos").is_err());
        assert!(validate_handle("alice bob").is_err());
    }

    #[test]
    fn handle_lists_split_on_commas_and_skip_blanks() {
        let handles = parse_handle_list("alice, @bob,,carol ,").unwrap();
        assert_eq!(handles, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn one_bad_handle_fails_the_whole_list() {
        assert!(parse_handle_list("alice,bad handle").is_err());
        assert!(parse_handle_list(" , ").is_err());
    }
}
