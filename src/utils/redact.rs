use regex::Regex;

/// Terms that mark an environment variable as sensitive. Matching is a
/// case-insensitive substring match against the variable name.
const SENSITIVE_PATTERN: &str = "(?i)KEY|TOKEN|SECRET|PASSWORD";

#[derive(Debug, Clone)]
pub struct SensitiveFilter {
    pattern: Regex,
}

impl SensitiveFilter {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(SENSITIVE_PATTERN).expect("Failed to compile sensitive pattern"),
        }
    }

    pub fn is_sensitive(&self, key: &str) -> bool {
        self.pattern.is_match(key)
    }

    /// Drop every entry whose key matches the sensitive pattern. Filtered
    /// values never reach the caller, not even truncated.
    pub fn filter(&self, entries: &[(String, String)]) -> Vec<(String, String)> {
        entries
            .iter()
            .filter(|(key, _)| !self.is_sensitive(key))
            .cloned()
            .collect()
    }
}

impl Default for SensitiveFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|k| (k.to_string(), "value".to_string()))
            .collect()
    }

    #[test]
    fn test_is_sensitive_matches_any_casing() {
        let filter = SensitiveFilter::new();
        assert!(filter.is_sensitive("API_KEY"));
        assert!(filter.is_sensitive("api_key"));
        assert!(filter.is_sensitive("Api_Key"));
        assert!(filter.is_sensitive("DB_PASSWORD"));
        assert!(filter.is_sensitive("GITHUB_TOKEN"));
        assert!(filter.is_sensitive("MY_SECRET_VALUE"));
    }

    #[test]
    fn test_is_sensitive_matches_substring_positions() {
        let filter = SensitiveFilter::new();
        // term at the start, middle and end of the name
        assert!(filter.is_sensitive("TOKEN_CACHE"));
        assert!(filter.is_sensitive("APP_TOKEN_TTL"));
        assert!(filter.is_sensitive("SESSION_TOKEN"));
        // substring semantics: the term does not need word boundaries
        assert!(filter.is_sensitive("secretive"));
        assert!(filter.is_sensitive("MONKEYS"));
    }

    #[test]
    fn test_plain_variables_pass() {
        let filter = SensitiveFilter::new();
        assert!(!filter.is_sensitive("PATH"));
        assert!(!filter.is_sensitive("PORT"));
        assert!(!filter.is_sensitive("HOME"));
        assert!(!filter.is_sensitive("LANG"));
    }

    #[test]
    fn test_filter_drops_sensitive_entries() {
        let filter = SensitiveFilter::new();
        let input = entries(&["PATH", "API_KEY", "PORT", "db_password", "TERM"]);
        let kept = filter.filter(&input);
        let names: Vec<&str> = kept.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["PATH", "PORT", "TERM"]);
    }

    #[test]
    fn test_filter_preserves_order_of_kept_entries() {
        let filter = SensitiveFilter::new();
        let input = entries(&["Z_VAR", "SECRET", "A_VAR"]);
        let kept = filter.filter(&input);
        let names: Vec<&str> = kept.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["Z_VAR", "A_VAR"]);
    }
}
