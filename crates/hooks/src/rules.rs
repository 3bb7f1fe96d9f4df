//! Secret rules - the two patterns the audit blocks on
//!
//! The rule set is fixed by design: an OpenAI-style API key and a hardcoded
//! password assignment. Rules are checked in table order per file.

use once_cell::sync::Lazy;
use regex::Regex;

/// A secret rule applied to staged content
#[derive(Debug)]
pub struct SecretRule {
    /// Human-readable rule name, used in diagnostics
    pub name: &'static str,
    /// Compiled pattern
    pub pattern: Regex,
    /// Block reason, printed ahead of the offending file path
    pub reason: &'static str,
}

/// Built-in rules, in check order
static RULES: Lazy<Vec<SecretRule>> = Lazy::new(|| {
    vec![
        SecretRule {
            name: "API Key",
            pattern: Regex::new(r"sk-[a-zA-Z0-9]{20,}").unwrap(),
            reason: "Potential API key found in",
        },
        SecretRule {
            name: "Hardcoded Password",
            // The token and the quoted value may belong to unrelated text on
            // the same line; that permissiveness is intentional.
            pattern: Regex::new(r#"(?i)password.*=.*['"][^'"]{8,}['"]"#).unwrap(),
            reason: "Potential hardcoded password in",
        },
    ]
});

/// Return the first rule that matches `content`, if any
pub fn first_match(content: &str) -> Option<&'static SecretRule> {
    RULES.iter().find(|rule| rule.pattern.is_match(content))
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn api_key_blocks_any_long_suffix(suffix in "[a-zA-Z0-9]{20,40}") {
            let content = format!("key = \"sk-{}\"", suffix);
            prop_assert_eq!(first_match(&content).map(|r| r.name), Some("API Key"));
        }

        #[test]
        fn api_key_ignores_short_suffixes(suffix in "[a-zA-Z0-9]{0,19}") {
            let content = format!("token: sk-{}", suffix);
            prop_assert!(first_match(&content).is_none());
        }

        #[test]
        fn password_blocks_values_of_eight_or_more(value in "[a-zA-Z0-9]{8,64}") {
            let content = format!("password = \"{}\"", value);
            prop_assert_eq!(
                first_match(&content).map(|r| r.name),
                Some("Hardcoded Password")
            );
        }

        #[test]
        fn password_ignores_short_values(value in "[a-zA-Z0-9]{0,7}") {
            let content = format!("password = \"{}\"", value);
            prop_assert!(first_match(&content).is_none());
        }
    }
}
