use regex::Regex;

use crate::error::{Result, TemplateError};

/// Name requirement for a class or method clause.
///
/// A quoted rule must match the whole name, so the written pattern is
/// compiled with `^(?:...)$` anchors.
#[derive(Debug)]
pub enum NameRule {
    Any,
    Exact(String),
    Pattern(Regex),
}

impl NameRule {
    pub(crate) fn pattern(text: &str) -> Result<NameRule> {
        let anchored = format!("^(?:{text})$");
        match Regex::new(&anchored) {
            Ok(regex) => Ok(NameRule::Pattern(regex)),
            Err(source) => Err(TemplateError::InvalidPattern {
                pattern: text.to_owned(),
                source: Box::new(source),
            }),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            NameRule::Any => true,
            NameRule::Exact(expected) => expected == name,
            NameRule::Pattern(regex) => regex.is_match(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_requires_identity() {
        let rule = NameRule::Exact("close".to_owned());
        assert!(rule.matches("close"));
        assert!(!rule.matches("closed"));
        assert!(!rule.matches("Close"));
    }

    #[test]
    fn pattern_full_matches() {
        let rule = NameRule::pattern("on.*").unwrap();
        assert!(rule.matches("onEvent"));
        assert!(rule.matches("on"));
        // A substring hit is not enough.
        assert!(!rule.matches("common"));
        assert!(!rule.matches("salon.*x"));
    }

    #[test]
    fn any_always_passes() {
        assert!(NameRule::Any.matches(""));
        assert!(NameRule::Any.matches("whatever"));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(matches!(
            NameRule::pattern("on[("),
            Err(TemplateError::InvalidPattern { .. })
        ));
    }
}
