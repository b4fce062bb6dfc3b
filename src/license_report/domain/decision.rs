/// Policy decision attached to a package finding
///
/// Grant reports decisions as free-form strings. Only the exact, lowercase
/// spellings `"deny"` and `"denied"` mark a package as denied; any other
/// value (including `"Deny"`) is carried along untouched as `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Deny,
    Other(String),
}

impl Decision {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "deny" | "denied" => Decision::Deny,
            other => Decision::Other(other.to_string()),
        }
    }

    pub fn is_deny(&self) -> bool {
        matches!(self, Decision::Deny)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_deny_spellings() {
        assert_eq!(Decision::parse("deny"), Decision::Deny);
        assert_eq!(Decision::parse("denied"), Decision::Deny);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Decision::parse("Deny"), Decision::Other("Deny".to_string()));
        assert_eq!(
            Decision::parse("DENIED"),
            Decision::Other("DENIED".to_string())
        );
        assert!(!Decision::parse(" deny").is_deny());
    }

    #[test]
    fn test_parse_other_values() {
        assert!(!Decision::parse("allow").is_deny());
        assert!(!Decision::parse("ignore").is_deny());
        assert_eq!(Decision::parse(""), Decision::Other(String::new()));
    }
}
