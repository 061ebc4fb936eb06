// ABOUTME: Integration tests for type-safe identifiers and validated types.
// ABOUTME: Tests commit SHA validation, ID behavior, and token redaction.

use vercel_wait::types::*;

mod commit_sha_tests {
    use super::*;

    #[test]
    fn accepts_full_and_short_shas() {
        let full = CommitSha::new("0123456789abcdef0123456789abcdef01234567").unwrap();
        assert_eq!(full.as_str().len(), 40);
        assert!(CommitSha::new("abc1234").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(CommitSha::new("").unwrap_err(), CommitShaError::Empty);
    }

    #[test]
    fn rejects_whitespace() {
        assert_eq!(
            CommitSha::new("abc 123").unwrap_err(),
            CommitShaError::ContainsWhitespace
        );
        assert_eq!(
            CommitSha::new("abc123\n").unwrap_err(),
            CommitShaError::ContainsWhitespace
        );
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        let sha = CommitSha::new("abc123").unwrap();
        assert!(sha.matches("abc123"));
        assert!(!sha.matches("ABC123"));
        assert!(!sha.matches("abc1234"));
        assert!(!sha.matches("abc12"));
    }
}

mod id_tests {
    use super::*;

    #[test]
    fn ids_compare_by_value() {
        assert_eq!(DeploymentId::new("dpl_1"), DeploymentId::new("dpl_1"));
        assert_ne!(DeploymentId::new("dpl_1"), DeploymentId::new("dpl_2"));
    }

    #[test]
    fn parse_trims_and_rejects_blank() {
        assert_eq!(ProjectId::parse("  prj_1 ").unwrap().as_str(), "prj_1");
        assert!(TeamId::parse("").is_none());
        assert!(TeamId::parse(" \t").is_none());
    }

    #[test]
    fn debug_names_the_resource() {
        assert_eq!(format!("{:?}", TeamId::new("team_42")), "team(team_42)");
        assert_eq!(DeploymentId::new("dpl_9").to_string(), "dpl_9");
    }

    #[test]
    fn deserializes_from_plain_string() {
        let id: DeploymentId = serde_json::from_str("\"dpl_abc\"").unwrap();
        assert_eq!(id, DeploymentId::new("dpl_abc"));
        assert!(serde_json::from_str::<DeploymentId>("\"  \"").is_err());
        assert!(serde_json::from_str::<DeploymentId>("42").is_err());
    }
}

mod token_tests {
    use super::*;

    #[test]
    fn debug_output_is_redacted() {
        let token = AccessToken::new("super-secret");
        let debug = format!("{token:?}");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn bearer_header_value() {
        assert_eq!(AccessToken::new("abc").bearer(), "Bearer abc");
    }

    #[test]
    fn blank_token_is_empty() {
        assert!(AccessToken::new("   ").is_empty());
        assert!(!AccessToken::new("x").is_empty());
    }
}
