//! Utility functions

/// Shortened form of a secret token, safe to put in logs.
pub fn redact_token(token: &str) -> String {
    let prefix: String = token.chars().take(8).collect();
    if prefix.len() == token.len() {
        "***".to_string()
    } else {
        format!("{}***", prefix)
    }
}

pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let keep = if local.chars().count() <= 2 { 1 } else { 2 };
            let shown: String = local.chars().take(keep).collect();
            format!("{}***@{}", shown, domain)
        }
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_token_keeps_prefix_only() {
        let token = "0f8a4c1e-7d3b-4c5a-9a61-2b7e0c9d1f22";
        assert_eq!(redact_token(token), "0f8a4c1e***");
    }

    #[test]
    fn test_redact_token_hides_short_values() {
        assert_eq!(redact_token("abc"), "***");
        assert_eq!(redact_token(""), "***");
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("bob@hbtn.io"), "bo***@hbtn.io");
        assert_eq!(mask_email("al@hbtn.io"), "a***@hbtn.io");
        assert_eq!(mask_email("no-at-sign"), "***");
        assert_eq!(mask_email("@hbtn.io"), "***");
    }
}
