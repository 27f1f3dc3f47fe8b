//! Utility functions

/// Redact an email for log lines.
pub fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        if local.len() <= 2 {
            format!("{}***{}", &local[..1], domain)
        } else {
            format!("{}***{}", &local[..2], domain)
        }
    } else {
        "***".to_string()
    }
}

/// `PROP-00001`-style code from a running count.
pub fn property_code(count: i64) -> String {
    format!(
        "{}-{:0width$}",
        crate::constants::PROPERTY_CODE_PREFIX,
        count + 1,
        width = crate::constants::PROPERTY_CODE_WIDTH
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_code_padding() {
        assert_eq!(property_code(0), "PROP-00001");
        assert_eq!(property_code(41), "PROP-00042");
        assert_eq!(property_code(99_999), "PROP-100000");
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("ab@x.com"), "a***@x.com");
        assert_eq!(mask_email("operator@x.com"), "op***@x.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
