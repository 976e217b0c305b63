// hyperapi-core/src/domain/routes/validator.rs

use serde::Serialize;
use std::fmt;

use crate::domain::error::DomainError;

// 12-byte ObjectId, hex encoded
const OBJECT_ID_LEN: usize = 24;

/// Predicate applied to a path parameter before it is substituted in a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorKind {
    ObjectId,
}

impl ValidatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ObjectId => "object_id",
        }
    }

    pub fn is_valid(&self, value: &str) -> bool {
        match self {
            Self::ObjectId => {
                value.len() == OBJECT_ID_LEN && value.bytes().all(|b| b.is_ascii_hexdigit())
            }
        }
    }

    pub fn check(&self, param: &str, value: &str) -> Result<(), DomainError> {
        if self.is_valid(value) {
            Ok(())
        } else {
            Err(DomainError::Validation {
                param: param.to_string(),
                value: value.to_string(),
            })
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_accepts_24_hex_chars() {
        assert!(ValidatorKind::ObjectId.is_valid("5b9f6e2a1c9d440000a1b2c3"));
        assert!(ValidatorKind::ObjectId.is_valid("5B9F6E2A1C9D440000A1B2C3"));
    }

    #[test]
    fn test_object_id_rejects_bad_values() {
        for bad in [
            "",
            "5b9f6e2a1c9d440000a1b2c",   // 23
            "5b9f6e2a1c9d440000a1b2c3d", // 25
            "5b9f6e2a1c9d440000a1b2cz",
            "../../admin/000000000000",
        ] {
            assert!(!ValidatorKind::ObjectId.is_valid(bad), "{} accepted", bad);
        }
    }

    #[test]
    fn test_check_reports_param_and_value() {
        let err = ValidatorKind::ObjectId.check("project_ID", "nope");
        assert_eq!(
            err,
            Err(DomainError::Validation {
                param: "project_ID".into(),
                value: "nope".into()
            })
        );
    }
}
