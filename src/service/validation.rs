//! Request validation for claim submissions.

use crate::error::AppError;
use crate::models::{ClaimRequest, NewClaim};

/// Longest accepted `claimant_name` / `claim_type`, in characters.
pub const MAX_TEXT_LENGTH: usize = 255;

pub struct ClaimValidator;

impl ClaimValidator {
    /// Trim text fields and check them; the result always carries the pending status.
    pub fn validate(request: ClaimRequest) -> Result<NewClaim, AppError> {
        let claimant_name = required_text("claimant_name", &request.claimant_name)?;
        let claim_type = required_text("claim_type", &request.claim_type)?;
        if request.village_id <= 0 {
            return Err(AppError::Validation("village_id must be a positive integer".into()));
        }
        Ok(NewClaim::pending(claimant_name, claim_type, request.village_id))
    }
}

fn required_text(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    if trimmed.chars().count() > MAX_TEXT_LENGTH {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, MAX_TEXT_LENGTH
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PENDING_STATUS;

    fn request(name: &str, kind: &str, village_id: i64) -> ClaimRequest {
        ClaimRequest {
            claimant_name: name.into(),
            claim_type: kind.into(),
            village_id,
        }
    }

    #[test]
    fn trims_and_marks_pending() {
        let claim = ClaimValidator::validate(request("  Asha Devi ", "Individual\n", 1)).unwrap();
        assert_eq!(claim.claimant_name, "Asha Devi");
        assert_eq!(claim.claim_type, "Individual");
        assert_eq!(claim.status, PENDING_STATUS);
        assert_eq!(claim.village_id, 1);
    }

    #[test]
    fn rejects_blank_fields() {
        let err = ClaimValidator::validate(request("   ", "Individual", 1)).unwrap_err();
        assert_eq!(err.to_string(), "validation: claimant_name is required");
        let err = ClaimValidator::validate(request("Asha Devi", "", 1)).unwrap_err();
        assert_eq!(err.to_string(), "validation: claim_type is required");
    }

    #[test]
    fn rejects_overlong_text() {
        let long = "अ".repeat(MAX_TEXT_LENGTH + 1);
        assert!(ClaimValidator::validate(request(&long, "Individual", 1)).is_err());
        let exact = "अ".repeat(MAX_TEXT_LENGTH);
        assert!(ClaimValidator::validate(request(&exact, "Individual", 1)).is_ok());
    }

    #[test]
    fn rejects_non_positive_village() {
        for id in [0, -3] {
            let err = ClaimValidator::validate(request("Asha Devi", "Individual", id)).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }
}
