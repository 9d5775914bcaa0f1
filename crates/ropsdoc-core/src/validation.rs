//! Caller-side checks run after a pipeline succeeds.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::identity::ExtractedIdentity;
use crate::rules::is_valid_cnp;

/// How strictly the CNP of an extracted identity is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NationalIdPolicy {
    /// A valid CNP must be present (identity cards).
    Required,
    /// An empty CNP is accepted, a non-empty one must be valid
    /// (handwritten documents).
    IfPresent,
}

/// Check the CNP of `identity` against `policy`.
pub fn validate_identity(
    identity: &ExtractedIdentity,
    policy: NationalIdPolicy,
) -> Result<(), ValidationError> {
    let cnp = identity.national_id.trim();

    if cnp.is_empty() {
        return match policy {
            NationalIdPolicy::Required => Err(ValidationError::MissingNationalId),
            NationalIdPolicy::IfPresent => Ok(()),
        };
    }

    if !is_valid_cnp(cnp) {
        return Err(ValidationError::InvalidNationalId(cnp.to_string()));
    }

    Ok(())
}
