use serde::{Deserialize, Serialize};
use std::fmt;

/// RCODE 0, "no error".
pub const RCODE_NO_ERROR: u16 = 0;

/// RCODE 3, "name error" (NXDOMAIN).
pub const RCODE_NAME_ERROR: u16 = 3;

/// Rate-limit bucket family of a response.
///
/// Each category carries its own per-second allowance, see
/// [`RrlConfig::allowance_for`](crate::config::RrlConfig::allowance_for).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllowanceCategory {
    Answer,

    Referral,

    #[default]
    NoData,

    NxDomain,

    Error,
}

impl AllowanceCategory {
    /// Categorizes a response from its RCODE and section counts.
    ///
    /// A NOERROR response with answers is an `Answer`, one with only
    /// authority records is a `Referral`, and one with neither is `NoData`.
    /// NXDOMAIN always maps to `NxDomain`; every other RCODE is an `Error`.
    pub fn from_counts(rcode: u16, answer_count: usize, authority_count: usize) -> Self {
        match rcode {
            RCODE_NO_ERROR if answer_count > 0 => AllowanceCategory::Answer,
            RCODE_NO_ERROR if authority_count > 0 => AllowanceCategory::Referral,
            RCODE_NO_ERROR => AllowanceCategory::NoData,
            RCODE_NAME_ERROR => AllowanceCategory::NxDomain,
            _ => AllowanceCategory::Error,
        }
    }

    /// Whether the bucket name comes from the authority section rather than the question.
    pub fn uses_authority_name(&self) -> bool {
        matches!(
            self,
            AllowanceCategory::Referral | AllowanceCategory::NxDomain
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AllowanceCategory::Answer => "answer",
            AllowanceCategory::Referral => "referral",
            AllowanceCategory::NoData => "nodata",
            AllowanceCategory::NxDomain => "nxdomain",
            AllowanceCategory::Error => "error",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AllowanceCategory::Answer => "Positive Answers",
            AllowanceCategory::Referral => "Referrals",
            AllowanceCategory::NoData => "Empty (NODATA) Answers",
            AllowanceCategory::NxDomain => "Non-existent Domains",
            AllowanceCategory::Error => "Error Responses",
        }
    }

    pub fn all() -> &'static [AllowanceCategory] {
        &[
            AllowanceCategory::Answer,
            AllowanceCategory::Referral,
            AllowanceCategory::NoData,
            AllowanceCategory::NxDomain,
            AllowanceCategory::Error,
        ]
    }
}

impl fmt::Display for AllowanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
