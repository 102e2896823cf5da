use serde::{Deserialize, Serialize};

use crate::allowance::AllowanceCategory;

/// Highest per-second allowance accepted by [`Config::validate`](super::Config::validate).
pub const MAX_ALLOWANCE_PER_SECOND: u32 = 1000;

/// Per-category allowances of the rate limiter.
///
/// `0` disables limiting for the category. The optional allowances fall back
/// to `responses_per_second` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RrlConfig {
    #[serde(default = "default_responses_per_second")]
    pub responses_per_second: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodata_per_second: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nxdomains_per_second: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrals_per_second: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors_per_second: Option<u32>,
}

impl RrlConfig {
    pub fn allowance_for(&self, category: AllowanceCategory) -> u32 {
        let specific = match category {
            AllowanceCategory::Answer => None,
            AllowanceCategory::Referral => self.referrals_per_second,
            AllowanceCategory::NoData => self.nodata_per_second,
            AllowanceCategory::NxDomain => self.nxdomains_per_second,
            AllowanceCategory::Error => self.errors_per_second,
        };
        specific.unwrap_or(self.responses_per_second)
    }

    /// Returns the first category whose allowance exceeds [`MAX_ALLOWANCE_PER_SECOND`].
    pub fn first_excessive(&self) -> Option<(AllowanceCategory, u32)> {
        AllowanceCategory::all()
            .iter()
            .map(|category| (*category, self.allowance_for(*category)))
            .find(|(_, allowance)| *allowance > MAX_ALLOWANCE_PER_SECOND)
    }
}

impl Default for RrlConfig {
    fn default() -> Self {
        Self {
            responses_per_second: default_responses_per_second(),
            nodata_per_second: None,
            nxdomains_per_second: None,
            referrals_per_second: None,
            errors_per_second: None,
        }
    }
}

fn default_responses_per_second() -> u32 {
    5
}
