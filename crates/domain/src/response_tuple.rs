use crate::allowance::AllowanceCategory;
use serde::Serialize;
use std::sync::Arc;

/// Classification of one outgoing response, handed to the rate limiter.
///
/// `class` and `record_type` stay `0` when the response carried no question
/// (RFC 7873 §5.4). Neither value has ever been allocated, so they cannot be
/// confused with a real query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResponseTuple {
    pub class: u16,

    pub record_type: u16,

    pub allowance_category: AllowanceCategory,

    /// Name charged for this response; empty when nothing applies.
    pub salient_name: Arc<str>,
}

impl ResponseTuple {
    pub fn has_salient_name(&self) -> bool {
        !self.salient_name.is_empty()
    }
}

impl Default for ResponseTuple {
    fn default() -> Self {
        Self {
            class: 0,
            record_type: 0,
            allowance_category: AllowanceCategory::default(),
            salient_name: Arc::from(""),
        }
    }
}
