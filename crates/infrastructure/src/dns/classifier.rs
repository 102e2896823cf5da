//! RRL response classification
//!
//! Reduces an outgoing `hickory-proto` response to the [`ResponseTuple`] the
//! rate limiter debits: query class and type, allowance category, and the
//! salient name whose bucket is charged.

use ferrous_rrl_domain::{AllowanceCategory, ResponseTuple};
use hickory_proto::op::Message;
use hickory_proto::rr::Name;
use std::sync::Arc;
use tracing::trace;

/// Derives rate-limit tuples from response messages
pub struct ResponseClassifier;

impl ResponseClassifier {
    /// Classify `response` for Response Rate Limiting.
    ///
    /// If the answer was synthesized from a wildcard, `wildcard_origin` must
    /// name the zone that owns the wildcard. That is usually the query name
    /// minus its first label, but not always:
    ///
    /// ```text
    /// $ORIGIN example.net.
    /// *.a.b.c IN TXT "my origin name is example.net."
    /// ```
    ///
    /// `None` and an empty string both mean no wildcard was involved.
    pub fn derive(response: &Message, wildcard_origin: Option<&str>) -> ResponseTuple {
        let mut tuple = ResponseTuple::default();

        // A response without a question is legal (RFC 7873 §5.4). Class and
        // type stay 0, and the empty counts categorize it as NODATA, not as
        // an error.
        let question = response.queries().first();
        if let Some(query) = question {
            tuple.class = u16::from(query.query_class());
            tuple.record_type = u16::from(query.query_type());
        }

        tuple.allowance_category = AllowanceCategory::from_counts(
            u16::from(response.response_code()),
            response.answers().len(),
            response.name_servers().len(),
        );

        if tuple.allowance_category.uses_authority_name() {
            if let Some(owner) = Self::first_authority_name(response) {
                tuple.salient_name = Arc::from(owner.to_ascii());
            }
        } else if let Some(query) = question {
            tuple.salient_name = match wildcard_origin.filter(|origin| !origin.is_empty()) {
                Some(origin) => Arc::from(origin),
                None => Arc::from(query.name().to_ascii()),
            };
        }

        trace!(
            class = tuple.class,
            record_type = tuple.record_type,
            category = %tuple.allowance_category,
            salient_name = %tuple.salient_name,
            wildcard = wildcard_origin.is_some_and(|origin| !origin.is_empty()),
            "RRL tuple derived"
        );

        tuple
    }

    fn first_authority_name(response: &Message) -> Option<&Name> {
        response.name_servers().first().map(|record| record.name())
    }
}
