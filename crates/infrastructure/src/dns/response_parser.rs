use ferrous_rrl_domain::DomainError;
use hickory_proto::op::{Message, MessageType, ResponseCode};
use tracing::debug;

/// Decodes wire-format responses through `hickory-proto`
pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<Message, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "QR bit not set, message is a query".to_string(),
            ));
        }

        debug!(
            id = message.id(),
            rcode = Self::rcode_to_status(message.response_code()),
            questions = message.queries().len(),
            answers = message.answers().len(),
            authority = message.name_servers().len(),
            "DNS response parsed"
        );

        Ok(message)
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
