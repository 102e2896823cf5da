use anyhow::Context;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use clap::Args;
use ferrous_rrl_domain::DomainError;
use hickory_proto::rr::Name;
use std::path::PathBuf;

/// Where the wire-format response comes from
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct ResponseInput {
    /// File holding a raw wire-format DNS response
    #[arg(short = 'f', long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Response encoded as base64url without padding (RFC 8484)
    #[arg(long, value_name = "STRING")]
    pub base64: Option<String>,
}

impl ResponseInput {
    pub fn read(&self) -> anyhow::Result<Vec<u8>> {
        if let Some(path) = &self.file {
            return std::fs::read(path)
                .with_context(|| format!("Failed to read response file {}", path.display()));
        }

        match &self.base64 {
            Some(encoded) => Ok(decode_base64url(encoded)?),
            None => Err(DomainError::InvalidInput("no response given".to_string()).into()),
        }
    }
}

fn decode_base64url(encoded: &str) -> Result<Vec<u8>, DomainError> {
    // Tolerate padding some encoders append anyway.
    URL_SAFE_NO_PAD
        .decode(encoded.trim().trim_end_matches('='))
        .map_err(|e| DomainError::InvalidInput(format!("Invalid base64url response: {}", e)))
}

/// Validates a `--wildcard-origin` value and renders it in ASCII presentation form.
///
/// An empty value means no wildcard. The name must be fully qualified.
pub fn parse_wildcard_origin(raw: &str) -> Result<Option<String>, DomainError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let name = Name::from_ascii(raw)
        .map_err(|e| DomainError::InvalidDomainName(format!("'{}': {}", raw, e)))?;

    if !name.is_fqdn() {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' is not fully qualified, add the trailing dot",
            raw
        )));
    }

    Ok(Some(name.to_ascii()))
}
