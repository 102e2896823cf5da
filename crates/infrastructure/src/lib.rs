//! Ferrous RRL Infrastructure Layer
pub mod dns;
