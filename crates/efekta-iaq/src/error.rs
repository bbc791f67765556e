//! Error types for the converters

use crate::property::Property;
use thiserror::Error;
use zigbee_core::TransportError;

/// Errors that can occur while converting to or from a device
#[derive(Error, Debug)]
pub enum ConverterError {
    /// The host asked for a key this revision does not declare
    #[error("Unknown property for {model}: {key}")]
    UnknownProperty { model: &'static str, key: String },

    /// Report-only property
    #[error("Property is not writable: {0}")]
    NotWritable(Property),

    /// Property cannot be read on demand
    #[error("Property is not readable: {0}")]
    NotReadable(Property),

    /// Value cannot be parsed or does not fit the attribute's wire type
    #[error("Invalid value for {property}: {value}")]
    InvalidValue { property: Property, value: String },

    /// Device I/O failed
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}
