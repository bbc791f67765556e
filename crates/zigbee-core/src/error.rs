//! Error types for device I/O

use thiserror::Error;

/// Errors reported by a [`DeviceTransport`](crate::DeviceTransport)
#[derive(Error, Debug)]
pub enum TransportError {
    /// The device did not answer (sleeping end device, out of range)
    #[error("Device unreachable: {0}")]
    Unreachable(String),

    /// The request timed out
    #[error("Request timeout")]
    Timeout,

    /// Endpoint not present on the device
    #[error("Endpoint not found: {0}")]
    EndpointNotFound(u8),

    /// The device answered with a non-success ZCL status
    #[error("Device returned ZCL status {status:#04X}")]
    Status { status: u8 },

    /// Any other failure from the host's lower layers
    #[error("Transport error: {0}")]
    Other(String),
}
