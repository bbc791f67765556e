//! Zigbee abstraction layer
//!
//! This crate provides the ZCL vocabulary (clusters, data types, attribute
//! values, report messages) and the device I/O capability that device
//! definitions are written against.

pub mod cluster;
pub mod error;
pub mod message;
pub mod transport;
pub mod value;

pub use cluster::{Cluster, DataType};
pub use error::TransportError;
pub use message::{AttributeReport, DeviceEvent, MessageKind};
pub use transport::{DeviceTransport, ReportingConfig, WriteRecord};
pub use value::AttributeValue;
