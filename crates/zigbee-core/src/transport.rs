//! Device I/O capability consumed by device definitions
//!
//! The host framework owns the radio, the ZCL framing and retry policy; the
//! converters only see this trait.

use crate::cluster::{Cluster, DataType};
use crate::error::TransportError;
use crate::value::AttributeValue;
use async_trait::async_trait;

/// A single attribute write
#[derive(Debug, Clone, PartialEq)]
pub struct WriteRecord {
    pub attribute: u16,
    pub value: AttributeValue,
}

impl WriteRecord {
    #[must_use]
    pub fn new(attribute: u16, value: AttributeValue) -> Self {
        Self { attribute, value }
    }

    /// Wire type tag of the value
    #[must_use]
    pub fn data_type(&self) -> DataType {
        self.value.data_type()
    }

    /// Serialize as a ZCL write-attribute record
    ///
    /// Record format:
    /// ```text
    /// [Attribute ID: 2 bytes LE]
    /// [Data type: 1 byte]
    /// [Value: type-dependent, LE]
    /// ```
    #[must_use]
    pub fn serialize(&self) -> Vec<u8> {
        let data_type = self.data_type();
        let mut data = Vec::with_capacity(3 + data_type.size());
        data.extend_from_slice(&self.attribute.to_le_bytes());
        data.push(data_type as u8);
        data.extend_from_slice(&self.value.to_le_bytes());
        data
    }
}

/// Reporting registration for one attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingConfig {
    pub attribute: u16,
    pub data_type: DataType,
    /// Seconds
    pub min_interval: u16,
    /// Seconds
    pub max_interval: u16,
    pub reportable_change: u16,
}

/// Operations a device definition may perform against a paired device
#[async_trait]
pub trait DeviceTransport: Send + Sync {
    /// Write attributes on a cluster of an endpoint
    async fn write(
        &self,
        endpoint: u8,
        cluster: Cluster,
        records: &[WriteRecord],
    ) -> Result<(), TransportError>;

    /// Request attributes; the values come back as a read response message
    async fn read(
        &self,
        endpoint: u8,
        cluster: Cluster,
        attributes: &[u16],
    ) -> Result<(), TransportError>;

    /// Send a cluster-specific command without payload
    async fn command(
        &self,
        endpoint: u8,
        cluster: Cluster,
        command_id: u8,
    ) -> Result<(), TransportError>;

    /// Bind a cluster of an endpoint to a coordinator endpoint
    async fn bind(
        &self,
        endpoint: u8,
        cluster: Cluster,
        coordinator_endpoint: u8,
    ) -> Result<(), TransportError>;

    /// Register periodic reporting
    async fn configure_reporting(
        &self,
        endpoint: u8,
        cluster: Cluster,
        configs: &[ReportingConfig],
    ) -> Result<(), TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_record_serialize() {
        let record = WriteRecord::new(0x0210, AttributeValue::I16(213));
        assert_eq!(record.serialize(), vec![0x10, 0x02, 0x29, 0xD5, 0x00]);
    }

    #[test]
    fn test_write_record_boolean() {
        let record = WriteRecord::new(0x0203, AttributeValue::Bool(false));
        assert_eq!(record.data_type(), DataType::Boolean);
        assert_eq!(record.serialize(), vec![0x03, 0x02, 0x10, 0x00]);
    }
}
