//! Incoming attribute messages and device events

use crate::cluster::Cluster;
use crate::value::AttributeValue;
use std::collections::BTreeMap;

/// How an attribute message reached the coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Unsolicited or periodic report
    AttributeReport,
    /// Response to a read issued by the coordinator
    ReadResponse,
}

/// Attribute values received from one cluster of one endpoint
#[derive(Debug, Clone)]
pub struct AttributeReport {
    pub kind: MessageKind,
    /// Source endpoint
    pub endpoint: u8,
    /// Raw cluster id (may be a cluster the converters don't know)
    pub cluster_id: u16,
    /// Attribute id -> value
    pub attributes: BTreeMap<u16, AttributeValue>,
}

impl AttributeReport {
    /// Create an empty report
    #[must_use]
    pub fn new(kind: MessageKind, endpoint: u8, cluster_id: u16) -> Self {
        Self {
            kind,
            endpoint,
            cluster_id,
            attributes: BTreeMap::new(),
        }
    }

    /// Add an attribute value (builder style)
    #[must_use]
    pub fn with(mut self, attribute: u16, value: AttributeValue) -> Self {
        self.attributes.insert(attribute, value);
        self
    }

    /// Known cluster of this report, if any
    #[must_use]
    pub fn cluster(&self) -> Option<Cluster> {
        Cluster::from_id(self.cluster_id)
    }

    #[must_use]
    pub fn get(&self, attribute: u16) -> Option<&AttributeValue> {
        self.attributes.get(&attribute)
    }
}

/// Events the host dispatches to a device definition
#[derive(Debug, Clone)]
pub enum DeviceEvent {
    /// An attribute message arrived from the device
    Message(AttributeReport),
    /// The device (re)announced itself on the network
    DeviceAnnounced,
    /// The device finished its interview
    DeviceInterviewed,
    /// The host is about to stop handling this device
    Stop,
}
