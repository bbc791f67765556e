//! Recording transport for unit tests

use async_trait::async_trait;
use tokio::sync::Mutex;
use zigbee_core::{Cluster, DeviceTransport, ReportingConfig, TransportError, WriteRecord};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Write {
        endpoint: u8,
        cluster: Cluster,
        records: Vec<WriteRecord>,
    },
    Read {
        endpoint: u8,
        cluster: Cluster,
        attributes: Vec<u16>,
    },
    Command {
        endpoint: u8,
        cluster: Cluster,
        command_id: u8,
    },
    Bind {
        endpoint: u8,
        cluster: Cluster,
        coordinator_endpoint: u8,
    },
    ConfigureReporting {
        endpoint: u8,
        cluster: Cluster,
        configs: Vec<ReportingConfig>,
    },
}

/// Records every call; optionally fails all of them after recording
#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    fail: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call is recorded, then fails as if the device went away
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: Call) -> Result<(), TransportError> {
        self.calls.lock().await.push(call);
        if self.fail {
            Err(TransportError::Unreachable("test device".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DeviceTransport for RecordingTransport {
    async fn write(
        &self,
        endpoint: u8,
        cluster: Cluster,
        records: &[WriteRecord],
    ) -> Result<(), TransportError> {
        self.record(Call::Write {
            endpoint,
            cluster,
            records: records.to_vec(),
        })
        .await
    }

    async fn read(
        &self,
        endpoint: u8,
        cluster: Cluster,
        attributes: &[u16],
    ) -> Result<(), TransportError> {
        self.record(Call::Read {
            endpoint,
            cluster,
            attributes: attributes.to_vec(),
        })
        .await
    }

    async fn command(
        &self,
        endpoint: u8,
        cluster: Cluster,
        command_id: u8,
    ) -> Result<(), TransportError> {
        self.record(Call::Command {
            endpoint,
            cluster,
            command_id,
        })
        .await
    }

    async fn bind(
        &self,
        endpoint: u8,
        cluster: Cluster,
        coordinator_endpoint: u8,
    ) -> Result<(), TransportError> {
        self.record(Call::Bind {
            endpoint,
            cluster,
            coordinator_endpoint,
        })
        .await
    }

    async fn configure_reporting(
        &self,
        endpoint: u8,
        cluster: Cluster,
        configs: &[ReportingConfig],
    ) -> Result<(), TransportError> {
        self.record(Call::ConfigureReporting {
            endpoint,
            cluster,
            configs: configs.to_vec(),
        })
        .await
    }
}
