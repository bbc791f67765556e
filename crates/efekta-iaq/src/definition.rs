//! Device definitions: per-revision tables plus the host-facing hooks

use crate::codec::{CodecTable, StateUpdate};
use crate::error::ConverterError;
use crate::exposes::Expose;
use crate::local_time;
use crate::settings::ReportingSettings;
use crate::standard::StandardConverter;
use zigbee_core::cluster::basic_commands;
use zigbee_core::{
    AttributeReport, Cluster, DataType, DeviceEvent, DeviceTransport, MessageKind, ReportingConfig,
};

/// Host key that triggers a factory reset instead of an attribute write
pub const RESET_KEY: &str = "reset";

/// Endpoint receiving the factory reset command
const RESET_ENDPOINT: u8 = 1;

/// Clusters bound to the coordinator on one endpoint
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub endpoint: u8,
    pub clusters: &'static [Cluster],
}

/// One attribute registered for periodic reporting
#[derive(Debug, Clone, Copy)]
pub struct ReportingTarget {
    pub endpoint: u8,
    pub cluster: Cluster,
    pub attribute: u16,
    pub data_type: DataType,
}

impl ReportingTarget {
    #[must_use]
    pub const fn new(endpoint: u8, cluster: Cluster, attribute: u16, data_type: DataType) -> Self {
        Self {
            endpoint,
            cluster,
            attribute,
            data_type,
        }
    }

    fn config(&self, settings: &ReportingSettings) -> ReportingConfig {
        ReportingConfig {
            attribute: self.attribute,
            data_type: self.data_type,
            min_interval: settings.min_interval,
            max_interval: settings.max_interval,
            reportable_change: settings.reportable_change,
        }
    }
}

/// Everything the host needs to drive one hardware revision
#[derive(Debug)]
pub struct Definition {
    pub zigbee_models: &'static [&'static str],
    pub model: &'static str,
    pub vendor: &'static str,
    pub description: &'static str,
    /// Temperature and humidity are reported by more than one endpoint
    pub multi_endpoint: bool,
    /// Answer `genTime` reports with the local time
    pub local_time_sync: bool,
    pub table: CodecTable,
    pub standard: &'static [StandardConverter],
    pub bindings: &'static [Binding],
    pub reporting: &'static [ReportingTarget],
    pub exposes: Vec<Expose>,
}

impl Definition {
    /// Apply a user-supplied value to the device
    ///
    /// Returns the state echo the host may publish before confirmation.
    pub async fn convert_set(
        &self,
        transport: &dyn DeviceTransport,
        key: &str,
        raw: &serde_json::Value,
    ) -> Result<StateUpdate, ConverterError> {
        if key == RESET_KEY {
            tracing::info!("{}: sending factory reset", self.model);
            transport
                .command(RESET_ENDPOINT, Cluster::Basic, basic_commands::RESET_FACTORY_DEFAULTS)
                .await?;
            return Ok(StateUpdate::new());
        }

        let write = self.table.encode_key(key, raw)?;
        tracing::debug!(
            "{}: writing {} = {} to {}/0x{:04X} on endpoint {}",
            self.model,
            write.property,
            raw,
            write.cluster,
            write.record.attribute,
            write.endpoint
        );
        transport
            .write(write.endpoint, write.cluster, std::slice::from_ref(&write.record))
            .await?;

        Ok(write.state)
    }

    /// Request a fresh value; it arrives later as a read response
    pub async fn convert_get(
        &self,
        transport: &dyn DeviceTransport,
        key: &str,
    ) -> Result<(), ConverterError> {
        let property = self.table.resolve(key)?;
        let read = self.table.read_request(property)?;
        transport
            .read(read.endpoint, read.cluster, &[read.attribute])
            .await?;
        Ok(())
    }

    /// Decode an incoming attribute message
    #[must_use]
    pub fn from_zigbee(&self, report: &AttributeReport) -> StateUpdate {
        let mut state = self.table.decode(report);
        for converter in self.standard {
            state.extend(converter.decode(report, self.multi_endpoint));
        }
        state
    }

    /// Bind clusters and register reporting, in declaration order
    pub async fn configure(
        &self,
        transport: &dyn DeviceTransport,
        coordinator_endpoint: u8,
        settings: &ReportingSettings,
    ) -> Result<(), ConverterError> {
        for binding in self.bindings {
            for &cluster in binding.clusters {
                transport
                    .bind(binding.endpoint, cluster, coordinator_endpoint)
                    .await?;
            }
        }

        for target in self.reporting {
            transport
                .configure_reporting(target.endpoint, target.cluster, &[target.config(settings)])
                .await?;
        }

        tracing::info!(
            "{}: configured {} bindings and {} reports",
            self.model,
            self.bindings.iter().map(|b| b.clusters.len()).sum::<usize>(),
            self.reporting.len()
        );
        Ok(())
    }

    /// Per-device event hook
    pub async fn on_event(&self, event: &DeviceEvent, transport: &dyn DeviceTransport) {
        if !self.local_time_sync {
            return;
        }
        if let DeviceEvent::Message(report) = event {
            if report.kind == MessageKind::AttributeReport && report.cluster() == Some(Cluster::Time)
            {
                local_time::respond(transport).await;
            }
        }
    }
}
