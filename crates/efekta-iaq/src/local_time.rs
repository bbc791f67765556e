//! Local-time keepalive for devices with an on-screen clock
//!
//! The device reports on `genTime` periodically; each report is answered with
//! the coordinator's local wall-clock time. The write is best effort.

use chrono::Local;
use zigbee_core::cluster::time_attrs;
use zigbee_core::{AttributeValue, Cluster, DeviceTransport, WriteRecord};

/// 2000-01-01T00:00:00Z in Unix milliseconds
pub const EPOCH_2000_MS: i64 = 946_684_800_000;

/// Endpoint hosting the device's time cluster
const TIME_ENDPOINT: u8 = 1;

/// Seconds since the 2000 epoch, shifted by the local UTC offset
#[must_use]
pub fn local_time_seconds(now_ms: i64, utc_offset_secs: i32) -> i64 {
    (now_ms - EPOCH_2000_MS).div_euclid(1000) + i64::from(utc_offset_secs)
}

/// Write the current local time to the device
pub async fn respond(transport: &dyn DeviceTransport) {
    let now = Local::now();
    respond_at(
        transport,
        now.timestamp_millis(),
        now.offset().local_minus_utc(),
    )
    .await;
}

/// Write the local time for a given instant
///
/// Never fails: write errors are logged and dropped so the host's event loop
/// is unaffected.
pub async fn respond_at(transport: &dyn DeviceTransport, now_ms: i64, utc_offset_secs: i32) {
    let seconds = local_time_seconds(now_ms, utc_offset_secs);
    let Ok(seconds) = u32::try_from(seconds) else {
        tracing::warn!("Local time {} is outside the device range, not sending", seconds);
        return;
    };

    let record = WriteRecord::new(time_attrs::TIME, AttributeValue::UtcTime(seconds));
    match transport.write(TIME_ENDPOINT, Cluster::Time, &[record]).await {
        Ok(()) => tracing::debug!("Sent local time {}", seconds),
        Err(e) => tracing::debug!("Failed to send local time: {}", e),
    }
}
