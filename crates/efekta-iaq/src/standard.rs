//! Generic measurement-cluster converters shared by every revision

use crate::codec::StateUpdate;
use serde_json::json;
use zigbee_core::cluster::measurement_attrs;
use zigbee_core::{AttributeReport, Cluster};

/// Invalid temperature marker (0x8000)
const TEMPERATURE_INVALID: i64 = -0x8000;

/// Standard ZCL measured-value decoders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardConverter {
    /// `measuredValue` in centidegrees -> `temperature` (°C)
    Temperature,
    /// `measuredValue` in 0.01 % -> `humidity` (%)
    Humidity,
    /// `measuredValue` in hPa -> `pressure`
    Pressure,
    /// Log-scale `measuredValue` -> `illuminance` and `illuminance_lux`
    Illuminance,
}

impl StandardConverter {
    #[must_use]
    pub fn cluster(self) -> Cluster {
        match self {
            StandardConverter::Temperature => Cluster::TemperatureMeasurement,
            StandardConverter::Humidity => Cluster::RelativeHumidity,
            StandardConverter::Pressure => Cluster::PressureMeasurement,
            StandardConverter::Illuminance => Cluster::IlluminanceMeasurement,
        }
    }

    /// Decode a report from this converter's cluster
    ///
    /// With `per_endpoint` set, temperature and humidity keys carry the source
    /// endpoint as a suffix (`temperature_2`), since the built-in and external
    /// sensors report on the same cluster id.
    #[must_use]
    pub fn decode(self, report: &AttributeReport, per_endpoint: bool) -> StateUpdate {
        let mut state = StateUpdate::new();
        if report.cluster_id != self.cluster().id() {
            return state;
        }
        let Some(raw) = report
            .get(measurement_attrs::MEASURED_VALUE)
            .and_then(|value| value.as_i64())
        else {
            return state;
        };

        let key = |name: &str| {
            if per_endpoint {
                format!("{}_{}", name, report.endpoint)
            } else {
                name.to_string()
            }
        };

        match self {
            StandardConverter::Temperature => {
                if raw != TEMPERATURE_INVALID {
                    state.insert(key("temperature"), json!(centi(raw)));
                }
            }
            StandardConverter::Humidity => {
                let humidity = centi(raw);
                // 0xFFFF and friends are "unknown"
                if humidity <= 100.0 {
                    state.insert(key("humidity"), json!(humidity));
                }
            }
            StandardConverter::Pressure => {
                state.insert("pressure".to_string(), json!(raw));
            }
            StandardConverter::Illuminance => {
                state.insert("illuminance".to_string(), json!(raw));
                state.insert("illuminance_lux".to_string(), json!(illuminance_lux(raw)));
            }
        }

        state
    }
}

#[allow(clippy::cast_precision_loss)]
fn centi(raw: i64) -> f64 {
    raw as f64 / 100.0
}

/// Convert the ZCL log-scale illuminance value to lux
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn illuminance_lux(raw: i64) -> i64 {
    if raw == 0 {
        return 0;
    }
    10f64.powf((raw - 1) as f64 / 10_000.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use zigbee_core::{AttributeValue, MessageKind};

    fn report(endpoint: u8, cluster: Cluster, value: AttributeValue) -> AttributeReport {
        AttributeReport::new(MessageKind::AttributeReport, endpoint, cluster.id())
            .with(measurement_attrs::MEASURED_VALUE, value)
    }

    #[test]
    fn test_temperature() {
        let r = report(1, Cluster::TemperatureMeasurement, AttributeValue::I16(2345));
        let state = StandardConverter::Temperature.decode(&r, false);
        assert_eq!(state.get("temperature"), Some(&json!(23.45)));

        let r = report(1, Cluster::TemperatureMeasurement, AttributeValue::I16(i16::MIN));
        assert!(StandardConverter::Temperature.decode(&r, false).is_empty());
    }

    #[test]
    fn test_endpoint_suffix() {
        let r = report(2, Cluster::TemperatureMeasurement, AttributeValue::I16(-150));
        let state = StandardConverter::Temperature.decode(&r, true);
        assert_eq!(state.get("temperature_2"), Some(&json!(-1.5)));
        assert!(!state.contains_key("temperature"));

        let r = report(1, Cluster::RelativeHumidity, AttributeValue::U16(4550));
        let state = StandardConverter::Humidity.decode(&r, true);
        assert_eq!(state.get("humidity_1"), Some(&json!(45.5)));
    }

    #[test]
    fn test_humidity_rejects_unknown() {
        let r = report(1, Cluster::RelativeHumidity, AttributeValue::U16(0xFFFF));
        assert!(StandardConverter::Humidity.decode(&r, false).is_empty());
    }

    #[test]
    fn test_illuminance() {
        assert_eq!(illuminance_lux(0), 0);
        assert_eq!(illuminance_lux(1), 1);
        assert_eq!(illuminance_lux(10_001), 10);
        assert_eq!(illuminance_lux(30_001), 1000);

        let r = report(2, Cluster::IlluminanceMeasurement, AttributeValue::U16(20_001));
        let state = StandardConverter::Illuminance.decode(&r, true);
        assert_eq!(state.get("illuminance"), Some(&json!(20_001)));
        assert_eq!(state.get("illuminance_lux"), Some(&json!(100)));
    }

    #[test]
    fn test_pressure_and_cluster_filter() {
        let r = report(2, Cluster::PressureMeasurement, AttributeValue::I16(1013));
        assert_eq!(
            StandardConverter::Pressure.decode(&r, true).get("pressure"),
            Some(&json!(1013))
        );
        assert!(StandardConverter::Temperature.decode(&r, true).is_empty());
    }
}
