//! Hardware revisions and the definition registry

mod iaq_s;
mod iaq_s_i;
mod iaq_s_ii;
mod iaq_s_iii;

use crate::definition::{Definition, ReportingTarget};
use crate::exposes::Expose;
use crate::property::Property;
use std::sync::OnceLock;
use zigbee_core::cluster::measurement_attrs::MEASURED_VALUE;
use zigbee_core::{Cluster, DataType};

pub use iaq_s::MODEL as IAQ_S;
pub use iaq_s_i::MODEL as IAQS_I;
pub use iaq_s_ii::MODEL as IAQ_S_II;
pub use iaq_s_iii::MODEL as IAQ_S_III;

const VENDOR: &str = "Custom devices (DiY)";

/// Every supported revision, built on first use
#[must_use]
pub fn definitions() -> &'static [Definition] {
    static DEFINITIONS: OnceLock<Vec<Definition>> = OnceLock::new();
    DEFINITIONS.get_or_init(|| {
        vec![
            iaq_s::definition(),
            iaq_s_i::definition(),
            iaq_s_ii::definition(),
            iaq_s_iii::definition(),
        ]
    })
}

/// Look up a definition by the model identifier the device reports
#[must_use]
pub fn find_by_model(zigbee_model: &str) -> Option<&'static Definition> {
    definitions()
        .iter()
        .find(|d| d.zigbee_models.contains(&zigbee_model))
}

/// Reporting shared by the revisions with an external TH probe on endpoint 2
static MULTI_ENDPOINT_REPORTING: &[ReportingTarget] = &[
    ReportingTarget::new(1, Cluster::Co2, MEASURED_VALUE, DataType::Float32),
    ReportingTarget::new(1, Cluster::TemperatureMeasurement, MEASURED_VALUE, DataType::Int16),
    ReportingTarget::new(1, Cluster::RelativeHumidity, MEASURED_VALUE, DataType::Uint16),
    ReportingTarget::new(2, Cluster::IlluminanceMeasurement, MEASURED_VALUE, DataType::Uint16),
    ReportingTarget::new(2, Cluster::PressureMeasurement, MEASURED_VALUE, DataType::Int16),
    ReportingTarget::new(2, Cluster::TemperatureMeasurement, MEASURED_VALUE, DataType::Int16),
    ReportingTarget::new(2, Cluster::RelativeHumidity, MEASURED_VALUE, DataType::Uint16),
];

#[derive(Debug, Clone, Copy)]
enum Gas {
    Co2,
    Voc,
}

fn split_measurement_exposes() -> [Expose; 4] {
    [
        Expose::temperature()
            .with_endpoint(1)
            .with_description("Measured value of the built-in temperature sensor"),
        Expose::temperature()
            .with_endpoint(2)
            .with_description("Measured value of the external temperature sensor"),
        Expose::humidity()
            .with_endpoint(1)
            .with_description("Measured value of the built-in humidity sensor"),
        Expose::humidity()
            .with_endpoint(2)
            .with_description("Measured value of the external humidity sensor"),
    ]
}

fn backlight_exposes() -> [Expose; 4] {
    [
        Expose::binary(Property::AutoBacklight)
            .with_description("Enable or Disable Auto Brightness of the Display"),
        Expose::binary(Property::NightOnoffBacklight)
            .with_description("Complete shutdown of the backlight at night mode"),
        Expose::setting(Property::NightOnBacklight)
            .with_unit("Hr")
            .with_description("Night mode activation time")
            .with_range(0.0, 23.0),
        Expose::setting(Property::NightOffBacklight)
            .with_unit("Hr")
            .with_description("Night mode deactivation time")
            .with_range(0.0, 23.0),
    ]
}

fn offset_exposes(humidity_bound: f64) -> [Expose; 2] {
    [
        Expose::setting(Property::TemperatureOffset)
            .with_unit("°C")
            .with_value_step(0.1)
            .with_description("Adjust temperature")
            .with_range(-50.0, 50.0),
        Expose::setting(Property::HumidityOffset)
            .with_unit("%")
            .with_description("Adjust humidity")
            .with_range(-humidity_bound, humidity_bound),
    ]
}

fn co2_sensor_exposes() -> [Expose; 3] {
    [
        Expose::binary(Property::ForcedRecalibration)
            .with_description("Start FRC (Perform Forced Recalibration of the CO2 Sensor)"),
        Expose::binary(Property::FactoryResetCo2).with_description("Factory Reset CO2 sensor"),
        Expose::setting(Property::ManualForcedRecalibration)
            .with_unit("ppm")
            .with_description("Start Manual FRC (Perform Forced Recalibration of the CO2 Sensor)")
            .with_range(0.0, 5000.0),
    ]
}

/// Relay control: `[enable, invert_logic, high, low]`
fn gas_control_exposes(properties: [Property; 4], gas: Gas) -> [Expose; 4] {
    let [enable, invert, high, low] = properties;
    let (enable_desc, invert_desc, high_desc, low_desc) = match gas {
        Gas::Co2 => (
            "Enable CO2 Gas Control",
            "Enable invert logic CO2 Gas Control",
            "Setting High CO2 Gas Border",
            "Setting Low CO2 Gas Border",
        ),
        Gas::Voc => (
            "Enable VOC Gas Control",
            "Enable invert logic VOC Gas Control",
            "Setting High VOC Gas Border",
            "Setting Low VOC Gas Border",
        ),
    };
    [
        Expose::binary(enable).with_description(enable_desc),
        Expose::binary(invert).with_description(invert_desc),
        Expose::setting(high)
            .with_unit("ppm")
            .with_description(high_desc)
            .with_range(400.0, 5000.0),
        Expose::setting(low)
            .with_unit("ppm")
            .with_description(low_desc)
            .with_range(400.0, 5000.0),
    ]
}
