//! EFEKTA_iAQ_S_III: CO2 + VOC monitor
//!
//! Settings are split across endpoints: the CO2 sensor lives on endpoint 3,
//! display backlight and VOC on endpoint 2, relay control for CO2 on 1.

use super::{
    backlight_exposes, co2_sensor_exposes, gas_control_exposes, offset_exposes,
    split_measurement_exposes, Gas,
};
use crate::codec::CodecTable;
use crate::definition::{Binding, Definition, ReportingTarget};
use crate::exposes::Expose;
use crate::mapping::{Access, AttributeMapping as M, Transform};
use crate::property::Property as P;
use crate::standard::StandardConverter;
use zigbee_core::cluster::{analog_input_attrs, measurement_attrs};
use zigbee_core::{Cluster, DataType};

pub const MODEL: &str = "EFEKTA_iAQ_S_III";

static MAPPINGS: &[M] = &[
    M::co2(3),
    // CO2 sensor, endpoint 3
    M::switch(P::ForcedRecalibration, 3, Cluster::Co2, 0x0202),
    M::switch(P::AutomaticScal, 3, Cluster::Co2, 0x0402),
    M::switch(P::FactoryResetCo2, 3, Cluster::Co2, 0x0206),
    M::switch(P::LongChartPeriod, 3, Cluster::Co2, 0x0204),
    M::switch(P::LongChartPeriod2, 3, Cluster::Co2, 0x0244),
    M::number(P::SetAltitude, 3, Cluster::Co2, 0x0205, DataType::Uint16),
    M::number(P::ManualForcedRecalibration, 3, Cluster::Co2, 0x0207, DataType::Uint16),
    M::switch(P::InternalOrExternal, 3, Cluster::Co2, 0x0288),
    // display, endpoint 2
    M::switch(P::AutoBacklight, 2, Cluster::IlluminanceMeasurement, 0x0203),
    M::switch(P::NightOnoffBacklight, 2, Cluster::IlluminanceMeasurement, 0x0401),
    M::number(P::NightOnBacklight, 2, Cluster::IlluminanceMeasurement, 0x0405, DataType::Uint8),
    M::number(P::NightOffBacklight, 2, Cluster::IlluminanceMeasurement, 0x0406, DataType::Uint8),
    // offsets
    M::scaled(P::TemperatureOffset, 1, Cluster::TemperatureMeasurement, 0x0210, DataType::Int16, 10),
    M::number(P::HumidityOffset, 1, Cluster::RelativeHumidity, 0x0210, DataType::Int16),
    // CO2 relay, endpoint 1
    M::number(P::HighCo2, 1, Cluster::Co2, 0x0221, DataType::Uint16),
    M::number(P::LowCo2, 1, Cluster::Co2, 0x0222, DataType::Uint16),
    M::switch(P::EnableCo2, 1, Cluster::Co2, 0x0220),
    M::switch(P::InvertLogicCo2, 1, Cluster::Co2, 0x0225),
    // VOC, endpoint 2
    M::number(P::HighVoc, 2, Cluster::AnalogInput, 0x0221, DataType::Uint16),
    M::number(P::LowVoc, 2, Cluster::AnalogInput, 0x0222, DataType::Uint16),
    M::switch(P::EnableVoc, 2, Cluster::AnalogInput, 0x0220),
    M::switch(P::InvertLogicVoc, 2, Cluster::AnalogInput, 0x0225),
    M::number(P::VocRawData, 2, Cluster::AnalogInput, 0x0065, DataType::Uint16).gettable(),
    M {
        property: P::VocIndex,
        endpoint: 2,
        cluster: Cluster::AnalogInput,
        attribute: analog_input_attrs::PRESENT_VALUE,
        data_type: DataType::Float32,
        transform: Transform::Float,
        access: Access::State,
    },
];

static STANDARD: &[StandardConverter] = &[
    StandardConverter::Temperature,
    StandardConverter::Humidity,
    StandardConverter::Illuminance,
];

static BINDINGS: &[Binding] = &[
    Binding {
        endpoint: 1,
        clusters: &[Cluster::TemperatureMeasurement, Cluster::RelativeHumidity],
    },
    Binding {
        endpoint: 2,
        clusters: &[
            Cluster::IlluminanceMeasurement,
            Cluster::AnalogInput,
            Cluster::TemperatureMeasurement,
            Cluster::RelativeHumidity,
        ],
    },
    Binding {
        endpoint: 3,
        clusters: &[Cluster::Co2],
    },
];

const MEASURED: u16 = measurement_attrs::MEASURED_VALUE;

static REPORTING: &[ReportingTarget] = &[
    ReportingTarget::new(3, Cluster::Co2, MEASURED, DataType::Float32),
    ReportingTarget::new(1, Cluster::TemperatureMeasurement, MEASURED, DataType::Int16),
    ReportingTarget::new(1, Cluster::RelativeHumidity, MEASURED, DataType::Uint16),
    ReportingTarget::new(2, Cluster::IlluminanceMeasurement, MEASURED, DataType::Uint16),
    ReportingTarget::new(
        2,
        Cluster::AnalogInput,
        analog_input_attrs::PRESENT_VALUE,
        DataType::Float32,
    ),
    ReportingTarget::new(2, Cluster::TemperatureMeasurement, MEASURED, DataType::Int16),
    ReportingTarget::new(2, Cluster::RelativeHumidity, MEASURED, DataType::Uint16),
];

pub(super) fn definition() -> Definition {
    let mut exposes = vec![Expose::co2()];
    exposes.extend(split_measurement_exposes());
    exposes.extend([
        Expose::numeric(P::VocIndex.as_str(), Access::State)
            .with_unit("VOC Index points")
            .with_description("VOC INDEX"),
        Expose::numeric(P::VocRawData.as_str(), Access::StateGet)
            .with_unit("ticks")
            .with_description("SRAW_VOC, digital raw value"),
        Expose::illuminance_lux(),
        Expose::illuminance(),
    ]);
    exposes.extend(backlight_exposes());
    exposes.extend([
        Expose::binary(P::LongChartPeriod)
            .with_description("The period of plotting the CO2 level(OFF - 1H | ON - 24H)"),
        Expose::binary(P::LongChartPeriod2)
            .with_description("The period of plotting the VOC level(OFF - 1H | ON - 24H)"),
        Expose::binary(P::InternalOrExternal)
            .with_description("Display data from internal or external TH sensor"),
    ]);
    exposes.extend(offset_exposes(50.0));
    exposes.extend([
        Expose::setting(P::SetAltitude)
            .with_unit("meters")
            .with_description(
                "Setting the altitude above sea level (for high accuracy of the CO2 sensor)",
            )
            .with_range(0.0, 3000.0),
        Expose::binary(P::AutomaticScal).with_description("Automatic self calibration"),
    ]);
    exposes.extend(co2_sensor_exposes());
    exposes.extend(gas_control_exposes(
        [P::EnableCo2, P::InvertLogicCo2, P::HighCo2, P::LowCo2],
        Gas::Co2,
    ));
    exposes.extend(gas_control_exposes(
        [P::EnableVoc, P::InvertLogicVoc, P::HighVoc, P::LowVoc],
        Gas::Voc,
    ));

    Definition {
        zigbee_models: &[MODEL],
        model: MODEL,
        vendor: super::VENDOR,
        description: "CO2 and VOC Monitor with TFT Display, outdoor temperature and humidity",
        multi_endpoint: true,
        local_time_sync: false,
        table: CodecTable::new(MODEL, MAPPINGS),
        standard: STANDARD,
        bindings: BINDINGS,
        reporting: REPORTING,
        exposes,
    }
}
