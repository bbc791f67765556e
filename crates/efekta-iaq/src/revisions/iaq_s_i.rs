//! EFEKTA_iAQS_I: CO2 mini monitor with outdoor temperature and humidity

use super::{
    backlight_exposes, co2_sensor_exposes, gas_control_exposes, offset_exposes,
    split_measurement_exposes, Gas, MULTI_ENDPOINT_REPORTING,
};
use crate::codec::CodecTable;
use crate::definition::{Binding, Definition};
use crate::exposes::Expose;
use crate::mapping::AttributeMapping as M;
use crate::property::Property as P;
use crate::standard::StandardConverter;
use zigbee_core::cluster::time_attrs;
use zigbee_core::{Cluster, DataType};

pub const MODEL: &str = "EFEKTA_iAQS_I";

static MAPPINGS: &[M] = &[
    M::co2(1),
    M::number(P::LocalTime, 1, Cluster::Time, time_attrs::LOCAL_TIME, DataType::Uint32).report_only(),
    // msCO2 extensions
    M::number(P::ReadingInterval, 1, Cluster::Co2, 0x0201, DataType::Uint16),
    M::switch(P::AutoBacklight, 1, Cluster::Co2, 0x0203),
    M::switch(P::NightOnoffBacklight, 1, Cluster::Co2, 0x0401),
    M::switch(P::FlipDataTh, 1, Cluster::Co2, 0x0291),
    M::switch(P::ForcedRecalibration, 1, Cluster::Co2, 0x0202),
    M::switch(P::FactoryResetCo2, 1, Cluster::Co2, 0x0206),
    M::switch(P::AutomaticScal, 1, Cluster::Co2, 0x0402),
    M::switch(P::LongChartPeriod, 1, Cluster::Co2, 0x0204),
    M::switch(P::LongChartPeriod2, 1, Cluster::Co2, 0x0244),
    M::switch(P::LongChartPeriod3, 1, Cluster::Co2, 0x0245),
    M::number(P::SetAltitude, 1, Cluster::Co2, 0x0205, DataType::Uint16).report_only(),
    M::number(P::ManualForcedRecalibration, 1, Cluster::Co2, 0x0207, DataType::Uint16),
    M::number(P::NightOnBacklight, 1, Cluster::Co2, 0x0405, DataType::Uint8),
    M::number(P::NightOffBacklight, 1, Cluster::Co2, 0x0406, DataType::Uint8),
    // offsets
    M::scaled(P::TemperatureOffset, 1, Cluster::TemperatureMeasurement, 0x0210, DataType::Int16, 10),
    M::number(P::HumidityOffset, 1, Cluster::RelativeHumidity, 0x0210, DataType::Int8),
    // CO2 relay
    M::number(P::HighGas, 1, Cluster::Co2, 0x0221, DataType::Uint16),
    M::number(P::LowGas, 1, Cluster::Co2, 0x0222, DataType::Uint16),
    M::switch(P::EnableGas, 1, Cluster::Co2, 0x0220),
    M::switch(P::InvertLogicGas, 1, Cluster::Co2, 0x0225),
];

static STANDARD: &[StandardConverter] = &[
    StandardConverter::Temperature,
    StandardConverter::Humidity,
    StandardConverter::Illuminance,
    StandardConverter::Pressure,
];

static BINDINGS: &[Binding] = &[
    Binding {
        endpoint: 1,
        clusters: &[
            Cluster::Time,
            Cluster::TemperatureMeasurement,
            Cluster::RelativeHumidity,
            Cluster::Co2,
        ],
    },
    Binding {
        endpoint: 2,
        clusters: &[
            Cluster::IlluminanceMeasurement,
            Cluster::PressureMeasurement,
            Cluster::TemperatureMeasurement,
            Cluster::RelativeHumidity,
        ],
    },
];

pub(super) fn definition() -> Definition {
    let mut exposes = vec![
        Expose::co2(),
        Expose::pressure(),
        Expose::illuminance(),
        Expose::illuminance_lux(),
    ];
    exposes.extend(split_measurement_exposes());
    exposes.push(
        Expose::setting(P::ReadingInterval)
            .with_unit("Seconds")
            .with_description("Setting the sensor reading interval in seconds, by default 30 seconds")
            .with_range(15.0, 300.0),
    );
    exposes.extend(backlight_exposes());
    exposes.extend([
        Expose::binary(P::LongChartPeriod)
            .with_description("The period of plotting the CO2 level(OFF - 1H | ON - 24H)"),
        Expose::binary(P::LongChartPeriod2)
            .with_description("The period of plotting the Temperature level(OFF - 1H | ON - 24H)"),
        Expose::binary(P::LongChartPeriod3)
            .with_description("The period of plotting the Humidity level(OFF - 1H | ON - 24H)"),
    ]);
    exposes.extend(offset_exposes(99.0));
    exposes.push(Expose::binary(P::FlipDataTh).with_description("Flip TH Data"));
    exposes.push(Expose::binary(P::AutomaticScal).with_description("Automatic self calibration"));
    exposes.extend(co2_sensor_exposes());
    exposes.extend(gas_control_exposes(
        [P::EnableGas, P::InvertLogicGas, P::HighGas, P::LowGas],
        Gas::Co2,
    ));

    Definition {
        zigbee_models: &[MODEL],
        model: MODEL,
        vendor: super::VENDOR,
        description: "EFEKTA_iAQS_I - CO2 Mini Monitor with TFT Display, outdoor temperature and humidity, date and time",
        multi_endpoint: true,
        local_time_sync: false,
        table: CodecTable::new(MODEL, MAPPINGS),
        standard: STANDARD,
        bindings: BINDINGS,
        reporting: MULTI_ENDPOINT_REPORTING,
        exposes,
    }
}
