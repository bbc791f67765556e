//! EFEKTA_iAQ_S_II (hardware R1 and R4 share this table)

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

pub const MODEL: &str = "EFEKTA_iAQ_S_II";

static MAPPINGS: &[M] = &[
    M::co2(1),
    M::number(P::LocalTime, 1, Cluster::Time, time_attrs::LOCAL_TIME, DataType::Uint32).report_only(),
    // msCO2 extensions
    M::switch(P::AutoBacklight, 1, Cluster::Co2, 0x0203),
    M::switch(P::NightOnoffBacklight, 1, Cluster::Co2, 0x0401),
    M::switch(P::ForcedRecalibration, 1, Cluster::Co2, 0x0202),
    M::switch(P::FactoryResetCo2, 1, Cluster::Co2, 0x0206),
    M::switch(P::LongChartPeriod, 1, Cluster::Co2, 0x0204),
    M::switch(P::LongChartPeriod2, 1, Cluster::Co2, 0x0244),
    M::number(P::SetAltitude, 1, Cluster::Co2, 0x0205, DataType::Uint16).report_only(),
    M::number(P::ManualForcedRecalibration, 1, Cluster::Co2, 0x0207, DataType::Uint16),
    M::number(P::NightOnBacklight, 1, Cluster::Co2, 0x0402, DataType::Uint8),
    M::number(P::NightOffBacklight, 1, Cluster::Co2, 0x0403, DataType::Uint8),
    // offsets
    M::scaled(P::TemperatureOffset, 1, Cluster::TemperatureMeasurement, 0x0210, DataType::Int16, 10),
    M::number(P::HumidityOffset, 1, Cluster::RelativeHumidity, 0x0210, DataType::Int16),
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
        Expose::illuminance(),
        Expose::illuminance_lux(),
        Expose::pressure(),
    ];
    exposes.extend(split_measurement_exposes());
    exposes.extend(backlight_exposes());
    exposes.extend([
        Expose::binary(P::LongChartPeriod)
            .with_description("The period of plotting the CO2 level(OFF - 1H | ON - 24H)"),
        Expose::binary(P::LongChartPeriod2)
            .with_description("The period of plotting the Pressure level(OFF - 1H | ON - 24H)"),
    ]);
    exposes.extend(offset_exposes(50.0));
    exposes.extend(co2_sensor_exposes());
    exposes.extend(gas_control_exposes(
        [P::EnableGas, P::InvertLogicGas, P::HighGas, P::LowGas],
        Gas::Co2,
    ));

    Definition {
        zigbee_models: &[MODEL],
        model: MODEL,
        vendor: super::VENDOR,
        description: "CO2 Mini Monitor with TFT Display, outdoor temperature, date and time",
        multi_endpoint: true,
        local_time_sync: false,
        table: CodecTable::new(MODEL, MAPPINGS),
        standard: STANDARD,
        bindings: BINDINGS,
        reporting: MULTI_ENDPOINT_REPORTING,
        exposes,
    }
}
