//! ZCL (Zigbee Cluster Library) definitions

use serde::{Deserialize, Serialize};

/// Common ZCL cluster IDs
pub mod id {
    // General Clusters
    pub const BASIC: u16 = 0x0000;
    pub const POWER_CONFIG: u16 = 0x0001;
    pub const IDENTIFY: u16 = 0x0003;
    pub const ON_OFF: u16 = 0x0006;
    pub const TIME: u16 = 0x000A;
    pub const ANALOG_INPUT: u16 = 0x000C;

    // Measurement Clusters
    pub const ILLUMINANCE_MEASUREMENT: u16 = 0x0400;
    pub const TEMPERATURE_MEASUREMENT: u16 = 0x0402;
    pub const PRESSURE_MEASUREMENT: u16 = 0x0403;
    pub const HUMIDITY_MEASUREMENT: u16 = 0x0405;
    pub const CO2_MEASUREMENT: u16 = 0x040D;
}

/// Measurement cluster attributes (shared by all `ms*` clusters)
pub mod measurement_attrs {
    pub const MEASURED_VALUE: u16 = 0x0000;
    pub const MIN_MEASURED_VALUE: u16 = 0x0001;
    pub const MAX_MEASURED_VALUE: u16 = 0x0002;
}

/// Analog Input cluster attributes
pub mod analog_input_attrs {
    pub const PRESENT_VALUE: u16 = 0x0055;
}

/// Time cluster attributes
pub mod time_attrs {
    pub const TIME: u16 = 0x0000;
    pub const TIME_STATUS: u16 = 0x0001;
    pub const TIME_ZONE: u16 = 0x0002;
    pub const LOCAL_TIME: u16 = 0x0007;
}

/// Basic cluster commands
pub mod basic_commands {
    pub const RESET_FACTORY_DEFAULTS: u8 = 0x00;
}

/// Clusters known to the converters.
///
/// Manufacturer extensions reuse the numeric id of the standard cluster they
/// extend, so a vendor attribute is always addressed as (cluster, attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cluster {
    #[serde(rename = "genBasic")]
    Basic,
    #[serde(rename = "genTime")]
    Time,
    #[serde(rename = "genAnalogInput")]
    AnalogInput,
    #[serde(rename = "msIlluminanceMeasurement")]
    IlluminanceMeasurement,
    #[serde(rename = "msTemperatureMeasurement")]
    TemperatureMeasurement,
    #[serde(rename = "msPressureMeasurement")]
    PressureMeasurement,
    #[serde(rename = "msRelativeHumidity")]
    RelativeHumidity,
    #[serde(rename = "msCO2")]
    Co2,
}

impl Cluster {
    /// Numeric cluster id
    #[must_use]
    pub fn id(self) -> u16 {
        match self {
            Cluster::Basic => id::BASIC,
            Cluster::Time => id::TIME,
            Cluster::AnalogInput => id::ANALOG_INPUT,
            Cluster::IlluminanceMeasurement => id::ILLUMINANCE_MEASUREMENT,
            Cluster::TemperatureMeasurement => id::TEMPERATURE_MEASUREMENT,
            Cluster::PressureMeasurement => id::PRESSURE_MEASUREMENT,
            Cluster::RelativeHumidity => id::HUMIDITY_MEASUREMENT,
            Cluster::Co2 => id::CO2_MEASUREMENT,
        }
    }

    #[must_use]
    pub fn from_id(value: u16) -> Option<Self> {
        match value {
            id::BASIC => Some(Cluster::Basic),
            id::TIME => Some(Cluster::Time),
            id::ANALOG_INPUT => Some(Cluster::AnalogInput),
            id::ILLUMINANCE_MEASUREMENT => Some(Cluster::IlluminanceMeasurement),
            id::TEMPERATURE_MEASUREMENT => Some(Cluster::TemperatureMeasurement),
            id::PRESSURE_MEASUREMENT => Some(Cluster::PressureMeasurement),
            id::HUMIDITY_MEASUREMENT => Some(Cluster::RelativeHumidity),
            id::CO2_MEASUREMENT => Some(Cluster::Co2),
            _ => None,
        }
    }

    /// Symbolic name used by the host framework
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Cluster::Basic => "genBasic",
            Cluster::Time => "genTime",
            Cluster::AnalogInput => "genAnalogInput",
            Cluster::IlluminanceMeasurement => "msIlluminanceMeasurement",
            Cluster::TemperatureMeasurement => "msTemperatureMeasurement",
            Cluster::PressureMeasurement => "msPressureMeasurement",
            Cluster::RelativeHumidity => "msRelativeHumidity",
            Cluster::Co2 => "msCO2",
        }
    }
}

impl std::fmt::Display for Cluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// ZCL data types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DataType {
    NoData = 0x00,
    Boolean = 0x10,
    Bitmap8 = 0x18,
    Uint8 = 0x20,
    Uint16 = 0x21,
    Uint32 = 0x23,
    Int8 = 0x28,
    Int16 = 0x29,
    Int32 = 0x2B,
    Enum8 = 0x30,
    Float32 = 0x39,
    UtcTime = 0xE2,
}

impl DataType {
    /// Encoded size of a value of this type in bytes
    #[must_use]
    pub fn size(self) -> usize {
        match self {
            DataType::NoData => 0,
            DataType::Boolean
            | DataType::Bitmap8
            | DataType::Uint8
            | DataType::Int8
            | DataType::Enum8 => 1,
            DataType::Uint16 | DataType::Int16 => 2,
            DataType::Uint32 | DataType::Int32 | DataType::Float32 | DataType::UtcTime => 4,
        }
    }

    /// Inclusive integer range representable by this type, if it is integral
    #[must_use]
    pub fn integer_range(self) -> Option<(i64, i64)> {
        match self {
            DataType::Boolean => Some((0, 1)),
            DataType::Bitmap8 | DataType::Uint8 | DataType::Enum8 => Some((0, 0xFF)),
            DataType::Uint16 => Some((0, 0xFFFF)),
            DataType::Uint32 | DataType::UtcTime => Some((0, 0xFFFF_FFFF)),
            DataType::Int8 => Some((i64::from(i8::MIN), i64::from(i8::MAX))),
            DataType::Int16 => Some((i64::from(i16::MIN), i64::from(i16::MAX))),
            DataType::Int32 => Some((i64::from(i32::MIN), i64::from(i32::MAX))),
            DataType::NoData | DataType::Float32 => None,
        }
    }
}

impl TryFrom<u8> for DataType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        match value {
            0x00 => Ok(DataType::NoData),
            0x10 => Ok(DataType::Boolean),
            0x18 => Ok(DataType::Bitmap8),
            0x20 => Ok(DataType::Uint8),
            0x21 => Ok(DataType::Uint16),
            0x23 => Ok(DataType::Uint32),
            0x28 => Ok(DataType::Int8),
            0x29 => Ok(DataType::Int16),
            0x2B => Ok(DataType::Int32),
            0x30 => Ok(DataType::Enum8),
            0x39 => Ok(DataType::Float32),
            0xE2 => Ok(DataType::UtcTime),
            _ => Err(value),
        }
    }
}
