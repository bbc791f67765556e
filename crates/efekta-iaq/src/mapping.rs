//! Attribute mapping records

use crate::property::Property;
use serde::{Serialize, Serializer};
use zigbee_core::{Cluster, DataType};

/// How a property may be accessed by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Published from reports only
    State,
    /// Published and writable
    StateSet,
    /// Published and readable on demand
    StateGet,
}

impl Access {
    /// Host access bitmask (1 = state, 2 = set, 4 = get)
    #[must_use]
    pub fn bits(self) -> u8 {
        match self {
            Access::State => 0b001,
            Access::StateSet => 0b011,
            Access::StateGet => 0b101,
        }
    }

    #[must_use]
    pub fn is_settable(self) -> bool {
        self == Access::StateSet
    }

    #[must_use]
    pub fn is_gettable(self) -> bool {
        self == Access::StateGet
    }
}

impl Serialize for Access {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

/// Value conversion between the wire and the published state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// `"ON"` / `"OFF"` <-> 1 / 0
    OnOff,
    /// Integer parse on write, pass-through on report
    Integer,
    /// Fixed point: the wire carries `value * factor`
    Scaled(i32),
    /// Fractional concentration reported as ppm, `round(value * 1e6)`
    PartsPerMillion,
    /// Float pass-through, report only
    Float,
}

/// One row of a revision's codec table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeMapping {
    pub property: Property,
    pub endpoint: u8,
    pub cluster: Cluster,
    pub attribute: u16,
    pub data_type: DataType,
    pub transform: Transform,
    pub access: Access,
}

impl AttributeMapping {
    /// Writable `"ON"`/`"OFF"` setting stored as a ZCL boolean
    #[must_use]
    pub const fn switch(property: Property, endpoint: u8, cluster: Cluster, attribute: u16) -> Self {
        Self {
            property,
            endpoint,
            cluster,
            attribute,
            data_type: DataType::Boolean,
            transform: Transform::OnOff,
            access: Access::StateSet,
        }
    }

    /// Writable integer setting
    #[must_use]
    pub const fn number(
        property: Property,
        endpoint: u8,
        cluster: Cluster,
        attribute: u16,
        data_type: DataType,
    ) -> Self {
        Self {
            property,
            endpoint,
            cluster,
            attribute,
            data_type,
            transform: Transform::Integer,
            access: Access::StateSet,
        }
    }

    /// Writable fixed-point setting
    #[must_use]
    pub const fn scaled(
        property: Property,
        endpoint: u8,
        cluster: Cluster,
        attribute: u16,
        data_type: DataType,
        factor: i32,
    ) -> Self {
        Self {
            property,
            endpoint,
            cluster,
            attribute,
            data_type,
            transform: Transform::Scaled(factor),
            access: Access::StateSet,
        }
    }

    /// CO2 concentration (`msCO2.measuredValue`, single precision fraction)
    #[must_use]
    pub const fn co2(endpoint: u8) -> Self {
        Self {
            property: Property::Co2,
            endpoint,
            cluster: Cluster::Co2,
            attribute: zigbee_core::cluster::measurement_attrs::MEASURED_VALUE,
            data_type: DataType::Float32,
            transform: Transform::PartsPerMillion,
            access: Access::State,
        }
    }

    /// Mark the mapping as published from reports only
    #[must_use]
    pub const fn report_only(self) -> Self {
        Self {
            access: Access::State,
            ..self
        }
    }

    /// Mark the mapping as readable on demand (and not writable)
    #[must_use]
    pub const fn gettable(self) -> Self {
        Self {
            access: Access::StateGet,
            ..self
        }
    }

    /// Replace the value transform
    #[must_use]
    pub const fn with_transform(self, transform: Transform) -> Self {
        Self { transform, ..self }
    }
}
