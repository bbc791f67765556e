//! Declarative property metadata published to the host UI

use crate::mapping::Access;
use crate::property::Property;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExposeKind {
    Binary,
    Numeric,
}

/// One exposed property
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expose {
    #[serde(rename = "type")]
    pub kind: ExposeKind,
    pub name: &'static str,
    pub access: Access,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_on: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_off: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_step: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl Expose {
    /// Writable `"ON"`/`"OFF"` switch
    #[must_use]
    pub fn binary(property: Property) -> Self {
        Self {
            kind: ExposeKind::Binary,
            value_on: Some("ON"),
            value_off: Some("OFF"),
            ..Self::numeric(property.as_str(), Access::StateSet)
        }
    }

    #[must_use]
    pub fn numeric(name: &'static str, access: Access) -> Self {
        Self {
            kind: ExposeKind::Numeric,
            name,
            access,
            value_on: None,
            value_off: None,
            unit: None,
            value_min: None,
            value_max: None,
            value_step: None,
            endpoint: None,
            description: None,
        }
    }

    /// Writable numeric setting
    #[must_use]
    pub fn setting(property: Property) -> Self {
        Self::numeric(property.as_str(), Access::StateSet)
    }

    #[must_use]
    pub fn with_unit(mut self, unit: &'static str) -> Self {
        self.unit = Some(unit);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: u8) -> Self {
        self.endpoint = Some(endpoint.to_string());
        self
    }

    #[must_use]
    pub fn with_value_min(mut self, min: f64) -> Self {
        self.value_min = Some(min);
        self
    }

    #[must_use]
    pub fn with_value_max(mut self, max: f64) -> Self {
        self.value_max = Some(max);
        self
    }

    #[must_use]
    pub fn with_value_step(mut self, step: f64) -> Self {
        self.value_step = Some(step);
        self
    }

    /// Inclusive bounds shortcut
    #[must_use]
    pub fn with_range(self, min: f64, max: f64) -> Self {
        self.with_value_min(min).with_value_max(max)
    }

    #[must_use]
    pub fn co2() -> Self {
        Self::numeric("co2", Access::State)
            .with_unit("ppm")
            .with_description("The measured CO2 (carbon dioxide) value")
    }

    #[must_use]
    pub fn temperature() -> Self {
        Self::numeric("temperature", Access::State)
            .with_unit("°C")
            .with_description("Measured temperature value")
    }

    #[must_use]
    pub fn humidity() -> Self {
        Self::numeric("humidity", Access::State)
            .with_unit("%")
            .with_description("Measured relative humidity")
    }

    #[must_use]
    pub fn pressure() -> Self {
        Self::numeric("pressure", Access::State)
            .with_unit("hPa")
            .with_description("The measured atmospheric pressure")
    }

    #[must_use]
    pub fn illuminance() -> Self {
        Self::numeric("illuminance", Access::State)
            .with_description("Raw measured illuminance")
    }

    #[must_use]
    pub fn illuminance_lux() -> Self {
        Self::numeric("illuminance_lux", Access::State)
            .with_unit("lx")
            .with_description("Measured illuminance in lux")
    }
}
