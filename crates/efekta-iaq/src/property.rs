//! User-facing property names

use serde::{Deserialize, Serialize};

macro_rules! properties {
    ($($variant:ident => $name:literal,)+) => {
        /// A named device property exposed to the host
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Property {
            $(
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl Property {
            /// Every known property
            pub const ALL: &'static [Property] = &[$(Property::$variant,)+];

            /// Property name as published to the host
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Property::$variant => $name,)+
                }
            }

            /// Look up a property by its published name
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Property::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

properties! {
    // Measurements
    Co2 => "co2",
    VocIndex => "voc_index",
    VocRawData => "voc_raw_data",
    LocalTime => "local_time",

    // Display
    AutoBrightness => "auto_brightness",
    AutoBacklight => "auto_backlight",
    NightOnoffBacklight => "night_onoff_backlight",
    NightOnBacklight => "night_on_backlight",
    NightOffBacklight => "night_off_backlight",
    LongChartPeriod => "long_chart_period",
    LongChartPeriod2 => "long_chart_period2",
    LongChartPeriod3 => "long_chart_period3",
    FlipDataTh => "flip_data_th",
    InternalOrExternal => "internal_or_external",

    // CO2 sensor
    ReadingInterval => "reading_interval",
    ForcedRecalibration => "forced_recalibration",
    ManualForcedRecalibration => "manual_forced_recalibration",
    FactoryResetCo2 => "factory_reset_co2",
    AutomaticScal => "automatic_scal",
    SetAltitude => "set_altitude",

    // Calibration offsets
    TemperatureOffset => "temperature_offset",
    HumidityOffset => "humidity_offset",

    // Relay control
    HighGas => "high_gas",
    LowGas => "low_gas",
    EnableGas => "enable_gas",
    InvertLogicGas => "invert_logic_gas",
    HighCo2 => "high_co2",
    LowCo2 => "low_co2",
    EnableCo2 => "enable_co2",
    InvertLogicCo2 => "invert_logic_co2",
    HighVoc => "high_voc",
    LowVoc => "low_voc",
    EnableVoc => "enable_voc",
    InvertLogicVoc => "invert_logic_voc",
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup_is_bijective() {
        for property in Property::ALL {
            assert_eq!(Property::from_name(property.as_str()), Some(*property));
        }
        assert_eq!(Property::from_name("brightness"), None);
    }

    #[test]
    fn test_serde_uses_published_name() {
        let json = serde_json::to_string(&Property::LongChartPeriod2).unwrap();
        assert_eq!(json, "\"long_chart_period2\"");
        let parsed: Property = serde_json::from_str("\"high_co2\"").unwrap();
        assert_eq!(parsed, Property::HighCo2);
    }
}
