//! Attribute encoder / decoder driven by a revision's mapping table

use crate::error::ConverterError;
use crate::mapping::{AttributeMapping, Transform};
use crate::property::Property;
use serde_json::{json, Value};
use std::collections::HashMap;
use zigbee_core::{AttributeReport, AttributeValue, Cluster, WriteRecord};

/// Partial device state produced by a conversion
pub type StateUpdate = serde_json::Map<String, Value>;

/// A single attribute write, ready for the transport
#[derive(Debug, Clone, PartialEq)]
pub struct WriteInstruction {
    pub property: Property,
    pub endpoint: u8,
    pub cluster: Cluster,
    pub record: WriteRecord,
    /// Optimistic state echo (`{property: raw}`)
    pub state: StateUpdate,
}

/// A single attribute read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadInstruction {
    pub endpoint: u8,
    pub cluster: Cluster,
    pub attribute: u16,
}

/// Immutable per-revision lookup table
///
/// Encodes by property and decodes by `(cluster id, attribute id)`. Each
/// revision owns its own table; the same attribute id means different things
/// on different revisions.
#[derive(Debug)]
pub struct CodecTable {
    model: &'static str,
    mappings: &'static [AttributeMapping],
    by_property: HashMap<Property, usize>,
    by_attribute: HashMap<(u16, u16), usize>,
}

impl CodecTable {
    /// Index a static mapping list
    ///
    /// Duplicate properties or attribute addresses keep the first entry.
    #[must_use]
    pub fn new(model: &'static str, mappings: &'static [AttributeMapping]) -> Self {
        let mut by_property = HashMap::with_capacity(mappings.len());
        let mut by_attribute = HashMap::with_capacity(mappings.len());

        for (index, mapping) in mappings.iter().enumerate() {
            if by_property.contains_key(&mapping.property) {
                tracing::warn!("{}: duplicate mapping for {}", model, mapping.property);
                continue;
            }
            let address = (mapping.cluster.id(), mapping.attribute);
            if by_attribute.contains_key(&address) {
                tracing::warn!(
                    "{}: attribute {}/0x{:04X} mapped twice",
                    model,
                    mapping.cluster,
                    mapping.attribute
                );
                continue;
            }
            by_property.insert(mapping.property, index);
            by_attribute.insert(address, index);
        }

        Self {
            model,
            mappings,
            by_property,
            by_attribute,
        }
    }

    #[must_use]
    pub fn model(&self) -> &'static str {
        self.model
    }

    #[must_use]
    pub fn mappings(&self) -> &'static [AttributeMapping] {
        self.mappings
    }

    /// True when every mapping is reachable in both directions
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.by_property.len() == self.mappings.len()
            && self.by_attribute.len() == self.mappings.len()
    }

    /// Mapping for a property, if this revision declares it
    #[must_use]
    pub fn mapping(&self, property: Property) -> Option<&'static AttributeMapping> {
        let mappings = self.mappings;
        self.by_property.get(&property).map(|&i| &mappings[i])
    }

    /// Mapping for an attribute address, if this revision declares it
    #[must_use]
    pub fn lookup(&self, cluster_id: u16, attribute: u16) -> Option<&'static AttributeMapping> {
        let mappings = self.mappings;
        self.by_attribute
            .get(&(cluster_id, attribute))
            .map(|&i| &mappings[i])
    }

    /// Resolve a host key to a property declared by this revision
    pub fn resolve(&self, key: &str) -> Result<Property, ConverterError> {
        Property::from_name(key)
            .filter(|property| self.by_property.contains_key(property))
            .ok_or_else(|| ConverterError::UnknownProperty {
                model: self.model,
                key: key.to_string(),
            })
    }

    /// Translate a user-supplied value into a write instruction
    #[allow(clippy::cast_possible_truncation)]
    pub fn encode(&self, property: Property, raw: &Value) -> Result<WriteInstruction, ConverterError> {
        let mapping = self
            .mapping(property)
            .ok_or_else(|| ConverterError::UnknownProperty {
                model: self.model,
                key: property.as_str().to_string(),
            })?;

        if !mapping.access.is_settable() {
            return Err(ConverterError::NotWritable(property));
        }

        let invalid = || ConverterError::InvalidValue {
            property,
            value: raw.to_string(),
        };

        let wire = match mapping.transform {
            Transform::OnOff | Transform::Integer => enum_or_integer(raw).ok_or_else(invalid)?,
            Transform::Scaled(factor) => {
                (float_value(raw).ok_or_else(invalid)? * f64::from(factor)).round() as i64
            }
            Transform::PartsPerMillion | Transform::Float => {
                return Err(ConverterError::NotWritable(property))
            }
        };

        let value = AttributeValue::from_integer(mapping.data_type, wire).ok_or_else(invalid)?;

        let mut state = StateUpdate::new();
        state.insert(property.as_str().to_string(), raw.clone());

        Ok(WriteInstruction {
            property,
            endpoint: mapping.endpoint,
            cluster: mapping.cluster,
            record: WriteRecord::new(mapping.attribute, value),
            state,
        })
    }

    /// Same as [`CodecTable::encode`] for a host key
    pub fn encode_key(&self, key: &str, raw: &Value) -> Result<WriteInstruction, ConverterError> {
        self.encode(self.resolve(key)?, raw)
    }

    /// Read instruction for a property that supports on-demand reads
    pub fn read_request(&self, property: Property) -> Result<ReadInstruction, ConverterError> {
        let mapping = self
            .mapping(property)
            .ok_or_else(|| ConverterError::UnknownProperty {
                model: self.model,
                key: property.as_str().to_string(),
            })?;

        if !mapping.access.is_gettable() {
            return Err(ConverterError::NotReadable(property));
        }

        Ok(ReadInstruction {
            endpoint: mapping.endpoint,
            cluster: mapping.cluster,
            attribute: mapping.attribute,
        })
    }

    /// Decode the attributes of one report this revision knows about
    ///
    /// Unknown attributes are skipped; enum values other than 0/1 produce no
    /// key.
    #[must_use]
    pub fn decode(&self, report: &AttributeReport) -> StateUpdate {
        let mut state = StateUpdate::new();

        for (&attribute, value) in &report.attributes {
            let Some(mapping) = self.lookup(report.cluster_id, attribute) else {
                continue;
            };
            match decode_value(mapping.transform, value) {
                Some(decoded) => {
                    state.insert(mapping.property.as_str().to_string(), decoded);
                }
                None => {
                    tracing::debug!(
                        "{}: ignoring 0x{:04X} value {:?} for {}",
                        self.model,
                        report.cluster_id,
                        value,
                        mapping.property
                    );
                }
            }
        }

        state
    }
}

fn decode_value(transform: Transform, value: &AttributeValue) -> Option<Value> {
    match transform {
        Transform::OnOff => match value.as_i64()? {
            0 => Some(json!("OFF")),
            1 => Some(json!("ON")),
            _ => None,
        },
        Transform::Integer | Transform::Float => Some(value.to_json()),
        Transform::Scaled(factor) => Some(json!(value.as_f64() / f64::from(factor))),
        Transform::PartsPerMillion => {
            let ppm = (value.as_f64() * 1_000_000.0).round();
            if !ppm.is_finite() {
                return None;
            }
            #[allow(clippy::cast_possible_truncation)]
            Some(json!(ppm as i64))
        }
    }
}

/// `"ON"`/`"OFF"` lookup, otherwise integer parsing
fn enum_or_integer(raw: &Value) -> Option<i64> {
    match raw {
        Value::String(s) if s == "ON" => Some(1),
        Value::String(s) if s == "OFF" => Some(0),
        Value::String(s) => parse_int(s),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i),
            #[allow(clippy::cast_possible_truncation)]
            None => n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64),
        },
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

fn float_value(raw: &Value) -> Option<f64> {
    match raw {
        Value::String(s) => parse_float(s),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
    .filter(|f| f.is_finite())
}

/// Lenient base-10 integer parse: leading whitespace, optional sign, then the
/// longest run of digits. Trailing garbage is ignored.
pub(crate) fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    s[..end].parse().ok()
}

/// Lenient float parse over the longest numeric prefix
pub(crate) fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // exponent only counts when it has digits
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::Access;
    use zigbee_core::cluster::id;
    use zigbee_core::{DataType, MessageKind};

    static MAPPINGS: &[AttributeMapping] = &[
        AttributeMapping::switch(Property::AutoBacklight, 1, Cluster::Co2, 0x0203),
        AttributeMapping::number(Property::HighGas, 1, Cluster::Co2, 0x0221, DataType::Uint16),
        AttributeMapping::number(Property::SetAltitude, 1, Cluster::Co2, 0x0205, DataType::Uint16)
            .report_only(),
        AttributeMapping::scaled(
            Property::TemperatureOffset,
            1,
            Cluster::TemperatureMeasurement,
            0x0210,
            DataType::Int16,
            10,
        ),
        AttributeMapping::number(
            Property::VocRawData,
            2,
            Cluster::AnalogInput,
            0x0065,
            DataType::Uint16,
        )
        .gettable(),
        AttributeMapping::co2(1),
    ];

    fn table() -> CodecTable {
        CodecTable::new("TEST", MAPPINGS)
    }

    #[test]
    fn test_parse_int_is_lenient() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("  -7px"), Some(-7));
        assert_eq!(parse_int("21.9"), Some(21));
        assert_eq!(parse_int("+5"), Some(5));
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int(""), None);
    }

    #[test]
    fn test_parse_float_is_lenient() {
        assert_eq!(parse_float("21.3"), Some(21.3));
        assert_eq!(parse_float("-0.5 C"), Some(-0.5));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("1e2"), Some(100.0));
        assert_eq!(parse_float("3e"), Some(3.0));
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("ON"), None);
    }

    #[test]
    fn test_table_is_consistent() {
        assert!(table().is_consistent());
        assert_eq!(table().model(), "TEST");
    }

    #[test]
    fn test_duplicate_address_keeps_first() {
        static DUPES: &[AttributeMapping] = &[
            AttributeMapping::switch(Property::AutoBacklight, 1, Cluster::Co2, 0x0203),
            AttributeMapping::switch(Property::AutoBrightness, 1, Cluster::Co2, 0x0203),
        ];
        let table = CodecTable::new("DUPES", DUPES);
        assert!(!table.is_consistent());
        assert_eq!(
            table.lookup(id::CO2_MEASUREMENT, 0x0203).map(|m| m.property),
            Some(Property::AutoBacklight)
        );
    }

    #[test]
    fn test_encode_switch() {
        let write = table().encode(Property::AutoBacklight, &json!("ON")).unwrap();
        assert_eq!(write.endpoint, 1);
        assert_eq!(write.cluster, Cluster::Co2);
        assert_eq!(write.record, WriteRecord::new(0x0203, AttributeValue::Bool(true)));
        assert_eq!(write.state.get("auto_backlight"), Some(&json!("ON")));

        let write = table().encode(Property::AutoBacklight, &json!("OFF")).unwrap();
        assert_eq!(write.record.value, AttributeValue::Bool(false));
    }

    #[test]
    fn test_encode_integer_from_string_and_number() {
        let write = table().encode(Property::HighGas, &json!("800")).unwrap();
        assert_eq!(write.record.value, AttributeValue::U16(800));

        let write = table().encode(Property::HighGas, &json!(1200)).unwrap();
        assert_eq!(write.record.value, AttributeValue::U16(1200));
        assert_eq!(write.state.get("high_gas"), Some(&json!(1200)));
    }

    #[test]
    fn test_encode_scaled() {
        let write = table().encode(Property::TemperatureOffset, &json!("21.3")).unwrap();
        assert_eq!(write.cluster, Cluster::TemperatureMeasurement);
        assert_eq!(write.record.value, AttributeValue::I16(213));

        let write = table().encode(Property::TemperatureOffset, &json!(-0.7)).unwrap();
        assert_eq!(write.record.value, AttributeValue::I16(-7));
    }

    #[test]
    fn test_encode_rejects_out_of_range() {
        let err = table().encode(Property::HighGas, &json!(70000)).unwrap_err();
        assert!(matches!(err, ConverterError::InvalidValue { .. }));

        let err = table().encode(Property::AutoBacklight, &json!(2)).unwrap_err();
        assert!(matches!(err, ConverterError::InvalidValue { .. }));

        let err = table().encode(Property::HighGas, &json!("lots")).unwrap_err();
        assert!(matches!(err, ConverterError::InvalidValue { .. }));
    }

    #[test]
    fn test_encode_errors() {
        let err = table().encode(Property::SetAltitude, &json!(100)).unwrap_err();
        assert!(matches!(err, ConverterError::NotWritable(Property::SetAltitude)));

        let err = table().encode(Property::Co2, &json!(400)).unwrap_err();
        assert!(matches!(err, ConverterError::NotWritable(Property::Co2)));

        let err = table().encode(Property::AutoBrightness, &json!("ON")).unwrap_err();
        assert!(matches!(err, ConverterError::UnknownProperty { .. }));

        let err = table().encode_key("brightness", &json!("ON")).unwrap_err();
        assert!(matches!(err, ConverterError::UnknownProperty { model: "TEST", .. }));
    }

    #[test]
    fn test_read_request() {
        let read = table().read_request(Property::VocRawData).unwrap();
        assert_eq!(
            read,
            ReadInstruction {
                endpoint: 2,
                cluster: Cluster::AnalogInput,
                attribute: 0x0065
            }
        );
        assert_eq!(
            table().mapping(Property::VocRawData).map(|m| m.access),
            Some(Access::StateGet)
        );

        let err = table().read_request(Property::HighGas).unwrap_err();
        assert!(matches!(err, ConverterError::NotReadable(Property::HighGas)));
    }

    #[test]
    fn test_decode() {
        let report = AttributeReport::new(MessageKind::AttributeReport, 1, id::CO2_MEASUREMENT)
            .with(0x0203, AttributeValue::Bool(true))
            .with(0x0221, AttributeValue::U16(900))
            .with(0x0205, AttributeValue::U16(120))
            .with(0x0000, AttributeValue::F32(0.0004));

        let state = table().decode(&report);
        assert_eq!(state.get("auto_backlight"), Some(&json!("ON")));
        assert_eq!(state.get("high_gas"), Some(&json!(900)));
        assert_eq!(state.get("set_altitude"), Some(&json!(120)));
        assert_eq!(state.get("co2"), Some(&json!(400)));
        assert_eq!(state.len(), 4);
    }

    #[test]
    fn test_decode_scaled() {
        let report = AttributeReport::new(
            MessageKind::ReadResponse,
            1,
            id::TEMPERATURE_MEASUREMENT,
        )
        .with(0x0210, AttributeValue::I16(-15));

        let state = table().decode(&report);
        assert_eq!(state.get("temperature_offset"), Some(&json!(-1.5)));
    }

    #[test]
    fn test_decode_omits_out_of_domain_enum() {
        let report = AttributeReport::new(MessageKind::AttributeReport, 1, id::CO2_MEASUREMENT)
            .with(0x0203, AttributeValue::U8(2));
        assert!(table().decode(&report).is_empty());
    }

    #[test]
    fn test_decode_ignores_unknown_attributes() {
        let report = AttributeReport::new(MessageKind::AttributeReport, 1, id::CO2_MEASUREMENT)
            .with(0x7777, AttributeValue::U8(1))
            .with(0x0301, AttributeValue::U16(3));
        assert!(table().decode(&report).is_empty());

        // same attribute id on another cluster
        let report = AttributeReport::new(MessageKind::AttributeReport, 1, id::BASIC)
            .with(0x0203, AttributeValue::Bool(true));
        assert!(table().decode(&report).is_empty());
    }
}
