//! Typed ZCL attribute values

use crate::cluster::DataType;
use serde::{Deserialize, Serialize};

/// An attribute value as carried in reports, read responses and writes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    I8(i8),
    I16(i16),
    I32(i32),
    F32(f32),
    /// Seconds since 2000-01-01T00:00:00Z
    UtcTime(u32),
}

impl AttributeValue {
    /// Build a value of the given integral wire type, checking its range
    ///
    /// Returns `None` when `value` does not fit `data_type` or the type is
    /// not integral.
    #[must_use]
    pub fn from_integer(data_type: DataType, value: i64) -> Option<Self> {
        let value = match data_type {
            DataType::Boolean => match value {
                0 => Self::Bool(false),
                1 => Self::Bool(true),
                _ => return None,
            },
            DataType::Uint8 | DataType::Bitmap8 | DataType::Enum8 => {
                Self::U8(u8::try_from(value).ok()?)
            }
            DataType::Uint16 => Self::U16(u16::try_from(value).ok()?),
            DataType::Uint32 => Self::U32(u32::try_from(value).ok()?),
            DataType::Int8 => Self::I8(i8::try_from(value).ok()?),
            DataType::Int16 => Self::I16(i16::try_from(value).ok()?),
            DataType::Int32 => Self::I32(i32::try_from(value).ok()?),
            DataType::UtcTime => Self::UtcTime(u32::try_from(value).ok()?),
            DataType::NoData | DataType::Float32 => return None,
        };
        Some(value)
    }

    /// Wire type tag this value is encoded with
    #[must_use]
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Bool(_) => DataType::Boolean,
            Self::U8(_) => DataType::Uint8,
            Self::U16(_) => DataType::Uint16,
            Self::U32(_) => DataType::Uint32,
            Self::I8(_) => DataType::Int8,
            Self::I16(_) => DataType::Int16,
            Self::I32(_) => DataType::Int32,
            Self::F32(_) => DataType::Float32,
            Self::UtcTime(_) => DataType::UtcTime,
        }
    }

    /// Integer view of the value (`None` for floats)
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Bool(b) => Some(i64::from(b)),
            Self::U8(v) => Some(i64::from(v)),
            Self::U16(v) => Some(i64::from(v)),
            Self::U32(v) | Self::UtcTime(v) => Some(i64::from(v)),
            Self::I8(v) => Some(i64::from(v)),
            Self::I16(v) => Some(i64::from(v)),
            Self::I32(v) => Some(i64::from(v)),
            Self::F32(_) => None,
        }
    }

    /// Numeric view of the value
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::F32(v) => f64::from(v),
            #[allow(clippy::cast_precision_loss)]
            _ => self.as_i64().unwrap_or_default() as f64,
        }
    }

    /// JSON representation exposed as device state
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match *self {
            Self::Bool(b) => serde_json::Value::Bool(b),
            Self::F32(v) => serde_json::json!(f64::from(v)),
            _ => serde_json::json!(self.as_i64().unwrap_or_default()),
        }
    }

    /// Little-endian payload bytes, without the type tag
    #[must_use]
    pub fn to_le_bytes(&self) -> Vec<u8> {
        match *self {
            Self::Bool(b) => vec![u8::from(b)],
            Self::U8(v) => vec![v],
            Self::U16(v) => v.to_le_bytes().to_vec(),
            Self::U32(v) | Self::UtcTime(v) => v.to_le_bytes().to_vec(),
            Self::I8(v) => v.to_le_bytes().to_vec(),
            Self::I16(v) => v.to_le_bytes().to_vec(),
            Self::I32(v) => v.to_le_bytes().to_vec(),
            Self::F32(v) => v.to_le_bytes().to_vec(),
        }
    }
}
