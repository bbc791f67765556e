//! EFEKTA iAQ air-quality monitor converters
//!
//! Each hardware revision owns an immutable attribute table that maps vendor
//! attributes on (extended) ZCL clusters to named properties. A
//! [`Definition`] wraps the table with the hooks the host framework calls:
//! writes, reads, report decoding, one-shot `configure`, and the per-device
//! event hook that keeps the on-screen clock in sync.

pub mod codec;
pub mod definition;
pub mod error;
pub mod exposes;
pub mod local_time;
pub mod mapping;
pub mod property;
pub mod revisions;
pub mod settings;
pub mod standard;

#[cfg(test)]
mod testing;

pub use codec::{CodecTable, ReadInstruction, StateUpdate, WriteInstruction};
pub use definition::{Binding, Definition, ReportingTarget, RESET_KEY};
pub use error::ConverterError;
pub use exposes::{Expose, ExposeKind};
pub use mapping::{Access, AttributeMapping, Transform};
pub use property::Property;
pub use revisions::{definitions, find_by_model};
pub use settings::ReportingSettings;
pub use standard::StandardConverter;
