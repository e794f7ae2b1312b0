//! Entity transcoders: decoded binary-side types into their JSON-side mirror.
//!
//! Every impl is a pure function of its input. The same value always yields
//! the same JSON, and calls can run concurrently without coordination.

pub mod beacon;
pub mod execution;
pub mod update;

use serde::Serialize;

use crate::error::EncodeError;

/// Conversion of a decoded entity into its canonical JSON representation.
pub trait ToJson {
    type Json: Serialize;

    fn to_json(&self) -> Self::Json;
}

/// Transcode an entity and render it as a `serde_json::Value`.
pub fn to_json_value<T: ToJson + ?Sized>(entity: &T) -> Result<serde_json::Value, EncodeError> {
    Ok(serde_json::to_value(entity.to_json())?)
}

/// Transcode an entity and render it as compact JSON text.
pub fn to_json_string<T: ToJson + ?Sized>(entity: &T) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(&entity.to_json())?)
}
