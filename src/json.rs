use crate::errors::BinmarkError;
use serde::{de::DeserializeOwned, Serialize};

pub fn serialize(value: impl Serialize) -> Result<Vec<u8>, BinmarkError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(BinmarkError::SerializeJson)?;
    Ok(buf)
}

/// Serialize into an indented string for printing.
pub fn to_pretty_string(value: impl Serialize) -> Result<String, BinmarkError> {
    let buf = serialize(value)?;
    String::from_utf8(buf).map_err(|err| BinmarkError::Other(err.into()))
}

pub fn deserialize<T: DeserializeOwned>(slice: &[u8]) -> Result<T, BinmarkError> {
    serde_json::from_slice(slice).map_err(BinmarkError::DeserializeJson)
}
