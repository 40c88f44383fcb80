use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a response body, reading an explicit `null` the way a missing
/// field is read.
///
/// Response structs are `#[serde(default)]`, so dropping null members
/// before decoding leaves every such field at its default. Nulls inside
/// arrays are kept.
pub fn from_slice_lenient<R: DeserializeOwned>(body: &[u8]) -> serde_json::Result<R> {
    let mut value: Value = serde_json::from_slice(body)?;
    drop_null_members(&mut value);
    serde_json::from_value(value)
}

fn drop_null_members(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, member| !member.is_null());
            map.values_mut().for_each(drop_null_members);
        }
        Value::Array(items) => items.iter_mut().for_each(drop_null_members),
        _ => {}
    }
}
