//! Deserialization helpers for fields the service may send as `null`.

use serde::{Deserialize, Deserializer};

/// Decodes `null` as the type's default value.
///
/// The service emits `null` for empty lists and unset timestamps; both
/// should read as the empty/zero value, the same as a missing key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
