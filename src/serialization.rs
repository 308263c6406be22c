//! Serialization of fitted scaler parameters.
//!
//! Fitted state is persisted as plain numerical records, never as a live
//! scaler, so a snapshot taken from one scaler can be restored into another
//! without re-fitting.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;

/// Byte encoding for learned scaler state.
///
/// Every serde record gets this through bincode, which is how
/// [`ScalerValues`](crate::preprocessing::ScalerValues) reaches disk.
pub trait SerializableParams: Sized {
    type Error: Error + Send + Sync + 'static;

    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error>;

    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error>;
}

impl<T> SerializableParams for T
where
    T: Serialize + DeserializeOwned,
{
    type Error = bincode::Error;

    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error> {
        bincode::serialize(self)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error> {
        bincode::deserialize(bytes)
    }
}
