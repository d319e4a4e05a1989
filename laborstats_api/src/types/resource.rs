use serde::de::DeserializeOwned;

use crate::Error;

/// A tabular dataset served under `/get/<URI>`.
///
/// Each record type names the path segment it is fetched from; the response
/// body is a JSON array of that record.
pub trait Resource: DeserializeOwned {
    /// Path segment of the dataset, e.g. `childlabor_cty`.
    const URI: &'static str;

    /// Decodes a raw response body into records.
    fn decode(raw: &[u8]) -> Result<Vec<Self>, Error> {
        serde_json::from_slice::<Vec<Self>>(raw).map_err(|e| {
            tracing::error!("Failed to decode {} response: {}", Self::URI, e);
            Error::Decode(e)
        })
    }
}
