use crate::prelude::*;

/// load one json document and parse it. no caching, no retries;
/// a failed load is the caller's problem
pub async fn load_json<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> FolioResult<T> {
    let path = path.as_ref();
    trace!("loading {path:?}");

    let data = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&data)?)
}
