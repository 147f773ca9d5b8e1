//! Saving fetched ABIs to disk

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use alloy::primitives::Address;
use tracing::{error, info};

use crate::abi::AbiResolver;
use crate::errors::SaveError;

impl AbiResolver {
    /// Fetches the ABI for `address` from Etherscan and writes it as
    /// pretty-printed JSON to `{save_path}/{file_name}.json`.
    ///
    /// The directory is created if missing and an existing file of the
    /// same name is overwritten. The error distinguishes an empty or
    /// failed fetch from a failed write.
    pub async fn try_save(
        &self,
        address: Address,
        file_name: &str,
        save_path: &Path,
    ) -> Result<PathBuf, SaveError> {
        let abi = self
            .fetch_remote(address)
            .await
            .map_err(SaveError::Fetch)?
            .ok_or(SaveError::FetchEmpty { address })?;

        fs::create_dir_all(save_path).map_err(|source| SaveError::Write {
            path: save_path.to_path_buf(),
            source,
        })?;

        let full_path = save_path.join(format!("{file_name}.json"));
        if full_path.exists() {
            info!(path = %full_path.display(), "overwriting existing ABI file");
        }

        serde_json::to_string_pretty(&abi)
            .map_err(io::Error::from)
            .and_then(|json| fs::write(&full_path, json))
            .map_err(|source| SaveError::Write { path: full_path.clone(), source })?;

        info!(%address, path = %full_path.display(), "saved ABI");
        Ok(full_path)
    }

    /// Convenience wrapper over [`try_save`](Self::try_save) matching the
    /// fire-and-forget save surface: any failure is logged and collapsed
    /// into `None`.
    pub async fn save(
        &self,
        address: Address,
        file_name: &str,
        save_path: &Path,
    ) -> Option<PathBuf> {
        match self.try_save(address, file_name, save_path).await {
            Ok(path) => Some(path),
            Err(err) => {
                error!(%address, error = %err, "failed to save ABI");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::fixtures::{sample_abi, unverified_envelope, verified_envelope};
    use alloy::primitives::address;
    use alloy_json_abi::JsonAbi;
    use mockito::Matcher;

    const POOL: Address = address!("87870Bca3F3fD6335C3F4ce8392D69350B4fA4E2");

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("abi-store-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[tokio::test]
    async fn save_writes_fetched_abi_and_returns_joined_path() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_body(verified_envelope())
            .create_async()
            .await;

        let dir = temp_dir("roundtrip");
        let resolver = AbiResolver::with_endpoint(server.url(), "testkey");
        let path = resolver.save(POOL, "aave_pool", &dir).await.unwrap();

        assert_eq!(path, dir.join("aave_pool.json"));

        // Round-trip: the saved file loads back to the fetched structure.
        let loaded = AbiResolver::load_local(&path).unwrap();
        let expected: JsonAbi = serde_json::from_value(sample_abi()).unwrap();
        assert_eq!(loaded, expected);
    }

    #[tokio::test]
    async fn save_overwrites_existing_file() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_body(verified_envelope())
            .create_async()
            .await;

        let dir = temp_dir("overwrite");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("stale.json"), "[]").unwrap();

        let resolver = AbiResolver::with_endpoint(server.url(), "testkey");
        let path = resolver.save(POOL, "stale", &dir).await.unwrap();

        let written = AbiResolver::load_local(&path).unwrap();
        let expected: JsonAbi = serde_json::from_value(sample_abi()).unwrap();
        assert_eq!(written, expected);
    }

    #[tokio::test]
    async fn save_returns_none_and_writes_nothing_when_fetch_is_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_body(unverified_envelope())
            .create_async()
            .await;

        let dir = temp_dir("empty-fetch");
        let resolver = AbiResolver::with_endpoint(server.url(), "testkey");

        assert!(resolver.save(POOL, "nothing", &dir).await.is_none());
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn try_save_distinguishes_empty_fetch_from_write_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_body(unverified_envelope())
            .create_async()
            .await;

        let resolver = AbiResolver::with_endpoint(server.url(), "testkey");
        let err = resolver
            .try_save(POOL, "nothing", Path::new("/tmp"))
            .await
            .unwrap_err();
        assert!(matches!(err, SaveError::FetchEmpty { address } if address == POOL));
    }
}
