use crate::core::{ConfigProvider, ProfileSource, Storage};
use crate::domain::model::Profile;
use crate::utils::error::{FetchError, Result, SiteError};
use crate::utils::validation::is_remote_location;
use reqwest::Client;
use std::time::Duration;

pub struct HttpProfileSource {
    client: Client,
    url: String,
}

impl HttpProfileSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Transport)?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl ProfileSource for HttpProfileSource {
    async fn fetch_profile(&self) -> std::result::Result<Profile, FetchError> {
        tracing::debug!("Requesting profile from: {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        tracing::debug!("Profile response status: {}", response.status());
        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(Profile::from_json_slice(&body)?)
    }
}

/// 從網站目錄讀取 profile（原本頁面的相對路徑 `info.json`）
pub struct StorageProfileSource<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> StorageProfileSource<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }
}

impl<S: Storage> ProfileSource for StorageProfileSource<S> {
    async fn fetch_profile(&self) -> std::result::Result<Profile, FetchError> {
        tracing::debug!("Reading profile from: {}", self.path);
        let data = self.storage.read_file(&self.path).await.map_err(|e| match e {
            SiteError::IoError(io) => FetchError::Io(io),
            other => FetchError::Io(std::io::Error::other(other.to_string())),
        })?;
        Ok(Profile::from_json_slice(&data)?)
    }
}

pub enum AnyProfileSource<S: Storage> {
    Http(HttpProfileSource),
    Local(StorageProfileSource<S>),
}

impl<S: Storage> AnyProfileSource<S> {
    /// URL 走 HTTP，其餘視為網站目錄下的路徑
    pub fn from_config<C: ConfigProvider>(config: &C, site_storage: S) -> Result<Self> {
        let location = config.profile_location();
        if is_remote_location(location) {
            Ok(Self::Http(HttpProfileSource::new(
                location,
                config.request_timeout(),
            )?))
        } else {
            Ok(Self::Local(StorageProfileSource::new(site_storage, location)))
        }
    }
}

impl<S: Storage> ProfileSource for AnyProfileSource<S> {
    async fn fetch_profile(&self) -> std::result::Result<Profile, FetchError> {
        match self {
            Self::Http(source) => source.fetch_profile().await,
            Self::Local(source) => source.fetch_profile().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn with_file(path: &str, data: &[u8]) -> Self {
            let storage = Self::default();
            storage.write_file(path, data).await.unwrap();
            storage
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                SiteError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn timeout() -> Duration {
        Duration::from_secs(5)
    }

    #[tokio::test]
    async fn test_http_fetch_success() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/info.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "name": "Ana",
                    "title": "Engineer",
                    "skills": ["Go"]
                }));
        });

        let source = HttpProfileSource::new(server.url("/info.json"), timeout()).unwrap();
        let profile = source.fetch_profile().await.unwrap();

        api_mock.assert();
        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.skills, vec!["Go"]);
    }

    #[tokio::test]
    async fn test_http_fetch_non_success_status() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/info.json");
            then.status(404);
        });

        let source = HttpProfileSource::new(server.url("/info.json"), timeout()).unwrap();
        let err = source.fetch_profile().await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_http_fetch_malformed_json() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/info.json");
            then.status(200).body("{ not json");
        });

        let source = HttpProfileSource::new(server.url("/info.json"), timeout()).unwrap();
        let err = source.fetch_profile().await.unwrap_err();

        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_http_fetch_is_not_retried() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/info.json");
            then.status(500);
        });

        let source = HttpProfileSource::new(server.url("/info.json"), timeout()).unwrap();
        assert!(source.fetch_profile().await.is_err());

        api_mock.assert_hits(1);
    }

    #[tokio::test]
    async fn test_storage_fetch() {
        let storage = MockStorage::with_file("info.json", br#"{"name": "Ana"}"#).await;
        let source = StorageProfileSource::new(storage, "info.json");

        let profile = source.fetch_profile().await.unwrap();
        assert_eq!(profile.name, "Ana");
    }

    #[tokio::test]
    async fn test_storage_fetch_missing_file() {
        let source = StorageProfileSource::new(MockStorage::default(), "info.json");
        let err = source.fetch_profile().await.unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
    }
}
