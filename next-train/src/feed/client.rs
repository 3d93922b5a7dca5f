//! GTFS archive download.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use super::config::FeedConfig;
use super::error::FeedError;
use super::extract::extract_archive;

/// Outcome of a successful refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshReport {
    /// Where the archive was saved.
    pub archive_path: PathBuf,
    /// Size of the downloaded archive.
    pub bytes_downloaded: u64,
    /// Number of files written into the extraction directory.
    pub files_extracted: usize,
}

/// Client that fetches the GTFS archive and unpacks it locally.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    config: FeedConfig,
}

impl FeedClient {
    /// Create a new feed client.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Download the archive to the configured path.
    ///
    /// Makes a single request; a non-success status is returned as
    /// `FeedError::Api` and nothing is written.
    pub async fn download(&self) -> Result<u64, FeedError> {
        let response = self.http.get(&self.config.feed_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let path = &self.config.download_path;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| FeedError::io(parent, e))?;
        }

        // The archive at `path` is only replaced once the whole body is on disk.
        let partial = partial_path(path);
        let total_bytes = match write_body(response, &partial).await {
            Ok(total) => total,
            Err(e) => {
                if let Err(cleanup) = tokio::fs::remove_file(&partial).await {
                    warn!(path = %partial.display(), error = %cleanup, "Failed to remove partial download");
                }
                return Err(e);
            }
        };
        tokio::fs::rename(&partial, path)
            .await
            .map_err(|e| FeedError::io(path, e))?;

        info!(
            url = %self.config.feed_url,
            path = %path.display(),
            bytes = total_bytes,
            "GTFS data saved"
        );
        Ok(total_bytes)
    }

    /// Download the archive and extract it into the configured directory.
    pub async fn refresh(&self) -> Result<RefreshReport, FeedError> {
        let bytes_downloaded = self.download().await?;
        let files_extracted =
            extract_archive(&self.config.download_path, &self.config.extract_path)?;

        Ok(RefreshReport {
            archive_path: self.config.download_path.clone(),
            bytes_downloaded,
            files_extracted,
        })
    }
}

/// `<path>.part`, where a download is written before it is complete.
fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

async fn write_body(response: reqwest::Response, path: &Path) -> Result<u64, FeedError> {
    let mut file = tokio::fs::File::create(path)
        .await
        .map_err(|e| FeedError::io(path, e))?;
    let mut total_bytes: u64 = 0;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        total_bytes += chunk.len() as u64;
        file.write_all(&chunk)
            .await
            .map_err(|e| FeedError::io(path, e))?;
    }
    file.flush().await.map_err(|e| FeedError::io(path, e))?;

    Ok(total_bytes)
}
