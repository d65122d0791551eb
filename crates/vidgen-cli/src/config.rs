//! Configuration from flags and environment.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use directories::ProjectDirs;

use vidgen_core::{EndpointUrl, HistoryList, HistoryStore};
use vidgen_file::FileStore;

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Generation endpoint URL
    #[arg(long, env = "VIDGEN_ENDPOINT", default_value = EndpointUrl::DEFAULT, global = true)]
    pub endpoint: String,

    /// Directory holding the video history (defaults to the platform data directory)
    #[arg(long, env = "VIDGEN_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

impl ConfigArgs {
    /// The validated generation endpoint.
    pub fn endpoint(&self) -> Result<EndpointUrl> {
        EndpointUrl::new(&self.endpoint).context("Invalid endpoint URL")
    }

    /// The directory holding durable state.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        let dirs =
            ProjectDirs::from("", "", "vidgen").context("Could not determine data directory")?;

        Ok(dirs.data_dir().to_path_buf())
    }

    /// Durable storage for the history slot.
    pub fn file_store(&self) -> Result<FileStore> {
        Ok(FileStore::new(self.data_dir()?))
    }

    /// Load the stored history. Unreadable history loads as empty.
    pub async fn load_history(&self) -> Result<HistoryList> {
        let store = HistoryStore::new(self.file_store()?);
        Ok(store.load().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(endpoint: &str, data_dir: Option<&str>) -> ConfigArgs {
        ConfigArgs {
            endpoint: endpoint.to_string(),
            data_dir: data_dir.map(PathBuf::from),
        }
    }

    #[test]
    fn explicit_data_dir_wins() {
        let config = args(EndpointUrl::DEFAULT, Some("/tmp/vidgen-test"));
        assert_eq!(
            config.data_dir().unwrap(),
            PathBuf::from("/tmp/vidgen-test")
        );
    }

    #[test]
    fn default_endpoint_is_valid() {
        let config = args(EndpointUrl::DEFAULT, None);
        assert_eq!(config.endpoint().unwrap().as_str(), EndpointUrl::DEFAULT);
    }

    #[test]
    fn insecure_remote_endpoint_is_rejected() {
        let config = args("http://videos.example.com/api/generate-video", None);
        assert!(config.endpoint().is_err());
    }
}
