//! Application context built once at startup.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use tracing::debug;

use lumina::{ApiClient, ApiUrl, FileTokenStore, Session};

use crate::cli::GlobalArgs;

/// Everything a command needs: the session and, through it, the client.
#[derive(Debug)]
pub struct AppContext {
    session: Session,
}

impl AppContext {
    /// Resolve configuration, open the token store and restore the session.
    pub fn init(args: &GlobalArgs) -> Result<Self> {
        let api_url = ApiUrl::from_setting(Some(&args.api_url)).context("Invalid API URL")?;

        let store = match &args.token_file {
            Some(path) => FileTokenStore::new(path),
            None => FileTokenStore::in_dir(data_dir()?),
        };
        debug!(api = %api_url, token_file = %store.path().display(), "Initializing");

        let client =
            ApiClient::new(api_url, Arc::new(store)).context("Failed to build HTTP client")?;

        Ok(Self {
            session: Session::restore(client),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn client(&self) -> &ApiClient {
        self.session.client()
    }

    /// Fail unless a token is held.
    pub fn require_login(&self) -> Result<()> {
        self.session
            .require_token()
            .map(|_| ())
            .map_err(|_| anyhow!("Please log in first. Run 'lumina login'."))
    }
}

/// Platform data directory for lumina.
fn data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "lumina").context("Could not determine data directory")?;
    Ok(dirs.data_dir().to_path_buf())
}
