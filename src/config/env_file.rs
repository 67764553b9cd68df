use crate::domain::model::Credentials;
use crate::utils::error::{LoginError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Location of the credentials file relative to the home directory.
pub const ENV_FILE_SUBPATH: &str = ".config/.sso_unila.env";
pub const USERNAME_KEY: &str = "SSO_USERNAME";
pub const PASSWORD_KEY: &str = "SSO_PASSWORD";

pub fn default_env_path() -> Result<PathBuf> {
    env_path_in(dirs::home_dir())
}

fn env_path_in(home: Option<PathBuf>) -> Result<PathBuf> {
    home.map(|home| home.join(ENV_FILE_SUBPATH))
        .ok_or(LoginError::HomeDirNotFound)
}

impl Credentials {
    /// Parses a dotenv file into credentials. The process environment is
    /// not modified.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let to_err = |source: dotenvy::Error| LoginError::EnvFileError {
            path: path.to_path_buf(),
            source,
        };

        let pairs = dotenvy::from_path_iter(path)
            .map_err(to_err)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(to_err)?;

        tracing::debug!("Read {} entries from {}", pairs.len(), path.display());
        Self::from_pairs(pairs)
    }

    /// Picks `SSO_USERNAME` and `SSO_PASSWORD` out of key/value pairs. Later
    /// entries override earlier ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut values: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let mut take = |key: &str| values.remove(key).filter(|v| !v.is_empty());
        let username = take(USERNAME_KEY);
        let password = take(PASSWORD_KEY);

        match (username, password) {
            (Some(username), Some(password)) => Ok(Credentials::new(username, password)),
            (username, password) => {
                let mut keys = Vec::new();
                if username.is_none() {
                    keys.push(USERNAME_KEY.to_string());
                }
                if password.is_none() {
                    keys.push(PASSWORD_KEY.to_string());
                }
                Err(LoginError::MissingCredentials { keys })
            }
        }
    }
}
