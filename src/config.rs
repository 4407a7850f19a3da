// config.rs
use serde::Deserialize;
use std::io::ErrorKind;
use tokio::io::AsyncReadExt;

use crate::error::Error;

pub const CONFIG_PATH: &str = "config.toml";
pub const TOKEN_VAR: &str = "DISCORD_TOKEN";

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip)]
    pub bot_token: String,
    pub prefix: String,
    pub panel_timeout_secs: u64,
    pub keep_alive_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            prefix: "!".to_string(),
            panel_timeout_secs: 240,
            keep_alive_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

impl Config {
    /// Reads `config.toml` if present, then takes the token from the environment.
    pub async fn load() -> Result<Self, Error> {
        let mut config = match tokio::fs::File::open(CONFIG_PATH).await {
            Ok(mut file) => {
                let mut contents = String::new();
                AsyncReadExt::read_to_string(&mut file, &mut contents).await?;
                Self::from_toml(&contents)?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(e.into()),
        };

        config.bot_token = token_from(std::env::var(TOKEN_VAR).ok())?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, Error> {
        toml::from_str(contents).map_err(Into::into)
    }
}

fn token_from(value: Option<String>) -> Result<String, Error> {
    value
        .filter(|token| !token.trim().is_empty())
        .ok_or(Error::MissingToken(TOKEN_VAR))
}
