use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub imap_server: Option<String>,
    pub mailbox: Option<String>,
    pub max_emails: Option<usize>,
    pub output_folder: Option<String>,
}

/// Account credentials, read from the environment (or a .env file) so they
/// never end up in the config file.
pub struct Secrets {
    pub account: String,
    pub password: String,
}

fn config_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("no config dir available"))?
        .join("mail-digest"))
}

pub fn config_path() -> Result<PathBuf> {
    let mut p = config_dir()?;
    fs::create_dir_all(&p)?;
    p.push("config.toml");
    Ok(p)
}

pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        // create a template config for users to edit; every field has a
        // default, so the first run can proceed with it as-is
        let sample = Config {
            imap_server: Some("imap.gmail.com".to_string()),
            mailbox: Some("INBOX".to_string()),
            max_emails: Some(20),
            output_folder: Some("emails".to_string()),
        };
        let tom = toml::to_string_pretty(&sample)?;
        fs::write(&path, tom)?;
        println!("Created template config at {}", path.display());
        return Ok(sample);
    }
    let s = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&s)?;
    Ok(cfg)
}

fn env_secret(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| anyhow::anyhow!("{} not set — export it or put it in a .env file", key))
}

pub fn load_secrets() -> Result<Secrets> {
    Ok(Secrets {
        account: env_secret("EMAIL_ACCOUNT")?,
        password: env_secret("EMAIL_PASSWORD")?,
    })
}
