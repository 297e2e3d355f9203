use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use cidstamp_intake::IntakeOptions;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub temp_root:          PathBuf,
    pub archive_extensions: Vec<String>,
    pub log_level:          String,
}

impl Default for Config {
    fn default() -> Self {
        let options = IntakeOptions::default();
        Self {
            temp_root:          options.temp_root,
            archive_extensions: options.archive_extensions,
            log_level:          "info".to_string(),
        }
    }
}

impl Config {
    const APP_DIR: &str = "cidstamp";
    const FILE_NAME: &str = "config.toml";
    const ENV_PREFIX: &str = "CIDSTAMP_";

    /// `$XDG_CONFIG_HOME/cidstamp/config.toml`, falling back to `~/.config`.
    pub fn default_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(|| home::home_dir().map(|home| home.join(".config")))?;
        Some(base.join(Self::APP_DIR).join(Self::FILE_NAME))
    }

    /// Defaults, then the TOML file (explicit or default location), then
    /// `CIDSTAMP_*` environment variables.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(file) = path.map(Path::to_path_buf).or_else(Self::default_path) {
            figment = figment.merge(Toml::file(file));
        }
        figment.merge(Env::prefixed(Self::ENV_PREFIX))
    }

    /// An explicitly named file must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path
            && !path.is_file()
        {
            bail!("config file '{}' does not exist", path.display());
        }
        Self::figment(path).extract().context("invalid configuration")
    }

    pub fn intake_options(&self) -> IntakeOptions {
        IntakeOptions::new()
            .temp_root(&self.temp_root)
            .archive_extensions(self.archive_extensions.iter().cloned())
    }
}
