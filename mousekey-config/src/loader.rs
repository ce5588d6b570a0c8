// Layered loading of the mouse key table

use std::path::Path;

use config::{Config, File, FileFormat};
use mousekey::config::MouseKeyConfig;

use crate::error::{ConfigError, ConfigResult};
use crate::{KeyboardToml, MouseKeyTomlConfig};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the `[mouse_key]` table of a `keyboard.toml`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mousekey_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::load("keyboard.toml").unwrap();
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<MouseKeyTomlConfig> {
        Self::load_with_profile("", path)
    }

    /// Load the user file on top of a profile, e.g. the defaults shipped with a board.
    ///
    /// Tables are merged key by key, values of the user file win.
    pub fn load_with_profile<P: AsRef<Path>>(profile: &str, path: P) -> ConfigResult<MouseKeyTomlConfig> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let merged: KeyboardToml = Config::builder()
            .add_source(File::from_str(profile, FileFormat::Toml))
            .add_source(File::from_str(&content, FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| ConfigError::TomlParse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Ok(merged.mouse_key)
    }

    /// Parse the `[mouse_key]` table from a TOML string
    pub fn from_toml_str(content: &str) -> ConfigResult<MouseKeyTomlConfig> {
        toml::from_str::<KeyboardToml>(content)
            .map(|file| file.mouse_key)
            .map_err(|e| ConfigError::TomlParse {
                path: "<string>".to_string(),
                message: e.message().to_string(),
            })
    }

    /// Load and validate in one go
    pub fn load_config<P: AsRef<Path>>(path: P) -> ConfigResult<MouseKeyConfig> {
        Self::load(path)?.to_config()
    }
}
