//! User preferences.

#![allow(missing_docs)] // too many things to document

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use eyre::Context;
use serde::{Deserialize, Serialize};

mod animations;
mod keybinds;
pub mod paths;

pub use animations::*;
pub use keybinds::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub keybinds: Vec<Keybind>,
}
impl Preferences {
    /// Loads preferences from `user_file`, or from [`paths::prefs_file()`] if
    /// `user_file` is `None`, layered over the default preferences.
    ///
    /// An explicitly given file must exist; the default file is optional. If
    /// loading fails, the default preferences are returned.
    pub fn load(user_file: Option<&Path>) -> Self {
        lazy_static::initialize(&DEFAULT_PREFS);

        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        match user_file {
            Some(path) => {
                config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
            }
            None => match paths::prefs_file() {
                Ok(path) => {
                    config = config.add_source(
                        config::File::from(path)
                            .format(PREFS_FILE_FORMAT)
                            .required(false),
                    );
                }
                Err(e) => log::warn!("Error locating user preferences: {e}"),
            },
        }

        let result = config
            .build()
            .and_then(|c| c.try_deserialize::<Preferences>())
            .map_err(eyre::Report::from)
            .and_then(|prefs| prefs.validated());
        result.unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e}");
            DEFAULT_PREFS.clone()
        })
    }

    /// Parses preferences from a YAML string layered over the default
    /// preferences.
    pub fn from_yaml_str(s: &str) -> eyre::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT))
            .add_source(config::File::from_str(s, PREFS_FILE_FORMAT))
            .build()?
            .try_deserialize::<Preferences>()?
            .validated()
    }

    /// Writes the preferences to a YAML file, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> eyre::Result<()> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        let file = std::fs::File::create(path)
            .wrap_err_with(|| format!("error creating {}", path.display()))?;
        serde_norway::to_writer(file, self)?;
        log::info!("Saved preferences to {}", path.display());
        Ok(())
    }

    /// Serializes the preferences to YAML.
    pub fn to_yaml_string(&self) -> eyre::Result<String> {
        Ok(serde_norway::to_string(self)?)
    }

    /// Returns the command bound to `key`.
    pub fn command_for_key(&self, key: char) -> Option<Command> {
        keybinds::command_for_key(&self.keybinds, key)
    }

    fn validated(self) -> eyre::Result<Self> {
        self.animation
            .validate()
            .wrap_err("invalid animation preferences")?;
        Ok(self)
    }
}
