use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{OptionExt, Result};

const PREFS_FILE_NAME: &str = "rubik3-prefs";
const PREFS_FILE_EXTENSION: &str = "yaml";

lazy_static! {
    static ref PREFS_FILE: Option<PathBuf> = prefs_file_path();
}

/// Returns the default location of the user preferences file.
pub fn prefs_file() -> Result<&'static Path> {
    PREFS_FILE.as_deref().ok_or_eyre("no config directory")
}

fn prefs_file_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "rubik3")?;
    Some(
        dirs.config_dir()
            .join(format!("{PREFS_FILE_NAME}.{PREFS_FILE_EXTENSION}")),
    )
}
