use super::Theme;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

const PREFERENCE_VERSION: u32 = 1;

/// On-disk form of the theme preference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePreference {
    pub version: u32,
    pub theme: Theme,
}

impl ThemePreference {
    pub fn new(theme: Theme) -> Self {
        Self {
            version: PREFERENCE_VERSION,
            theme,
        }
    }
}

/// Get the default theme preference path (~/.config/anna-cgpa/theme.json)
pub fn get_theme_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("theme.json"))
}

/// Load the saved theme
///
/// If the file doesn't exist, returns the light theme.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_theme(path: &Path) -> Result<Theme> {
    if !path.exists() {
        return Ok(Theme::default());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open theme preference at {}", path.display()))?;

    let preference: ThemePreference =
        serde_json::from_reader(file).context("Failed to load theme preference")?;

    if preference.version != PREFERENCE_VERSION {
        anyhow::bail!("Unsupported theme preference version: {}", preference.version);
    }

    Ok(preference.theme)
}

/// Save the theme atomically, creating the parent directory if needed
pub fn save_theme(path: &Path, theme: Theme) -> Result<()> {
    crate::config::ensure_parent_dir(path)?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, &ThemePreference::new(theme))
        .context("Failed to serialize theme preference")?;

    file.commit().context("Failed to save theme preference")?;

    tracing::debug!(path = %path.display(), %theme, "saved theme preference");
    Ok(())
}
