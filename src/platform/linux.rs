// PlantLens platform paths for Linux
// Data: ~/.local/share/plantlens

use std::env;
use std::path::PathBuf;

/// Returns the data directory for PlantLens on Linux.
/// Uses `$XDG_DATA_HOME/plantlens` if set, otherwise `~/.local/share/plantlens`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("plantlens")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("plantlens")
    }
}
