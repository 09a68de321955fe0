// Process-wide read-only settings. Nothing here is mutated after startup.
use once_cell::sync::Lazy;
use std::path::PathBuf;

/// Leading declaration every save and metadata file must start with (after BOM removal).
pub const XML_PROLOGUE: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Metadata file that sits next to the main save file in each save folder.
pub const SAVE_INFO_FILE: &str = "SaveGameInfo";

pub const SKILL_LEVEL_CAP: u32 = 15;
pub const BACKPACK_SLOTS_PER_LEVEL: u32 = 12;

const VENDOR_DIR: &str = "StardewValley";
const SAVES_DIR: &str = "Saves";

/// Platform default save root: `%APPDATA%` on Windows, `~/.config` elsewhere.
/// `None` when the platform exposes no such directory.
pub static DEFAULT_SAVE_ROOT: Lazy<Option<PathBuf>> =
    Lazy::new(|| dirs::config_dir().map(|d| d.join(VENDOR_DIR).join(SAVES_DIR)));
