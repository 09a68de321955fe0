use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::SAVE_INFO_FILE;
use crate::console::Console;
use crate::error::{Result, SaveError};
use crate::probe::is_xml;

/// A folder under the save root that passed structural and content checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveDescriptor {
    pub folder: PathBuf,
    pub folder_name: String,
    /// Farmer or farm name, depending on the game version that wrote the save.
    pub display_name: String,
    pub seed: String,
}

impl SaveDescriptor {
    /// Split `<name>_<seed>` into display name and seed. Either token may be
    /// empty; only a name with no `_` at all is rejected.
    pub fn from_folder(folder: PathBuf, folder_name: &str) -> Result<Self> {
        let mut parts = folder_name.split('_');
        let display_name = parts.next().unwrap_or_default();
        match parts.next() {
            Some(seed) => Ok(Self {
                folder,
                folder_name: folder_name.to_string(),
                display_name: display_name.to_string(),
                seed: seed.to_string(),
            }),
            None => Err(SaveError::MalformedSaveName(folder_name.to_string())),
        }
    }

    /// Main save file, named after its folder.
    pub fn save_file(&self) -> PathBuf {
        self.folder.join(&self.folder_name)
    }

    pub fn info_file(&self) -> PathBuf {
        self.folder.join(SAVE_INFO_FILE)
    }
}

#[derive(Debug)]
pub struct SkippedEntry {
    pub folder: PathBuf,
    pub error: SaveError,
}

#[derive(Debug, Default)]
pub struct SaveScan {
    pub saves: Vec<SaveDescriptor>,
    pub skipped: Vec<SkippedEntry>,
}

/// Both files present and both carry the XML prologue.
pub fn is_save_folder(folder: &Path, name: &str) -> bool {
    let save_file = folder.join(name);
    let info_file = folder.join(SAVE_INFO_FILE);
    save_file.exists() && info_file.exists() && is_xml(&save_file) && is_xml(&info_file)
}

/// Classify the immediate children of `root`, keeping directory-listing order.
pub fn scan_saves(root: &Path) -> Result<SaveScan> {
    if !root.is_dir() {
        return Err(SaveError::NotFound { what: "save root", path: root.to_path_buf() });
    }
    let mut scan = SaveScan::default();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("skipping unreadable entry in {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        let folder = entry.path().to_path_buf();
        let Some(name) = entry.file_name().to_str() else {
            log::warn!("skipping non UTF-8 folder name: {}", folder.display());
            continue;
        };
        let qualifies = is_save_folder(&folder, name);
        log::debug!("candidate {} qualifies={}", folder.display(), qualifies);
        if !qualifies {
            continue;
        }
        match SaveDescriptor::from_folder(folder.clone(), name) {
            Ok(save) => scan.saves.push(save),
            Err(error) => {
                log::warn!("{}", error);
                scan.skipped.push(SkippedEntry { folder, error });
            }
        }
    }
    log::info!("found {} save(s) in {}", scan.saves.len(), root.display());
    Ok(scan)
}

pub fn list_saves(root: &Path) -> Result<Vec<SaveDescriptor>> {
    scan_saves(root).map(|scan| scan.saves)
}

/// Print the numbered save list (numbering starts at 1) plus any skip warnings.
pub fn present_saves<R: BufRead, W: Write>(console: &mut Console<R, W>, scan: &SaveScan) {
    console.say("\nSave file names may either start with the farmer name or farm name depending on the game version.");
    console.say("Found Saves:");
    for (i, save) in scan.saves.iter().enumerate() {
        console.say(format!("{}. {} (Seed: {})", i + 1, save.display_name, save.seed));
    }
    for skipped in &scan.skipped {
        console.say(format!("Warning: skipping {}: {}", skipped.folder.display(), skipped.error));
    }
    if scan.saves.is_empty() {
        console.say("No saves found.");
    }
}

/// Ask for a number in `1..=saves.len()` until one is given.
pub fn select_save<'s, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    saves: &'s [SaveDescriptor],
) -> Result<&'s SaveDescriptor> {
    let count = saves.len();
    if count == 0 {
        return Err(SaveError::NoSaves);
    }
    let prompt = format!("Which save would you like to select? (1-{})> ", count);
    let save = loop {
        let answer = console.ask(&prompt)?;
        match answer.parse::<i64>() {
            Ok(n) if n >= 1 && n as usize <= count => break &saves[n as usize - 1],
            Ok(_) => console.say(format!("Please enter a number between 1 and {}.", count)),
            Err(_) => console.say(format!("Please enter a valid number (1-{}).", count)),
        }
    };
    console.say(format!("Selected save: {}", save.folder.display()));
    Ok(save)
}
