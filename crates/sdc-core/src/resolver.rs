use std::path::{Path, PathBuf};

use crate::config::DEFAULT_SAVE_ROOT;
use crate::console::Console;
use crate::error::Result;
use std::io::{BufRead, Write};

/// Finds the save root: offers the platform default first, then falls back to
/// asking for a path until one exists.
#[derive(Debug, Clone)]
pub struct PathResolver {
    default_root: Option<PathBuf>,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self { default_root: DEFAULT_SAVE_ROOT.clone() }
    }
}

impl PathResolver {
    pub fn with_default(default_root: Option<PathBuf>) -> Self {
        Self { default_root }
    }

    /// The default root, only if it currently exists on disk.
    pub fn existing_default(&self) -> Option<&Path> {
        self.default_root.as_deref().filter(|p| p.exists())
    }

    pub fn resolve<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<PathBuf> {
        if let Some(default) = self.existing_default() {
            console.say(format!("Default Save Location Detected:\n{}\n", default.display()));
            let answer = console.ask("Is this the correct path to the saves directory? (Y/N): ")?;
            if answer.eq_ignore_ascii_case("y") {
                log::info!("using default save root {}", default.display());
                return Ok(default.to_path_buf());
            }
            console.say("Please enter the correct path to the saves directory.");
        } else {
            console.say("No Default Save Location Detected.");
            console.say("If they're saved elsewhere, please enter path to the saves directory.\n");
        }

        // Unbounded on purpose: the user can always try again.
        loop {
            let entered = console.ask("> ")?;
            let candidate = PathBuf::from(&entered);
            if !entered.is_empty() && candidate.exists() {
                log::info!("using save root {}", candidate.display());
                return Ok(candidate);
            }
            log::debug!("path does not exist: '{}'", entered);
        }
    }
}
