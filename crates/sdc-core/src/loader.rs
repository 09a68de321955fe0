use std::path::Path;

use crate::error::{Result, SaveError};
use crate::probe::read_text;
use crate::saves::SaveDescriptor;
use crate::tree::SaveDocument;

/// Read and parse the save's `SaveGameInfo`. The folder may have vanished since
/// the scan; that is reported as `NotFound`.
pub fn load(save: &SaveDescriptor) -> Result<SaveDocument> {
    if !save.folder.is_dir() {
        return Err(SaveError::NotFound { what: "save directory", path: save.folder.clone() });
    }
    load_info_file(&save.info_file())
}

pub fn load_info_file(path: &Path) -> Result<SaveDocument> {
    if !path.is_file() {
        return Err(SaveError::NotFound { what: "save metadata file", path: path.to_path_buf() });
    }
    let text = read_text(path).map_err(|e| SaveError::io(path, e))?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    SaveDocument::parse(path, &text)
}
