use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use crate::config::XML_PROLOGUE;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// True iff `path` is a file whose content (minus a leading UTF-8 BOM) starts
/// with the exact XML prologue. Missing or unreadable files are simply `false`.
pub fn is_xml(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    match read_prefix(path, UTF8_BOM.len() + XML_PROLOGUE.len()) {
        Ok(head) => strip_bom_bytes(&head).starts_with(XML_PROLOGUE.as_bytes()),
        Err(e) => {
            log::debug!("xml probe could not read {}: {}", path.display(), e);
            false
        }
    }
}

/// Read a whole file as UTF-8 text with any leading BOM removed.
pub fn read_text(path: &Path) -> io::Result<String> {
    let text = fs::read_to_string(path)?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

// Handle is dropped on return, including the early error paths.
fn read_prefix(path: &Path, len: usize) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut head = Vec::with_capacity(len);
    file.take(len as u64).read_to_end(&mut head)?;
    Ok(head)
}

fn strip_bom_bytes(data: &[u8]) -> &[u8] {
    data.strip_prefix(UTF8_BOM).unwrap_or(data)
}
