use std::io::{BufRead, Write};

use crate::analyzer::CompletionAnalyzer;
use crate::console::Console;
use crate::error::Result;
use crate::loader::load;
use crate::model::CompletionReport;
use crate::resolver::PathResolver;
use crate::saves::{present_saves, scan_saves, select_save};

/// Resolve -> detect -> select -> load -> analyze.
/// `Ok(None)` means no saves were found; the message has already been shown.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    resolver: &PathResolver,
    analyzer: &CompletionAnalyzer,
) -> Result<Option<CompletionReport>> {
    let root = resolver.resolve(console)?;
    let scan = scan_saves(&root)?;
    present_saves(console, &scan);
    if scan.saves.is_empty() {
        return Ok(None);
    }
    let save = select_save(console, &scan.saves)?;
    let doc = load(save)?;
    let report = analyzer.analyze(&doc)?;
    Ok(Some(report))
}
