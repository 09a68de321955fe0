//! sdc-core: save detection, XML document tree, and completion analysis
//!
//! The pipeline is strictly linear:
//! - `resolver` finds the save root (default location or user-supplied path)
//! - `saves` scans the root and validates each candidate folder
//! - `loader` reads `SaveGameInfo` into a generic ordered tree (`tree`)
//! - `analyzer` derives the overview/skills report and runs completion rules
//!
pub mod analyzer;
pub mod config;
pub mod console;
pub mod error;
pub mod loader;
pub mod model;
pub mod probe;
pub mod resolver;
pub mod saves;
pub mod session;
pub mod tree;

pub use analyzer::{CategoryProgress, CompletionAnalyzer, CompletionRule, SkillMasteryRule};
pub use console::Console;
pub use error::{Result, SaveError};
pub use loader::load;
pub use model::{CategoryResult, CompletionReport, SaveOverview, Season, Skill, SkillProgress};
pub use probe::is_xml;
pub use resolver::PathResolver;
pub use saves::{SaveDescriptor, SaveScan, SkippedEntry, list_saves, present_saves, scan_saves, select_save};
pub use tree::{SaveDocument, Value};
