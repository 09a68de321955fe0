use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SaveError>;

#[derive(Error, Debug)]
pub enum SaveError {
    /// Save root, save folder or metadata file is gone.
    #[error("{what} not found: {}", path.display())]
    NotFound { what: &'static str, path: PathBuf },

    /// Folder name has no `_<seed>` suffix.
    #[error("malformed save name '{0}': expected <name>_<seed>")]
    MalformedSaveName(String),

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid XML in {}: {source}", path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    /// Dotted path of the node that was expected, e.g. `Farmer.Position.X`.
    #[error("missing field: {0}")]
    MissingField(String),

    #[error("field {field} is not a valid number: '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("season index {0} is outside 0-3")]
    SeasonOutOfRange(i64),

    /// Selection was asked for with an empty save list.
    #[error("no saves to choose from")]
    NoSaves,

    /// A document-level failure tagged with the file it came from.
    #[error("{}: {source}", path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: Box<SaveError>,
    },

    /// stdin hit EOF while a prompt was waiting for an answer.
    #[error("input closed")]
    InputClosed,
}

impl SaveError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SaveError::Io { path: path.into(), source }
    }

    pub fn in_document(self, path: impl Into<PathBuf>) -> Self {
        if matches!(self, SaveError::Document { .. }) {
            return self;
        }
        SaveError::Document { path: path.into(), source: Box::new(self) }
    }

    /// The error underneath any `Document` wrapping.
    pub fn root_cause(&self) -> &SaveError {
        match self {
            SaveError::Document { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// True for errors caused by the document contents rather than the filesystem.
    pub fn is_malformed_document(&self) -> bool {
        matches!(
            self.root_cause(),
            SaveError::Xml { .. }
                | SaveError::MissingField(_)
                | SaveError::InvalidNumber { .. }
                | SaveError::SeasonOutOfRange(_)
        )
    }
}
