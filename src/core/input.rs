//! Input sources and the tagged pipeline input
//!
//! The whole input is read into memory before anything else happens; the
//! pipeline never sees a partial document.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::error::{Result, YogaError};
use crate::core::indexer::index_document;
use crate::core::model::Index;

/// Where the input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Map a CLI argument to a source; absent or `-` means stdin
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            None => InputSource::Stdin,
            Some(path) if path.as_os_str() == "-" => InputSource::Stdin,
            Some(path) => InputSource::File(path.to_path_buf()),
        }
    }

    /// Human-readable name used in diagnostics
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Read the complete input as UTF-8 text
    pub fn read_to_string(&self) -> Result<String> {
        let read = match self {
            InputSource::Stdin => {
                let mut buffer = String::new();
                std::io::stdin()
                    .lock()
                    .read_to_string(&mut buffer)
                    .map(|_| buffer)
            }
            InputSource::File(path) => fs::read_to_string(path),
        };

        let text = read.map_err(|error| YogaError::Input {
            source_name: self.name(),
            error,
        })?;
        debug!(source = %self.name(), bytes = text.len(), "read input");
        Ok(text)
    }
}

/// Pipeline input, resolved once at the entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineInput {
    /// Text still to be tokenized
    RawDocument(String),
    /// An index produced earlier by the `index` command
    PrecomputedIndex(Index),
}

impl PipelineInput {
    /// Read `source` and interpret it as a document, or as a JSON index
    /// when `precomputed` is set
    pub fn load(source: &InputSource, precomputed: bool) -> Result<Self> {
        let text = source.read_to_string()?;
        if precomputed {
            Self::parse_index(&text, &source.name())
        } else {
            Ok(PipelineInput::RawDocument(text))
        }
    }

    fn parse_index(text: &str, source_name: &str) -> Result<Self> {
        let index: Index =
            serde_json::from_str(text).map_err(|error| YogaError::MalformedIndex {
                source_name: source_name.to_string(),
                error,
            })?;
        debug!(words = index.len(), "loaded precomputed index");
        Ok(PipelineInput::PrecomputedIndex(index))
    }

    /// Produce the index, tokenizing raw documents
    pub fn into_index(self) -> Index {
        match self {
            PipelineInput::RawDocument(document) => {
                let index = index_document(&document);
                debug!(
                    tokens = index.token_count(),
                    words = index.len(),
                    "indexed document"
                );
                index
            }
            PipelineInput::PrecomputedIndex(index) => index,
        }
    }
}
