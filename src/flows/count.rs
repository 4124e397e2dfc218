//! Count flow - word frequencies, filtered and optionally sorted

use anyhow::Result;
use std::io::{BufWriter, Write};
use tracing::debug;

use crate::core::error::YogaError;
use crate::core::frequency::{derive_counts, sort_by_frequency, CountFilter};
use crate::core::input::{InputSource, PipelineInput};
use crate::core::render::{emit_counts, Emission, LineSink};

/// Options for the `count` command
#[derive(Debug, Clone, Copy, Default)]
pub struct CountOptions {
    /// Input is a JSON index rather than a document
    pub precomputed: bool,
    /// Sort by descending count
    pub sort: bool,
    pub filter: CountFilter,
}

/// Run the `count` command against stdout
pub fn run_count(source: &InputSource, options: &CountOptions) -> Result<()> {
    let stdout = std::io::stdout();
    write_counts(source, options, BufWriter::new(stdout.lock()))?;
    Ok(())
}

/// Derive, filter and sort counts for `source`, writing one line per pair
pub fn write_counts<W: Write>(
    source: &InputSource,
    options: &CountOptions,
    writer: W,
) -> Result<Emission> {
    let index = PipelineInput::load(source, options.precomputed)?.into_index();

    let pairs = derive_counts(&index).into_pairs();
    let total = pairs.len();
    let pairs = options.filter.apply(pairs);
    debug!(
        words = total,
        kept = pairs.len(),
        gt = ?options.filter.gt,
        lt = ?options.filter.lt,
        "filtered counts"
    );
    let pairs = sort_by_frequency(pairs, options.sort);

    let mut sink = LineSink::new(writer);
    let emission = emit_counts(&mut sink, &pairs).map_err(YogaError::Output)?;
    if emission == Emission::ConsumerClosed {
        debug!("count output truncated by consumer");
    }
    Ok(emission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const FOX: &str = "the quick brown fox the lazy dog the";

    fn write_file(dir: &Path, name: &str, content: &str) -> InputSource {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        InputSource::File(path)
    }

    fn counts(source: &InputSource, options: CountOptions) -> String {
        let mut out = Vec::new();
        write_counts(source, &options, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_count_all_in_first_occurrence_order() {
        let temp = tempdir().unwrap();
        let source = write_file(temp.path(), "doc.txt", FOX);

        assert_eq!(
            counts(&source, CountOptions::default()),
            "the 3\nquick 1\nbrown 1\nfox 1\nlazy 1\ndog 1\n"
        );
    }

    #[test]
    fn test_count_greater_than_one() {
        let temp = tempdir().unwrap();
        let source = write_file(temp.path(), "doc.txt", FOX);
        let options = CountOptions {
            filter: CountFilter::new(Some(1), None),
            ..Default::default()
        };

        assert_eq!(counts(&source, options), "the 3\n");
    }

    #[test]
    fn test_count_sorted_with_bounds() {
        let temp = tempdir().unwrap();
        let source = write_file(temp.path(), "doc.txt", "a b b c c c d d d d e e e e e");
        let options = CountOptions {
            sort: true,
            filter: CountFilter::new(Some(1), Some(5)),
            ..Default::default()
        };

        assert_eq!(counts(&source, options), "d 4\nc 3\nb 2\n");
    }

    #[test]
    fn test_count_precomputed_index() {
        let temp = tempdir().unwrap();
        let source = write_file(
            temp.path(),
            "index.json",
            r#"{"x":[0],"y":[1,2],"z":[3],"w":[4,5]}"#,
        );
        let options = CountOptions {
            precomputed: true,
            sort: true,
            ..Default::default()
        };

        assert_eq!(counts(&source, options), "y 2\nw 2\nx 1\nz 1\n");
    }

    #[test]
    fn test_count_malformed_precomputed_index() {
        let temp = tempdir().unwrap();
        let source = write_file(temp.path(), "doc.txt", FOX);
        let options = CountOptions {
            precomputed: true,
            sort: true,
            filter: CountFilter::new(Some(1), None),
        };

        let err = write_counts(&source, &options, Vec::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<YogaError>(),
            Some(YogaError::MalformedIndex { .. })
        ));
    }

    #[test]
    fn test_count_precomputed_word_without_positions() {
        let temp = tempdir().unwrap();
        let source = write_file(temp.path(), "index.json", r#"{"a":[],"b":[0]}"#);
        let options = CountOptions {
            precomputed: true,
            ..Default::default()
        };

        let mut out = Vec::new();
        let err = write_counts(&source, &options, &mut out).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<YogaError>(),
            Some(YogaError::MalformedIndex { .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_count_empty_document() {
        let temp = tempdir().unwrap();
        let source = write_file(temp.path(), "empty.txt", " \n\t ");

        assert_eq!(counts(&source, CountOptions::default()), "");
    }
}
