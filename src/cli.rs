//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::frequency::CountFilter;
use crate::core::input::InputSource;
use crate::core::render::RenderConfig;
use crate::flows::count::CountOptions;

/// yoga - index the words of a document and report their frequencies.
#[derive(Parser, Debug)]
#[command(name = "yoga")]
#[command(
    author,
    version,
    about,
    long_about = r#"yoga builds an index of the whitespace-delimited words in a document.

Words are lowercased; each word maps to the zero-based positions at which it
occurs in the document's token sequence.

Examples:
    yoga index notes.txt
    cat notes.txt | yoga count --sort --gt 1
    yoga index notes.txt > notes.json && yoga count --index notes.json -s
"#
)]
pub struct Cli {
    /// Pretty-print JSON output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print the JSON index with indentation for human readability.\n\n\
Has no effect on count lines."
    )]
    pub pretty: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        long_help = "Only report errors on stderr. Results are still printed to stdout."
    )]
    pub quiet: bool,

    /// Verbose mode (pipeline diagnostics on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Log pipeline diagnostics (token and word counts, filter results) to stderr.\n\n\
--log, when given, takes precedence."
    )]
    pub verbose: bool,

    /// Log filter directive (overrides -q/-v).
    #[arg(
        long,
        global = true,
        env = "YOGA_LOG",
        value_name = "FILTER",
        long_help = "Log filter directive for stderr diagnostics, e.g. debug or yoga=trace.\n\n\
Overrides -q/--quiet and -v/--verbose. Can also be set through YOGA_LOG."
    )]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Index a document and print the index as JSON.
    #[command(
        long_about = "Split the document on whitespace, lowercase every token and print one JSON\n\
object mapping each word to the ordered array of positions where it occurs.\n\n\
Words appear in the order of their first occurrence.\n\n\
Examples:\n\
  yoga index notes.txt\n\
  echo 'Cat cat CAT' | yoga index\n"
    )]
    Index {
        /// Input file (default: stdin).
        #[arg(value_name = "INPUT", long_help = "Input file. Omit it or pass - to read stdin.")]
        input: Option<PathBuf>,
    },

    /// Print word counts, one "<word> <count>" line per word.
    #[command(
        long_about = r#"Derive word counts from a document (or from a precomputed index with
--index) and print one "<word> <count>" line per word.

Without --sort, words appear in the order of their first occurrence. With
--sort, words are ordered by descending count; equal counts keep that order.

Examples:
    yoga count notes.txt --gt 1
    yoga count notes.txt --sort --gt 2 --lt 10
    yoga count --index notes.json -s
"#
    )]
    Count {
        /// Input file (default: stdin).
        #[arg(value_name = "INPUT", long_help = "Input file. Omit it or pass - to read stdin.")]
        input: Option<PathBuf>,

        /// Treat the input as a JSON index produced by `yoga index`.
        #[arg(
            long = "index",
            long_help = "Parse the input as a JSON index (the output of `yoga index`) instead of\n\
tokenizing it. Input that is not an object of word -> position arrays is rejected."
        )]
        precomputed: bool,

        /// Sort by descending count.
        #[arg(short, long)]
        sort: bool,

        /// Only keep words occurring more than N times.
        #[arg(long, value_name = "N", allow_negative_numbers = true)]
        gt: Option<i64>,

        /// Only keep words occurring fewer than N times.
        #[arg(long, value_name = "N", allow_negative_numbers = true)]
        lt: Option<i64>,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let render_config = RenderConfig::with_pretty(cli.pretty);

    match cli.command {
        Commands::Index { input } => {
            let source = InputSource::from_arg(input.as_deref());
            crate::flows::index::run_index(&source, render_config)
        }

        Commands::Count {
            input,
            precomputed,
            sort,
            gt,
            lt,
        } => {
            let source = InputSource::from_arg(input.as_deref());
            let options = CountOptions {
                precomputed,
                sort,
                filter: CountFilter::new(gt, lt),
            };
            crate::flows::count::run_count(&source, &options)
        }
    }
}
