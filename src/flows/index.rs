//! Index flow - tokenize a document and print its index as JSON

use anyhow::{Context, Result};
use std::io::Write;
use tracing::debug;

use crate::core::error::YogaError;
use crate::core::input::{InputSource, PipelineInput};
use crate::core::render::{render_index, Emission, LineSink, RenderConfig};

/// Run the `index` command against stdout
pub fn run_index(source: &InputSource, config: RenderConfig) -> Result<()> {
    let stdout = std::io::stdout();
    write_index(source, config, stdout.lock())?;
    Ok(())
}

/// Index `source` and write the JSON object, followed by a newline, to `writer`
pub fn write_index<W: Write>(
    source: &InputSource,
    config: RenderConfig,
    writer: W,
) -> Result<Emission> {
    let index = PipelineInput::load(source, false)?.into_index();
    let json = render_index(&index, config).context("failed to encode index")?;

    let mut sink = LineSink::new(writer);
    sink.write_line(&json).map_err(YogaError::Output)?;
    sink.flush().map_err(YogaError::Output)?;

    if sink.is_closed() {
        debug!("index output truncated by consumer");
        return Ok(Emission::ConsumerClosed);
    }
    Ok(Emission::Completed)
}
