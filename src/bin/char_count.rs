use anyhow::{Context, Result};
use log::debug;
use std::io::{BufWriter, Write};

use ledger_basics::{config, init_logging, TextStats};

fn main() -> Result<()> {
    // Initialize logging.
    init_logging();

    let stats = TextStats::of(config::SAMPLE_TEXT);
    debug!("Stats: {}", serde_json::to_string(&stats)?);

    let mut writer = BufWriter::new(std::io::stdout().lock());
    writeln!(writer, "code points: {}", stats.code_points)
        .context("Failed to write code point count")?;
    writeln!(writer, "bytes: {}", stats.bytes).context("Failed to write byte count")?;
    writer.flush().context("Failed to flush stdout")?;

    Ok(())
}
