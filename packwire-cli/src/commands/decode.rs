use anyhow::{Context, Result};
use packwire_core::{marshal, ByteOrder};
use std::fs;
use tracing::{debug, info};

use super::{load_descriptor, record_to_json};

pub fn execute(
    descriptor_path: &str,
    input: &str,
    output: Option<&str>,
    offset: usize,
    order: ByteOrder,
) -> Result<()> {
    info!("Decoding {} at offset {} ({})", input, offset, order);

    let descriptor = load_descriptor(descriptor_path)?;

    let data = fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;
    debug!("Read {} bytes, record needs {}", data.len(), descriptor.packed_size());

    let record = marshal::decode_at(&descriptor, &data, offset, order)
        .with_context(|| "Failed to decode record")?;

    let rendered = record_to_json(&descriptor, &record)?;
    let pretty = serde_json::to_string_pretty(&rendered)?;

    match output {
        Some(path) => {
            fs::write(path, pretty.as_bytes())
                .with_context(|| format!("Failed to write output file: {}", path))?;
            info!("Wrote decoded record to {}", path);
        }
        None => println!("{}", pretty),
    }

    Ok(())
}
