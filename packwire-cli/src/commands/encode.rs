use anyhow::{Context, Result};
use packwire_core::{marshal, ByteOrder};
use serde_json::Value;
use std::fs;
use tracing::{debug, info};

use super::{json_to_record, load_descriptor};

pub fn execute(descriptor_path: &str, input: &str, output: &str, order: ByteOrder) -> Result<()> {
    info!("Encoding {} to {} ({})", input, output, order);

    let descriptor = load_descriptor(descriptor_path)?;

    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input))?;
    let root: Value =
        serde_json::from_str(&content).with_context(|| "Failed to parse record JSON")?;

    let record = json_to_record(&descriptor, &root)?;

    let encoded = marshal::encode(&descriptor, &record, order)
        .with_context(|| "Failed to encode record")?;

    debug!("Writing {} packed bytes to {}", encoded.len(), output);

    fs::write(output, &encoded)
        .with_context(|| format!("Failed to write output file: {}", output))?;

    info!(
        "Encoded {} fields into {} bytes",
        descriptor.len(),
        encoded.len()
    );

    Ok(())
}
