use anyhow::Result;
use tracing::info;

use super::load_descriptor;

pub fn execute(descriptor_path: &str) -> Result<()> {
    let descriptor = load_descriptor(descriptor_path)?;

    info!(
        "Loaded descriptor with {} fields from {}",
        descriptor.len(),
        descriptor_path
    );

    println!("{:<20} {:>6} {:>7} {:>6}", "FIELD", "TYPE", "OFFSET", "WIDTH");
    for (index, field) in descriptor.fields().iter().enumerate() {
        println!(
            "{:<20} {:>6} {:>7} {:>6}",
            field.name,
            field.kind.name(),
            descriptor.offset_of(index),
            field.kind.width()
        );
    }
    println!("packed size: {} bytes", descriptor.packed_size());

    Ok(())
}
