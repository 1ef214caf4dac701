//! stdout rendering for inventory, layout and status output.

use crate::changer::{ElementKind, LibraryInventory};
use crate::media::TapeTypeProperties;
use crate::tape::{DriveIdentity, DriveParameters, TapePartitionLayout, TapePosition};

/// Display the library inventory as a fixed-width table.
pub fn print_inventory(inventory: &LibraryInventory) {
    println!(
        "{:<12} {:>8} {:>8} {:<6} {}",
        "Kind", "Address", "Source", "Full", "Barcode"
    );
    println!("{:-<48}", "");

    for element in inventory.all_elements() {
        println!(
            "{:<12} {:>8} {:>8} {:<6} {}",
            kind_label(element.kind),
            element.address,
            element
                .source_address
                .map(|address| address.to_string())
                .unwrap_or_else(|| "-".to_string()),
            if element.is_full { "yes" } else { "no" },
            element.barcode.as_deref().unwrap_or("-"),
        );
    }
}

fn kind_label(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Robot => "robot",
        ElementKind::Slot => "slot",
        ElementKind::Drive => "drive",
        ElementKind::IeStation => "ie-station",
    }
}

/// Display a decoded partition layout.
pub fn print_layout(layout: &TapePartitionLayout) {
    println!("Partition layout:");
    println!("  Method: {:?}", layout.partition_method);
    println!(
        "  Partitions: {} (max {})",
        layout.partitions.len(),
        layout.max_partitions
    );
    println!("  Active partition: {}", layout.active_partition);
    for (index, wraps) in layout.partitions.iter().enumerate() {
        println!("    Partition {}: {} wraps", index, wraps);
    }
}

/// Display the media identification line.
pub fn print_media(media: Option<&TapeTypeProperties>) {
    match media {
        Some(properties) => println!(
            "Media: {} ({} wraps, {})",
            properties.name,
            properties.wraps,
            format_capacity(properties.size)
        ),
        None => println!("Media: unknown (no cartridge or unrecognized type)"),
    }
}

/// Display the drive parameter summary.
pub fn print_parameters(parameters: &DriveParameters) {
    println!("Drive parameters:");
    println!(
        "  Density/medium codes: 0x{:02X}/0x{:02X}",
        parameters.density_code, parameters.medium_type
    );
    println!("  Write protected: {}", parameters.write_protect);
    println!("  Compression: {}", parameters.compression);
    println!(
        "  Block size: {} (limits {}..{})",
        parameters.block_size, parameters.min_block_size, parameters.max_block_size
    );
    if !parameters.volume_id.is_empty() {
        println!("  Volume id: {}", parameters.volume_id);
    }
}

/// Display the current tape position.
pub fn print_position(position: &TapePosition) {
    println!("Tape position:");
    println!("  Partition: {}", position.partition_number);
    println!("  Block id: {}", position.block_id);
    if position.beginning_of_tape {
        println!("  At beginning of tape");
    }
    if position.end_of_tape {
        println!("  At end of tape");
    }
}

/// Display the drive identity.
pub fn print_identity(identity: &DriveIdentity) {
    println!("Drive identity:");
    println!("  Vendor: {}", identity.vendor_id);
    println!("  Product: {}", identity.product_id);
    println!("  Revision: {}", identity.revision);
}

/// Format a capacity in human-readable decimal units.
pub fn format_capacity(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1000.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_capacity() {
        assert_eq!(format_capacity(0), "0 B");
        assert_eq!(format_capacity(500), "500 B");
        assert_eq!(format_capacity(1_500), "1.5 KB");
        assert_eq!(format_capacity(6_000_000_000_000), "6.0 TB");
        assert_eq!(format_capacity(18_000_000_000_000), "18.0 TB");
    }
}
