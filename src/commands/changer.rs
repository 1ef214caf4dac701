//! Changer Command Handlers
//!
//! Handles the `inventory`, `load` and `unload` subcommands.

use crate::changer::Changer;
use crate::display;
use crate::error::Result;
use crate::ioctl::ChangerDevice;
use tracing::info;

pub async fn inventory(changer_path: String, json: bool) -> Result<()> {
    info!("Reading library inventory from {}", changer_path);

    let mut changer = Changer::new(ChangerDevice::open(&changer_path)?);
    let inventory = changer.inventory()?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&inventory).map_err(anyhow::Error::from)?
        );
    } else {
        display::print_inventory(&inventory);
    }

    Ok(())
}

pub async fn load(changer_path: String, barcode: String, drive: u16, robot: u16) -> Result<()> {
    info!(
        "Loading cartridge {} into drive {} (robot {})",
        barcode, drive, robot
    );

    let mut changer = Changer::new(ChangerDevice::open(&changer_path)?);
    changer.load_cartridge(&barcode, drive, robot)?;

    println!("Cartridge {} loaded into drive {}", barcode, drive);
    Ok(())
}

pub async fn unload(changer_path: String, drive: u16, robot: u16) -> Result<()> {
    info!("Unloading drive {} (robot {})", drive, robot);

    let mut changer = Changer::new(ChangerDevice::open(&changer_path)?);
    changer.unload_cartridge(drive, robot)?;

    println!("Drive {} unloaded", drive);
    Ok(())
}
