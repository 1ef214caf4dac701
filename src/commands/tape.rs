//! Tape Command Handlers
//!
//! Handles the `status`, `partition`, `position`, `seek`, `op` and `info`
//! subcommands.

use crate::cli::{DriveOpArg, PartitionLayoutArg};
use crate::display;
use crate::error::{Result, RustTapesError};
use crate::ioctl::TapeDevice;
use crate::media::TapeTypeProperties;
use crate::tape::{DriveParameters, Tape, TapePartitionLayout};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Serialize)]
struct StatusReport {
    device: String,
    media: Option<&'static TapeTypeProperties>,
    parameters: DriveParameters,
    layout: Option<TapePartitionLayout>,
}

pub async fn status(device: String, json: bool) -> Result<()> {
    info!("Querying tape status: {}", device);

    let mut tape = Tape::new(TapeDevice::open(&device)?);
    let parameters = tape.parameters()?;
    let media = TapeTypeProperties::lookup(parameters.density_code, parameters.medium_type);

    // A layout that cannot be decoded (unknown medium, inconsistent
    // firmware report) degrades the overview instead of aborting it.
    let layout = match media {
        Some(_) => match tape.partition_layout() {
            Ok(layout) => Some(layout),
            Err(e) => {
                warn!("could not decode partition layout: {}", e);
                None
            }
        },
        None => None,
    };

    if json {
        let report = StatusReport {
            device,
            media,
            parameters,
            layout,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?
        );
    } else {
        println!("Device: {}", device);
        display::print_media(media);
        display::print_parameters(&parameters);
        if let Some(layout) = &layout {
            display::print_layout(layout);
        }
    }

    Ok(())
}

pub async fn partition(device: String, layout: PartitionLayoutArg) -> Result<()> {
    let mut tape = Tape::new(TapeDevice::open(&device)?);

    match layout {
        PartitionLayoutArg::Single => {
            tape.create_single_partition()?;
            println!("Medium collapsed into a single partition");
        }
        PartitionLayoutArg::Fdp => {
            tape.create_fdp_layout()?;
            println!("FDP partition layout created");
        }
        PartitionLayoutArg::Sdp { count } => {
            tape.create_sdp_layout(count)?;
            println!("SDP partition layout with {} partitions created", count);
        }
        PartitionLayoutArg::Idp { wraps } => {
            tape.create_idp_layout(&wraps)?;
            println!("IDP partition layout created: {:?} wraps", wraps);
        }
    }

    Ok(())
}

pub async fn position(device: String) -> Result<()> {
    info!("Querying tape position: {}", device);

    let mut tape = Tape::new(TapeDevice::open(&device)?);
    let position = tape.query_position()?;
    display::print_position(&position);

    Ok(())
}

pub async fn seek(
    device: String,
    block: Option<u64>,
    file: Option<u64>,
    eod: bool,
) -> Result<()> {
    let mut tape = Tape::new(TapeDevice::open(&device)?);

    if let Some(block_id) = block {
        info!("Seeking to block {}", block_id);
        tape.seek_block(block_id)?;
    } else if let Some(file_id) = file {
        info!("Seeking to filemark {}", file_id);
        tape.seek_filemark(file_id)?;
    } else if eod {
        info!("Seeking to end of data");
        tape.seek_eod()?;
    } else {
        return Err(RustTapesError::parameter_validation(
            "one of --block, --file or --eod is required",
        ));
    }

    let position = tape.query_position()?;
    display::print_position(&position);
    Ok(())
}

pub async fn op(device: String, operation: DriveOpArg) -> Result<()> {
    info!("Running drive operation {:?} on {}", operation, device);

    let mut tape = Tape::new(TapeDevice::open(&device)?);
    match operation {
        DriveOpArg::Rewind => tape.rewind()?,
        DriveOpArg::Erase => tape.erase()?,
        DriveOpArg::Retension => tape.retension()?,
        DriveOpArg::Weof => tape.write_filemark()?,
        DriveOpArg::Load => tape.load()?,
        DriveOpArg::Unload => tape.unload()?,
        DriveOpArg::Sync => tape.sync()?,
    }

    println!("Operation {:?} completed", operation);
    Ok(())
}

pub async fn info(device: String) -> Result<()> {
    info!("Querying drive identity: {}", device);

    let mut tape = Tape::new(TapeDevice::open(&device)?);
    let identity = tape.identity()?;
    display::print_identity(&identity);

    Ok(())
}
