use rust_tapes::cli::{Cli, Commands};
use rust_tapes::error::Result;
use rust_tapes::{commands, logger};
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse_args();

    // Initialize logging system
    logger::init(args.verbose)?;

    debug!("rusttapes CLI starting");

    match run(args).await {
        Ok(_) => {
            info!("Operation completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Operation failed: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    match args.command {
        Commands::Inventory { changer, json } => commands::changer::inventory(changer, json).await,

        Commands::Load {
            changer,
            barcode,
            drive,
            robot,
        } => commands::changer::load(changer, barcode, drive, robot).await,

        Commands::Unload {
            changer,
            drive,
            robot,
        } => commands::changer::unload(changer, drive, robot).await,

        Commands::Status { device, json } => commands::tape::status(device, json).await,

        Commands::Partition { device, layout } => commands::tape::partition(device, layout).await,

        Commands::Position { device } => commands::tape::position(device).await,

        Commands::Seek {
            device,
            block,
            file,
            eod,
        } => commands::tape::seek(device, block, file, eod).await,

        Commands::Op { device, operation } => commands::tape::op(device, operation).await,

        Commands::Info { device } => commands::tape::info(device).await,
    }
}
