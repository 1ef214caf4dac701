use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "rusttapes")]
#[command(about = "Control tape autoloaders and tape drive partitioning")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current library inventory
    Inventory {
        /// Changer device path (e.g. /dev/IBMchanger0)
        #[arg(value_name = "CHANGER")]
        changer: String,

        /// Print the inventory as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load a cartridge into a drive by barcode
    Load {
        /// Changer device path (e.g. /dev/IBMchanger0)
        #[arg(value_name = "CHANGER")]
        changer: String,

        /// Barcode of the cartridge to load
        #[arg(value_name = "BARCODE")]
        barcode: String,

        /// Element address of the target drive
        #[arg(short, long)]
        drive: u16,

        /// Element address of the robot performing the move
        #[arg(short, long)]
        robot: u16,
    },

    /// Unload a drive back into a slot
    Unload {
        /// Changer device path (e.g. /dev/IBMchanger0)
        #[arg(value_name = "CHANGER")]
        changer: String,

        /// Element address of the drive to unload
        #[arg(short, long)]
        drive: u16,

        /// Element address of the robot performing the move
        #[arg(short, long)]
        robot: u16,
    },

    /// Show media type, drive parameters and partition layout
    Status {
        /// Tape device path (e.g. /dev/IBMtape0)
        #[arg(value_name = "DEVICE")]
        device: String,

        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },

    /// Repartition the mounted medium
    Partition {
        /// Tape device path (e.g. /dev/IBMtape0)
        #[arg(value_name = "DEVICE")]
        device: String,

        #[command(subcommand)]
        layout: PartitionLayoutArg,
    },

    /// Report the current tape position
    Position {
        /// Tape device path (e.g. /dev/IBMtape0)
        #[arg(value_name = "DEVICE")]
        device: String,
    },

    /// Position the tape by block, filemark, or to end of data
    Seek {
        /// Tape device path (e.g. /dev/IBMtape0)
        #[arg(value_name = "DEVICE")]
        device: String,

        /// Seek to this block id
        #[arg(long, conflicts_with_all = ["file", "eod"])]
        block: Option<u64>,

        /// Seek to this filemark
        #[arg(long, conflicts_with = "eod")]
        file: Option<u64>,

        /// Seek to end of data
        #[arg(long)]
        eod: bool,
    },

    /// Run a primitive drive operation
    Op {
        /// Tape device path (e.g. /dev/IBMtape0)
        #[arg(value_name = "DEVICE")]
        device: String,

        /// Operation to run
        #[arg(value_enum)]
        operation: DriveOpArg,
    },

    /// Show vendor identity of a tape drive
    Info {
        /// Tape device path (e.g. /dev/IBMtape0)
        #[arg(value_name = "DEVICE")]
        device: String,
    },
}

#[derive(Subcommand)]
pub enum PartitionLayoutArg {
    /// Collapse the medium into a single partition
    Single,

    /// Let the drive split the medium into its fixed two-partition layout
    Fdp,

    /// Let the drive split the medium into N equal partitions
    Sdp {
        /// Number of partitions
        #[arg(short, long)]
        count: u8,
    },

    /// Explicit per-partition sizes in wraps
    Idp {
        /// Partition sizes in physical wraps; together with the
        /// inter-partition guard bands they must tile the medium exactly
        #[arg(value_name = "WRAPS", required = true)]
        wraps: Vec<u32>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DriveOpArg {
    Rewind,
    Erase,
    Retension,
    Weof,
    Load,
    Unload,
    Sync,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
