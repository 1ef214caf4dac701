//! rust-tapes Library
//!
//! A Rust library for tape autoloader and tape drive control: library
//! inventory and cartridge movement policy for medium changers, and the
//! wrap-wise partition codec for tape drives, over the lin_tape ioctl
//! transport.

pub mod changer;
pub mod cli;
pub mod commands;
pub mod display;
pub mod error;
pub mod ioctl;
pub mod logger;
pub mod media;
pub mod tape;

#[cfg(test)]
mod tests;

// Re-export key types for easier use
pub use changer::{
    Changer, ChangerTransport, ElementKind, LibraryElement, LibraryInventory, RawElement,
    RawInventory,
};
pub use error::{Result, RustTapesError};
pub use ioctl::{ChangerDevice, TapeDevice};
pub use media::TapeTypeProperties;
pub use tape::{
    DriveIdentity, DriveParameters, Tape, TapePartitionLayout, TapePartitionMethod,
    TapePartitionType, TapePosition, TapeTransport,
};
