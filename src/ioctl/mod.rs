//! lin_tape ioctl transport.
//!
//! Implements the changer and tape transport traits against the IBM
//! `lin_tape` driver device nodes (`/dev/IBMchanger*`, `/dev/IBMtape*`).
//! Every call is synchronous and blocking; errno failures surface as
//! opaque transport errors. On non-Unix targets every entry point fails
//! with an unsupported-platform error.

pub mod constants;
#[cfg(unix)]
pub mod types;

mod changer;
mod tape;

pub use changer::ChangerDevice;
pub use tape::TapeDevice;

/// Request codes for the lin_tape ioctl surface: magic `'z'` plus a
/// per-operation sequence number, with the argument size encoded by the
/// kernel `_IO*` convention.
#[cfg(unix)]
pub(crate) mod ffi {
    use super::constants::LIN_TAPE_IOC_MAGIC;
    use super::types::*;
    use nix::{ioctl_none, ioctl_read, ioctl_readwrite, ioctl_write_ptr};

    ioctl_read!(sioc_inquiry, LIN_TAPE_IOC_MAGIC, 0x00, InquiryData);

    ioctl_write_ptr!(stioc_top, LIN_TAPE_IOC_MAGIC, 0x10, Stop);
    ioctl_read!(stioc_query_params, LIN_TAPE_IOC_MAGIC, 0x11, DriveParams);
    ioctl_read!(stioc_query_position, LIN_TAPE_IOC_MAGIC, 0x13, PositionPage);
    ioctl_none!(stioc_sync, LIN_TAPE_IOC_MAGIC, 0x16);

    ioctl_read!(smcioc_element_info, LIN_TAPE_IOC_MAGIC, 0x20, ElementInfo);
    ioctl_write_ptr!(smcioc_move_medium, LIN_TAPE_IOC_MAGIC, 0x21, MoveMedium);
    ioctl_readwrite!(smcioc_inventory, LIN_TAPE_IOC_MAGIC, 0x22, Inventory);

    ioctl_read!(
        stioc_query_partition,
        LIN_TAPE_IOC_MAGIC,
        0x2c,
        QueryPartition
    );
    ioctl_write_ptr!(
        stioc_create_partition,
        LIN_TAPE_IOC_MAGIC,
        0x2d,
        TapePartition
    );
    ioctl_write_ptr!(
        stioc_set_active_partition,
        LIN_TAPE_IOC_MAGIC,
        0x2e,
        SetActivePartition
    );
    ioctl_write_ptr!(stioc_locate_16, LIN_TAPE_IOC_MAGIC, 0x2f, SetTapePosition);
}
