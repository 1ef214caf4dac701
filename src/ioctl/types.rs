//! `#[repr(C)]` structures exchanged with the lin_tape driver.

use super::constants::{BARCODE_LEN, PROD_ID_LEN, REV_LEN, VEND_ID_LEN, VOLID_LEN};
use crate::tape::MAX_PARTITIONS;

/// Per-category element counts of the changer.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ElementInfo {
    pub robots: u16,
    pub ie_stations: u16,
    pub drives: u16,
    pub slots: u16,
}

/// Status of a single changer element.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ElementStatus {
    pub address: u16,
    pub source: u16,
    pub full: u8,
    /// Space-padded volume tag; all spaces when no barcode was read.
    pub volume: [u8; BARCODE_LEN],
}

/// Scatter buffers the inventory ioctl fills per category.
#[repr(C)]
pub struct Inventory {
    pub robot_status: *mut ElementStatus,
    pub ie_status: *mut ElementStatus,
    pub drive_status: *mut ElementStatus,
    pub slot_status: *mut ElementStatus,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MoveMedium {
    pub robot: u16,
    pub source: u16,
    pub destination: u16,
    pub invert: u8,
}

/// Partition page returned by `STIOC_QUERY_PARTITION`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct QueryPartition {
    pub max_partitions: u8,
    pub active_partition: u8,
    pub number_of_partitions: u8,
    pub size_unit: u8,
    pub size: [u16; MAX_PARTITIONS],
    pub partition_method: u8,
}

/// Argument of `STIOC_CREATE_PARTITION` (`type` in the C header).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct TapePartition {
    pub partition_type: u8,
    pub number_of_partitions: u8,
    pub size_unit: u8,
    pub partition_method: u8,
    pub size: [u16; MAX_PARTITIONS],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SetActivePartition {
    pub partition_number: u8,
    pub logical_block_id: u64,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SetTapePosition {
    pub logical_id_type: u8,
    pub logical_id: u64,
}

/// Argument of the primitive-operation ioctl (`STIOCTOP`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Stop {
    pub st_op: libc::c_short,
    pub st_count: libc::c_long,
}

/// Drive parameter page (`stchgp_s`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DriveParams {
    pub autoload: u8,
    pub buffered_mode: u8,
    pub compression: u8,
    pub trailer_labels: u8,
    pub rewind_immediate: u8,
    pub bus_domination: u8,
    pub logging: u8,
    pub write_protect: u8,
    pub emulate_autoloader: u8,
    pub wfm_immediate: u8,
    pub limit_read_recov: u8,
    pub limit_write_recov: u8,
    pub data_safe_mode: u8,
    pub disable_sim_logging: u8,
    pub read_sili_bit: u8,
    pub disable_auto_drive_dump: u8,
    pub trace: u8,
    pub acf_mode: u32,
    pub record_space_mode: u32,
    pub logical_write_protect: u32,
    pub capacity_scaling: u32,
    pub retain_reservation: u32,
    pub alt_pathing: u32,
    pub medium_type: u32,
    pub density_code: u32,
    pub read_past_filemark: u32,
    pub capacity_scaling_value: u32,
    pub busy_retry: u32,
    pub reserve_type: u32,
    pub hkwrd: u32,
    pub min_blksize: u32,
    pub max_blksize: u32,
    pub max_scsi_xfer: u32,
    pub blksize: i32,
    pub volid: [u8; VOLID_LEN],
}

/// Position page (`stpos_s`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PositionPage {
    pub bot: u8,
    pub eot: u8,
    pub block_type: u8,
    pub partition_number: u8,
    pub tapepos: u64,
    pub curpos: u64,
    pub lbot: u64,
    pub num_blocks: u64,
}

/// Inquiry page (`inquiry_data`).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct InquiryData {
    pub vid: [u8; VEND_ID_LEN],
    pub pid: [u8; PROD_ID_LEN],
    pub revision: [u8; REV_LEN],
}
