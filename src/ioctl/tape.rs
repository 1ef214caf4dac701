//! Tape drive device backend.

use crate::error::{Result, RustTapesError};
use crate::tape::{
    DriveIdentity, DriveParameters, PartitionRequest, PositionUnit, RawPartitionQuery, TapeOp,
    TapePosition, TapeTransport,
};
use tracing::debug;

#[cfg(unix)]
use std::os::unix::io::AsRawFd;

#[cfg(unix)]
use super::{
    ffi,
    types::{
        DriveParams, InquiryData, PositionPage, QueryPartition, SetActivePartition,
        SetTapePosition, Stop, TapePartition,
    },
};
#[cfg(unix)]
use crate::tape::MAX_PARTITIONS;

/// Handle to an open tape ioctl node, e.g. `/dev/IBMtape0`.
pub struct TapeDevice {
    #[cfg(unix)]
    file: std::fs::File,
    device_path: String,
}

impl TapeDevice {
    /// Open a tape device node for ioctl access.
    pub fn open(device_path: &str) -> Result<Self> {
        #[cfg(unix)]
        {
            debug!("opening tape device: {}", device_path);
            let file = std::fs::OpenOptions::new()
                .read(true)
                .write(true)
                .open(device_path)?;
            Ok(Self {
                file,
                device_path: device_path.to_string(),
            })
        }

        #[cfg(not(unix))]
        {
            let _ = device_path;
            Err(RustTapesError::unsupported(
                "tape devices require a Unix lin_tape node",
            ))
        }
    }

    pub fn device_path(&self) -> &str {
        &self.device_path
    }

    #[cfg(unix)]
    fn transport_err(&self, what: &str, err: nix::errno::Errno) -> RustTapesError {
        RustTapesError::transport(format!("{} failed on {}: {}", what, self.device_path, err))
    }
}

/// Fixed-width identity fields are space padded.
#[cfg(unix)]
fn fixed_field(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches(|c| c == ' ' || c == '\0')
        .to_string()
}

impl TapeTransport for TapeDevice {
    fn sync(&mut self) -> Result<()> {
        #[cfg(unix)]
        {
            debug!("STIOCSYNC on {}", self.device_path);
            unsafe { ffi::stioc_sync(self.file.as_raw_fd()) }
                .map_err(|e| self.transport_err("STIOCSYNC", e))?;
            Ok(())
        }

        #[cfg(not(unix))]
        {
            Err(RustTapesError::unsupported(
                "tape devices require a Unix lin_tape node",
            ))
        }
    }

    fn query_position(&mut self) -> Result<TapePosition> {
        #[cfg(unix)]
        {
            let mut page: PositionPage = unsafe { std::mem::zeroed() };
            unsafe { ffi::stioc_query_position(self.file.as_raw_fd(), &mut page) }
                .map_err(|e| self.transport_err("STIOCQRYPOS", e))?;
            Ok(TapePosition {
                beginning_of_tape: page.bot != 0,
                end_of_tape: page.eot != 0,
                tape_position: page.tapepos,
                block_id: page.curpos,
                logical_bot: page.lbot,
                block_count: page.num_blocks,
                block_type: page.block_type,
                partition_number: page.partition_number,
            })
        }

        #[cfg(not(unix))]
        {
            Err(RustTapesError::unsupported(
                "tape devices require a Unix lin_tape node",
            ))
        }
    }

    fn locate(&mut self, unit: PositionUnit, id: u64) -> Result<()> {
        #[cfg(unix)]
        {
            debug!("STIOC_LOCATE_16: {:?} {}", unit, id);
            let request = SetTapePosition {
                logical_id_type: unit.code(),
                logical_id: id,
            };
            unsafe { ffi::stioc_locate_16(self.file.as_raw_fd(), &request) }
                .map_err(|e| self.transport_err("STIOC_LOCATE_16", e))?;
            Ok(())
        }

        #[cfg(not(unix))]
        {
            let _ = (unit, id);
            Err(RustTapesError::unsupported(
                "tape devices require a Unix lin_tape node",
            ))
        }
    }

    fn send_operation(&mut self, op: TapeOp, count: i64) -> Result<()> {
        #[cfg(unix)]
        {
            debug!("STIOCTOP: {:?} (count {})", op, count);
            let request = Stop {
                st_op: op.code() as libc::c_short,
                st_count: count as libc::c_long,
            };
            unsafe { ffi::stioc_top(self.file.as_raw_fd(), &request) }
                .map_err(|e| self.transport_err("STIOCTOP", e))?;
            Ok(())
        }

        #[cfg(not(unix))]
        {
            let _ = (op, count);
            Err(RustTapesError::unsupported(
                "tape devices require a Unix lin_tape node",
            ))
        }
    }

    fn set_active_partition(&mut self, id: u8) -> Result<()> {
        #[cfg(unix)]
        {
            debug!("STIOC_SET_ACTIVE_PARTITION: {}", id);
            let request = SetActivePartition {
                partition_number: id,
                logical_block_id: 0,
            };
            unsafe { ffi::stioc_set_active_partition(self.file.as_raw_fd(), &request) }
                .map_err(|e| self.transport_err("STIOC_SET_ACTIVE_PARTITION", e))?;
            Ok(())
        }

        #[cfg(not(unix))]
        {
            let _ = id;
            Err(RustTapesError::unsupported(
                "tape devices require a Unix lin_tape node",
            ))
        }
    }

    fn query_partitions(&mut self) -> Result<RawPartitionQuery> {
        #[cfg(unix)]
        {
            let mut page: QueryPartition = unsafe { std::mem::zeroed() };
            unsafe { ffi::stioc_query_partition(self.file.as_raw_fd(), &mut page) }
                .map_err(|e| self.transport_err("STIOC_QUERY_PARTITION", e))?;
            Ok(RawPartitionQuery {
                max_partitions: page.max_partitions,
                active_partition: page.active_partition,
                number_of_partitions: page.number_of_partitions,
                size_unit: page.size_unit,
                partition_method: page.partition_method,
                sizes: page.size.to_vec(),
            })
        }

        #[cfg(not(unix))]
        {
            Err(RustTapesError::unsupported(
                "tape devices require a Unix lin_tape node",
            ))
        }
    }

    fn create_partitions(&mut self, request: &PartitionRequest) -> Result<()> {
        #[cfg(unix)]
        {
            debug!(
                "STIOC_CREATE_PARTITION: type {:?}, count {}, unit {}, sizes {:?}",
                request.partition_type, request.count, request.size_unit, request.sizes
            );
            let mut size = [0u16; MAX_PARTITIONS];
            for (slot, value) in size.iter_mut().zip(&request.sizes) {
                *slot = *value;
            }
            let raw = TapePartition {
                partition_type: request.partition_type.code(),
                number_of_partitions: request.count,
                size_unit: request.size_unit,
                partition_method: request.method.code(),
                size,
            };
            unsafe { ffi::stioc_create_partition(self.file.as_raw_fd(), &raw) }
                .map_err(|e| self.transport_err("STIOC_CREATE_PARTITION", e))?;
            Ok(())
        }

        #[cfg(not(unix))]
        {
            let _ = request;
            Err(RustTapesError::unsupported(
                "tape devices require a Unix lin_tape node",
            ))
        }
    }

    fn query_parameters(&mut self) -> Result<DriveParameters> {
        #[cfg(unix)]
        {
            let mut page: DriveParams = unsafe { std::mem::zeroed() };
            unsafe { ffi::stioc_query_params(self.file.as_raw_fd(), &mut page) }
                .map_err(|e| self.transport_err("STIOCQRYP", e))?;
            Ok(DriveParameters {
                density_code: page.density_code as u8,
                medium_type: page.medium_type as u8,
                write_protect: page.write_protect != 0,
                compression: page.compression != 0,
                autoload: page.autoload != 0,
                buffered_mode: page.buffered_mode != 0,
                block_size: page.blksize,
                min_block_size: page.min_blksize,
                max_block_size: page.max_blksize,
                volume_id: fixed_field(&page.volid),
            })
        }

        #[cfg(not(unix))]
        {
            Err(RustTapesError::unsupported(
                "tape devices require a Unix lin_tape node",
            ))
        }
    }

    fn inquiry(&mut self) -> Result<DriveIdentity> {
        #[cfg(unix)]
        {
            let mut page: InquiryData = unsafe { std::mem::zeroed() };
            unsafe { ffi::sioc_inquiry(self.file.as_raw_fd(), &mut page) }
                .map_err(|e| self.transport_err("SIOC_INQUIRY", e))?;
            Ok(DriveIdentity {
                vendor_id: fixed_field(&page.vid),
                product_id: fixed_field(&page.pid),
                revision: fixed_field(&page.revision),
            })
        }

        #[cfg(not(unix))]
        {
            Err(RustTapesError::unsupported(
                "tape devices require a Unix lin_tape node",
            ))
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn fixed_fields_are_space_trimmed() {
        assert_eq!(fixed_field(b"IBM     "), "IBM");
        assert_eq!(fixed_field(b"ULT3580-TD7     "), "ULT3580-TD7");
        assert_eq!(fixed_field(b"\0\0\0\0"), "");
    }
}
