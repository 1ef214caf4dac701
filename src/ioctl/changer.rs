//! Medium changer device backend.

use crate::changer::{ChangerTransport, RawInventory};
use crate::error::{Result, RustTapesError};
use tracing::debug;

#[cfg(unix)]
use std::os::unix::io::AsRawFd;

#[cfg(unix)]
use super::{
    ffi,
    types::{ElementInfo, ElementStatus, Inventory, MoveMedium},
};
#[cfg(unix)]
use crate::changer::RawElement;

/// Handle to an open changer ioctl node, e.g. `/dev/IBMchanger0`.
pub struct ChangerDevice {
    #[cfg(unix)]
    file: std::fs::File,
    device_path: String,
}

impl ChangerDevice {
    /// Open a changer device node for ioctl access.
    pub fn open(device_path: &str) -> Result<Self> {
        #[cfg(unix)]
        {
            debug!("opening changer device: {}", device_path);
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
                "changer devices require a Unix lin_tape node",
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

/// Volume tags arrive space padded; an absent or unreadable label is all
/// spaces or NULs.
#[cfg(unix)]
fn trim_barcode(volume: &[u8]) -> Option<String> {
    let end = volume
        .iter()
        .position(|&b| b == b' ' || b == 0)
        .unwrap_or(volume.len());
    if end == 0 {
        return None;
    }
    Some(String::from_utf8_lossy(&volume[..end]).into_owned())
}

#[cfg(unix)]
fn raw_element(status: &ElementStatus) -> RawElement {
    RawElement {
        address: status.address,
        source_address: status.source,
        is_full: status.full != 0,
        barcode: trim_barcode(&status.volume),
    }
}

impl ChangerTransport for ChangerDevice {
    fn inventory(&mut self) -> Result<RawInventory> {
        #[cfg(unix)]
        {
            let fd = self.file.as_raw_fd();

            let mut info: ElementInfo = unsafe { std::mem::zeroed() };
            unsafe { ffi::smcioc_element_info(fd, &mut info) }
                .map_err(|e| self.transport_err("SMCIOC_ELEMENT_INFO", e))?;
            debug!(
                "element counts: {} robots, {} slots, {} drives, {} ie stations",
                info.robots, info.slots, info.drives, info.ie_stations
            );

            let blank: ElementStatus = unsafe { std::mem::zeroed() };
            let mut robots = vec![blank; info.robots as usize];
            let mut slots = vec![blank; info.slots as usize];
            let mut drives = vec![blank; info.drives as usize];
            let mut ie_stations = vec![blank; info.ie_stations as usize];

            let mut scatter = Inventory {
                robot_status: robots.as_mut_ptr(),
                ie_status: ie_stations.as_mut_ptr(),
                drive_status: drives.as_mut_ptr(),
                slot_status: slots.as_mut_ptr(),
            };
            unsafe { ffi::smcioc_inventory(fd, &mut scatter) }
                .map_err(|e| self.transport_err("SMCIOC_INVENTORY", e))?;

            Ok(RawInventory {
                robots: robots.iter().map(raw_element).collect(),
                slots: slots.iter().map(raw_element).collect(),
                drives: drives.iter().map(raw_element).collect(),
                ie_stations: ie_stations.iter().map(raw_element).collect(),
            })
        }

        #[cfg(not(unix))]
        {
            Err(RustTapesError::unsupported(
                "changer devices require a Unix lin_tape node",
            ))
        }
    }

    fn move_cartridge(&mut self, source: u16, target: u16, robot: u16) -> Result<()> {
        #[cfg(unix)]
        {
            debug!(
                "SMCIOC_MOVE_MEDIUM: {} -> {} (robot {})",
                source, target, robot
            );
            let request = MoveMedium {
                robot,
                source,
                destination: target,
                invert: 0,
            };
            unsafe { ffi::smcioc_move_medium(self.file.as_raw_fd(), &request) }
                .map_err(|e| self.transport_err("SMCIOC_MOVE_MEDIUM", e))?;
            Ok(())
        }

        #[cfg(not(unix))]
        {
            let _ = (source, target, robot);
            Err(RustTapesError::unsupported(
                "changer devices require a Unix lin_tape node",
            ))
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn barcode_trimming() {
        assert_eq!(trim_barcode(b"ABC123  "), Some("ABC123".to_string()));
        assert_eq!(trim_barcode(b"ABC123\0\0"), Some("ABC123".to_string()));
        assert_eq!(trim_barcode(b"        "), None);
        assert_eq!(trim_barcode(b"\0\0\0\0"), None);
    }

    #[test]
    fn raw_element_conversion() {
        let mut status: ElementStatus = unsafe { std::mem::zeroed() };
        status.address = 12;
        status.source = 0;
        status.full = 1;
        status.volume[..6].copy_from_slice(b"ABC123");

        let raw = raw_element(&status);
        assert_eq!(raw.address, 12);
        assert_eq!(raw.source_address, 0);
        assert!(raw.is_full);
        assert_eq!(raw.barcode.as_deref(), Some("ABC123"));
    }
}
