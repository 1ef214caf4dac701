//! Static geometry of known tape media generations.
//!
//! The drive parameter page reports a `(density_code, medium_type)` pair;
//! this table maps it to the physical geometry the partition codec needs.

use serde::Serialize;

/// Physical geometry of one tape generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TapeTypeProperties {
    pub name: &'static str,
    /// Total number of physical wraps on the medium.
    pub wraps: u32,
    /// Native capacity in bytes.
    pub size: u64,
}

impl TapeTypeProperties {
    /// Bytes recorded by one full wrap of the tape. This is the scaling
    /// basis for all wrap-wise partition math.
    pub fn wrap_size(&self) -> f64 {
        self.size as f64 / self.wraps as f64
    }

    /// Look up the media table by the codes from the drive parameter page.
    ///
    /// Unknown media is `None`, not an error: a drive with no cartridge
    /// loaded reports codes no table can know, and callers must be able to
    /// handle that case.
    pub fn lookup(density_code: u8, medium_type: u8) -> Option<&'static TapeTypeProperties> {
        KNOWN_MEDIA
            .iter()
            .find(|(key, _)| *key == (density_code, medium_type))
            .map(|(_, properties)| properties)
    }
}

/// Known media keyed by `(density_code, medium_type)`.
static KNOWN_MEDIA: &[((u8, u8), TapeTypeProperties)] = &[
    (
        (0x58, 0x58),
        TapeTypeProperties {
            name: "LTO-5",
            wraps: 80,
            size: 1_500_000_000_000,
        },
    ),
    (
        (0x58, 0x5c),
        TapeTypeProperties {
            name: "LTO-5 WORM",
            wraps: 80,
            size: 1_500_000_000_000,
        },
    ),
    (
        (0x5a, 0x68),
        TapeTypeProperties {
            name: "LTO-6",
            wraps: 136,
            size: 2_500_000_000_000,
        },
    ),
    (
        (0x5a, 0x6c),
        TapeTypeProperties {
            name: "LTO-6 WORM",
            wraps: 136,
            size: 2_500_000_000_000,
        },
    ),
    (
        (0x5c, 0x78),
        TapeTypeProperties {
            name: "LTO-7",
            wraps: 112,
            size: 6_000_000_000_000,
        },
    ),
    (
        (0x5c, 0x7c),
        TapeTypeProperties {
            name: "LTO-7 WORM",
            wraps: 112,
            size: 6_000_000_000_000,
        },
    ),
    (
        (0x5d, 0x78),
        TapeTypeProperties {
            name: "LTO-M8",
            wraps: 168,
            size: 9_000_000_000_000,
        },
    ),
    (
        (0x5e, 0x88),
        TapeTypeProperties {
            name: "LTO-8",
            wraps: 208,
            size: 12_000_000_000_000,
        },
    ),
    (
        (0x5e, 0x8c),
        TapeTypeProperties {
            name: "LTO-8 WORM",
            wraps: 208,
            size: 12_000_000_000_000,
        },
    ),
    (
        (0x60, 0x98),
        TapeTypeProperties {
            name: "LTO-9",
            wraps: 280,
            size: 18_000_000_000_000,
        },
    ),
    (
        (0x60, 0x9c),
        TapeTypeProperties {
            name: "LTO-9 WORM",
            wraps: 280,
            size: 18_000_000_000_000,
        },
    ),
];
