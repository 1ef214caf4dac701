//! Tape drive frontend: the wrap-wise partition codec plus thin
//! pass-throughs for positioning and primitive drive operations.
//!
//! Partition sizes cross the device boundary as 16-bit integers scaled by a
//! power of ten (the "size unit"). The codec converts a human-meaningful
//! list of per-partition wrap counts into that representation, choosing the
//! smallest unit that keeps every partition nonzero and within the field
//! width, and decodes a queried layout back into wrap counts.

use crate::error::{Result, RustTapesError};
use crate::media::TapeTypeProperties;
use serde::Serialize;
use tracing::{debug, info};

/// Width of the partition size table in the device interface.
pub const MAX_PARTITIONS: usize = 16;

/// Wraps consumed as guard band around each internal partition boundary.
const GUARD_WRAPS_PER_BOUNDARY: u32 = 2;

/// Largest size-unit exponent the device accepts.
const MAX_SIZE_UNIT: u32 = 11;

/// Exclusive upper bound of the scaled size field. 65535 itself is left
/// out: firmware may treat the all-ones value as a sentinel.
const SIZE_FIELD_LIMIT: f64 = 65535.0;

/// Partitioning scheme selectors understood by the drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TapePartitionType {
    Unknown,
    /// Initiator-defined: explicit per-partition sizes.
    Idp,
    /// Select-data-partitions: the drive splits into N equal partitions.
    Sdp,
    /// Fixed-data-partitions: the drive picks the split entirely.
    Fdp,
}

impl TapePartitionType {
    pub fn code(self) -> u8 {
        match self {
            TapePartitionType::Unknown => 0,
            TapePartitionType::Idp => 1,
            TapePartitionType::Sdp => 2,
            TapePartitionType::Fdp => 3,
        }
    }
}

/// Partition addressing method in effect on a medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TapePartitionMethod {
    Unknown,
    /// Whole physical wraps per partition.
    WrapWise,
    /// Lengthwise split; representable but never produced by this codec.
    Longitude,
}

impl TapePartitionMethod {
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => TapePartitionMethod::WrapWise,
            2 => TapePartitionMethod::Longitude,
            _ => TapePartitionMethod::Unknown,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            TapePartitionMethod::Unknown => 0,
            TapePartitionMethod::WrapWise => 1,
            TapePartitionMethod::Longitude => 2,
        }
    }
}

/// Units accepted by the locate call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionUnit {
    Block,
    File,
}

impl PositionUnit {
    pub fn code(self) -> u8 {
        match self {
            PositionUnit::Block => 0,
            PositionUnit::File => 1,
        }
    }
}

/// Primitive drive operations, numbered as the driver's `st_op` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapeOp {
    Rewind = 6,
    Erase = 7,
    Retension = 8,
    WriteFilemark = 10,
    Load = 15,
    Unload = 16,
    SeekEod = 32,
}

impl TapeOp {
    pub fn code(self) -> i16 {
        self as i16
    }
}

/// Raw partition page as reported by the transport, before decoding.
#[derive(Debug, Clone, Default)]
pub struct RawPartitionQuery {
    pub max_partitions: u8,
    pub active_partition: u8,
    pub number_of_partitions: u8,
    pub size_unit: u8,
    pub partition_method: u8,
    /// Fixed-width size table; only the first `number_of_partitions`
    /// entries are meaningful.
    pub sizes: Vec<u16>,
}

/// Partitioning request submitted to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionRequest {
    pub partition_type: TapePartitionType,
    pub count: u8,
    pub size_unit: u8,
    pub method: TapePartitionMethod,
    pub sizes: Vec<u16>,
}

/// Current physical position of the tape.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TapePosition {
    pub beginning_of_tape: bool,
    pub end_of_tape: bool,
    pub tape_position: u64,
    /// Current logical block id; this is what `Tape::position` returns.
    pub block_id: u64,
    pub logical_bot: u64,
    pub block_count: u64,
    pub block_type: u8,
    pub partition_number: u8,
}

/// Useful subset of the drive parameter page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DriveParameters {
    pub density_code: u8,
    pub medium_type: u8,
    pub write_protect: bool,
    pub compression: bool,
    pub autoload: bool,
    pub buffered_mode: bool,
    pub block_size: i32,
    pub min_block_size: u32,
    pub max_block_size: u32,
    pub volume_id: String,
}

/// Vendor identity from the inquiry page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DriveIdentity {
    pub vendor_id: String,
    pub product_id: String,
    pub revision: String,
}

/// Decoded partition layout of the mounted medium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TapePartitionLayout {
    pub max_partitions: u8,
    pub active_partition: u8,
    pub partition_method: TapePartitionMethod,
    /// Partition sizes in physical wraps.
    pub partitions: Vec<u32>,
}

/// Blocking access to a tape drive device.
pub trait TapeTransport {
    fn sync(&mut self) -> Result<()>;
    fn query_position(&mut self) -> Result<TapePosition>;
    fn locate(&mut self, unit: PositionUnit, id: u64) -> Result<()>;
    fn send_operation(&mut self, op: TapeOp, count: i64) -> Result<()>;
    fn set_active_partition(&mut self, id: u8) -> Result<()>;
    fn query_partitions(&mut self) -> Result<RawPartitionQuery>;
    fn create_partitions(&mut self, request: &PartitionRequest) -> Result<()>;
    fn query_parameters(&mut self) -> Result<DriveParameters>;
    fn inquiry(&mut self) -> Result<DriveIdentity>;
}

fn guard_band_wraps(partitions: usize) -> u32 {
    GUARD_WRAPS_PER_BOUNDARY * partitions.saturating_sub(1) as u32
}

/// Compute the minimal size unit and scaled sizes for an explicit
/// wrap-count layout on the given medium.
///
/// The wrap counts plus the inter-partition guard bands must tile the
/// medium exactly. Scaled sizes are floored: under-allocating by at most
/// one scale unit keeps adjacent partitions from overlapping on the
/// physical tape, which rounding up would not.
pub fn encode_wrap_layout(
    media: &TapeTypeProperties,
    wraps: &[u32],
) -> Result<(u8, Vec<u16>)> {
    if wraps.is_empty() {
        return Err(RustTapesError::parameter_validation(
            "at least one partition size is required",
        ));
    }
    if wraps.len() > MAX_PARTITIONS {
        return Err(RustTapesError::parameter_validation(format!(
            "{} partitions requested, the device supports at most {}",
            wraps.len(),
            MAX_PARTITIONS
        )));
    }

    let guard = guard_band_wraps(wraps.len());
    let data: u32 = wraps.iter().sum();
    if data + guard != media.wraps {
        return Err(RustTapesError::invalid_partition_geometry(format!(
            "{} data wraps + {} guard wraps do not tile the {} wraps of {}",
            data, guard, media.wraps, media.name
        )));
    }

    let sizes: Vec<f64> = wraps
        .iter()
        .map(|&count| count as f64 * media.wrap_size())
        .collect();
    let smallest = sizes.iter().cloned().fold(f64::INFINITY, f64::min);
    let largest = sizes.iter().cloned().fold(0.0f64, f64::max);

    for unit in 0..=MAX_SIZE_UNIT {
        let scale = 10f64.powi(unit as i32);
        // The smallest partition must not round to zero and the largest
        // must fit the 16-bit size field.
        if smallest / scale >= 1.0 && largest / scale < SIZE_FIELD_LIMIT {
            let scaled = sizes.iter().map(|size| (size / scale).floor() as u16).collect();
            return Ok((unit as u8, scaled));
        }
    }
    Err(RustTapesError::NoValidScaleFound)
}

/// Convert a reported partition page back into wrap counts.
///
/// The wrap sum plus the guard bands must reproduce the medium's total
/// wrap count; a mismatch means the drive's own report disagrees with the
/// media geometry and is surfaced as a consistency fault, never corrected.
pub fn decode_wrap_layout(
    media: &TapeTypeProperties,
    raw: &RawPartitionQuery,
) -> Result<TapePartitionLayout> {
    let count = (raw.number_of_partitions as usize).min(raw.sizes.len());
    let scale = 10f64.powi(raw.size_unit as i32);
    let wraps: Vec<u32> = raw.sizes[..count]
        .iter()
        .map(|&size| (size as f64 * scale / media.wrap_size()).round() as u32)
        .collect();

    let expected = media
        .wraps
        .checked_sub(guard_band_wraps(wraps.len()))
        .ok_or_else(|| {
            RustTapesError::layout_consistency_fault(format!(
                "{} partitions cannot fit on the {} wraps of {}",
                wraps.len(),
                media.wraps,
                media.name
            ))
        })?;
    let data: u32 = wraps.iter().sum();
    if data != expected {
        return Err(RustTapesError::layout_consistency_fault(format!(
            "drive reports {} data wraps, expected {} on {}",
            data, expected, media.name
        )));
    }

    Ok(TapePartitionLayout {
        max_partitions: raw.max_partitions,
        active_partition: raw.active_partition,
        partition_method: TapePartitionMethod::from_code(raw.partition_method),
        partitions: wraps,
    })
}

/// High-level tape drive frontend over a [`TapeTransport`].
pub struct Tape<T: TapeTransport> {
    transport: T,
}

impl<T: TapeTransport> Tape<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Flush buffered data to the medium.
    pub fn sync(&mut self) -> Result<()> {
        self.transport.sync()
    }

    /// Current logical block id.
    pub fn position(&mut self) -> Result<u64> {
        Ok(self.transport.query_position()?.block_id)
    }

    /// Full position page, including BOT/EOT flags and partition number.
    pub fn query_position(&mut self) -> Result<TapePosition> {
        self.transport.query_position()
    }

    pub fn seek_block(&mut self, block_id: u64) -> Result<()> {
        self.transport.locate(PositionUnit::Block, block_id)
    }

    pub fn seek_filemark(&mut self, file_id: u64) -> Result<()> {
        self.transport.locate(PositionUnit::File, file_id)
    }

    pub fn seek_eod(&mut self) -> Result<()> {
        self.transport.send_operation(TapeOp::SeekEod, 0)
    }

    pub fn rewind(&mut self) -> Result<()> {
        self.transport.send_operation(TapeOp::Rewind, 0)
    }

    pub fn erase(&mut self) -> Result<()> {
        self.transport.send_operation(TapeOp::Erase, 0)
    }

    pub fn retension(&mut self) -> Result<()> {
        self.transport.send_operation(TapeOp::Retension, 0)
    }

    pub fn write_filemark(&mut self) -> Result<()> {
        self.transport.send_operation(TapeOp::WriteFilemark, 0)
    }

    /// Thread the tape into the drive.
    pub fn load(&mut self) -> Result<()> {
        self.transport.send_operation(TapeOp::Load, 0)
    }

    /// Unthread the tape from the drive.
    pub fn unload(&mut self) -> Result<()> {
        self.transport.send_operation(TapeOp::Unload, 0)
    }

    pub fn active_partition(&mut self) -> Result<u8> {
        Ok(self.transport.query_partitions()?.active_partition)
    }

    pub fn set_active_partition(&mut self, id: u8) -> Result<()> {
        self.transport.set_active_partition(id)
    }

    /// Full drive parameter page.
    pub fn parameters(&mut self) -> Result<DriveParameters> {
        self.transport.query_parameters()
    }

    /// Vendor identity from the inquiry page.
    pub fn identity(&mut self) -> Result<DriveIdentity> {
        self.transport.inquiry()
    }

    /// Geometry of the mounted medium, or `None` when the reported codes
    /// are not in the media table (e.g. no cartridge loaded).
    pub fn media_properties(&mut self) -> Result<Option<&'static TapeTypeProperties>> {
        let parameters = self.transport.query_parameters()?;
        Ok(TapeTypeProperties::lookup(
            parameters.density_code,
            parameters.medium_type,
        ))
    }

    fn require_media(&mut self) -> Result<&'static TapeTypeProperties> {
        let parameters = self.transport.query_parameters()?;
        TapeTypeProperties::lookup(parameters.density_code, parameters.medium_type).ok_or(
            RustTapesError::UnknownMedium {
                density_code: parameters.density_code,
                medium_type: parameters.medium_type,
            },
        )
    }

    /// Collapse the medium into a single partition.
    ///
    /// At partition count 1 the firmware disregards the type, unit and size
    /// fields, but still expects well-formed placeholders.
    pub fn create_single_partition(&mut self) -> Result<()> {
        info!("collapsing medium into a single partition");
        self.transport.create_partitions(&PartitionRequest {
            partition_type: TapePartitionType::Unknown,
            count: 1,
            size_unit: 0,
            method: TapePartitionMethod::WrapWise,
            sizes: vec![0],
        })
    }

    /// Let the drive split the medium into its fixed two-partition layout.
    pub fn create_fdp_layout(&mut self) -> Result<()> {
        info!("creating FDP partition layout");
        // The count is disregarded for FDP but has to be greater than 1.
        self.transport.create_partitions(&PartitionRequest {
            partition_type: TapePartitionType::Fdp,
            count: 2,
            size_unit: 0,
            method: TapePartitionMethod::WrapWise,
            sizes: vec![0],
        })
    }

    /// Let the drive split the medium into `partitions` equal partitions.
    pub fn create_sdp_layout(&mut self, partitions: u8) -> Result<()> {
        if partitions < 2 {
            return Err(RustTapesError::parameter_validation(
                "an SDP layout needs at least two partitions",
            ));
        }
        info!("creating SDP partition layout with {} partitions", partitions);
        // Unit and sizes are disregarded for SDP; only the count matters.
        self.transport.create_partitions(&PartitionRequest {
            partition_type: TapePartitionType::Sdp,
            count: partitions,
            size_unit: 0,
            method: TapePartitionMethod::WrapWise,
            sizes: vec![0; partitions as usize],
        })
    }

    /// Partition the medium into explicit per-partition wrap counts.
    pub fn create_idp_layout(&mut self, wraps: &[u32]) -> Result<()> {
        let media = self.require_media()?;
        let (size_unit, sizes) = encode_wrap_layout(media, wraps)?;
        info!(
            "creating IDP partition layout on {}: wraps {:?}, size unit {}, scaled sizes {:?}",
            media.name, wraps, size_unit, sizes
        );
        self.transport.create_partitions(&PartitionRequest {
            partition_type: TapePartitionType::Idp,
            count: sizes.len() as u8,
            size_unit,
            method: TapePartitionMethod::WrapWise,
            sizes,
        })
    }

    /// Query and decode the partition layout of the mounted medium.
    pub fn partition_layout(&mut self) -> Result<TapePartitionLayout> {
        let media = self.require_media()?;
        let raw = self.transport.query_partitions()?;
        debug!(
            "partition page: {} of max {} partitions, unit {}, method {}",
            raw.number_of_partitions, raw.max_partitions, raw.size_unit, raw.partition_method
        );
        decode_wrap_layout(media, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lto7() -> &'static TapeTypeProperties {
        TapeTypeProperties::lookup(0x5c, 0x78).unwrap()
    }

    /// Transport stub for a drive with an LTO-7 cartridge mounted.
    #[derive(Default)]
    struct MockTape {
        partition_page: RawPartitionQuery,
        created: Vec<PartitionRequest>,
        operations: Vec<(TapeOp, i64)>,
        locates: Vec<(PositionUnit, u64)>,
        unknown_medium: bool,
    }

    impl TapeTransport for MockTape {
        fn sync(&mut self) -> Result<()> {
            Ok(())
        }

        fn query_position(&mut self) -> Result<TapePosition> {
            Ok(TapePosition {
                block_id: 1234,
                partition_number: 1,
                ..TapePosition::default()
            })
        }

        fn locate(&mut self, unit: PositionUnit, id: u64) -> Result<()> {
            self.locates.push((unit, id));
            Ok(())
        }

        fn send_operation(&mut self, op: TapeOp, count: i64) -> Result<()> {
            self.operations.push((op, count));
            Ok(())
        }

        fn set_active_partition(&mut self, _id: u8) -> Result<()> {
            Ok(())
        }

        fn query_partitions(&mut self) -> Result<RawPartitionQuery> {
            Ok(self.partition_page.clone())
        }

        fn create_partitions(&mut self, request: &PartitionRequest) -> Result<()> {
            self.created.push(request.clone());
            Ok(())
        }

        fn query_parameters(&mut self) -> Result<DriveParameters> {
            if self.unknown_medium {
                Ok(DriveParameters::default())
            } else {
                Ok(DriveParameters {
                    density_code: 0x5c,
                    medium_type: 0x78,
                    ..DriveParameters::default()
                })
            }
        }

        fn inquiry(&mut self) -> Result<DriveIdentity> {
            Ok(DriveIdentity {
                vendor_id: "IBM".into(),
                product_id: "ULT3580-TD7".into(),
                revision: "J4D0".into(),
            })
        }
    }

    #[test]
    fn encode_accepts_wraps_that_tile_the_medium() {
        // 55 + 55 data wraps + 2 guard wraps == 112.
        let (unit, sizes) = encode_wrap_layout(lto7(), &[55, 55]).unwrap();
        assert_eq!(unit, 8);
        assert_eq!(sizes, vec![29464, 29464]);
        for &size in &sizes {
            assert!((1..65535).contains(&size));
        }
    }

    #[test]
    fn encode_rejects_wraps_that_do_not_tile_the_medium() {
        // 54 + 54 + 2 == 110 != 112.
        assert!(matches!(
            encode_wrap_layout(lto7(), &[54, 54]),
            Err(RustTapesError::InvalidPartitionGeometry(_))
        ));
        assert!(matches!(
            encode_wrap_layout(lto7(), &[112, 1]),
            Err(RustTapesError::InvalidPartitionGeometry(_))
        ));
    }

    #[test]
    fn encode_single_partition_spans_all_wraps() {
        let (unit, sizes) = encode_wrap_layout(lto7(), &[112]).unwrap();
        assert_eq!(sizes.len(), 1);
        // 6 TB / 10^8 = 60000, the first unit that fits the 16-bit field.
        assert_eq!(unit, 8);
        assert_eq!(sizes[0], 60000);
    }

    #[test]
    fn encode_chooses_smallest_valid_size_unit() {
        // Small synthetic medium where unit 0 already satisfies both
        // bounds; any larger unit would also fit but must not be chosen.
        let media = TapeTypeProperties {
            name: "TEST",
            wraps: 10,
            size: 10_000,
        };
        let (unit, sizes) = encode_wrap_layout(&media, &[4, 4]).unwrap();
        assert_eq!(unit, 0);
        assert_eq!(sizes, vec![4000, 4000]);
    }

    #[test]
    fn encode_scales_up_only_when_field_would_overflow() {
        let media = TapeTypeProperties {
            name: "TEST",
            wraps: 4,
            size: 4_000_000_000,
        };
        // 1e9 bytes per partition: units 0..=4 overflow the 16-bit field,
        // unit 5 yields 10000.
        let (unit, sizes) = encode_wrap_layout(&media, &[1, 1]).unwrap();
        assert_eq!(unit, 5);
        assert_eq!(sizes, vec![10000, 10000]);
    }

    #[test]
    fn encode_fails_when_no_unit_fits() {
        // One partition is so much smaller than the other that no exponent
        // can keep both within [1, 65534].
        let media = TapeTypeProperties {
            name: "TEST",
            wraps: 10_000_002,
            size: 100_000_000_000_000,
        };
        assert!(matches!(
            encode_wrap_layout(&media, &[1, 9_999_999]),
            Err(RustTapesError::NoValidScaleFound)
        ));
    }

    #[test]
    fn encode_validates_argument_shape() {
        assert!(matches!(
            encode_wrap_layout(lto7(), &[]),
            Err(RustTapesError::ParameterValidation(_))
        ));
        let too_many = vec![1u32; MAX_PARTITIONS + 1];
        assert!(matches!(
            encode_wrap_layout(lto7(), &too_many),
            Err(RustTapesError::ParameterValidation(_))
        ));
    }

    #[test]
    fn decode_reverses_encode_exactly() {
        for wraps in [vec![55u32, 55], vec![20, 90], vec![112], vec![10, 20, 30, 46]] {
            let (unit, sizes) = encode_wrap_layout(lto7(), &wraps).unwrap();
            let raw = RawPartitionQuery {
                max_partitions: 4,
                active_partition: 0,
                number_of_partitions: sizes.len() as u8,
                size_unit: unit,
                partition_method: TapePartitionMethod::WrapWise.code(),
                sizes,
            };
            let layout = decode_wrap_layout(lto7(), &raw).unwrap();
            assert_eq!(layout.partitions, wraps);
            assert_eq!(layout.partition_method, TapePartitionMethod::WrapWise);
        }
    }

    #[test]
    fn decode_truncates_size_table_to_reported_count() {
        let (unit, mut sizes) = encode_wrap_layout(lto7(), &[55, 55]).unwrap();
        let count = sizes.len() as u8;
        sizes.resize(MAX_PARTITIONS, 0);
        let raw = RawPartitionQuery {
            max_partitions: 4,
            active_partition: 1,
            number_of_partitions: count,
            size_unit: unit,
            partition_method: TapePartitionMethod::WrapWise.code(),
            sizes,
        };
        let layout = decode_wrap_layout(lto7(), &raw).unwrap();
        assert_eq!(layout.partitions, vec![55, 55]);
        assert_eq!(layout.active_partition, 1);
    }

    #[test]
    fn decode_flags_inconsistent_reports() {
        // A report whose wrap sum cannot tile the medium is a fault of the
        // media/firmware pairing, not something to silently correct.
        let raw = RawPartitionQuery {
            max_partitions: 4,
            active_partition: 0,
            number_of_partitions: 2,
            size_unit: 8,
            partition_method: TapePartitionMethod::WrapWise.code(),
            sizes: vec![29464, 20000],
        };
        assert!(matches!(
            decode_wrap_layout(lto7(), &raw),
            Err(RustTapesError::LayoutConsistencyFault(_))
        ));
    }

    #[test]
    fn idp_layout_submits_encoded_request() {
        let mut tape = Tape::new(MockTape::default());
        tape.create_idp_layout(&[55, 55]).unwrap();
        assert_eq!(
            tape.transport.created,
            vec![PartitionRequest {
                partition_type: TapePartitionType::Idp,
                count: 2,
                size_unit: 8,
                method: TapePartitionMethod::WrapWise,
                sizes: vec![29464, 29464],
            }]
        );
    }

    #[test]
    fn idp_layout_with_bad_geometry_submits_nothing() {
        let mut tape = Tape::new(MockTape::default());
        assert!(matches!(
            tape.create_idp_layout(&[54, 54]),
            Err(RustTapesError::InvalidPartitionGeometry(_))
        ));
        assert!(tape.transport.created.is_empty());
    }

    #[test]
    fn idp_layout_requires_known_medium() {
        let mut tape = Tape::new(MockTape {
            unknown_medium: true,
            ..MockTape::default()
        });
        assert!(matches!(
            tape.create_idp_layout(&[55, 55]),
            Err(RustTapesError::UnknownMedium { .. })
        ));
        assert!(tape.transport.created.is_empty());
    }

    #[test]
    fn single_partition_request_uses_placeholder_fields() {
        let mut tape = Tape::new(MockTape::default());
        tape.create_single_partition().unwrap();
        assert_eq!(
            tape.transport.created,
            vec![PartitionRequest {
                partition_type: TapePartitionType::Unknown,
                count: 1,
                size_unit: 0,
                method: TapePartitionMethod::WrapWise,
                sizes: vec![0],
            }]
        );
    }

    #[test]
    fn fdp_request_carries_count_two() {
        let mut tape = Tape::new(MockTape::default());
        tape.create_fdp_layout().unwrap();
        let request = &tape.transport.created[0];
        assert_eq!(request.partition_type, TapePartitionType::Fdp);
        assert_eq!(request.count, 2);
    }

    #[test]
    fn sdp_request_carries_count_only() {
        let mut tape = Tape::new(MockTape::default());
        tape.create_sdp_layout(4).unwrap();
        assert_eq!(
            tape.transport.created,
            vec![PartitionRequest {
                partition_type: TapePartitionType::Sdp,
                count: 4,
                size_unit: 0,
                method: TapePartitionMethod::WrapWise,
                sizes: vec![0; 4],
            }]
        );

        assert!(matches!(
            tape.create_sdp_layout(1),
            Err(RustTapesError::ParameterValidation(_))
        ));
    }

    #[test]
    fn partition_layout_decodes_drive_report() {
        let (unit, sizes) = encode_wrap_layout(lto7(), &[55, 55]).unwrap();
        let mut tape = Tape::new(MockTape {
            partition_page: RawPartitionQuery {
                max_partitions: 4,
                active_partition: 0,
                number_of_partitions: 2,
                size_unit: unit,
                partition_method: TapePartitionMethod::WrapWise.code(),
                sizes,
            },
            ..MockTape::default()
        });
        let layout = tape.partition_layout().unwrap();
        assert_eq!(layout.partitions, vec![55, 55]);
        assert_eq!(layout.max_partitions, 4);
    }

    #[test]
    fn primitive_operations_map_to_driver_opcodes() {
        let mut tape = Tape::new(MockTape::default());
        tape.rewind().unwrap();
        tape.erase().unwrap();
        tape.retension().unwrap();
        tape.write_filemark().unwrap();
        tape.load().unwrap();
        tape.unload().unwrap();
        tape.seek_eod().unwrap();
        let opcodes: Vec<i16> = tape
            .transport
            .operations
            .iter()
            .map(|(op, _)| op.code())
            .collect();
        assert_eq!(opcodes, vec![6, 7, 8, 10, 15, 16, 32]);
    }

    #[test]
    fn seeks_use_the_right_position_unit() {
        let mut tape = Tape::new(MockTape::default());
        tape.seek_block(42).unwrap();
        tape.seek_filemark(3).unwrap();
        assert_eq!(
            tape.transport.locates,
            vec![(PositionUnit::Block, 42), (PositionUnit::File, 3)]
        );
        assert_eq!(tape.position().unwrap(), 1234);
    }
}
