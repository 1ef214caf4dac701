//! Library inventory model and cartridge movement policy.
//!
//! A media changer is a set of addressable elements: the robots that move
//! cartridges, the storage slots, the tape drives, and the import/export
//! stations. Every policy decision starts from a fresh inventory snapshot
//! because cartridges can move between calls; the snapshot is never cached
//! and never mutated.
//!
//! The policy itself is pure: `plan_load` and `plan_unload` turn a snapshot
//! plus arguments into the list of moves to issue, so they are testable
//! without a device. [`Changer`] wires the plans to a [`ChangerTransport`].

use crate::error::{Result, RustTapesError};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// Kind of addressable unit inside a media changer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ElementKind {
    Robot,
    Slot,
    Drive,
    IeStation,
}

/// One element record as reported by the changer transport, before any
/// normalization.
#[derive(Debug, Clone, Default)]
pub struct RawElement {
    pub address: u16,
    /// Origin of the cartridge residing here; the driver reports 0 when
    /// there is none.
    pub source_address: u16,
    pub is_full: bool,
    pub barcode: Option<String>,
}

/// Raw per-category element lists as reported by the changer transport.
#[derive(Debug, Clone, Default)]
pub struct RawInventory {
    pub robots: Vec<RawElement>,
    pub slots: Vec<RawElement>,
    pub drives: Vec<RawElement>,
    pub ie_stations: Vec<RawElement>,
}

/// Blocking access to a medium changer device.
///
/// Implementations must not retry or reinterpret failures; errors surface
/// to the policy caller unmodified.
pub trait ChangerTransport {
    fn inventory(&mut self) -> Result<RawInventory>;
    fn move_cartridge(&mut self, source: u16, target: u16, robot: u16) -> Result<()>;
}

/// One slot-like addressable unit in the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryElement {
    pub kind: ElementKind,
    pub address: u16,
    /// Where the cartridge currently residing here originated. Only drives
    /// record a meaningful origin.
    pub source_address: Option<u16>,
    pub is_full: bool,
    /// Absent when the element is empty or the label could not be read.
    pub barcode: Option<String>,
}

impl LibraryElement {
    fn from_raw(kind: ElementKind, raw: RawElement) -> Self {
        LibraryElement {
            kind,
            address: raw.address,
            source_address: (raw.source_address > 0).then_some(raw.source_address),
            is_full: raw.is_full,
            barcode: raw.barcode.filter(|barcode| !barcode.is_empty()),
        }
    }

    pub fn robot(raw: RawElement) -> Self {
        Self::from_raw(ElementKind::Robot, raw)
    }

    pub fn slot(raw: RawElement) -> Self {
        Self::from_raw(ElementKind::Slot, raw)
    }

    pub fn drive(raw: RawElement) -> Self {
        Self::from_raw(ElementKind::Drive, raw)
    }

    pub fn ie_station(raw: RawElement) -> Self {
        Self::from_raw(ElementKind::IeStation, raw)
    }
}

/// Immutable snapshot of the library contents, in element-listing order.
#[derive(Debug, Clone, Serialize)]
pub struct LibraryInventory {
    pub robots: Vec<LibraryElement>,
    pub slots: Vec<LibraryElement>,
    pub drives: Vec<LibraryElement>,
    pub ie_stations: Vec<LibraryElement>,
}

impl LibraryInventory {
    pub fn from_raw(raw: RawInventory) -> Self {
        LibraryInventory {
            robots: raw.robots.into_iter().map(LibraryElement::robot).collect(),
            slots: raw.slots.into_iter().map(LibraryElement::slot).collect(),
            drives: raw.drives.into_iter().map(LibraryElement::drive).collect(),
            ie_stations: raw
                .ie_stations
                .into_iter()
                .map(LibraryElement::ie_station)
                .collect(),
        }
    }

    pub fn all_elements(&self) -> impl Iterator<Item = &LibraryElement> {
        self.robots
            .iter()
            .chain(&self.slots)
            .chain(&self.drives)
            .chain(&self.ie_stations)
    }

    /// Address -> element view. Addresses are unique across the snapshot;
    /// a duplicate means the transport returned corrupt data.
    pub fn address_map(&self) -> HashMap<u16, &LibraryElement> {
        let map: HashMap<u16, &LibraryElement> =
            self.all_elements().map(|element| (element.address, element)).collect();
        debug_assert_eq!(map.len(), self.all_elements().count());
        map
    }

    /// Barcode -> element view over the elements that carry a barcode.
    pub fn barcode_map(&self) -> HashMap<&str, &LibraryElement> {
        self.all_elements()
            .filter_map(|element| element.barcode.as_deref().map(|barcode| (barcode, element)))
            .collect()
    }
}

/// A single cartridge movement between two element addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartridgeMove {
    pub source: u16,
    pub target: u16,
}

/// Decide the moves that bring the cartridge labelled `barcode` into the
/// drive at `drive_address`, acting as the robot at `robot_address`.
///
/// The returned list is the complete physical side effect of the operation:
/// empty when the cartridge is already loaded, one move in the common case,
/// and an unload move followed by the load move when the target drive holds
/// another cartridge.
pub fn plan_load(
    inventory: &LibraryInventory,
    barcode: &str,
    drive_address: u16,
    robot_address: u16,
) -> Result<Vec<CartridgeMove>> {
    let by_address = inventory.address_map();
    let robot = by_address
        .get(&robot_address)
        .copied()
        .ok_or(RustTapesError::UnknownAddress(robot_address))?;
    let drive = by_address
        .get(&drive_address)
        .copied()
        .ok_or(RustTapesError::UnknownAddress(drive_address))?;

    let holder = inventory
        .barcode_map()
        .get(barcode)
        .copied()
        .ok_or_else(|| RustTapesError::CartridgeNotFound(barcode.to_string()))?;

    // A cartridge gripped by a different robot cannot be handed off here.
    // Identity is by address, not structural equality: full/empty state may
    // differ between reads of the same element.
    if holder.kind == ElementKind::Robot && holder.address != robot.address {
        return Err(RustTapesError::CartridgeInWrongRobot(barcode.to_string()));
    }

    // Already in the target drive: loading twice is a no-op.
    if holder.address == drive.address {
        return Ok(Vec::new());
    }

    let mut moves = Vec::new();
    if drive.is_full {
        moves.extend(plan_unload(inventory, drive_address)?);
    }
    moves.push(CartridgeMove {
        source: holder.address,
        target: drive.address,
    });
    Ok(moves)
}

/// Decide the move that clears the drive at `drive_address`.
///
/// Prefers returning the cartridge to the slot it was loaded from. A
/// recorded origin that is occupied, or that no longer resolves, falls
/// through to the first-empty-slot search: another operation may
/// legitimately have filled it since the load.
pub fn plan_unload(inventory: &LibraryInventory, drive_address: u16) -> Result<Vec<CartridgeMove>> {
    let by_address = inventory.address_map();
    let drive = by_address
        .get(&drive_address)
        .copied()
        .ok_or(RustTapesError::UnknownAddress(drive_address))?;

    if !drive.is_full {
        return Ok(Vec::new());
    }

    if let Some(origin) = drive.source_address {
        if let Some(slot) = by_address.get(&origin) {
            if !slot.is_full {
                return Ok(vec![CartridgeMove {
                    source: drive.address,
                    target: slot.address,
                }]);
            }
        }
    }

    let empty_slot = inventory
        .slots
        .iter()
        .find(|slot| !slot.is_full)
        .ok_or(RustTapesError::NoFreeSlot)?;
    Ok(vec![CartridgeMove {
        source: drive.address,
        target: empty_slot.address,
    }])
}

/// High-level changer frontend: fetch a fresh snapshot per call, plan, and
/// issue the planned moves in order.
pub struct Changer<T: ChangerTransport> {
    transport: T,
}

impl<T: ChangerTransport> Changer<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Take a fresh inventory snapshot.
    pub fn inventory(&mut self) -> Result<LibraryInventory> {
        Ok(LibraryInventory::from_raw(self.transport.inventory()?))
    }

    /// Move a single cartridge between element addresses.
    pub fn move_cartridge(&mut self, source: u16, target: u16, robot: u16) -> Result<()> {
        info!(
            "moving cartridge: {} -> {} (robot {})",
            source, target, robot
        );
        self.transport.move_cartridge(source, target, robot)
    }

    /// Bring the cartridge labelled `barcode` into the given drive.
    ///
    /// Idempotent: loading an already-loaded cartridge succeeds without
    /// issuing a move. A drive occupied by another cartridge is unloaded
    /// first.
    pub fn load_cartridge(
        &mut self,
        barcode: &str,
        drive_address: u16,
        robot_address: u16,
    ) -> Result<()> {
        let inventory = self.inventory()?;
        let moves = plan_load(&inventory, barcode, drive_address, robot_address)?;
        if moves.is_empty() {
            debug!(
                "cartridge '{}' already loaded in drive {}",
                barcode, drive_address
            );
        }
        for cartridge_move in moves {
            self.move_cartridge(cartridge_move.source, cartridge_move.target, robot_address)?;
        }
        Ok(())
    }

    /// Return the cartridge in the given drive to a slot.
    ///
    /// An empty drive is a no-op success.
    pub fn unload_cartridge(&mut self, drive_address: u16, robot_address: u16) -> Result<()> {
        let inventory = self.inventory()?;
        for cartridge_move in plan_unload(&inventory, drive_address)? {
            self.move_cartridge(cartridge_move.source, cartridge_move.target, robot_address)?;
        }
        Ok(())
    }
}
