use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FlagError, Result};

bitflags::bitflags! {
    /// Housekeeping status of a hotel room.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RoomStatus: u8 {
        const VACANT       = 1 << 0;
        const CLEAN        = 1 << 1;
        const INSPECTED    = 1 << 2;
        const MAINTENANCE  = 1 << 3;
        const OUT_OF_ORDER = 1 << 4;
        const RESERVED     = 1 << 5;

        /// Ready to sell
        const VACANT_CLEAN_INSPECTED = Self::VACANT.bits() | Self::CLEAN.bits() | Self::INSPECTED.bits();
    }
}

impl_serde_for_bitflags!(RoomStatus);

impl RoomStatus {
    /// `VACANT` plus the complement of `CLEAN` across all 8 bits (`0xFD`).
    ///
    /// Sets every bit except `CLEAN`, including bits with no name. Widening
    /// the underlying integer changes this value.
    pub const VACANT_DIRTY: Self =
        Self::from_bits_retain(Self::VACANT.bits() | !Self::CLEAN.bits());

    const LABELS: [(Self, &'static str); 6] = [
        (Self::VACANT, "Vacant"),
        (Self::CLEAN, "Clean"),
        (Self::INSPECTED, "Inspected"),
        (Self::MAINTENANCE, "Maintenance"),
        (Self::OUT_OF_ORDER, "Out of Order"),
        (Self::RESERVED, "Reserved"),
    ];

    /// Label of this exact value, or `"Unknown"` if it is not a single named status.
    ///
    /// This is an equality lookup, so `0`, combined values and unnamed bits
    /// are all `"Unknown"`.
    pub fn label(self) -> &'static str {
        Self::LABELS
            .iter()
            .find(|(status, _)| *status == self)
            .map_or("Unknown", |(_, label)| *label)
    }

    /// Labels of every named status set in this value, lowest bit first.
    pub fn labels(self) -> impl Iterator<Item = &'static str> {
        Self::LABELS
            .into_iter()
            .filter(move |(status, _)| self.contains(*status))
            .map(|(_, label)| label)
    }

    /// Parse a `|`-separated list of labels, e.g. `"Vacant | Clean"`.
    pub fn parse_list(s: &str) -> Result<Self> {
        super::parse_label_list(s)
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoomStatus {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::LABELS
            .iter()
            .find(|(_, label)| *label == s)
            .map(|(status, _)| *status)
            .ok_or_else(|| FlagError::UnknownLabel(s.to_string()))
    }
}

/// A room and its current status bits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub status: RoomStatus,
}

impl Room {
    pub fn new(name: String, status: RoomStatus) -> Self {
        Self { name, status }
    }

    /// True if any bit of `status` is set on the room.
    ///
    /// Passing a combined value asks "at least one of", not "all of".
    pub fn has_status(&self, status: RoomStatus) -> bool {
        self.status.intersects(status)
    }

    pub fn set_status(&mut self, status: RoomStatus) {
        let before = self.status;
        self.status.insert(status);
        tracing::trace!(room = %self.name, before = before.bits(), after = self.status.bits(), "status set");
    }

    /// Clear exactly the bits of `status`, leaving every other bit alone.
    pub fn clear_status(&mut self, status: RoomStatus) {
        let before = self.status;
        self.status.remove(status);
        tracing::trace!(room = %self.name, before = before.bits(), after = self.status.bits(), "status cleared");
    }

    pub fn toggle_status(&mut self, status: RoomStatus) {
        let before = self.status;
        self.status.toggle(status);
        tracing::trace!(room = %self.name, before = before.bits(), after = self.status.bits(), "status toggled");
    }
}
