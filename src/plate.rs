//! 96-well plate addressing. Ordinals run down each column before moving right:
//! 1 → A1, 2 → B1, ..., 8 → H1, 9 → A2.

use crate::consts::{PLATE_COLUMNS, PLATE_ROWS, PLATE_WELLS};
use crate::error::{ClipForgeError, ClipResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct WellAddress {
    row: u8,
    column: u8,
}

impl WellAddress {
    /// `row` is 0-based (0 = A), `column` is 1-based.
    pub fn new(row: u8, column: u8) -> ClipResult<Self> {
        if (row as usize) < PLATE_ROWS && column >= 1 && (column as usize) <= PLATE_COLUMNS {
            Ok(Self { row, column })
        } else {
            Err(ClipForgeError::InvalidWell(format!("row {} column {}", row, column)))
        }
    }

    pub fn row_letter(&self) -> char {
        (b'A' + self.row) as char
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    /// Position in fill order, 1-based.
    pub fn ordinal(&self) -> usize {
        (self.column as usize - 1) * PLATE_ROWS + self.row as usize + 1
    }
}

impl Ord for WellAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl PartialOrd for WellAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for WellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.column)
    }
}

impl FromStr for WellAddress {
    type Err = ClipForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars
            .next()
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| ('A'..='H').contains(c))
            .ok_or_else(|| ClipForgeError::InvalidWell(s.to_string()))?;
        let column: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| ClipForgeError::InvalidWell(s.to_string()))?;
        Self::new(letter as u8 - b'A', column).map_err(|_| ClipForgeError::InvalidWell(s.to_string()))
    }
}

impl From<WellAddress> for String {
    fn from(w: WellAddress) -> Self {
        w.to_string()
    }
}

impl TryFrom<String> for WellAddress {
    type Error = ClipForgeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Maps a 1-based ordinal to its well on a single plate.
pub fn nth_well(ordinal: usize) -> ClipResult<WellAddress> {
    if ordinal == 0 || ordinal > PLATE_WELLS {
        return Err(ClipForgeError::PlateOverflow {
            ordinal,
            capacity: PLATE_WELLS,
        });
    }
    let zero = ordinal - 1;
    Ok(WellAddress {
        row: (zero % PLATE_ROWS) as u8,
        column: (zero / PLATE_ROWS + 1) as u8,
    })
}

/// Hands out wells in strictly increasing ordinal order, never reusing one.
#[derive(Debug, Clone)]
pub struct WellAllocator {
    next: usize,
}

impl WellAllocator {
    /// The first `offset` wells are treated as reserved.
    pub fn new(offset: usize) -> Self {
        Self { next: offset + 1 }
    }

    pub fn next_ordinal(&self) -> usize {
        self.next
    }

    pub fn remaining(&self) -> usize {
        (PLATE_WELLS + 1).saturating_sub(self.next)
    }

    pub fn allocate(&mut self) -> ClipResult<WellAddress> {
        let well = nth_well(self.next)?;
        self.next += 1;
        Ok(well)
    }

    pub fn allocate_many(&mut self, count: usize) -> ClipResult<Vec<WellAddress>> {
        (0..count).map(|_| self.allocate()).collect()
    }
}
