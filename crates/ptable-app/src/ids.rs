// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AtomicNumber(u16);

impl AtomicNumber {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u16 {
        self.0
    }
}

impl From<u16> for AtomicNumber {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

/// One-based position in the periodic layout: `column` is the group, `row`
/// the period (lanthanoid and actinoid rows sit below the main body).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridCell {
    pub column: u16,
    pub row: u16,
}

impl GridCell {
    /// Groups in the periodic layout.
    pub const COLUMNS: u16 = 18;
    /// Seven periods, a spacer row, then the lanthanoid and actinoid rows.
    pub const ROWS: u16 = 10;

    pub const fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }

    pub const fn in_layout(self) -> bool {
        self.column >= 1 && self.column <= Self::COLUMNS && self.row >= 1 && self.row <= Self::ROWS
    }
}
