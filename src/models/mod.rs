use std::fmt;

use serde::{Deserialize, Serialize};

pub mod container;
pub mod garden;
pub mod layout;
pub mod plant;
pub mod report;

/// A zero-based (row, col) position within a container.
///
/// Ordering is row-major, which is also the tie-break order used when
/// several cells share a harvest date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row label as used on garden plans: A..Z, then AA, AB, ...
    pub fn row_label(&self) -> String {
        let mut n = self.row;
        let mut label = Vec::new();
        loop {
            label.push(b'A' + (n % 26) as u8);
            match (n / 26).checked_sub(1) {
                Some(next) => n = next,
                None => break,
            }
        }
        label.reverse();
        String::from_utf8(label).unwrap_or_default()
    }
}

/// Renders as row letter plus one-based column, e.g. `A1`, `C12`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_label(), self.col as u128 + 1)
    }
}
