//! Axial hex coordinates and straight-line geometry

use std::{
    fmt::Display,
    ops::{Add, Neg, Sub},
    str::FromStr,
};
use anyhow::Context;

/// A cell on the hex grid, addressed in axial coordinates.
///
/// The implicit third cube coordinate is `s = -q - r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The six adjacent cells, whether or not the board has tiles there.
    pub fn neighbors(&self) -> [Hex; 6] {
        DIRS.map(|dir| self + &dir.into())
    }

    pub fn dist(&self, other: &Hex) -> i32 {
        (other - self).length()
    }

    /// True iff `other` lies on one of the three axial line axes
    /// through `self` (constant q, constant r, or constant s).
    pub fn is_straight_line(&self, other: &Hex) -> bool {
        let d = other - self;
        d.dq == 0 || d.dr == 0 || d.dq == -d.dr
    }

    /// Unit step from `self` toward a distinct collinear target.
    pub fn step_toward(&self, other: &Hex) -> Option<HexDelta> {
        if self == other || !self.is_straight_line(other) {
            return None;
        }
        let d = other - self;
        let len = d.length();
        Some(HexDelta {
            dq: d.dq / len,
            dr: d.dr / len,
        })
    }
}

impl From<(i32, i32)> for Hex {
    fn from((q, r): (i32, i32)) -> Self {
        Self { q, r }
    }
}

impl FromStr for Hex {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (q, r) = s.split_once(',')
            .context("Invalid hex coordinate")?;

        Ok(Hex {
            q: q.parse()?,
            r: r.parse()?,
        })
    }
}

impl Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.q, self.r)
    }
}

/// Difference between two hex cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexDelta {
    pub dq: i32,
    pub dr: i32,
}

impl HexDelta {
    /// Hex distance covered by this delta: `max(|dq|, |dr|, |ds|)`.
    pub fn length(&self) -> i32 {
        [self.dq.abs(), self.dr.abs(), (self.dq + self.dr).abs()]
            .into_iter()
            .max()
            .unwrap()
    }
}

impl Add<&HexDelta> for &Hex {
    type Output = Hex;

    fn add(self, other: &HexDelta) -> Self::Output {
        Hex {
            q: self.q + other.dq,
            r: self.r + other.dr,
        }
    }
}

impl Sub<&HexDelta> for &Hex {
    type Output = Hex;

    fn sub(self, other: &HexDelta) -> Self::Output {
        Hex {
            q: self.q - other.dq,
            r: self.r - other.dr,
        }
    }
}

impl Sub<&Hex> for &Hex {
    type Output = HexDelta;

    fn sub(self, other: &Hex) -> Self::Output {
        HexDelta {
            dq: self.q - other.q,
            dr: self.r - other.r,
        }
    }
}

impl Neg for &HexDelta {
    type Output = HexDelta;

    fn neg(self) -> Self::Output {
        HexDelta {
            dq: -self.dq,
            dr: -self.dr,
        }
    }
}

/// The six sliding directions, pointy-top orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    E,
    NE,
    NW,
    W,
    SW,
    SE,
}

pub const DIRS: [Dir; 6] = [
    Dir::E,
    Dir::NE,
    Dir::NW,
    Dir::W,
    Dir::SW,
    Dir::SE,
];

impl From<Dir> for HexDelta {
    fn from(dir: Dir) -> Self {
        match dir {
            Dir::E => HexDelta { dq: 1, dr: 0 },
            Dir::NE => HexDelta { dq: 1, dr: -1 },
            Dir::NW => HexDelta { dq: 0, dr: -1 },
            Dir::W => HexDelta { dq: -1, dr: 0 },
            Dir::SW => HexDelta { dq: -1, dr: 1 },
            Dir::SE => HexDelta { dq: 0, dr: 1 },
        }
    }
}
