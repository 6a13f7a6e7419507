use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

pub const PENCE_PER_POUND: u64 = 100;
pub const VAT_RATE: f64 = 0.20;

/// Boiler outputs (kW) the catalog is stocked in.
pub const BOILER_SIZE_LADDER_KW: [u32; 8] = [24, 28, 30, 32, 35, 40, 42, 50];

/// Cylinder capacities (litres) the catalog is stocked in. Zero stands for "no cylinder".
pub const CYLINDER_SIZE_LADDER_L: [u32; 10] = [0, 120, 150, 170, 210, 250, 300, 350, 400, 500];

/// Snap a continuous value up to the nearest rung of a ladder at or above it, saturating at the
/// top rung.
pub fn snap_up(value: f64, ladder: &[u32]) -> u32 {
    ladder
        .iter()
        .copied()
        .find(|rung| *rung as f64 >= value)
        .or_else(|| ladder.last().copied())
        .unwrap_or_default()
}

/// A monetary amount in minor units (pence).
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(transparent)]
#[repr(transparent)]
pub struct Pence(pub u64);

impl Pence {
    pub const ZERO: Pence = Pence(0);

    pub const fn from_pounds(pounds: u64) -> Self {
        Self(pounds * PENCE_PER_POUND)
    }

    /// Scale by a multiplier, rounding to the nearest penny.
    pub fn scaled(self, factor: f64) -> Self {
        Self((self.0 as f64 * factor).round() as u64)
    }

    /// VAT due on this amount at the standard rate, rounded to the nearest penny.
    pub fn vat(self) -> Self {
        self.scaled(VAT_RATE)
    }
}

impl Add for Pence {
    type Output = Pence;

    fn add(self, rhs: Self) -> Self::Output {
        Pence(self.0 + rhs.0)
    }
}

impl AddAssign for Pence {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Pence {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Pence::ZERO, Add::add)
    }
}

impl Display for Pence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "£{}.{:02}",
            self.0 / PENCE_PER_POUND,
            self.0 % PENCE_PER_POUND
        )
    }
}
