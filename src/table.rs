// Copyright 2024 Mikael Lund
//
// Licensed under the Apache license, version 2.0 (the "license");
// you may not use this file except in compliance with the license.
// You may obtain a copy of the license at
//
//     http://www.apache.org/licenses/license-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the license is distributed on an "as is" basis,
// without warranties or conditions of any kind, either express or implied.
// See the license for the specific language governing permissions and
// limitations under the license.

//! Potential tables for table-interpolated non-bonded force evaluation.
//!
//! Each row holds the separation followed by potential and force of the
//! Coulomb, dispersion and repulsion terms. The dispersion columns carry
//! the attractive sign, −r⁻ᵃ, and power-law columns are zero at and beyond
//! their cutoff.

use crate::twobody::{RadialTwobody, ReactionField, ShiftedPower};
use crate::{Cutoff, ParameterError};
use std::num::NonZeroU32;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical parameters of a table
#[derive(Debug, Clone, PartialEq, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(deny_unknown_fields)
)]
pub struct TableParameters {
    /// Relative permittivity inside the cutoff, εr
    #[cfg_attr(feature = "serde", serde(rename = "epsr"))]
    pub permittivity: f64,
    /// Relative permittivity of the reaction-field continuum, εrf
    #[cfg_attr(feature = "serde", serde(rename = "epsrf"))]
    pub permittivity_rf: f64,
    /// Reaction-field cutoff
    #[cfg_attr(feature = "serde", serde(rename = "rc"))]
    pub coulomb_cutoff: f64,
    /// Dispersion power, e.g. 6
    #[cfg_attr(feature = "serde", serde(rename = "ld"))]
    pub dispersion_power: f64,
    /// Repulsion power, e.g. 12
    #[cfg_attr(feature = "serde", serde(rename = "lr"))]
    pub repulsion_power: f64,
    /// Cutoff of the dispersion and repulsion terms
    #[cfg_attr(feature = "serde", serde(rename = "lc"))]
    pub lj_cutoff: f64,
    /// Inner radius of force shifting; negative for no shifting
    #[cfg_attr(feature = "serde", serde(rename = "ls"))]
    pub shift_radius: f64,
}

impl TableParameters {
    /// Parameters in command-line order: `epsR epsRF RC LD LR LC LS`
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        permittivity: f64,
        permittivity_rf: f64,
        coulomb_cutoff: f64,
        dispersion_power: f64,
        repulsion_power: f64,
        lj_cutoff: f64,
        shift_radius: f64,
    ) -> Self {
        Self {
            permittivity,
            permittivity_rf,
            coulomb_cutoff,
            dispersion_power,
            repulsion_power,
            lj_cutoff,
            shift_radius,
        }
    }

    /// Column values in command-line order
    const fn values(&self) -> [f64; 7] {
        [
            self.permittivity,
            self.permittivity_rf,
            self.coulomb_cutoff,
            self.dispersion_power,
            self.repulsion_power,
            self.lj_cutoff,
            self.shift_radius,
        ]
    }

    /// True if the power-law terms are force-shifted
    pub fn is_shifted(&self) -> bool {
        self.shift_radius >= 0.0
    }

    /// Reject parameters for which the table formulas divide by zero
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.permittivity == 0.0 {
            return Err(ParameterError::ZeroPermittivity);
        }
        if 2.0 * self.permittivity_rf + self.permittivity == 0.0 {
            return Err(ParameterError::SingularReactionField {
                permittivity: self.permittivity,
                permittivity_rf: self.permittivity_rf,
            });
        }
        if self.coulomb_cutoff == 0.0 {
            return Err(ParameterError::ZeroCoulombCutoff);
        }
        if self.is_shifted() {
            if self.lj_cutoff == 0.0 {
                return Err(ParameterError::ZeroShiftedCutoff);
            }
            if self.lj_cutoff == self.shift_radius {
                return Err(ParameterError::DegenerateShift {
                    cutoff: self.lj_cutoff,
                    shift_radius: self.shift_radius,
                });
            }
        }
        Ok(())
    }

    pub fn reaction_field(&self) -> ReactionField {
        ReactionField::new(self.permittivity, self.permittivity_rf, self.coulomb_cutoff)
    }

    pub fn dispersion(&self) -> ShiftedPower {
        ShiftedPower::new(self.dispersion_power, self.lj_cutoff, self.shift_radius)
    }

    pub fn repulsion(&self) -> ShiftedPower {
        ShiftedPower::new(self.repulsion_power, self.lj_cutoff, self.shift_radius)
    }
}

/// Uniform grid of separations, r = i / divisor for i = first, first + step, ..., last
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct DistanceGrid {
    first: u32,
    last: u32,
    step: NonZeroU32,
    divisor: f64,
}

impl Default for DistanceGrid {
    /// 1500 points from 0.002 to 3.000
    fn default() -> Self {
        Self {
            first: 2,
            last: 3000,
            step: NonZeroU32::new(2).unwrap_or(NonZeroU32::MIN),
            divisor: 1e3,
        }
    }
}

impl DistanceGrid {
    /// Grid of integers `first..=last` in steps of `step`, each divided by `divisor`
    pub const fn new(first: u32, last: u32, step: NonZeroU32, divisor: f64) -> Self {
        Self {
            first,
            last,
            step,
            divisor,
        }
    }

    /// Number of sampled distances
    pub fn len(&self) -> usize {
        if self.last < self.first {
            0
        } else {
            ((self.last - self.first) / self.step.get() + 1) as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sampled distances in increasing order
    pub fn distances(&self) -> impl Iterator<Item = f64> + '_ {
        (self.first..=self.last)
            .step_by(self.step.get() as usize)
            .map(|i| {
                let r = f64::from(i) / self.divisor;
                // negative zero is written as plain zero
                if r == 0.0 {
                    0.0
                } else {
                    r
                }
            })
    }
}

/// One table line: separation followed by potential and force of each term
#[derive(Debug, Clone, PartialEq, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct TableRow {
    pub distance: f64,
    pub coulomb_potential: f64,
    pub coulomb_force: f64,
    pub dispersion_potential: f64,
    pub dispersion_force: f64,
    pub repulsion_potential: f64,
    pub repulsion_force: f64,
}

impl TableRow {
    /// Column names in output order
    pub const COLUMNS: [&'static str; 7] = [
        "r",
        "u_coulomb",
        "f_coulomb",
        "u_dispersion",
        "f_dispersion",
        "u_repulsion",
        "f_repulsion",
    ];

    /// Columns in output order
    pub const fn values(&self) -> [f64; 7] {
        [
            self.distance,
            self.coulomb_potential,
            self.coulomb_force,
            self.dispersion_potential,
            self.dispersion_force,
            self.repulsion_potential,
            self.repulsion_force,
        ]
    }
}

/// Value inside the cutoff, zero at and beyond
#[inline]
fn truncated(distance: f64, cutoff: f64, value: impl FnOnce() -> f64) -> f64 {
    if distance < cutoff {
        value()
    } else {
        0.0
    }
}

/// Row-ordered potential table starting with an all-zero row for r = 0
///
/// # Examples
/// ~~~
/// use pairtable::{PotentialTable, TableParameters};
/// let parameters = TableParameters::new(1.0, 1.0, 1.2, 6.0, 12.0, 1.2, -1.0);
/// let table = PotentialTable::generate(&parameters).unwrap();
/// let row = table.rows()[500];
/// assert_eq!(row.distance, 1.0);
/// assert!((row.coulomb_potential - 1.0 / 6.0).abs() < 1e-12);
/// assert_eq!(row.dispersion_potential, -1.0);
/// assert_eq!(row.repulsion_potential, 1.0);
/// ~~~
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct PotentialTable {
    rows: Vec<TableRow>,
}

impl PotentialTable {
    /// Tabulate on the default grid
    pub fn generate(parameters: &TableParameters) -> Result<Self, ParameterError> {
        Self::generate_on_grid(parameters, &DistanceGrid::default())
    }

    /// Tabulate on an arbitrary grid
    pub fn generate_on_grid(
        parameters: &TableParameters,
        grid: &DistanceGrid,
    ) -> Result<Self, ParameterError> {
        parameters.validate()?;
        let coulomb = parameters.reaction_field();
        let dispersion = parameters.dispersion();
        let repulsion = parameters.repulsion();

        let mut rows = Vec::with_capacity(grid.len() + 1);
        rows.push(TableRow::default());
        rows.extend(
            grid.distances()
                .map(|r| Self::row(r, &coulomb, &dispersion, &repulsion)),
        );
        if parameters.values().iter().all(|value| value.is_finite()) {
            Self::check_finite(&rows)?;
        }
        tracing::info!(rows = rows.len(), shifted = parameters.is_shifted(), "generated table");
        Ok(Self { rows })
    }

    /// Finite inputs must not overflow into non-finite entries
    fn check_finite(rows: &[TableRow]) -> Result<(), ParameterError> {
        for row in rows {
            let values = row.values();
            if let Some(column) = values.iter().position(|value| !value.is_finite()) {
                return Err(ParameterError::NonFiniteEntry {
                    distance: row.distance,
                    column: TableRow::COLUMNS[column],
                });
            }
        }
        Ok(())
    }

    fn row(
        distance: f64,
        coulomb: &ReactionField,
        dispersion: &ShiftedPower,
        repulsion: &ShiftedPower,
    ) -> TableRow {
        let r = distance;
        TableRow {
            distance,
            coulomb_potential: coulomb.potential(r),
            coulomb_force: coulomb.force(r),
            dispersion_potential: truncated(r, dispersion.cutoff(), || -dispersion.potential(r)),
            dispersion_force: truncated(r, dispersion.cutoff(), || -dispersion.force(r)),
            repulsion_potential: truncated(r, repulsion.cutoff(), || repulsion.potential(r)),
            repulsion_force: truncated(r, repulsion.cutoff(), || repulsion.force(r)),
        }
    }

    /// All rows including the leading zero row
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Rows of sampled distances, i.e. without the leading zero row
    pub fn sampled(&self) -> &[TableRow] {
        self.rows.get(1..).unwrap_or_default()
    }
}
