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

//! Inverse-power term with optional force shifting.
//!
//! Reference: GROMACS reference manual, "Modified non-bonded interactions"
//! <https://manual.gromacs.org/current/reference-manual/functions/nonbonded-interactions.html>

use super::RadialTwobody;
use crate::Cutoff;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Polynomial correction coefficients for a force-shifted inverse power
///
/// For $r > r_s$ the force of $r^{-a}$ gets the correction
/// $a\left[A(r-r_s)^2 + B(r-r_s)^3\right]$ and the potential is lowered by the
/// corresponding integral; $C$ shifts the potential everywhere so that it
/// vanishes at $r_c$.
#[derive(Debug, Clone, PartialEq, Copy)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct ShiftCoefficients {
    /// Radius where the force correction switches on, rs
    pub radius: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl ShiftCoefficients {
    /// Solve for A, B, C given exponent, cutoff and shift radius.
    ///
    /// Potential and force are unchanged in slope at `radius` and both reach
    /// zero at `cutoff`. Requires `cutoff != radius` and `cutoff != 0`.
    pub fn new(exponent: f64, cutoff: f64, radius: f64) -> Self {
        let (a, rc, rs) = (exponent, cutoff, radius);
        // integer powers via `powf` to round like libm `pow`
        let width = rc - rs;
        let rc_pow = rc.powf(a + 2.0);
        let coeff_a = -((a + 4.0) * rc - (a + 1.0) * rs) / width.powf(2.0) / rc_pow;
        let coeff_b = ((a + 3.0) * rc - (a + 1.0) * rs) / width.powf(3.0) / rc_pow;
        let coeff_c = rc.powf(-a)
            - a * coeff_a * width.powf(3.0) / 3.0
            - a * coeff_b * width.powf(4.0) / 4.0;
        Self {
            radius,
            a: coeff_a,
            b: coeff_b,
            c: coeff_c,
        }
    }

    /// Potential correction, zero for r ≤ rs
    #[inline]
    fn potential_correction(&self, exponent: f64, distance: f64) -> f64 {
        if distance > self.radius {
            let dr = distance - self.radius;
            exponent * (self.a * dr.powf(3.0) / 3.0 + self.b * dr.powf(4.0) / 4.0)
        } else {
            0.0
        }
    }

    /// Force correction, zero for r ≤ rs
    #[inline]
    fn force_correction(&self, exponent: f64, distance: f64) -> f64 {
        if distance > self.radius {
            let dr = distance - self.radius;
            exponent * (self.a * dr.powf(2.0) + self.b * dr.powf(3.0))
        } else {
            0.0
        }
    }
}

/// Generalized inverse power, $u(r) = r^{-a}$, optionally force-shifted
///
/// Unshifted, $u(r) = r^{-a}$ and $F(r) = a r^{-(a+1)}$.
/// When shifted between $r_s$ and $r_c$,
///
/// $$ u(r) = r^{-a} - C - \begin{cases} 0 & r \le r_s \\\\ a\left[\frac{A}{3}(r-r_s)^3 + \frac{B}{4}(r-r_s)^4\right] & r > r_s \end{cases} $$
///
/// with the force following as $F = -du/dr$; both are zero at $r_c$.
/// No truncation is applied here: evaluating beyond the cutoff returns the
/// continued polynomial, and callers are expected to cut at [`Cutoff::cutoff`].
///
/// # Examples:
/// ~~~
/// use pairtable::twobody::*;
/// let plain = ShiftedPower::new(6.0, 1.2, -1.0);
/// assert!(!plain.is_shifted());
/// assert_eq!(plain.potential(2.0), 2f64.powf(-6.0));
///
/// let shifted = ShiftedPower::new(6.0, 1.2, 0.9);
/// assert!(shifted.potential(1.2).abs() < 1e-12);
/// assert!(shifted.force(1.2).abs() < 1e-12);
/// ~~~
#[derive(Debug, Clone, PartialEq, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(deny_unknown_fields)
)]
pub struct ShiftedPower {
    /// Power, a
    #[cfg_attr(feature = "serde", serde(rename = "power"))]
    exponent: f64,
    /// Cutoff distance, rc
    cutoff: f64,
    /// Present only when shifting is enabled
    #[cfg_attr(feature = "serde", serde(default))]
    shift: Option<ShiftCoefficients>,
}

impl ShiftedPower {
    /// New inverse-power term.
    ///
    /// A negative `shift_radius` disables shifting; any other value
    /// (including zero) shifts the force between `shift_radius` and `cutoff`.
    pub fn new(exponent: f64, cutoff: f64, shift_radius: f64) -> Self {
        if shift_radius < 0.0 {
            Self::unshifted(exponent, cutoff)
        } else {
            Self::force_shifted(exponent, cutoff, shift_radius)
        }
    }

    /// Plain inverse power
    pub const fn unshifted(exponent: f64, cutoff: f64) -> Self {
        Self {
            exponent,
            cutoff,
            shift: None,
        }
    }

    /// Inverse power shifted between `shift_radius` and `cutoff`
    pub fn force_shifted(exponent: f64, cutoff: f64, shift_radius: f64) -> Self {
        let shift = ShiftCoefficients::new(exponent, cutoff, shift_radius);
        tracing::debug!(
            exponent,
            a = shift.a,
            b = shift.b,
            c = shift.c,
            "shift coefficients"
        );
        Self {
            exponent,
            cutoff,
            shift: Some(shift),
        }
    }

    pub const fn exponent(&self) -> f64 {
        self.exponent
    }

    pub const fn is_shifted(&self) -> bool {
        self.shift.is_some()
    }

    pub const fn shift(&self) -> Option<&ShiftCoefficients> {
        self.shift.as_ref()
    }
}

impl Cutoff for ShiftedPower {
    #[inline]
    fn cutoff(&self) -> f64 {
        self.cutoff
    }
}

impl RadialTwobody for ShiftedPower {
    #[inline]
    fn potential(&self, distance: f64) -> f64 {
        let plain = distance.powf(-self.exponent);
        match &self.shift {
            None => plain,
            Some(shift) => plain - shift.c - shift.potential_correction(self.exponent, distance),
        }
    }

    #[inline]
    fn force(&self, distance: f64) -> f64 {
        let plain = self.exponent * distance.powf(-(self.exponent + 1.0));
        match &self.shift {
            None => plain,
            Some(shift) => plain + shift.force_correction(self.exponent, distance),
        }
    }
}
