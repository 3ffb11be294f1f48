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

//! Reaction-field electrostatics.
//!
//! Reference: Tironi et al., J. Chem. Phys. 102, 5451 (1995)
//! <https://doi.org/10.1063/1.469273>

use super::RadialTwobody;
use crate::Cutoff;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coulomb interaction between unit charges with a reaction-field correction
///
/// $$ u(r) = \frac{1}{\varepsilon_r}\left( \frac{1}{r} + k_{rf} r^2 - c_{rf} \right) $$
///
/// where
/// $k_{rf} = \frac{\varepsilon_{rf} - \varepsilon_r}{(2\varepsilon_{rf} + \varepsilon_r) r_c^3}$ and
/// $c_{rf} = \frac{3\varepsilon_{rf}}{(2\varepsilon_{rf} + \varepsilon_r) r_c}$.
///
/// The cutoff only enters through $k_{rf}$ and $c_{rf}$; the term is evaluated
/// at any separation and is _not_ truncated beyond the cutoff.
/// With $\varepsilon_{rf} = \varepsilon_r$ this reduces to a plain cut-off
/// Coulomb potential shifted by $1/r_c$.
///
/// # Examples:
/// ~~~
/// use pairtable::twobody::*;
/// let rf = ReactionField::new(1.0, 1.0, 1.2);
/// assert_eq!(rf.krf(), 0.0);
/// assert!((rf.potential(1.0) - (1.0 - 1.0 / 1.2)).abs() < 1e-12);
/// ~~~
#[derive(Debug, Clone, PartialEq, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(deny_unknown_fields)
)]
pub struct ReactionField {
    /// Relative permittivity inside the cutoff sphere, εr
    #[cfg_attr(feature = "serde", serde(rename = "epsr"))]
    permittivity: f64,
    /// Relative permittivity of the continuum beyond the cutoff, εrf
    #[cfg_attr(feature = "serde", serde(rename = "epsrf"))]
    permittivity_rf: f64,
    /// Cutoff distance, rc
    cutoff: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    krf: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    crf: f64,
}

impl ReactionField {
    pub fn new(permittivity: f64, permittivity_rf: f64, cutoff: f64) -> Self {
        let denominator = 2.0 * permittivity_rf + permittivity;
        let krf = (permittivity_rf - permittivity) / denominator / cutoff.powf(3.0);
        let crf = 3.0 * permittivity_rf / denominator / cutoff;
        tracing::debug!(krf, crf, "reaction-field constants");
        Self {
            permittivity,
            permittivity_rf,
            cutoff,
            krf,
            crf,
        }
    }

    /// Relative permittivity inside the cutoff sphere, εr
    pub const fn permittivity(&self) -> f64 {
        self.permittivity
    }

    /// Relative permittivity beyond the cutoff, εrf
    pub const fn permittivity_rf(&self) -> f64 {
        self.permittivity_rf
    }

    /// Screening constant, k_rf
    pub const fn krf(&self) -> f64 {
        self.krf
    }

    /// Potential shift constant, c_rf
    pub const fn crf(&self) -> f64 {
        self.crf
    }
}

impl Cutoff for ReactionField {
    #[inline]
    fn cutoff(&self) -> f64 {
        self.cutoff
    }
}

impl RadialTwobody for ReactionField {
    #[inline]
    fn potential(&self, distance: f64) -> f64 {
        (distance.recip() + self.krf * distance * distance - self.crf) / self.permittivity
    }

    #[inline]
    fn force(&self, distance: f64) -> f64 {
        (1.0 / (distance * distance) - 2.0 * self.krf * distance) / self.permittivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constants() {
        let rf = ReactionField::new(1.0, 1.0, 1.2);
        assert_eq!(rf.krf(), 0.0);
        assert_relative_eq!(rf.crf(), 1.0 / 1.2);

        let (epsr, epsrf, rc) = (2.0, 80.0, 1.4);
        let rf = ReactionField::new(epsr, epsrf, rc);
        assert_eq!(rf.krf(), 78.0 / 162.0 / rc.powf(3.0));
        assert_relative_eq!(rf.crf(), 240.0 / 162.0 / rc);
    }

    #[test]
    fn test_unscreened_potential() {
        let rf = ReactionField::new(1.0, 1.0, 1.2);
        assert_relative_eq!(rf.potential(1.0), 0.16666666666666663, epsilon = 1e-12);
        assert_relative_eq!(rf.force(1.0), 1.0);
    }

    #[test]
    fn test_potential_vanishes_at_cutoff() {
        // u(rc) = (1/rc + krf rc² - crf)/εr = 0 for any εrf
        for epsrf in [1.0, 4.0, 80.0, 1e6] {
            let rf = ReactionField::new(2.5, epsrf, 1.2);
            assert_relative_eq!(rf.potential(rf.cutoff()), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_conducting_boundary_force_vanishes_at_cutoff() {
        // εrf → ∞ gives krf = 1/(2 rc³) and zero force at rc
        let rf = ReactionField::new(1.0, f64::MAX / 4.0, 1.2);
        assert_relative_eq!(rf.force(1.2), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_not_truncated_beyond_cutoff() {
        let rf = ReactionField::new(1.0, 1.0, 1.2);
        assert_relative_eq!(rf.potential(2.0), (0.5 - 1.0 / 1.2));
        assert_relative_eq!(rf.force(2.0), 0.25);
    }

    #[test]
    fn test_permittivity_scaling() {
        let plain = ReactionField::new(1.0, 1.0, 1.2);
        let scaled = ReactionField::new(4.0, 4.0, 1.2);
        assert_relative_eq!(scaled.potential(0.7), plain.potential(0.7) / 4.0);
        assert_relative_eq!(scaled.force(0.7), plain.force(0.7) / 4.0);
    }
}
