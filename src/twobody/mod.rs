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

//! ## Twobody interactions
//!
//! Radial terms entering a potential table. Each term is an immutable value
//! with derived constants computed once at construction.

use std::fmt::Debug;

mod reaction_field;
mod shifted_power;
pub use self::reaction_field::ReactionField;
pub use self::shifted_power::{ShiftCoefficients, ShiftedPower};

/// Potential and force of an isotropic pair term as a function of separation, 𝑟
pub trait RadialTwobody: Debug {
    /// Potential at separation `distance`, 𝑈(𝑟).
    fn potential(&self, distance: f64) -> f64;

    /// Force magnitude at separation `distance`, 𝐹(𝑟) = -d𝑈/d𝑟.
    ///
    /// The default implementation uses a central difference
    /// and should be overridden with the analytical expression.
    fn force(&self, distance: f64) -> f64 {
        const EPS: f64 = 1e-6;
        let delta_u = self.potential(distance + EPS) - self.potential(distance - EPS);
        -delta_u / (2.0 * EPS)
    }
}
