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

use thiserror::Error;

/// Parameter combinations for which the table formulas divide by zero or overflow
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("relative permittivity epsR must be non-zero")]
    ZeroPermittivity,

    #[error("reaction-field denominator 2*epsRF + epsR vanishes (epsRF = {permittivity_rf}, epsR = {permittivity})")]
    SingularReactionField {
        permittivity: f64,
        permittivity_rf: f64,
    },

    #[error("Coulomb cutoff RC must be non-zero")]
    ZeroCoulombCutoff,

    #[error("Lennard-Jones cutoff LC must be non-zero when shifting is enabled")]
    ZeroShiftedCutoff,

    #[error("shift radius {shift_radius} coincides with the cutoff {cutoff}")]
    DegenerateShift { cutoff: f64, shift_radius: f64 },

    #[error("column {column} is not finite at r = {distance}; the power is too large for the grid")]
    NonFiniteEntry { distance: f64, column: &'static str },
}
