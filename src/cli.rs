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

use clap::Parser;
use pairtable::TableParameters;

/// Tabulate reaction-field Coulomb and (shifted) Lennard-Jones potentials and forces
#[derive(Parser, Debug)]
#[command(name = "pairtable", version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Relative permittivity inside the cutoff
    #[arg(value_name = "epsR")]
    pub permittivity: f64,

    /// Relative permittivity of the reaction-field continuum
    #[arg(value_name = "epsRF")]
    pub permittivity_rf: f64,

    /// Reaction-field cutoff
    #[arg(value_name = "RC")]
    pub coulomb_cutoff: f64,

    /// Dispersion power, e.g. 6
    #[arg(value_name = "LD")]
    pub dispersion_power: f64,

    /// Repulsion power, e.g. 12
    #[arg(value_name = "LR")]
    pub repulsion_power: f64,

    /// Lennard-Jones cutoff
    #[arg(value_name = "LC")]
    pub lj_cutoff: f64,

    /// Shift radius; negative disables force shifting
    #[arg(value_name = "LS")]
    pub shift_radius: f64,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn parameters(&self) -> TableParameters {
        TableParameters::new(
            self.permittivity,
            self.permittivity_rf,
            self.coulomb_cutoff,
            self.dispersion_power,
            self.repulsion_power,
            self.lj_cutoff,
            self.shift_radius,
        )
    }
}
