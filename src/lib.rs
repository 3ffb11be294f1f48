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

//! # Pairtable
//!
//! Tabulated pair potentials for table-interpolated non-bonded force evaluation.
//!
//! A table combines a reaction-field Coulomb term with a dispersion and a
//! repulsion inverse-power term, each optionally force-shifted so that both
//! potential and force vanish at the cutoff.
//!
//! ## Examples
//! ~~~
//! use pairtable::{PotentialTable, TableParameters};
//! let parameters = TableParameters::new(1.0, 1.0, 1.2, 6.0, 12.0, 1.2, -1.0);
//! let table = PotentialTable::generate(&parameters).unwrap();
//! assert_eq!(table.rows().len(), 1501);
//! ~~~

#[cfg(test)]
extern crate approx;

mod error;
pub mod format;
pub mod table;
pub mod twobody;

pub use error::ParameterError;
pub use table::{DistanceGrid, PotentialTable, TableParameters, TableRow};

/// Defines a cutoff distance
pub trait Cutoff {
    /// Cutoff distance
    fn cutoff(&self) -> f64;
}
