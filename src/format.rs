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

//! Text rendering of potential tables.
//!
//! Numbers follow the C `printf` conventions expected by table readers:
//! `%.10e` for table entries and `%f` for header parameters.

use crate::table::{PotentialTable, TableParameters, TableRow};
use itertools::Itertools;
use std::fmt::Write;

/// Digits after the decimal point in table entries
const TABLE_PRECISION: usize = 10;

/// Digits after the decimal point in header parameters
const HEADER_PRECISION: usize = 6;

/// Lower-case spelling of non-finite values, or `None` if finite
fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("nan")
    } else if value == f64::INFINITY {
        Some("inf")
    } else if value == f64::NEG_INFINITY {
        Some("-inf")
    } else {
        None
    }
}

/// Normalized scientific notation, equivalent to C's `%.{precision}e`
///
/// # Examples
/// ~~~
/// use pairtable::format::scientific;
/// assert_eq!(scientific(1.0 / 6.0, 10), "1.6666666667e-01");
/// assert_eq!(scientific(-1234.56, 3), "-1.235e+03");
/// assert_eq!(scientific(0.0, 2), "0.00e+00");
/// ~~~
pub fn scientific(value: f64, precision: usize) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    // Rust renders the exponent without sign padding, e.g. "1.5e-1"
    let rendered = format!("{:.*e}", precision, value);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or_default();
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => rendered,
    }
}

/// Fixed-point notation, equivalent to C's `%f`
pub fn fixed(value: f64) -> String {
    match non_finite(value) {
        Some(text) => text.to_string(),
        None => format!("{:.*}", HEADER_PRECISION, value),
    }
}

/// Comment block describing the electrostatics and power-law terms
///
/// Every line starts with `#` and ends with a newline.
pub fn header(parameters: &TableParameters) -> String {
    let shifted = parameters.shift_radius >= 0.0;
    let negation = if parameters.shift_radius < 0.0 {
        "not "
    } else {
        ""
    };
    let rshift = if shifted {
        format!("(rshift={})", fixed(parameters.shift_radius))
    } else {
        String::new()
    };
    let cutoff = fixed(parameters.lj_cutoff);

    let mut text = String::from("#\n");
    // writing to a String cannot fail
    let _ = writeln!(
        text,
        "# Coulomb cut-off/reaction-field: epsRF = {}, epsR = {}, RC = {}",
        fixed(parameters.permittivity_rf),
        fixed(parameters.permittivity),
        fixed(parameters.coulomb_cutoff)
    );
    let _ = writeln!(
        text,
        "# Lennard-Jones dispersion: power={}, cutoff={cutoff}, {negation}shifted {rshift}",
        fixed(parameters.dispersion_power),
    );
    let _ = writeln!(
        text,
        "# Lennard-Jones repulsion:  power={}, cutoff={cutoff}, {negation}shifted {rshift}",
        fixed(parameters.repulsion_power),
    );
    let _ = writeln!(text, "# {}", TableRow::COLUMNS.join(" "));
    text
}

/// Seven space-terminated `%.10e` fields
pub fn row(row: &TableRow) -> String {
    row.values()
        .iter()
        .map(|value| format!("{} ", scientific(*value, TABLE_PRECISION)))
        .collect()
}

/// Header followed by one line per table row
pub fn table(parameters: &TableParameters, table: &PotentialTable) -> String {
    let body = table.rows().iter().map(row).join("\n");
    format!("{}{body}\n", header(parameters))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scientific() {
        assert_eq!(scientific(0.0, 10), "0.0000000000e+00");
        assert_eq!(scientific(1.0, 10), "1.0000000000e+00");
        assert_eq!(scientific(0.002, 10), "2.0000000000e-03");
        assert_eq!(scientific(-1.0, 10), "-1.0000000000e+00");
        assert_eq!(scientific(2.5e-120, 10), "2.5000000000e-120");
        assert_eq!(scientific(3.0e15, 4), "3.0000e+15");
        assert_eq!(scientific(0.16666666666666663, 10), "1.6666666667e-01");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(scientific(f64::NAN, 10), "nan");
        assert_eq!(scientific(f64::INFINITY, 10), "inf");
        assert_eq!(scientific(f64::NEG_INFINITY, 10), "-inf");
        assert_eq!(fixed(f64::NAN), "nan");
    }

    #[test]
    fn test_fixed() {
        assert_eq!(fixed(1.2), "1.200000");
        assert_eq!(fixed(-1.0), "-1.000000");
        assert_eq!(fixed(80.0), "80.000000");
    }

    #[test]
    fn test_header_unshifted() {
        let parameters = TableParameters::new(1.0, 1.0, 1.2, 6.0, 12.0, 1.2, -1.0);
        let expected = "#\n\
            # Coulomb cut-off/reaction-field: epsRF = 1.000000, epsR = 1.000000, RC = 1.200000\n\
            # Lennard-Jones dispersion: power=6.000000, cutoff=1.200000, not shifted \n\
            # Lennard-Jones repulsion:  power=12.000000, cutoff=1.200000, not shifted \n\
            # r u_coulomb f_coulomb u_dispersion f_dispersion u_repulsion f_repulsion\n";
        assert_eq!(header(&parameters), expected);
    }

    #[test]
    fn test_header_shifted() {
        let parameters = TableParameters::new(2.0, 80.0, 1.4, 6.0, 12.0, 1.4, 0.9);
        let text = header(&parameters);
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().all(|line| line.starts_with('#')));
        assert!(text.contains("epsRF = 80.000000, epsR = 2.000000, RC = 1.400000"));
        assert!(text.contains("power=6.000000, cutoff=1.400000, shifted (rshift=0.900000)\n"));
        assert!(text.contains("power=12.000000, cutoff=1.400000, shifted (rshift=0.900000)\n"));
    }

    #[test]
    fn test_full_table() {
        let parameters = TableParameters::new(1.0, 1.0, 1.2, 6.0, 12.0, 1.2, -1.0);
        let text = table(&parameters, &PotentialTable::generate(&parameters).unwrap());
        assert!(text.ends_with('\n'));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5 + 1501);
        assert!(lines[..5].iter().all(|line| line.starts_with('#')));
        assert!(lines[5..].iter().all(|line| !line.starts_with('#')));
        assert_eq!(lines[5], "0.0000000000e+00 ".repeat(7));
        assert!(lines[5..]
            .iter()
            .all(|line| line.split_whitespace().count() == 7 && line.ends_with(' ')));
        assert!(lines[505].starts_with("1.0000000000e+00 1.6666666667e-01 "));
        assert!(lines[6].starts_with("2.0000000000e-03 "));
        assert!(lines[1505].starts_with("3.0000000000e+00 "));
    }

    #[test]
    fn test_row() {
        let row = TableRow {
            distance: 1.0,
            coulomb_potential: 0.16666666666666663,
            coulomb_force: 1.0,
            dispersion_potential: -1.0,
            dispersion_force: -6.0,
            repulsion_potential: 1.0,
            repulsion_force: 12.0,
        };
        assert_eq!(
            super::row(&row),
            "1.0000000000e+00 1.6666666667e-01 1.0000000000e+00 -1.0000000000e+00 \
             -6.0000000000e+00 1.0000000000e+00 1.2000000000e+01 "
        );
        assert_eq!(
            super::row(&TableRow::default()),
            "0.0000000000e+00 ".repeat(7)
        );
    }
}
