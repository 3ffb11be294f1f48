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

//! Command-line table generator.
//!
//! ~~~text
//! pairtable epsR epsRF RC LD LR LC LS > table.xvg
//! ~~~

mod cli;
mod logging;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use pairtable::PotentialTable;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet)?;

    let parameters = cli.parameters();
    tracing::debug!(?parameters, "table parameters");
    let table = PotentialTable::generate(&parameters).context("invalid table parameters")?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(pairtable::format::table(&parameters, &table).as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write table")?;
    Ok(())
}
