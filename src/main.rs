/*
ENSnano, a 3d graphical application for DNA nanostructures.
    Copyright (C) 2021  Nicolas Levy <nicolaspierrelevy@gmail.com> and Nicolas Schabanel <nicolas.schabanel@ens-lyon.fr>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/
//! Check the outline of a design and print the crossover pattern center of each helix.
//!
//! Usage: `ensnano_outline <design.json>`

use ensnano_outline::{OutlineDesign, OutlineError};
use std::env;
use std::path::PathBuf;
use std::process;

fn main() {
    pretty_env_logger::init();
    let args: Vec<String> = env::args().collect();
    let path = if args.len() >= 2 {
        PathBuf::from(&args[1])
    } else {
        let program = args.first().map(String::as_str).unwrap_or("ensnano_outline");
        eprintln!("Usage: {} <design.json>", program);
        process::exit(2);
    };

    let design = match OutlineDesign::read_file(&path) {
        Ok(design) => design,
        Err(e) => {
            log::error!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = report(&design) {
        log::error!("{}", e);
        process::exit(1);
    }
}

fn report(design: &OutlineDesign) -> Result<(), OutlineError> {
    for warning in design.validate()? {
        log::warn!("{}", warning);
    }
    let centers = design.seams.pattern_centers(&design.outline)?;
    println!("helix\tpattern center");
    for (helix, center) in centers.iter().enumerate() {
        println!("{}\t{}", helix, center);
    }
    Ok(())
}
