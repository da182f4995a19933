// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Category;
use crate::utils::category_cell;
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", _)) | None => {
            let mut t = Table::new();
            t.load_preset(UTF8_FULL);
            t.set_header(["Key", "Category"]);
            for c in Category::ALL {
                t.add_row(vec![Cell::new(c.as_str()), category_cell(c)]);
            }
            println!("{}", t);
        }
        _ => {}
    }
    Ok(())
}
