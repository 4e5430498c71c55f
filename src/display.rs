//! Human-readable renderings of a chain.
//!
//! These are debugging aids for the final dump, not a stable format.

use crate::blockchain::Blockchain;
use crate::error::Result;
use clap::ValueEnum;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Color as TableColor;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed `Debug` dump of every block
    Debug,
    /// One table row per block
    Table,
    /// Pretty-printed JSON
    Json,
}

pub fn render_chain(chain: &Blockchain, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Debug => Ok(format!("{:#?}", chain)),
        OutputFormat::Table => Ok(render_table(chain)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(chain)?),
    }
}

fn render_table(chain: &Blockchain) -> String {
    let header = ["Index", "Timestamp", "Previous Hash", "Hash"].map(|title| {
        Cell::new(title)
            .fg(TableColor::Cyan)
            .add_attribute(Attribute::Bold)
    });

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for block in chain.blocks() {
        let prev_hash = if block.prev_hash.is_empty() {
            "(genesis)".to_string()
        } else {
            block.prev_hash.clone()
        };
        table.add_row(vec![
            Cell::new(format!("#{}", block.index)).fg(TableColor::White),
            Cell::new(&block.timestamp).fg(TableColor::Grey),
            Cell::new(prev_hash).fg(TableColor::Yellow),
            Cell::new(&block.hash).fg(TableColor::Green),
        ]);
    }

    table.to_string()
}
