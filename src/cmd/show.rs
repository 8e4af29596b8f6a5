use clap::Args;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use wheelboard::consts::DEFAULT_LAYER;
use wheelboard::error::WbResult;
use wheelboard::geometry::{CharacterPosition, Quadrant};
use wheelboard::keyboard_data::KeyboardData;
use wheelboard::loader;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Layout file (.yaml or .json)
    pub file: PathBuf,

    /// Only render this layer
    #[arg(short, long)]
    pub layer: Option<usize>,
}

pub fn run(args: &ShowArgs) -> WbResult<()> {
    let data = loader::load_keyboard_data(&args.file)?;

    let layers: Vec<usize> = match args.layer {
        Some(layer) => vec![layer],
        None => (DEFAULT_LAYER..=data.total_layers()).collect(),
    };

    for layer in layers {
        println!("\n=== Layer {} ===", layer);
        print_layer(&data, layer);
    }
    Ok(())
}

fn print_layer(data: &KeyboardData, layer: usize) {
    let lower: Vec<char> = data.lower_case_characters(layer).chars().collect();
    let upper: Vec<char> = data.upper_case_characters(layer).chars().collect();

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Octant").add_attribute(Attribute::Bold)];
    for position in CharacterPosition::iter() {
        header.push(Cell::new(position.to_string()).add_attribute(Attribute::Bold));
    }
    table.add_row(header);

    for quadrant in Quadrant::all() {
        let mut row = vec![Cell::new(quadrant.to_string())];
        for position in CharacterPosition::iter() {
            let index = quadrant.character_index_in_string(position);
            row.push(Cell::new(render_slot(&lower, &upper, index)));
        }
        table.add_row(row);
    }

    println!("{table}");
}

fn render_slot(lower: &[char], upper: &[char], index: usize) -> String {
    let lower_char = printable(lower.get(index));
    let upper_char = printable(upper.get(index));

    if lower_char == upper_char {
        lower_char.to_string()
    } else {
        format!("{} {}", lower_char, upper_char)
    }
}

fn printable(slot: Option<&char>) -> char {
    match slot {
        Some(&c) if c != '\0' => c,
        _ => '.',
    }
}
