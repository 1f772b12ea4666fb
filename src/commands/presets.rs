use anyhow::Result;

use crate::config::DisplayConfig;
use crate::formatting::{fit_to_width, format_header, format_kg};
use crate::presets::PalletPreset;

const KEY_COL_WIDTH: usize = 6;
const NAME_COL_WIDTH: usize = 26;
const CAPACITY_COL_WIDTH: usize = 10;

pub fn format_presets(presets: &[&PalletPreset], display: &DisplayConfig) -> String {
    let mut output = format_header("Pallet Presets", true, display);

    output.push_str(&format!(
        "{}{}{:>cap$}  {}\n",
        fit_to_width("Key", KEY_COL_WIDTH),
        fit_to_width("Pallet", NAME_COL_WIDTH),
        "Capacity",
        "Boxes",
        cap = CAPACITY_COL_WIDTH,
    ));
    output.push_str(&format!(
        "{}\n",
        display
            .box_chars
            .horizontal
            .repeat(KEY_COL_WIDTH + NAME_COL_WIDTH + CAPACITY_COL_WIDTH + 7)
    ));

    for preset in presets {
        output.push_str(&format!(
            "{}{}{:>cap$}  {:>5}\n",
            fit_to_width(preset.key, KEY_COL_WIDTH),
            fit_to_width(preset.name, NAME_COL_WIDTH),
            format_kg(preset.capacity_kg),
            preset.boxes_per_pallet,
            cap = CAPACITY_COL_WIDTH,
        ));
    }

    output
}

pub fn run(display: &DisplayConfig) -> Result<()> {
    println!();
    print!("{}", format_presets(&crate::presets::all(), display));
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_presets_lists_every_preset() {
        let presets = crate::presets::all();
        let output = format_presets(&presets, &DisplayConfig::default());
        for preset in &presets {
            assert!(output.contains(preset.name), "missing {}", preset.key);
        }
        // header + underline + column header + rule + one line per preset
        assert_eq!(output.lines().count(), 4 + presets.len());
    }

    #[test]
    fn test_format_presets_row() {
        let eur1 = crate::presets::lookup("eur1").unwrap();
        let output = format_presets(&[eur1], &DisplayConfig::default());
        let row = output.lines().last().unwrap();
        assert_eq!(row, "eur1  EUR 1 (1200x800)            1,500 kg     40");
    }
}
