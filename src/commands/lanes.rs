use anyhow::Result;

use crate::config::DisplayConfig;
use crate::fixtures::{demo_lanes, total_weekly_pallets, Lane};
use crate::formatting::{fit_to_width, format_header, group_thousands};

const CITY_COL_WIDTH: usize = 13;
const MODE_COL_WIDTH: usize = 6;
const PALLETS_COL_WIDTH: usize = 9;
const ON_TIME_COL_WIDTH: usize = 8;
pub const TABLE_WIDTH: usize = CITY_COL_WIDTH * 2 + MODE_COL_WIDTH + PALLETS_COL_WIDTH + ON_TIME_COL_WIDTH + 1;

/// Column headings, aligned with `lane_row`
pub fn lane_header_row() -> String {
    format!(
        "{}{}{}{:>p$} {:>o$}",
        fit_to_width("Origin", CITY_COL_WIDTH),
        fit_to_width("Destination", CITY_COL_WIDTH),
        fit_to_width("Mode", MODE_COL_WIDTH),
        "Pallets",
        "On-time",
        p = PALLETS_COL_WIDTH,
        o = ON_TIME_COL_WIDTH,
    )
}

/// One lane as a fixed-width row
pub fn lane_row(lane: &Lane) -> String {
    format!(
        "{}{}{}{:>p$} {:>o$}",
        fit_to_width(&lane.origin, CITY_COL_WIDTH),
        fit_to_width(&lane.destination, CITY_COL_WIDTH),
        fit_to_width(lane.mode.label(), MODE_COL_WIDTH),
        group_thousands(u64::from(lane.weekly_pallets)),
        format!("{:.1}%", lane.on_time_percent),
        p = PALLETS_COL_WIDTH,
        o = ON_TIME_COL_WIDTH,
    )
}

/// Total row, with the sum under the pallets column
pub fn lane_total_row(lanes: &[Lane]) -> String {
    format!(
        "{}{:>p$}",
        fit_to_width("Total", CITY_COL_WIDTH * 2 + MODE_COL_WIDTH),
        group_thousands(total_weekly_pallets(lanes)),
        p = PALLETS_COL_WIDTH,
    )
}

pub fn format_lanes(lanes: &[Lane], display: &DisplayConfig) -> String {
    let mut output = format_header("Lane Volumes (weekly, demo data)", true, display);

    output.push_str(&lane_header_row());
    output.push('\n');
    output.push_str(&format!("{}\n", display.box_chars.horizontal.repeat(TABLE_WIDTH)));

    for lane in lanes {
        output.push_str(&lane_row(lane));
        output.push('\n');
    }

    output.push_str(&format!("{}\n", display.box_chars.horizontal.repeat(TABLE_WIDTH)));
    output.push_str(&lane_total_row(lanes));
    output.push('\n');

    output
}

pub fn run(display: &DisplayConfig) -> Result<()> {
    println!();
    print!("{}", format_lanes(&demo_lanes(), display));
    println!();
    Ok(())
}
