use crate::format::percent;
use analytics::ComparisonResult;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, Table};

pub const PANEL_TITLE: &str = "Service Improvement";

/// The two headline percentages, consumption first.
pub fn improvement_table(result: &ComparisonResult) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Consumption Improvement", "Efficiency Improvement"]);
    table.add_row(vec![
        highlight(percent(result.consumption_improvement_pct)),
        highlight(percent(result.efficiency_improvement_pct)),
    ]);
    table
}

fn highlight(text: String) -> Cell {
    let color = if text.starts_with('-') {
        Color::Red
    } else {
        Color::Green
    };
    Cell::new(text).fg(color).add_attribute(Attribute::Bold)
}
