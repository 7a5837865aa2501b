use crate::format::{fixed, quantity};
use analytics::ComparisonResult;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, Table};
use core_types::Phase;

/// The text lines of one period card, label excluded.
pub fn card_lines(result: &ComparisonResult, phase: Phase) -> Vec<String> {
    let period = result.period(phase);
    let metrics = result.metrics(phase);
    vec![
        format!("Monitoring Period: {} days", period.days_monitored),
        format!("Distance Driven: {} km", quantity(period.distance_km)),
        format!("Total Oil Added: {}L", quantity(period.oil_added_liters)),
        format!("Daily Distance: {} km/day", fixed(metrics.daily_distance_km, 1)),
        format!(
            "Oil Consumption: {} L/1000km",
            fixed(metrics.oil_consumption_per_1000km, 2)
        ),
        format!("Efficiency: {} km/L", fixed(metrics.efficiency_km_per_liter, 0)),
    ]
}

/// Both period cards side by side, one column per period.
pub fn cards_table(result: &ComparisonResult) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(
        Phase::ALL
            .iter()
            .map(|&phase| Cell::new(&result.period(phase).label).add_attribute(Attribute::Bold)),
    );

    // The efficiency line is highlighted, so it gets a cell of its own.
    let (bodies, efficiencies): (Vec<Cell>, Vec<Cell>) = Phase::ALL
        .iter()
        .map(|&phase| {
            let mut lines = card_lines(result, phase);
            let efficiency = lines.pop().unwrap_or_default();
            (
                Cell::new(lines.join("\n")),
                Cell::new(efficiency)
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
            )
        })
        .unzip();
    table.add_row(bodies);
    table.add_row(efficiencies);
    table
}
