use analytics::{ChartRecord, chart_series};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use core_types::Phase;

/// The chart records as a table, each value shown the way the chart tooltip shows it.
pub fn chart_table(records: &[ChartRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec![Cell::new("Metric")];
    header.extend(chart_series().iter().map(|series| Cell::new(series.name)));
    table.set_header(header);

    for record in records {
        let mut row = vec![Cell::new(&record.metric)];
        row.extend(
            Phase::ALL
                .iter()
                .map(|&phase| Cell::new(record.tooltip(phase)).set_alignment(CellAlignment::Right)),
        );
        table.add_row(row);
    }
    table
}
