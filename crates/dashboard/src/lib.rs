//! # Service Impact Dashboard
//!
//! Terminal rendering of a `ComparisonResult`: the two period cards, the
//! improvement panel, the metric chart as a table, and the impact timeline.
//! Every view is a pure function of the comparison; nothing here computes a
//! ratio of its own.

pub mod cards;
pub mod chart;
pub mod format;
pub mod panel;
pub mod timeline;

pub use cards::{card_lines, cards_table};
pub use chart::chart_table;
pub use panel::improvement_table;
pub use timeline::TimelineBar;

use analytics::{ComparisonResult, comparison_chart_data};

pub const REPORT_TITLE: &str = "Service Impact Analysis";

/// Renders the whole report, top to bottom.
pub fn render_report(result: &ComparisonResult, timeline_width: usize) -> String {
    let records = comparison_chart_data(result);
    let timeline = TimelineBar::from_result(result);

    [
        REPORT_TITLE.to_string(),
        cards_table(result).to_string(),
        panel::PANEL_TITLE.to_string(),
        improvement_table(result).to_string(),
        chart_table(&records).to_string(),
        timeline::TIMELINE_TITLE.to_string(),
        timeline.render(timeline_width),
    ]
    .join("\n\n")
}
