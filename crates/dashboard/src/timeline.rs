use crate::format::fixed;
use analytics::ComparisonResult;
use rust_decimal::prelude::*;

pub const TIMELINE_TITLE: &str = "Service Impact Timeline";

const FILLED: char = '█';
const EMPTY: char = '░';

/// The impact bar, bound to the computed efficiency improvement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineBar {
    /// Share of the bar that is filled, clamped to `[0, 100]`.
    pub fill_pct: Decimal,
    pub caption: String,
}

impl TimelineBar {
    pub fn from_result(result: &ComparisonResult) -> Self {
        let pct = result.efficiency_improvement_pct;
        let fill_pct = pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
        let caption = if pct < Decimal::ZERO {
            format!("{}% Regressed", fixed(pct.abs(), 1))
        } else {
            format!("{}% Improved", fixed(pct, 1))
        };
        Self { fill_pct, caption }
    }

    /// Number of filled cells in a bar `width` characters wide.
    pub fn filled_cells(&self, width: usize) -> usize {
        let cells = (self.fill_pct * Decimal::from(width) / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        cells.to_usize().unwrap_or(0).min(width)
    }

    pub fn render(&self, width: usize) -> String {
        let filled = self.filled_cells(width);
        let bar: String = std::iter::repeat_n(FILLED, filled)
            .chain(std::iter::repeat_n(EMPTY, width - filled))
            .collect();
        format!("[{bar}] {}", self.caption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(pct: Decimal) -> TimelineBar {
        let fill_pct = pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
        TimelineBar {
            fill_pct,
            caption: String::new(),
        }
    }

    #[test]
    fn filled_cells_round_to_nearest() {
        assert_eq!(bar(Decimal::new(896, 1)).filled_cells(40), 36);
        assert_eq!(bar(Decimal::new(50, 0)).filled_cells(3), 2);
    }

    #[test]
    fn overshoot_fills_the_whole_bar() {
        assert_eq!(bar(Decimal::new(250, 0)).filled_cells(10), 10);
    }

    #[test]
    fn render_has_exact_width() {
        let rendered = bar(Decimal::new(25, 0)).render(8);
        assert!(rendered.starts_with("[██░░░░░░]"), "{rendered}");
    }
}
