//! Survivor report
//!
//! How long the closing balance covers monthly bills, the income margin,
//! and where the month is heading.

use serde::Serialize;

use super::projection::Projection;
use crate::storage::Snapshot;

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Serialize)]
pub struct SurvivorReport {
    pub projection: Projection,
}

impl SurvivorReport {
    pub fn generate(snapshot: &Snapshot) -> Self {
        Self {
            projection: Projection::compute(snapshot),
        }
    }

    /// Coverage as text, e.g. "1 months 9 days"; "N/A" without monthly bills
    pub fn coverage_text(&self) -> String {
        match self.projection.breakdown {
            Some(breakdown) => breakdown.to_string(),
            None => "N/A".to_string(),
        }
    }

    pub fn margin_text(&self) -> String {
        match self.projection.margin_percent {
            Some(margin) => format!("{:.1}% margin", margin),
            None => "N/A".to_string(),
        }
    }

    fn coverage_bar(&self) -> String {
        let share = self.projection.coverage_bar_percent() / 100.0;
        let filled = (share * BAR_WIDTH as f64).round() as usize;
        format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
    }

    pub fn format_terminal(&self, currency: &str) -> String {
        let p = &self.projection;
        let mut output = String::new();

        output.push_str("Survivor Mode\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        let ratio = if p.survival_ratio.is_finite() {
            format!("{:.2}", p.survival_ratio)
        } else {
            "N/A".to_string()
        };
        output.push_str(&format!(
            "Survival Ratio:    {:>12}  ({} of coverage)\n",
            ratio,
            self.coverage_text()
        ));
        output.push_str(&format!("                   {}\n", self.coverage_bar()));
        output.push('\n');

        output.push_str(&format!(
            "Current Balance:   {:>12}  (after close out)\n",
            p.closing_balance.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "Monthly Income:    {:>12}\n",
            format!("+{}", p.monthly_income.format_with_symbol(currency))
        ));
        output.push_str(&format!(
            "Monthly Bills:     {:>12}\n",
            format!("-{}", p.monthly_bills.format_with_symbol(currency))
        ));
        let net_sign = if p.net_monthly.is_negative() { "" } else { "+" };
        output.push_str(&format!(
            "Net Monthly:       {:>12}  ({})\n",
            format!("{}{}", net_sign, p.net_monthly.format_with_symbol(currency)),
            self.margin_text()
        ));
        output.push_str(&format!(
            "Projected End:     {:>12}\n",
            p.projected_month_end.format_with_symbol(currency)
        ));
        output.push('\n');

        output.push_str(&format!("{}\n", p.status.headline()));
        output.push_str(&format!("{}\n", p.status.advice()));

        output
    }
}
