use colored::Colorize;
use tabled::{Table, Tabled};

use crate::duplicate_check::{CheckReport, DuplicatePair};
use crate::plan::PlanSet;

#[derive(Tabled)]
pub struct Duplicate {
    pub first: String,
    pub second: String,
    pub lines: usize,
    #[tabled(rename = "sha256")]
    pub fingerprint: String,
}

impl Duplicate {
    pub fn from(pair: &DuplicatePair, set: &PlanSet) -> Self {
        Duplicate {
            first: set.path(pair.first).display().to_string(),
            second: set.path(pair.second).display().to_string(),
            lines: pair.lines,
            fingerprint: pair.fingerprint.clone(),
        }
    }
}

/// Headline per duplicate pair followed by a table of all of them.
pub fn render_report(report: &CheckReport, set: &PlanSet) -> String {
    let mut out = String::new();
    for pair in &report.duplicates {
        let headline = format!("Plans {} and {} are identical", pair.first, pair.second);
        out.push_str(&format!("{}\n", headline.red().bold()));
    }

    let rows: Vec<Duplicate> = report
        .duplicates
        .iter()
        .map(|pair| Duplicate::from(pair, set))
        .collect();
    out.push_str(&Table::new(rows).to_string());
    out.push('\n');

    if !report.completed {
        out.push_str(&format!(
            "Stopped after {} comparisons\n",
            report.comparisons
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_names_pair_and_paths() {
        colored::control::set_override(false);
        let set = PlanSet::new("found_plans", "sas_plan", 5);
        let report = CheckReport {
            duplicates: vec![DuplicatePair {
                first: 2,
                second: 4,
                lines: 7,
                fingerprint: "ABCD".to_string(),
            }],
            comparisons: 7,
            completed: false,
        };

        let out = render_report(&report, &set);

        assert!(out.starts_with("Plans 2 and 4 are identical\n"));
        assert!(out.contains("found_plans/sas_plan.2"));
        assert!(out.contains("found_plans/sas_plan.4"));
        assert!(out.contains("sha256"));
        assert!(out.contains("ABCD"));
        assert!(out.ends_with("Stopped after 7 comparisons\n"));
    }
}
