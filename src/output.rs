use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::surface::ViolationOccurrence;

/// Audit result for one class file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassAudit {
    pub path: String,
    pub class_name: String,
    pub package: String,
    pub occurrences: Vec<ViolationOccurrence>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct AuditSummary {
    pub classes_scanned: usize,
    pub classes_with_violations: usize,
    pub total_violations: usize,
    /// Leaked tokens with occurrence counts, most frequent first
    pub violations_by_token: IndexMap<String, usize>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct AuditReport {
    pub classes: Vec<ClassAudit>,
    pub summary: AuditSummary,
}

pub fn create_report(classes: Vec<ClassAudit>) -> AuditReport {
    let classes_scanned = classes.len();
    let classes_with_violations = classes
        .iter()
        .filter(|c| !c.occurrences.is_empty())
        .count();
    let total_violations: usize = classes.iter().map(|c| c.occurrences.len()).sum();

    let mut counts = HashMap::new();
    for class in &classes {
        for occurrence in &class.occurrences {
            *counts.entry(occurrence.type_token.clone()).or_insert(0) += 1;
        }
    }

    // Convert HashMap to Vec, sort by count (descending), then create IndexMap
    let mut count_vec: Vec<(String, usize)> = counts.into_iter().collect();
    count_vec.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let violations_by_token: IndexMap<String, usize> = count_vec.into_iter().collect();

    AuditReport {
        classes,
        summary: AuditSummary {
            classes_scanned,
            classes_with_violations,
            total_violations,
            violations_by_token,
        },
    }
}

pub fn format_table_output(report: &AuditReport, verbose: bool) -> String {
    let mut output = String::new();

    let scanned = report.summary.classes_scanned;
    let offending = report.summary.classes_with_violations;
    let total = report.summary.total_violations;

    output.push_str(&format!("📦 Interface Audit ({} classes)\n", scanned));
    output.push_str(&format!(
        "✅ {} clean  🚫 {} leaking ({} violations)\n\n",
        scanned - offending,
        offending,
        total
    ));

    if total == 0 {
        output.push_str("✅ No interface leakage found!\n");
        return output;
    }

    output.push_str("🚫 Leaked Types:\n");
    output.push_str(&format_violation_table(report));

    if verbose {
        output.push('\n');
        output.push_str("📊 By Token:\n");
        for (token, count) in &report.summary.violations_by_token {
            output.push_str(&format!("  {:>4}x {}\n", count, token));
        }
    } else {
        output.push_str("\n💡 Run with --verbose for per-token totals\n");
    }

    output
}

fn format_violation_table(report: &AuditReport) -> String {
    let mut output = String::new();

    // Table header
    output.push_str("┌──────────────────────────────┬──────────────────────────────┬───────┐\n");
    output.push_str("│ Class                        │ Leaked Type                  │ Count │\n");
    output.push_str("├──────────────────────────────┼──────────────────────────────┼───────┤\n");

    // Table rows: one row per (class, token) pair
    for class in &report.classes {
        if class.occurrences.is_empty() {
            continue;
        }
        let mut per_token: IndexMap<&str, usize> = IndexMap::new();
        for occurrence in &class.occurrences {
            *per_token.entry(occurrence.type_token.as_str()).or_insert(0) += 1;
        }
        for (token, count) in per_token {
            let class_name = truncate(&class.class_name, 28);
            let token = truncate(token, 28);
            output.push_str(&format!(
                "│ {:<28} │ {:<28} │ {:>5} │\n",
                class_name, token, count
            ));
        }
    }

    // Table footer
    output.push_str("└──────────────────────────────┴──────────────────────────────┴───────┘\n");

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let prefix: String = s.chars().take(max_len - 1).collect();
        format!("{}…", prefix)
    }
}
