//! Per-item outcomes and the run summary shared by the batch and purge pipelines.

use std::fmt::Write as _;

/// What happened to one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    /// `status` is `None` when no response was received (local validation
    /// failure, transport error).
    Failed { status: Option<u16>, detail: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    pub id: String,
    pub outcome: Outcome,
}

/// Ordered outcomes of a run, in the order the items were processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    records: Vec<ItemRecord>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, id: impl Into<String>, outcome: Outcome) {
        self.records.push(ItemRecord {
            id: id.into(),
            outcome,
        });
    }

    pub fn records(&self) -> &[ItemRecord] {
        &self.records
    }

    pub fn succeeded(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == Outcome::Succeeded)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.records.len() - self.succeeded()
    }

    /// Identifiers of failed items, in processing order.
    pub fn failed_ids(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| r.outcome != Outcome::Succeeded)
            .map(|r| r.id.as_str())
            .collect()
    }

    /// Text block shown to the operator at the end of a run.
    pub fn render(&self, title: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{title} SUMMARY:");
        let _ = writeln!(out, "  Success: {}", self.succeeded());
        let _ = writeln!(out, "  Failed: {}", self.failed());
        let failed = self.failed_ids();
        if !failed.is_empty() {
            let _ = writeln!(out, "  Failed items:");
            for id in failed {
                let _ = writeln!(out, "    - {id}");
            }
        }
        out.trim_end().to_string()
    }
}

/// How a confirmed-or-declined run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(RunSummary),
    /// The operator declined confirmation; nothing was sent.
    Aborted,
}
