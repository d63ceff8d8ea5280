//! Purge pipeline: list → show → confirm → delete each → summarise.

use serde_json::Value;
use tracing::{error, info, warn};

use crate::batch::banner;
use crate::content::PurgeKind;
use crate::contract::{is_affirmative, ContentApi, Operator};
use crate::error::RunError;
use crate::outcome::{Outcome, RunOutcome, RunSummary};

/// An existing remote item selected for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeTarget {
    pub id: String,
    pub display: String,
}

/// Extracts `(id, display)` pairs from a collection listing.
///
/// The listing must be a JSON array. Entries without the id field are
/// skipped; numeric ids are accepted and stringified.
pub fn extract_targets(kind: PurgeKind, listing: &Value) -> Result<Vec<PurgeTarget>, RunError> {
    let items = listing.as_array().ok_or(RunError::UnexpectedFormat)?;
    Ok(items
        .iter()
        .filter_map(|item| {
            let id = scalar_text(item.get(kind.id_field())?)?;
            let display = item
                .get(kind.display_field())
                .and_then(scalar_text)
                .unwrap_or_else(|| "(no value)".to_string());
            Some(PurgeTarget { id, display })
        })
        .collect())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Runs one purge cycle for `kind`.
pub async fn run_purge<A, O>(kind: PurgeKind, api: &A, operator: &O) -> Result<RunOutcome, RunError>
where
    A: ContentApi + ?Sized,
    O: Operator + ?Sized,
{
    info!(kind = %kind, "[PURGE] Starting purge run");
    operator.show(&banner("PURGE UTILITY"));
    operator.show(&format!("\nFetching all {}...", kind.plural()));

    let listing = api.list(kind.collection()).await.map_err(|source| {
        error!(kind = %kind, error = %source, "[PURGE] Listing failed");
        RunError::Listing {
            plural: kind.plural(),
            source,
        }
    })?;
    let targets = extract_targets(kind, &listing).inspect_err(|_| {
        error!(kind = %kind, "[PURGE] Listing was not a JSON array");
    })?;

    if targets.is_empty() {
        operator.show(&format!("No {} found. Nothing to delete.", kind.plural()));
        return Ok(RunOutcome::Completed(RunSummary::new()));
    }

    operator.show(&format!("\n{} {} found:", targets.len(), kind.plural()));
    for target in &targets {
        operator.show(&format!("  - {}", target.display));
    }

    let answer = operator.confirm(&format!(
        "\nDo you want to proceed with deletion of all these {} {}? (yes/no): ",
        targets.len(),
        kind.plural()
    ));
    if !is_affirmative(&answer) {
        info!(kind = %kind, "[PURGE] Operator declined, nothing deleted");
        operator.show("\nAborting deletion process.");
        return Ok(RunOutcome::Aborted);
    }

    let mut summary = RunSummary::new();
    for target in targets {
        let outcome = match api.delete(kind.collection(), &target.id).await {
            Ok(()) => {
                info!(kind = %kind, id = %target.id, "[PURGE] Deleted");
                operator.show(&format!("Successfully deleted {kind}: {}", target.display));
                Outcome::Succeeded
            }
            Err(e) => {
                warn!(kind = %kind, id = %target.id, error = %e, "[PURGE] Delete failed");
                operator.show(&format!("Failed to delete {kind} {}. {e}", target.display));
                Outcome::Failed {
                    status: e.status(),
                    detail: e.to_string(),
                }
            }
        };
        summary.record(target.id, outcome);
    }

    info!(
        kind = %kind,
        succeeded = summary.succeeded(),
        failed = summary.failed(),
        "[PURGE] Purge run complete"
    );
    let title = format!("{} DELETION", kind.collection().to_uppercase());
    operator.show(&format!("\n{}", summary.render(&title)));
    Ok(RunOutcome::Completed(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_ids_and_display_values() {
        let listing = json!([
            {"_id": "u1", "username": "ada"},
            {"_id": 7},
            {"username": "no-id"},
        ]);
        let targets = extract_targets(PurgeKind::User, &listing).unwrap();
        assert_eq!(
            targets,
            vec![
                PurgeTarget { id: "u1".into(), display: "ada".into() },
                PurgeTarget { id: "7".into(), display: "(no value)".into() },
            ]
        );
    }

    #[test]
    fn casts_display_their_id() {
        let listing = json!([{"_id": "c1", "title": "Intro"}]);
        let targets = extract_targets(PurgeKind::Cast, &listing).unwrap();
        assert_eq!(targets[0].display, "c1");
    }

    #[test]
    fn non_array_listing_is_a_format_error() {
        let listing = json!({"items": []});
        assert!(matches!(
            extract_targets(PurgeKind::University, &listing),
            Err(RunError::UnexpectedFormat)
        ));
    }
}
