//! Batch creation pipeline: discover → validate → confirm → submit → summarise.
//!
//! One call to [`run_batch`] is one batch run for a single content type:
//!   - asks the operator for the shared tag (casts and articles)
//!   - asks for the folder and scans it (see [`crate::discover`])
//!   - reports every candidate with its verdict
//!   - stops with [`RunOutcome::Aborted`] unless the operator answers `yes`
//!   - submits valid candidates one at a time, in discovery order
//!   - returns and shows the aggregated [`RunSummary`]
//!
//! # Error Handling
//! Only input problems (no folder, bad folder, nothing found) end a run early,
//! as [`RunError`]. After confirmation nothing aborts the batch: invalid
//! candidates and failed requests are recorded as failures and the loop moves on.

use serde_json::json;
use tracing::{debug, error, info, warn};

use crate::content::{ContentKind, SHARED_TAG_KEY};
use crate::contract::{is_affirmative, ContentApi, CreateRequest, FilePart, Operator, RequestBody};
use crate::discover::{discover, Candidate, PreparedItem, Verdict};
use crate::error::RunError;
use crate::outcome::{Outcome, RunOutcome, RunSummary};

/// Runs one full create cycle for `kind`.
pub async fn run_batch<A, O>(kind: ContentKind, api: &A, operator: &O) -> Result<RunOutcome, RunError>
where
    A: ContentApi + ?Sized,
    O: Operator + ?Sized,
{
    info!(kind = %kind, "[BATCH] Starting batch run");
    let title = format!("{} CREATION", kind.endpoint().to_uppercase());
    operator.show(&banner(&format!("{title} UTILITY")));

    let shared_tag = if kind.takes_shared_tag() {
        let tag = operator
            .prompt_text(&format!(
                "Enter the {SHARED_TAG_KEY} value to be added to each {kind}: "
            ))
            .trim()
            .to_string();
        if tag.is_empty() {
            operator.show(&format!(
                "No {SHARED_TAG_KEY} provided, defaulting to an empty string."
            ));
        }
        Some(tag)
    } else {
        None
    };

    let folder = operator
        .choose_directory(kind.folder_prompt())
        .ok_or(RunError::NoFolderSelected)?;
    if !folder.is_dir() {
        error!(folder = %folder.display(), "[BATCH] Chosen path is not a directory");
        return Err(RunError::NotADirectory(folder));
    }

    let candidates = discover(kind, &folder)?;

    operator.show(&format!(
        "\nFound {} candidate(s) to create {} from:",
        candidates.len(),
        kind.plural()
    ));
    for candidate in &candidates {
        operator.show(&candidate.report_line());
    }

    let answer = operator.confirm(&format!(
        "\nDo you want to proceed with creation of these {}? (yes/no): ",
        kind.plural()
    ));
    if !is_affirmative(&answer) {
        info!(kind = %kind, "[BATCH] Operator declined, nothing submitted");
        operator.show("\nAborting creation process.");
        return Ok(RunOutcome::Aborted);
    }

    let mut summary = RunSummary::new();
    for candidate in candidates {
        let outcome = submit_candidate(kind, api, operator, &candidate, shared_tag.as_deref()).await;
        summary.record(candidate.id, outcome);
    }

    info!(
        kind = %kind,
        succeeded = summary.succeeded(),
        failed = summary.failed(),
        "[BATCH] Batch run complete"
    );
    operator.show(&format!("\n{}", summary.render(&title)));
    Ok(RunOutcome::Completed(summary))
}

async fn submit_candidate<A, O>(
    kind: ContentKind,
    api: &A,
    operator: &O,
    candidate: &Candidate,
    shared_tag: Option<&str>,
) -> Outcome
where
    A: ContentApi + ?Sized,
    O: Operator + ?Sized,
{
    let item = match &candidate.verdict {
        Verdict::Valid(item) => item,
        Verdict::Invalid(reason) => {
            warn!(id = %candidate.id, %reason, "[BATCH] Skipping invalid candidate");
            operator.show(&format!(
                "Skipping '{}' due to payload error: {reason}",
                candidate.id
            ));
            return Outcome::Failed {
                status: None,
                detail: reason.clone(),
            };
        }
    };

    let request = build_request(kind, item, shared_tag);
    debug!(id = %candidate.id, ?request, "[BATCH] Submitting request");

    match api.create(request).await {
        Ok(()) => {
            info!(id = %candidate.id, "[BATCH] Created");
            operator.show(&format!(
                "Successfully created {kind} from '{}'.",
                candidate.id
            ));
            Outcome::Succeeded
        }
        Err(e) => {
            warn!(id = %candidate.id, error = %e, "[BATCH] Create failed");
            operator.show(&format!(
                "Failed to create {kind} from '{}'. {e}",
                candidate.id
            ));
            Outcome::Failed {
                status: e.status(),
                detail: e.to_string(),
            }
        }
    }
}

/// Builds the wire request for one prepared item, injecting the shared tag where the type carries one.
pub fn build_request(kind: ContentKind, item: &PreparedItem, shared_tag: Option<&str>) -> CreateRequest {
    let body = match item {
        PreparedItem::University {
            image,
            file_name,
            name,
            displayed_name,
        } => RequestBody::Multipart {
            file: FilePart {
                field: "icon".to_string(),
                path: image.clone(),
                file_name: file_name.clone(),
                mime: image_mime(file_name).to_string(),
            },
            json_field: "university".to_string(),
            json: json!({ "name": name, "displayedName": displayed_name }),
        },
        PreparedItem::Cast {
            media,
            media_name,
            payload,
        } => RequestBody::Multipart {
            file: FilePart {
                field: "video".to_string(),
                path: media.clone(),
                file_name: media_name.clone(),
                mime: "video/mp4".to_string(),
            },
            json_field: "cast".to_string(),
            json: payload
                .with_text(SHARED_TAG_KEY, shared_tag.unwrap_or_default())
                .to_json(),
        },
        PreparedItem::Article { payload } => RequestBody::Json(
            payload
                .with_text(SHARED_TAG_KEY, shared_tag.unwrap_or_default())
                .to_json(),
        ),
    };

    CreateRequest {
        endpoint: kind.endpoint().to_string(),
        body,
    }
}

fn image_mime(file_name: &str) -> &'static str {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".png") {
        "image/png"
    } else {
        "image/jpeg"
    }
}

/// Centered title block used at the start of every run.
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(50);
    format!("\n{rule}\n{title:^50}\n{rule}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::Payload;
    use std::path::PathBuf;

    #[test]
    fn article_request_is_json_with_shared_tag() {
        let payload = Payload::from_json_str(r#"{"title": "Intro", "duration": 3}"#).unwrap();
        let request = build_request(
            ContentKind::Article,
            &PreparedItem::Article { payload },
            Some("bm-42"),
        );

        assert_eq!(request.endpoint, "article");
        assert_eq!(
            request.body,
            RequestBody::Json(json!({"title": "Intro", "duration": 3, "brightmindid": "bm-42"}))
        );
    }

    #[test]
    fn university_request_carries_names_and_image_mime() {
        let item = PreparedItem::University {
            image: PathBuf::from("/icons/UniversityofMelbourne.JPG"),
            file_name: "UniversityofMelbourne.JPG".into(),
            name: "UniversityofMelbourne".into(),
            displayed_name: "University of Melbourne".into(),
        };
        let request = build_request(ContentKind::University, &item, None);

        match request.body {
            RequestBody::Multipart {
                file,
                json_field,
                json,
            } => {
                assert_eq!(file.field, "icon");
                assert_eq!(file.mime, "image/jpeg");
                assert_eq!(json_field, "university");
                assert_eq!(
                    json,
                    json!({"name": "UniversityofMelbourne", "displayedName": "University of Melbourne"})
                );
            }
            other => panic!("expected multipart body, got {other:?}"),
        }
    }

    #[test]
    fn banner_centres_title() {
        let b = banner("PURGE UTILITY");
        assert!(b.contains(&format!("{:^50}", "PURGE UTILITY")));
        assert_eq!(b.matches(&"=".repeat(50)).count(), 2);
    }
}
