//! Folder scanning: turns a chosen folder into validated candidates.
//!
//! Each content type has its own discovery rule (see [`discover`]). Every
//! candidate gets a verdict up front; valid ones carry everything needed to
//! build the request so files are read only once.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::content::{ContentKind, CAST_METADATA_FILE};
use crate::display_name::format_displayed_name;
use crate::error::RunError;
use crate::payload::Payload;
use crate::validate::{validate, Schema};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];
const ARTICLE_EXTENSIONS: &[&str] = &["txt", "json"];

/// Ready-to-submit data for a valid candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum PreparedItem {
    University {
        image: PathBuf,
        file_name: String,
        /// Raw identifier (file stem).
        name: String,
        displayed_name: String,
    },
    Cast {
        media: PathBuf,
        media_name: String,
        payload: Payload,
    },
    Article {
        payload: Payload,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Valid(PreparedItem),
    Invalid(String),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid(_))
    }
}

/// A discovered file or subfolder plus its verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// File or subfolder name, used in reports.
    pub id: String,
    pub verdict: Verdict,
}

impl Candidate {
    /// One report line: the id, plus the reason when invalid.
    pub fn report_line(&self) -> String {
        match &self.verdict {
            Verdict::Valid(_) => format!("  - {}", self.id),
            Verdict::Invalid(reason) => format!("  - {}  (PAYLOAD ERROR: {reason})", self.id),
        }
    }
}

/// Scans `folder` according to `kind`'s rule. Entries are visited in file-name order.
///
/// Fails only when the folder itself cannot be listed or nothing matches the
/// rule; per-item problems become [`Verdict::Invalid`].
pub fn discover(kind: ContentKind, folder: &Path) -> Result<Vec<Candidate>, RunError> {
    info!(kind = %kind, folder = %folder.display(), "Scanning folder for candidates");
    let entries = sorted_entries(folder)?;

    let candidates: Vec<Candidate> = match kind {
        ContentKind::University => entries
            .iter()
            .filter(|p| p.is_file() && has_extension(p, IMAGE_EXTENSIONS))
            .map(|p| university_candidate(p))
            .collect(),
        ContentKind::Cast => entries
            .iter()
            .filter(|p| p.is_dir())
            .map(|p| cast_candidate(p))
            .collect(),
        ContentKind::Article => entries
            .iter()
            .filter(|p| p.is_file() && has_extension(p, ARTICLE_EXTENSIONS))
            .map(|p| article_candidate(p))
            .collect(),
    };

    if candidates.is_empty() {
        warn!(kind = %kind, folder = %folder.display(), "No candidates found");
        return Err(RunError::NoCandidates {
            folder: folder.to_path_buf(),
            rule: kind.discovery_rule(),
        });
    }

    let invalid = candidates.iter().filter(|c| !c.verdict.is_valid()).count();
    info!(
        kind = %kind,
        total = candidates.len(),
        invalid,
        "Discovery finished"
    );
    Ok(candidates)
}

fn sorted_entries(folder: &Path) -> Result<Vec<PathBuf>, RunError> {
    let io_err = |source| RunError::Io {
        path: folder.to_path_buf(),
        source,
    };
    let mut entries = Vec::new();
    for entry in fs::read_dir(folder).map_err(io_err)? {
        entries.push(entry.map_err(io_err)?.path());
    }
    entries.sort();
    Ok(entries)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|e| allowed.contains(&e.as_str()))
}

fn university_candidate(path: &Path) -> Candidate {
    let id = file_name(path);
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let displayed_name = format_displayed_name(&name);
    debug!(file = %id, %displayed_name, "University candidate");
    Candidate {
        verdict: Verdict::Valid(PreparedItem::University {
            image: path.to_path_buf(),
            file_name: id.clone(),
            name,
            displayed_name,
        }),
        id,
    }
}

fn cast_candidate(dir: &Path) -> Candidate {
    let id = file_name(dir);
    let verdict = match cast_verdict(dir) {
        Ok(item) => Verdict::Valid(item),
        Err(reason) => {
            debug!(folder = %id, %reason, "Cast subfolder rejected");
            Verdict::Invalid(reason)
        }
    };
    Candidate { id, verdict }
}

fn cast_verdict(dir: &Path) -> Result<PreparedItem, String> {
    let files: Vec<PathBuf> = sorted_entries(dir)
        .map_err(|e| format!("error reading folder: {e}"))?
        .into_iter()
        .filter(|p| p.is_file())
        .collect();

    let (metadata, media): (Vec<&PathBuf>, Vec<&PathBuf>) = files
        .iter()
        .partition(|p| file_name(p).eq_ignore_ascii_case(CAST_METADATA_FILE));

    if metadata.len() != 1 {
        return Err(format!(
            "expected exactly one '{CAST_METADATA_FILE}' metadata file, found {}",
            metadata.len()
        ));
    }
    if media.len() != 1 {
        return Err(format!(
            "expected exactly one video file, found {}",
            media.len()
        ));
    }

    let payload = read_payload(metadata[0], &crate::content::CAST_SCHEMA)?;
    Ok(PreparedItem::Cast {
        media: media[0].clone(),
        media_name: file_name(media[0]),
        payload,
    })
}

fn article_candidate(path: &Path) -> Candidate {
    let id = file_name(path);
    let verdict = match read_payload(path, &crate::content::ARTICLE_SCHEMA) {
        Ok(payload) => Verdict::Valid(PreparedItem::Article { payload }),
        Err(reason) => {
            debug!(file = %id, %reason, "Article file rejected");
            Verdict::Invalid(reason)
        }
    };
    Candidate { id, verdict }
}

/// Reads, decodes and validates one metadata document.
fn read_payload(path: &Path, schema: &Schema) -> Result<Payload, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("error reading file: {e}"))?;
    let payload = Payload::from_json_str(&text).map_err(|e| e.to_string())?;
    validate(&payload, schema).map_err(|e| format!("payload error: {e}"))?;
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(has_extension(Path::new("a/Logo.PNG"), IMAGE_EXTENSIONS));
        assert!(has_extension(Path::new("a/logo.jpeg"), IMAGE_EXTENSIONS));
        assert!(!has_extension(Path::new("a/logo.gif"), IMAGE_EXTENSIONS));
        assert!(!has_extension(Path::new("a/README"), ARTICLE_EXTENSIONS));
    }

    #[test]
    fn report_line_shows_reason_for_invalid() {
        let c = Candidate {
            id: "broken.json".into(),
            verdict: Verdict::Invalid("invalid JSON format: EOF".into()),
        };
        assert_eq!(
            c.report_line(),
            "  - broken.json  (PAYLOAD ERROR: invalid JSON format: EOF)"
        );
    }
}
