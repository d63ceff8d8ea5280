//! Fixed per-content-type configuration: endpoints, schemas and purge targets.

use std::fmt;

use crate::validate::{FieldSpec, Schema};

/// Key under which the operator's shared tag is injected into every payload.
pub const SHARED_TAG_KEY: &str = "brightmindid";

/// Name of the metadata file expected inside each cast subfolder.
pub const CAST_METADATA_FILE: &str = "json.txt";

pub static CAST_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::text("title"),
        FieldSpec::text("department"),
        FieldSpec::text("university"),
        FieldSpec::text("category"),
        FieldSpec::text("visibility"),
        FieldSpec::text("link"),
        FieldSpec::text("topic"),
        FieldSpec::text("dateadded"),
    ],
};

pub static ARTICLE_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::text("title"),
        FieldSpec::text("department"),
        FieldSpec::text("articleDescription"),
        FieldSpec::text("university"),
        FieldSpec::text("category"),
        FieldSpec::text("visibility"),
        FieldSpec::text("link"),
        FieldSpec::text("topic"),
        FieldSpec::text("dateadded"),
        FieldSpec::positive_integer("duration"),
    ],
};

/// Content that can be bulk-created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    University,
    Cast,
    Article,
}

impl ContentKind {
    /// Collection path segment on the API.
    pub fn endpoint(self) -> &'static str {
        match self {
            ContentKind::University => "university",
            ContentKind::Cast => "cast",
            ContentKind::Article => "article",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            ContentKind::University => "universities",
            ContentKind::Cast => "casts",
            ContentKind::Article => "articles",
        }
    }

    pub fn folder_prompt(self) -> &'static str {
        match self {
            ContentKind::University => "Select Folder Containing University Icons",
            ContentKind::Cast => "Select Folder Containing Cast Subfolders",
            ContentKind::Article => "Select Folder Containing Article JSON Files",
        }
    }

    /// Schema the per-item metadata must satisfy. Universities carry no metadata document.
    pub fn schema(self) -> Option<&'static Schema> {
        match self {
            ContentKind::University => None,
            ContentKind::Cast => Some(&CAST_SCHEMA),
            ContentKind::Article => Some(&ARTICLE_SCHEMA),
        }
    }

    /// Whether a run asks the operator for a shared tag value.
    pub fn takes_shared_tag(self) -> bool {
        !matches!(self, ContentKind::University)
    }

    /// Human description of what the folder scan looks for.
    pub fn discovery_rule(self) -> &'static str {
        match self {
            ContentKind::University => "image files (.png, .jpg, .jpeg)",
            ContentKind::Cast => "subfolders",
            ContentKind::Article => ".txt or .json files",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

/// Content that can be purged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeKind {
    Cast,
    Article,
    User,
    University,
}

impl PurgeKind {
    pub fn collection(self) -> &'static str {
        match self {
            PurgeKind::Cast => "cast",
            PurgeKind::Article => "article",
            PurgeKind::User => "user",
            PurgeKind::University => "university",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            PurgeKind::Cast => "casts",
            PurgeKind::Article => "articles",
            PurgeKind::User => "users",
            PurgeKind::University => "universities",
        }
    }

    pub fn id_field(self) -> &'static str {
        "_id"
    }

    /// Field shown to the operator when listing items before deletion.
    pub fn display_field(self) -> &'static str {
        match self {
            PurgeKind::Cast | PurgeKind::Article => "_id",
            PurgeKind::User => "username",
            PurgeKind::University => "displayedName",
        }
    }
}

impl fmt::Display for PurgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}
