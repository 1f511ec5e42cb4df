use chrono::{DateTime, Utc};

/// A sheet of music as stored in the `sheets` table
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    pub sheet_name: String,
    pub safe_sheet_name: String,

    /// Denormalized composer display name
    pub composer: String,

    /// Lookup key into the `composers` table (`Composer::safe_name`)
    pub safe_composer: String,

    pub information_text: Option<String>,
    pub pdf_url: Option<String>,
    pub tags: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub release_date: Option<DateTime<Utc>>,
    pub uploader_id: Option<i64>,
}

/// A composer as stored in the `composers` table
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Composer {
    /// Unique slug, referenced by `Sheet::safe_composer`
    pub safe_name: String,
    pub name: String,
    pub portrait_url: Option<String>,
    pub epoch: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
