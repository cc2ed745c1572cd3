use serde::Serialize;

use super::MetaRecord;

/// Card-ready view of a [`MetaRecord`] returned by `POST /extract/preview`.
///
/// Open Graph values win over their plain counterparts. Fields are `None`
/// when the chosen value is empty or only whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPreview {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub site_name: Option<String>,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl MetaRecord {
    pub fn preview(&self) -> LinkPreview {
        LinkPreview {
            title: non_blank(&self.og_title).or_else(|| non_blank(&self.title)),
            description: non_blank(&self.og_description).or_else(|| non_blank(&self.description)),
            image: non_blank(&self.og_image),
            site_name: non_blank(&self.og_site_name),
        }
    }
}

impl From<&MetaRecord> for LinkPreview {
    fn from(record: &MetaRecord) -> Self {
        record.preview()
    }
}
