use serde::Serialize;
use strum::{EnumIter, IntoStaticStr};

/// The `<meta property="...">` keys the scanner recognizes.
///
/// The serialized form of each variant is the exact attribute value matched
/// against; comparison is case-sensitive and untrimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum MetaProperty {
    #[strum(serialize = "description")]
    Description,
    #[strum(serialize = "og:title")]
    OgTitle,
    #[strum(serialize = "og:description")]
    OgDescription,
    #[strum(serialize = "og:image")]
    OgImage,
    #[strum(serialize = "og:author")]
    OgAuthor,
    #[strum(serialize = "og:publisher")]
    OgPublisher,
    #[strum(serialize = "og:site_name")]
    OgSiteName,
}

impl MetaProperty {
    /// All recognized properties, in the order a `<meta>` tag is checked.
    pub const ALL: [MetaProperty; 7] = [
        MetaProperty::Description,
        MetaProperty::OgTitle,
        MetaProperty::OgDescription,
        MetaProperty::OgImage,
        MetaProperty::OgAuthor,
        MetaProperty::OgPublisher,
        MetaProperty::OgSiteName,
    ];

    /// The `property` attribute value this variant matches.
    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// Flat record of everything extracted from one document.
///
/// Every field defaults to the empty string. A field holds the last value
/// seen for its source in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaRecord {
    pub title: String,
    pub description: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub og_author: String,
    pub og_publisher: String,
    pub og_site_name: String,
}

impl MetaRecord {
    pub fn get(&self, property: MetaProperty) -> &str {
        match property {
            MetaProperty::Description => &self.description,
            MetaProperty::OgTitle => &self.og_title,
            MetaProperty::OgDescription => &self.og_description,
            MetaProperty::OgImage => &self.og_image,
            MetaProperty::OgAuthor => &self.og_author,
            MetaProperty::OgPublisher => &self.og_publisher,
            MetaProperty::OgSiteName => &self.og_site_name,
        }
    }

    pub fn field_mut(&mut self, property: MetaProperty) -> &mut String {
        match property {
            MetaProperty::Description => &mut self.description,
            MetaProperty::OgTitle => &mut self.og_title,
            MetaProperty::OgDescription => &mut self.og_description,
            MetaProperty::OgImage => &mut self.og_image,
            MetaProperty::OgAuthor => &mut self.og_author,
            MetaProperty::OgPublisher => &mut self.og_publisher,
            MetaProperty::OgSiteName => &mut self.og_site_name,
        }
    }

    /// True when nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && MetaProperty::ALL.iter().all(|p| self.get(*p).is_empty())
    }
}
