// ============================================================================
// Extraction Models
// ============================================================================

mod link_preview;
mod meta_record;

pub use link_preview::LinkPreview;
pub use meta_record::{MetaProperty, MetaRecord};
