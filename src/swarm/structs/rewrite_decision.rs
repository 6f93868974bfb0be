use crate::config::enums::upload_format::UploadFormat;

/// What to do to one announce, decided before it is forwarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewriteDecision {
    pub multiplier: f64,
    pub suppress_download: bool,
    pub pretend_fully_seeded: bool,
    pub upload_format: UploadFormat,
}
