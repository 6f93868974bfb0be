use serde::{Deserialize, Serialize};
use crate::config::enums::upload_format::UploadFormat;

/// The rewrite policy applied to every intercepted announce.
///
/// A copy of this struct is taken once per request, so changes made while a
/// request is in flight only affect the requests that follow.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PolicyConfig {
    /// Last known seeder count at or above which `multiplier_high` is used.
    pub seeder_threshold: i64,
    /// Multiplier for swarms below the threshold, or never seen before.
    pub multiplier_low: f64,
    /// Multiplier for swarms at or above the threshold.
    pub multiplier_high: f64,
    /// Report `downloaded=0` on every announce.
    pub suppress_download: bool,
    /// Report `left=0` on every announce.
    pub pretend_fully_seeded: bool,
    #[serde(default)]
    pub upload_format: UploadFormat,
}
