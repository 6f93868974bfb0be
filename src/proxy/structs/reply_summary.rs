#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplySummary {
    pub complete: Option<i64>,
    pub incomplete: Option<i64>,
    pub interval: Option<i64>,
    pub failure_reason: Option<String>,
}
