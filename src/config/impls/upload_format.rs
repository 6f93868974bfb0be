use crate::config::enums::upload_format::UploadFormat;

impl UploadFormat {
    /// Renders an upload byte count after the multiplier has been applied.
    ///
    /// The `float` rendering always carries a decimal point, so whole numbers
    /// come out as `3000.0` rather than `3000`.
    pub fn render(&self, value: f64) -> String {
        match self {
            UploadFormat::float => format!("{value:?}"),
            UploadFormat::integer => format!("{}", value.trunc() as i64),
        }
    }
}
