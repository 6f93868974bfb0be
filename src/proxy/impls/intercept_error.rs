use crate::proxy::enums::intercept_error::InterceptError;

impl InterceptError {
    /// `true` when the request is not a tracker announce at all, as opposed to
    /// an announce whose tracker address cannot be worked out.
    pub fn is_ineligible(&self) -> bool {
        !matches!(self, InterceptError::UnresolvableUri(_))
    }
}
