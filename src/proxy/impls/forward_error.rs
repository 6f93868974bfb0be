use crate::proxy::enums::forward_error::ForwardError;

impl ForwardError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ForwardError::ConnectTimeout(_) | ForwardError::ReplyTimeout(_))
    }
}
