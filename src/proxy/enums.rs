pub mod forward_error;
pub mod handle_outcome;
pub mod intercept_error;
pub mod proxy_error;
