pub mod proxy_state;
