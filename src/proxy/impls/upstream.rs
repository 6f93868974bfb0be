use std::fmt;
use std::fmt::Formatter;
use crate::proxy::structs::upstream::Upstream;

impl Upstream {
    pub fn new(host: &str, port: u16) -> Upstream
    {
        Upstream {
            host: host.to_string(),
            port,
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
