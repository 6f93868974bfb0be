use std::fmt;
use std::fmt::Formatter;
use crate::swarm::structs::swarm_id::SwarmId;

impl fmt::Display for SwarmId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SwarmId {
    fn from(value: &str) -> Self {
        SwarmId(value.to_string())
    }
}
