use std::fmt;
use std::fmt::Formatter;
use crate::proxy::structs::query_pair::QueryPair;
use crate::proxy::structs::query_string::QueryString;

impl QueryString {
    /// Splits `query` on `&`, and each item at its first `=`.
    ///
    /// An empty input yields an empty query string, so that it is written back
    /// out as nothing at all.
    pub fn parse(query: &str) -> QueryString
    {
        if query.is_empty() {
            return QueryString::default();
        }
        let pairs = query.split('&').map(|item| match item.split_once('=') {
            Some((key, value)) => QueryPair {
                key: key.to_string(),
                value: Some(value.to_string()),
            },
            None => QueryPair {
                key: item.to_string(),
                value: None,
            },
        }).collect();
        QueryString { pairs }
    }

    /// Value of the first `key=value` item.
    pub fn get(&self, key: &str) -> Option<&str>
    {
        self.pairs.iter()
            .find(|pair| pair.key == key && pair.value.is_some())
            .and_then(|pair| pair.value.as_deref())
    }

    pub fn contains(&self, key: &str) -> bool
    {
        self.get(key).is_some()
    }

    /// Replaces the value of the first `key=value` item, leaving any later
    /// duplicates alone. Returns `false` when there is no such item.
    pub fn replace_first(&mut self, key: &str, value: &str) -> bool
    {
        match self.pairs.iter_mut().find(|pair| pair.key == key && pair.value.is_some()) {
            Some(pair) => {
                pair.value = Some(value.to_string());
                true
            }
            None => false,
        }
    }

    pub fn pairs(&self) -> &[QueryPair]
    {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool
    {
        self.pairs.is_empty()
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, pair) in self.pairs.iter().enumerate() {
            if index > 0 {
                f.write_str("&")?;
            }
            f.write_str(&pair.key)?;
            if let Some(value) = &pair.value {
                write!(f, "={value}")?;
            }
        }
        Ok(())
    }
}
