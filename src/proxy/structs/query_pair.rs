/// One `&` separated item of a query string, split at its first `=`.
///
/// `value` is `None` when the item has no `=` at all, and `Some("")` for
/// `key=`. Neither part is percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPair {
    pub key: String,
    pub value: Option<String>,
}
