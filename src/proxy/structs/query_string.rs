use crate::proxy::structs::query_pair::QueryPair;

/// A query string kept as its original sequence of items, so that writing it
/// back out reproduces the input exactly apart from deliberate changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryString {
    pub(crate) pairs: Vec<QueryPair>,
}
