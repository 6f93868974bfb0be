use once_cell::sync::Lazy;
use regex::Regex;
use crate::proxy::enums::intercept_error::InterceptError;
use crate::proxy::proxy::{DEFAULT_HTTP_PORT, DOWNLOADED, INFO_HASH, LEFT, UPLOADED};
use crate::proxy::structs::announce_params::AnnounceParams;
use crate::proxy::structs::announce_request::AnnounceRequest;
use crate::proxy::structs::query_string::QueryString;
use crate::proxy::structs::upstream::Upstream;
use crate::swarm::structs::rewrite_decision::RewriteDecision;

static REQUEST_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^GET (http://\S+) (HTTP/1\.[01])$").expect("request line pattern")
});

static TRACKER_URI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^http://([-a-zA-Z0-9.]+)(?::([0-9]+))?(/.*)$").expect("tracker uri pattern")
});

impl AnnounceRequest {
    /// Parses the head of a proxied announce.
    ///
    /// The first line must be `GET http://host[:port]/path[?query] HTTP/1.x`
    /// and the query must carry an `info_hash` item. Header lines are kept up to
    /// the first blank line; anything after it is dropped.
    pub fn parse(text: &str) -> Result<AnnounceRequest, InterceptError>
    {
        let mut lines = text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line));
        let request_line = lines.next().unwrap_or_default();
        let request = REQUEST_LINE.captures(request_line).ok_or(InterceptError::NotAbsoluteGet)?;
        let uri = request.get(1).map(|m| m.as_str()).unwrap_or_default();
        let version = request.get(2).map(|m| m.as_str().to_string()).unwrap_or_default();

        let target = TRACKER_URI.captures(uri).ok_or_else(|| InterceptError::UnresolvableUri(uri.to_string()))?;
        let host = target.get(1).map(|m| m.as_str()).unwrap_or_default();
        let port = match target.get(2) {
            None => DEFAULT_HTTP_PORT,
            Some(port) => port.as_str().parse::<u16>().map_err(|_| InterceptError::UnresolvableUri(uri.to_string()))?,
        };
        let path_and_query = target.get(3).map(|m| m.as_str()).unwrap_or_default();
        let (path, query) = path_and_query.split_once('?').unwrap_or((path_and_query, ""));

        let query = QueryString::parse(query);
        if !query.contains(INFO_HASH) {
            return Err(InterceptError::MissingSwarmId);
        }

        Ok(AnnounceRequest {
            upstream: Upstream::new(host, port),
            path: path.to_string(),
            params: AnnounceParams::from_query(&query),
            query,
            version,
            headers: lines.take_while(|line| !line.is_empty()).map(str::to_string).collect(),
        })
    }

    /// Applies `decision` to a copy of the query string. Fields the client
    /// did not send are never added, and every other item is kept as is.
    pub fn rewritten_query(&self, decision: &RewriteDecision) -> QueryString
    {
        let mut query = self.query.clone();
        if let Some(uploaded) = &self.params.uploaded {
            query.replace_first(UPLOADED, &rewrite_uploaded(uploaded, decision));
        }
        if decision.suppress_download && self.params.downloaded.is_some() {
            query.replace_first(DOWNLOADED, "0");
        }
        if decision.pretend_fully_seeded && self.params.left.is_some() {
            query.replace_first(LEFT, "0");
        }
        query
    }

    /// Builds the origin-form request sent to the tracker: the path with
    /// `query`, the original headers with `Host` pointing at the tracker, and
    /// the terminating blank line.
    pub fn upstream_request(&self, query: &QueryString) -> String
    {
        let query = query.to_string();
        let mut request = match query.is_empty() {
            true => format!("GET {} HTTP/1.1\r\n", self.path),
            false => format!("GET {}?{} HTTP/1.1\r\n", self.path, query),
        };
        let host = format!("Host: {}", self.upstream);
        let mut host_written = false;
        for header in &self.headers {
            if is_host_header(header) {
                request.push_str(&host);
                host_written = true;
            } else {
                request.push_str(header);
            }
            request.push_str("\r\n");
        }
        if !host_written {
            request.push_str(&host);
            request.push_str("\r\n");
        }
        request.push_str("\r\n");
        request
    }
}

/// Scales the reported upload by `decision.multiplier`. A value that is not
/// an integer counts as zero.
pub fn rewrite_uploaded(value: &str, decision: &RewriteDecision) -> String
{
    let uploaded = value.trim().parse::<i64>().unwrap_or(0);
    decision.upload_format.render(uploaded as f64 * decision.multiplier)
}

fn is_host_header(line: &str) -> bool
{
    line.split_once(':')
        .map(|(name, _)| name.trim().eq_ignore_ascii_case("host"))
        .unwrap_or(false)
}
