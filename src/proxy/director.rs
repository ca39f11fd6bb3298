//! Request URI rewriting onto the upstream target.

use axum::http::uri::{InvalidUri, Uri};
use url::Url;

/// Point `uri` at `target`, keeping the request path and query.
///
/// The target's path is used as a prefix and the target's query, if any,
/// comes before the request's.
pub fn rewrite_uri(target: &Url, uri: &Uri) -> Result<Uri, InvalidUri> {
    let host = target.host_str().unwrap_or_default();
    let authority = match target.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };

    let path = join_paths(target.path(), uri.path());
    let query = join_queries(target.query().unwrap_or(""), uri.query().unwrap_or(""));

    let mut rewritten = format!("{}://{}{}", target.scheme(), authority, path);
    if !query.is_empty() {
        rewritten.push('?');
        rewritten.push_str(&query);
    }
    rewritten.parse()
}

/// Join two path segments with exactly one slash at the seam.
pub fn join_paths(base: &str, path: &str) -> String {
    match (base.ends_with('/'), path.starts_with('/')) {
        (true, true) => format!("{}{}", base, &path[1..]),
        (false, false) => format!("{}/{}", base, path),
        _ => format!("{}{}", base, path),
    }
}

fn join_queries(target: &str, request: &str) -> String {
    if target.is_empty() || request.is_empty() {
        format!("{}{}", target, request)
    } else {
        format!("{}&{}", target, request)
    }
}
