//! URL pattern matching with `{param}` placeholders.

use regex::Regex;

/// Match a request url against a mock url pattern.
///
/// Each `{name}` placeholder matches one path segment. Query strings and
/// trailing slashes are ignored on both sides.
pub fn url_matches(pattern: &str, url: &str) -> bool {
    let pattern = strip_query_and_slash(pattern);
    let url = strip_query_and_slash(url);

    compile_pattern(pattern).is_some_and(|regex| regex.is_match(url))
}

fn strip_query_and_slash(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or("");
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

fn compile_pattern(pattern: &str) -> Option<Regex> {
    let mut source = String::from("^");
    let mut rest = pattern;

    while let Some(start) = rest.find('{') {
        source.push_str(&regex::escape(&rest[..start]));
        let after = &rest[start + 1..];
        let end = after.find('}').unwrap_or(after.len());
        source.push_str("[^/]+");
        rest = after.get(end + 1..).unwrap_or("");
    }
    source.push_str(&regex::escape(rest));
    source.push_str("/?$");

    Regex::new(&source).ok()
}
