use crate::compat::{String, ToString, format};
use crate::helpers::{non_blank, truncate_at};

/// Literal substrings removed (first occurrence each, in order) before the host is isolated
const STRIPPED_PREFIXES: [&str; 3] = ["http://", "https://", "www."];

/// Returns the domain name of a URL: the last two dot-separated labels of the
/// host, or the host itself when it has a single label.
///
/// Query string, scheme, `www.`, path and port are dropped. This is not a
/// public-suffix calculation: `example.co.uk` yields `co.uk`.
///
/// ```
/// use uritext::get_domain_name;
///
/// assert_eq!(
///     get_domain_name(Some("https://www.any.org/this/is/not/returned")).as_deref(),
///     Some("any.org")
/// );
/// assert_eq!(get_domain_name(Some("hello.any.org:8080")).as_deref(), Some("any.org"));
/// assert_eq!(get_domain_name(Some("localhost")).as_deref(), Some("localhost"));
/// assert_eq!(get_domain_name(Some("  ")), None);
/// ```
pub fn get_domain_name(url: Option<&str>) -> Option<String> {
    let Some(url) = non_blank(url) else {
        trace_fallback!("blank url, no domain name");
        return None;
    };

    let mut remaining = truncate_at(url, b'?').to_string();
    for literal in STRIPPED_PREFIXES {
        // first occurrence only, wherever it appears
        remaining = remaining.replacen(literal, "", 1);
    }

    let host = truncate_at(truncate_at(&remaining, b'/'), b':');

    let domain = match host.rsplit_once('.') {
        None => host.to_string(),
        Some((rest, top)) => {
            let second = rest.rsplit_once('.').map_or(rest, |(_, label)| label);
            format!("{second}.{top}")
        }
    };
    Some(domain)
}
