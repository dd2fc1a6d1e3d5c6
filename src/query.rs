use crate::compat::{Cow, String, ToString, Vec};
use crate::helpers::{non_blank, pair_name, split_query};
use crate::percent_encode::{COMPONENT_SET, percent_encode_into};

/// Adds a parameter to the URL, replacing any existing parameter of the same
/// name (ASCII case-insensitive).
///
/// The value is percent-encoded. A replaced parameter moves to the end of the
/// query string. A blank URL is treated as empty, a blank name returns the URL
/// as-is, and a blank value removes the parameter instead.
///
/// ```
/// use uritext::add_parameter;
///
/// assert_eq!(add_parameter(Some("hello"), Some("name"), Some("john")), "hello?name=john");
/// assert_eq!(
///     add_parameter(Some("hello?first=jane&last=doe"), Some("first"), Some("sam")),
///     "hello?last=doe&first=sam"
/// );
/// assert_eq!(add_parameter(Some("hello?name=test"), Some("name"), None), "hello");
/// ```
pub fn add_parameter(url: Option<&str>, name: Option<&str>, value: Option<&str>) -> String {
    let url = non_blank(url).unwrap_or("");

    let Some(name) = non_blank(name) else {
        trace_fallback!(url, "blank parameter name, url returned as-is");
        return url.to_string();
    };

    let mut result = strip_parameter(url, name).into_owned();

    let Some(value) = non_blank(value) else {
        trace_fallback!(name, "blank parameter value, parameter removed");
        return result;
    };

    if memchr::memchr(b'?', result.as_bytes()).is_some() {
        result.push('&');
    } else {
        result.push('?');
    }
    result.push_str(name);
    result.push('=');
    percent_encode_into(&mut result, value, COMPONENT_SET);
    result
}

/// Removes every occurrence of a parameter (ASCII case-insensitive) from the URL.
///
/// A blank URL or parameter name returns the URL argument untouched, including
/// `None`. When the last parameter is removed the trailing `?` goes with it.
///
/// ```
/// use uritext::remove_parameter;
///
/// let url = remove_parameter(Some("https://any.org?first=name&last=name"), Some("FIRST"));
/// assert_eq!(url.as_deref(), Some("https://any.org?last=name"));
///
/// let url = remove_parameter(Some("https://any.org?first=name"), Some("first"));
/// assert_eq!(url.as_deref(), Some("https://any.org"));
///
/// assert_eq!(remove_parameter(None, Some("first")), None);
/// ```
pub fn remove_parameter<'a>(
    url: Option<&'a str>,
    parameter_name: Option<&str>,
) -> Option<Cow<'a, str>> {
    let (Some(input), Some(name)) = (non_blank(url), non_blank(parameter_name)) else {
        return url.map(Cow::Borrowed);
    };
    Some(strip_parameter(input, name))
}

/// Drop all `name=value` pairs whose name matches, keeping the rest in order
fn strip_parameter<'a>(url: &'a str, name: &str) -> Cow<'a, str> {
    let (path, Some(query)) = split_query(url) else {
        return Cow::Borrowed(url);
    };

    let mut removed = false;
    let kept: Vec<&str> = query
        .split('&')
        .filter(|pair| {
            let matches = pair_name(pair).eq_ignore_ascii_case(name);
            removed |= matches;
            !matches
        })
        .collect();

    if !removed && !query.is_empty() {
        return Cow::Borrowed(url);
    }

    let remaining = kept.join("&");
    if remaining.is_empty() {
        return Cow::Borrowed(path);
    }

    let mut result = String::with_capacity(path.len() + 1 + remaining.len());
    result.push_str(path);
    result.push('?');
    result.push_str(&remaining);
    Cow::Owned(result)
}
