use crate::compat::{Cow, String, format};
use crate::helpers::{is_blank, non_blank};

/// Appends a forward slash unless the value already ends with one.
/// Blank values become `"/"`.
///
/// ```
/// use uritext::append_forward_slash;
///
/// assert_eq!(append_forward_slash(Some("abc")), "abc/");
/// assert_eq!(append_forward_slash(Some("abc/")), "abc/");
/// assert_eq!(append_forward_slash(None), "/");
/// ```
pub fn append_forward_slash(value: Option<&str>) -> Cow<'_, str> {
    match non_blank(value) {
        None => Cow::Borrowed("/"),
        Some(v) if v.ends_with('/') => Cow::Borrowed(v),
        Some(v) => Cow::Owned(format!("{v}/")),
    }
}

/// Combines two URL parts with exactly one forward slash between them.
///
/// One trailing slash is trimmed from the first part and one leading slash
/// from the second. Returns `None` only when both parts are blank.
///
/// ```
/// use uritext::combine;
///
/// assert_eq!(combine(Some("pear/"), Some("/apple")).as_deref(), Some("pear/apple"));
/// assert_eq!(combine(None, Some("/apple")).as_deref(), Some("apple"));
/// assert_eq!(combine(Some(" "), None), None);
/// ```
pub fn combine(value1: Option<&str>, value2: Option<&str>) -> Option<String> {
    if is_blank(value1) && is_blank(value2) {
        return None;
    }

    let head = non_blank(value1.map(|v| v.strip_suffix('/').unwrap_or(v)));
    let tail = non_blank(value2.map(|v| v.strip_prefix('/').unwrap_or(v)));

    let combined = match (head, tail) {
        (Some(head), Some(tail)) => {
            let mut result = String::with_capacity(head.len() + 1 + tail.len());
            result.push_str(head);
            result.push('/');
            result.push_str(tail);
            result
        }
        (Some(side), None) | (None, Some(side)) => String::from(side),
        (None, None) => String::new(),
    };
    Some(combined)
}
