use crate::compat::String;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// URI component percent-encode set (ECMAScript `encodeURIComponent`)
/// Everything except ALPHA, DIGIT and - _ . ! ~ * ' ( )
pub const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Write percent-encoded string directly to buffer
pub fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Percent-encode a value for use as a query parameter value.
///
/// Spaces become `%20` (not `+`), non-ASCII characters are encoded as UTF-8
/// bytes, and the unreserved marks `- _ . ! ~ * ' ( )` pass through.
///
/// ```
/// assert_eq!(uritext::encode_component("this is cool"), "this%20is%20cool");
/// assert_eq!(uritext::encode_component("a&b=c"), "a%26b%3Dc");
/// ```
pub fn encode_component(input: &str) -> String {
    let mut buffer = String::new();
    percent_encode_into(&mut buffer, input, COMPONENT_SET);
    buffer
}
