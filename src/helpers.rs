/// True for absent values, empty strings, and strings made only of whitespace
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Returns the value only when it carries non-whitespace content
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Split at the first `?`.
/// Returns (`path`, `query_without_question_mark`)
/// Optimization: Uses SIMD-accelerated memchr for fast '?' search
pub fn split_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Truncate at the first occurrence of `delimiter`
pub fn truncate_at(input: &str, delimiter: u8) -> &str {
    memchr::memchr(delimiter, input.as_bytes()).map_or(input, |pos| &input[..pos])
}

/// Name part of a `name=value` pair (the whole pair when there is no `=`)
pub fn pair_name(pair: &str) -> &str {
    truncate_at(pair, b'=')
}
