/// Query parameter editing example
use uritext::{add_parameter, parse_int_parameter, parse_string_parameter, remove_parameter};

fn main() {
    // Add parameters (values are percent-encoded)
    let url = add_parameter(Some("https://example.com/search"), Some("q"), Some("rust url"));
    let url = add_parameter(Some(url.as_str()), Some("page"), Some("1"));
    println!("Added: {url}"); // https://example.com/search?q=rust%20url&page=1
    println!();

    // Replace (the replaced parameter moves to the end)
    let url = add_parameter(Some(url.as_str()), Some("Q"), Some("cargo"));
    println!("Replaced: {url}"); // https://example.com/search?page=1&Q=cargo
    println!();

    // Remove
    let url = remove_parameter(Some(url.as_str()), Some("page")).unwrap_or_default();
    println!("Removed: {url}"); // https://example.com/search?Q=cargo
    println!();

    // Read request values with defaults
    let page = parse_int_parameter(Some("0"), 1, 100, 1);
    let size = parse_int_parameter(Some("25"), 1, 100, 10);
    let sort = parse_string_parameter(Some("  "), "name");
    println!("page={page} size={size} sort={sort}"); // page=1 size=25 sort=name
}
