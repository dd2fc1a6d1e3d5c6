use uritext::{append_forward_slash, combine, get_domain_name};

fn main() {
    let base = "https://www.example.com:8080/docs/";

    println!("Domain: {:?}", get_domain_name(Some(base))); // Some("example.com")
    println!("Combined: {:?}", combine(Some(base), Some("/getting-started"))); // Some("https://www.example.com:8080/docs/getting-started")
    println!("With slash: {}", append_forward_slash(Some("https://example.com/api"))); // https://example.com/api/
    println!("Blank with slash: {}", append_forward_slash(None)); // /
}
