use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Conventional absolute HTTP/HTTPS URL: scheme, optional www., a host
    // segment with at least one dot, a 1-6 character TLD-like suffix, and an
    // optional path/query/fragment tail. Anchored at the start so a URL
    // embedded in surrounding garbage does not pass.
    static ref URL_PATTERN: Regex = Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_\+.~#?&/=]*)"
    )
    .expect("URL pattern must compile");
}

/// Returns true iff `url` is formatted as an absolute HTTP(S) URL.
///
/// Purely syntactic; no network access and no error path.
pub fn is_well_formed(url: &str) -> bool {
    URL_PATTERN.is_match(url)
}
