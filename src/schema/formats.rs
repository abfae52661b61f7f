//! Format checks for email addresses and URLs.
//!
//! These mirror what browsers and common form libraries accept rather than the
//! full RFC grammars: an email is `local@domain.tld` with a conservative
//! character set, and a URL is whatever the WHATWG URL parser accepts as an
//! absolute URL.

use url::Url;

/// Validate an email address.
///
/// - local part: ASCII alphanumerics and `_ ' + - .`, not starting or ending
///   with `.` and without consecutive dots, not ending with `'`
/// - domain: two or more dot-separated labels, each starting with an
///   alphanumeric; the top-level label is at least two ASCII letters
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.starts_with('.') || local.contains("..") {
        return false;
    }
    if local.ends_with('.') || local.ends_with('\'') {
        return false;
    }
    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.'))
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, rest)) = labels.split_last() else {
        return false;
    };
    if rest.is_empty() {
        return false;
    }
    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    rest.iter().all(|label| {
        label.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

/// Validate an absolute URL with the WHATWG URL parser.
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}
