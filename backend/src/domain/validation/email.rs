//! Email address shape checks.

use std::sync::OnceLock;

use regex::Regex;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // local-part `@` label, then one or more `.label` segments.
        let pattern = concat!(
            r"^[A-Za-z0-9+._%\-]{1,256}",
            r"@[A-Za-z0-9][A-Za-z0-9\-]{0,64}",
            r"(\.[A-Za-z0-9][A-Za-z0-9\-]{0,25})+$",
        );
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Return `true` when `email` has the shape of an email address.
///
/// The pattern is permissive: multi-part domains (`mail.example.co.uk`) and
/// upper-case domains are accepted, a bare `user@host` is not.
///
/// # Examples
/// ```
/// use sanjibook::domain::validation::is_valid_email;
///
/// assert!(is_valid_email("ana@demo.com"));
/// assert!(!is_valid_email("a@b"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}
