use regex::Regex;
use std::sync::OnceLock;

/// Dotted-quad token anchored at the start of the line.
///
/// Intentionally permissive: any `digits.digits.digits.digits` run qualifies,
/// with no octet range validation — the address is trusted as written.
static ADDRESS_REGEX: OnceLock<Regex> = OnceLock::new();

/// Quoted HTTP request line, searched anywhere in the entry.
///
/// Example match:
///   10.0.0.1 - - [15/Jan/2024:10:30:00] "GET /api/users HTTP/1.1" 200 512
static REQUEST_REGEX: OnceLock<Regex> = OnceLock::new();

fn address_regex() -> &'static Regex {
    ADDRESS_REGEX.get_or_init(|| {
        Regex::new(r"^(\d+\.\d+\.\d+\.\d+)").expect("hard-coded regex should always compile")
    })
}

fn request_regex() -> &'static Regex {
    REQUEST_REGEX.get_or_init(|| {
        Regex::new(r#""(?:GET|POST|PUT|DELETE|HEAD) (\S+) HTTP"#)
            .expect("hard-coded regex should always compile")
    })
}

/// Extract the source address from a log line, if one leads it.
pub fn source_address(line: &str) -> Option<&str> {
    // Anchored pattern: the whole match is the capture
    address_regex().find(line).map(|m| m.as_str())
}

/// Extract the requested path from a quoted `METHOD path HTTP...` token.
///
/// Only the five methods the request pattern recognizes produce a match;
/// anything else (PATCH, OPTIONS, unquoted requests) is uninformative.
pub fn request_path(line: &str) -> Option<&str> {
    request_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether the line carries an authentication-failure marker.
///
/// Plain substring containment, not field-scoped: a `401` appearing in an
/// unrelated token (byte count, timestamp) also counts.
pub fn is_auth_failure(line: &str) -> bool {
    line.contains("401") || line.contains("Invalid credentials")
}

// ─── Unit Tests ──────────────────────────────────────────────────────────────
