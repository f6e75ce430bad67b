//! Pure rendering primitives shared by every table.

use chrono::{DateTime, Utc};

use super::cell::CellValue;

const REF_HEAD_CHARS: usize = 8;
const REF_TAIL_CHARS: usize = 6;

/// Signed-value classification: positive iff the formatted value starts with `+`.
///
/// `"+$1.00"` is positive; `"-$1.00"` and unsigned `"$1.00"` are not.
pub fn is_positive(formatted: &str) -> bool {
    formatted.starts_with('+')
}

/// Wrap a formatted signed value as a colored cell.
pub fn signed(formatted: &str) -> CellValue {
    CellValue::Signed {
        text: formatted.to_string(),
        positive: is_positive(formatted),
    }
}

/// Relative age: `"Ns ago"` under a minute, `"Nm ago"` under an hour, else
/// `"Nh ago"`. Truncates at each tier; timestamps in the future read `"0s ago"`.
pub fn time_ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - at).num_seconds().max(0);
    if secs < 60 {
        format!("{secs}s ago")
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else {
        format!("{}h ago", secs / 3600)
    }
}

/// Shorten a reference to its first 8 and last 6 characters: `0xabcdef…123456`.
/// References too short to shorten are returned whole.
pub fn short_ref(reference: &str) -> String {
    let chars: Vec<char> = reference.chars().collect();
    if chars.len() <= REF_HEAD_CHARS + REF_TAIL_CHARS {
        return reference.to_string();
    }
    let head: String = chars[..REF_HEAD_CHARS].iter().collect();
    let tail: String = chars[chars.len() - REF_TAIL_CHARS..].iter().collect();
    format!("{head}...{tail}")
}

/// Maps an identity to the place it navigates to.
pub trait LinkResolver: Send + Sync {
    fn href(&self, identity: &str) -> String;
}

/// Default resolver: `/profile/{identity}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileLinks;

impl LinkResolver for ProfileLinks {
    fn href(&self, identity: &str) -> String {
        format!("/profile/{identity}")
    }
}

/// A navigable identity cell.
pub fn identity_link(identity: &str, links: &dyn LinkResolver) -> CellValue {
    CellValue::Link {
        label: identity.to_string(),
        href: links.href(identity),
    }
}

/// Identity-or-fallback: a link when a label exists, otherwise a short token
/// derived deterministically from the transaction reference.
pub fn identity_or_fallback(
    label: Option<&str>,
    transaction_ref: &str,
    links: &dyn LinkResolver,
) -> CellValue {
    match label {
        Some(identity) => identity_link(identity, links),
        None => CellValue::Mono(short_ref(transaction_ref)),
    }
}
