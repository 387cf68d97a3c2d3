//! Identity normalization.
//!
//! Dataset keys and queries meet in one normal form: lowercase
//! `name-realm` with the realm reduced to a bare slug. The same realm
//! arrives as `"Twilight's Hammer"`, `"twilights-hammer"` or
//! `"twilightshammer"` depending on which upstream surface produced the
//! identity, and all three must land on one index key.

use unicode_normalization::UnicodeNormalization;

const APOSTROPHES: &[char] = &['\'', '\u{2019}', '`'];

/// Normalize a full `Name-Realm` identity into its index key.
///
/// Deterministic and idempotent: `normalize(normalize(s)) ==
/// normalize(s)`.
pub fn normalize(identity: &str) -> String {
    let repaired = repair_possessive(identity.trim());
    match repaired.split_once('-') {
        Some((name, realm)) => format!("{}-{}", normalize_name(name), normalize_realm(realm)),
        None => normalize_name(&repaired),
    }
}

/// Upstream concatenation artifact: a possessive `'s` glued straight
/// onto the next capitalized word (`"Twilight'sHammer"`) gets the
/// missing space back before any lowercasing.
fn repair_possessive(identity: &str) -> String {
    let chars: Vec<char> = identity.chars().collect();
    let mut out = String::with_capacity(identity.len() + 1);
    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        let possessive = i >= 1
            && APOSTROPHES.contains(&chars[i - 1])
            && (c == 's' || c == 'S')
            && chars.get(i + 1).is_some_and(|next| next.is_uppercase());
        if possessive {
            out.push(' ');
        }
    }
    out
}

/// Decompose, strip combining marks, drop apostrophes, lowercase
fn fold(portion: &str) -> String {
    portion
        .nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .filter(|c| !APOSTROPHES.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn normalize_name(name: &str) -> String {
    fold(name.trim())
}

/// Realms additionally lose whitespace and hyphens so display names,
/// hyphenated slugs and concatenated keys coincide
fn normalize_realm(realm: &str) -> String {
    fold(realm)
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}
