use crate::numeric::with_commas;

/// Pick the singular or plural form of a message.
// TODO: languages with more than two grammatical number forms need real
// plural-rule tables; this binary rule only covers English-like locales.
pub fn ngettext<'a>(singular: &'a str, plural: &'a str, n: u64) -> &'a str {
    if n == 1 {
        singular
    } else {
        plural
    }
}

/// Grouped count plus the matching message form: "1,234 transfers".
pub fn count_string(singular: &str, plural: &str, n: u64) -> String {
    format!("{} {}", with_commas(n), ngettext(singular, plural, n))
}
