// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// Cleans the utterance column before examples are built. Only
// the text is touched; intents and tag sequences pass through.
//
// Steps (each can be switched off, order is fixed):
//   1. Remove URLs            (http://, https://, ftp://, www.)
//   2. Remove emoji           (pictographs, modifiers, flags, joiners)
//   3. Remove special tokens  (punctuation and symbols)
//   4. Lowercase
//   5. Collapse whitespace runs to a single space and trim
//
// Every removal replaces the match with a space, so removing
// something never glues two neighbouring words together.
// Step 5 always runs. The whole function is idempotent:
// normalize(normalize(x)) == normalize(x) for any options.
//
// Reference: Rust Book §8 (Strings in Rust)
//            regex crate documentation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::row::Row;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:https?://|ftp://|www\.)\S+").expect("URL pattern is valid")
});

// Pictographs (including ©, ™, ⌚, ⏰), skin-tone modifiers and
// flag letters, plus ZWJ, VS16 and the keycap. Digits, '#' and '*'
// are emoji bases but are left alone.
static EMOJI_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\p{Extended_Pictographic}\p{Emoji_Modifier}\p{Regional_Indicator}\x{200D}\x{FE0F}\x{20E3}]",
    )
    .expect("emoji pattern is valid")
});

/// Which normalization steps are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct NormalizeOptions {
    pub lowercase:             bool,
    pub remove_emoji:          bool,
    pub remove_url:            bool,
    pub remove_special_tokens: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            lowercase:             true,
            remove_emoji:          true,
            remove_url:            true,
            remove_special_tokens: false,
        }
    }
}

impl NormalizeOptions {
    /// All steps disabled (whitespace is still collapsed)
    pub fn none() -> Self {
        Self {
            lowercase:             false,
            remove_emoji:          false,
            remove_url:            false,
            remove_special_tokens: false,
        }
    }
}

/// Normalize one text value.
pub fn normalize(text: &str, options: &NormalizeOptions) -> String {
    let mut out = text.to_string();

    if options.remove_url {
        out = URL_PATTERN.replace_all(&out, " ").into_owned();
    }

    if options.remove_emoji {
        out = EMOJI_PATTERN.replace_all(&out, " ").into_owned();
    }

    if options.remove_special_tokens {
        out = out
            .chars()
            .map(|c| if is_word_char(c) { c } else { ' ' })
            .collect();
    }

    if options.lowercase {
        out = out.to_lowercase();
    }

    collapse_whitespace(&out)
}

/// Characters kept by special-token removal: letters, digits,
/// whitespace, combining marks, and the intra-word connectors
/// `_`, `-`, `'`.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
        || c.is_whitespace()
        || matches!(c, '_' | '-' | '\'')
        || is_combining_mark(c)
}

// Lowercasing can emit a combining mark ('İ' → "i\u{307}"), and
// Vietnamese text is often written with decomposed diacritics.
fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ─── TextNormalizer ───────────────────────────────────────────────────────────
/// Applies one set of options to every row of a collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    options: NormalizeOptions,
}

impl TextNormalizer {
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    pub fn normalize(&self, text: &str) -> String {
        normalize(text, &self.options)
    }

    /// Map the normalizer over the text column, producing new rows.
    pub fn normalize_rows(&self, rows: Vec<Row>) -> Vec<Row> {
        rows.into_iter()
            .map(|row| Row {
                text: self.normalize(&row.text),
                ..row
            })
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_options() {
        let n = TextNormalizer::default();
        assert_eq!(
            n.normalize("Check https://example.com/a?b=1 NOW 😀 please!"),
            "check now please!"
        );
    }

    #[test]
    fn test_removes_www_urls() {
        let opts = NormalizeOptions { remove_url: true, ..NormalizeOptions::none() };
        assert_eq!(normalize("go to www.Example.org today", &opts), "go to today");
    }

    #[test]
    fn test_url_removal_is_case_insensitive() {
        let opts = NormalizeOptions { remove_url: true, ..NormalizeOptions::none() };
        assert_eq!(normalize("see HTTPS://X.Y/z", &opts), "see");
    }

    #[test]
    fn test_emoji_removal_keeps_words_apart() {
        let opts = NormalizeOptions { remove_emoji: true, ..NormalizeOptions::none() };
        assert_eq!(normalize("hi😀there ❤️ 👍🏽", &opts), "hi there");
    }

    #[test]
    fn test_emoji_outside_pictograph_blocks() {
        let opts = NormalizeOptions { remove_emoji: true, ..NormalizeOptions::none() };
        assert_eq!(normalize("wake ⏰ at 7 ⌚ ok", &opts), "wake at 7 ok");
        assert_eq!(normalize("Acme© Corp™ 〰 ㊗ 🇻🇳 #1", &opts), "Acme Corp #1");
    }

    #[test]
    fn test_urls_go_before_special_tokens() {
        let opts = NormalizeOptions {
            remove_url:            true,
            remove_special_tokens: true,
            ..NormalizeOptions::none()
        };
        assert_eq!(normalize("see https://a.b/c now!", &opts), "see now");
    }

    #[test]
    fn test_all_steps_in_order() {
        let opts = NormalizeOptions {
            lowercase:             true,
            remove_emoji:          true,
            remove_url:            true,
            remove_special_tokens: true,
        };
        assert_eq!(
            normalize("Đặt VÉ 👍🏽 qua www.Vexere.com/x?a=1, nhé!", &opts),
            "đặt vé qua nhé"
        );
    }

    #[test]
    fn test_special_tokens() {
        let opts = NormalizeOptions {
            remove_special_tokens: true,
            ..NormalizeOptions::none()
        };
        assert_eq!(
            normalize("Hello, world!! it's an e-mail (ok?)", &opts),
            "Hello world it's an e-mail ok"
        );
    }

    #[test]
    fn test_special_tokens_keep_vietnamese() {
        let opts = NormalizeOptions {
            remove_special_tokens: true,
            lowercase:             true,
            ..NormalizeOptions::none()
        };
        assert_eq!(normalize("Đặt vé, đi Hà Nội!", &opts), "đặt vé đi hà nội");
    }

    #[test]
    fn test_lowercase_only() {
        let opts = NormalizeOptions { lowercase: true, ..NormalizeOptions::none() };
        assert_eq!(normalize("Book A Flight", &opts), "book a flight");
    }

    #[test]
    fn test_nothing_enabled_collapses_whitespace() {
        assert_eq!(
            normalize("  Book\ta   Flight 😀 ", &NormalizeOptions::none()),
            "Book a Flight 😀"
        );
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(normalize("", &NormalizeOptions::default()), "");
    }

    #[test]
    fn test_normalize_rows_only_touches_text() {
        let rows = vec![Row::new("Hello World", "Greeting", "O O")];
        let out  = TextNormalizer::default().normalize_rows(rows);
        assert_eq!(out, vec![Row::new("hello world", "Greeting", "O O")]);
    }

    fn options_strategy() -> impl Strategy<Value = NormalizeOptions> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(lowercase, remove_emoji, remove_url, remove_special_tokens)| NormalizeOptions {
                lowercase,
                remove_emoji,
                remove_url,
                remove_special_tokens,
            },
        )
    }

    /// Property: normalizing twice gives the same result as once,
    /// for any text and any option combination.
    #[test]
    fn prop_normalize_is_idempotent() {
        proptest!(|(text in any::<String>(), opts in options_strategy())| {
            let once  = normalize(&text, &opts);
            let twice = normalize(&once, &opts);
            prop_assert_eq!(twice, once);
        });
    }

    #[test]
    fn prop_normalize_is_idempotent_on_web_text() {
        let web_text = r"[A-Za-z :/._!?,İ😀❤️👍]{0,40}";
        proptest!(|(text in web_text, opts in options_strategy())| {
            let once = normalize(&text, &opts);
            prop_assert_eq!(normalize(&once, &opts), once);
        });
    }
}
