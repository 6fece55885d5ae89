//! Text normalization applied before answers are compared.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Reduce text to its canonical comparable form.
///
/// With `ignore_accents`, the text is NFD-decomposed and combining marks are
/// dropped, so "café" becomes "cafe" and "Köln" becomes "Koln". Without it,
/// the text is returned unchanged. No case folding or trimming is applied;
/// comparison stays case sensitive.
pub fn normalize(text: &str, ignore_accents: bool) -> String {
    if !ignore_accents {
        return text.to_string();
    }
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
