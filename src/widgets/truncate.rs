use std::borrow::Cow;

const ELLIPSIS: &str = "...";

/// Shortens `text` to at most `width` chars.
///
/// Text that fits is returned as-is. Otherwise, widths of 3 or less hard-cut
/// the text; larger widths keep `width - 3` chars and append `...`.
pub fn truncate(text: &str, width: usize) -> Cow<'_, str> {
    if text.chars().count() <= width {
        return Cow::Borrowed(text);
    }
    if width <= ELLIPSIS.len() {
        return Cow::Borrowed(prefix(text, width));
    }
    let mut out = String::with_capacity(width + ELLIPSIS.len());
    out.push_str(prefix(text, width - ELLIPSIS.len()));
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}

/// The first `chars` chars of `text`, cut on a char boundary.
fn prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
