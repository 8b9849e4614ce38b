//! Text helpers for log lines.

use std::borrow::Cow;

/// Marker appended to a shortened preview
pub const ELLIPSIS: &str = "…";

/// One-line preview of user or model text for log output.
///
/// Line breaks collapse to spaces. Text longer than `max_chars` characters
/// is cut on a character boundary and suffixed with [`ELLIPSIS`]. Short
/// single-line text is borrowed unchanged.
pub fn preview(text: &str, max_chars: usize) -> Cow<'_, str> {
    let single_line = !text.contains(['\n', '\r']);
    let cut = text.char_indices().nth(max_chars).map(|(index, _)| index);

    match (single_line, cut) {
        (true, None) => Cow::Borrowed(text),
        (_, cut) => {
            let head = &text[..cut.unwrap_or(text.len())];
            let mut line: String = head
                .split(['\n', '\r'])
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            if cut.is_some() {
                line.push_str(ELLIPSIS);
            }
            Cow::Owned(line)
        }
    }
}
