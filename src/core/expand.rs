//! Column-aware tab expansion.
//!
//! A tab advances the column to the next multiple of [`TAB_WIDTH`], so it
//! always turns into 1..=4 spaces.  Columns are counted in `char`s.

use std::borrow::Cow;

/// Fixed tab stop.
pub const TAB_WIDTH: usize = 4;

/// Substring after the last `.` of `filename`, or the whole name when it
/// has no dot at all.
///
/// Unlike [`std::path::Path::extension`], a leading dot counts: `".h"`
/// yields `"h"`.
pub fn extension(filename: &str) -> &str {
    filename.rsplit('.').next().unwrap_or(filename)
}

/// Expand every tab in a single line (no `'\n'` expected).
pub fn expand_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0usize;

    for c in line.chars() {
        if c != '\t' {
            out.push(c);
            column += 1;
            continue;
        }
        let pad = TAB_WIDTH - column % TAB_WIDTH;
        out.extend(std::iter::repeat(' ').take(pad));
        column += pad;
    }

    out
}

/// Expand a whole file's content.
///
/// Line endings are read universally: `"\r\n"` and a lone `'\r'` both end
/// a line.  The content is then split on `'\n'` and every resulting segment, including an empty trailing
/// one, is written back followed by `'\n'`.  So `""` becomes `"\n"` and
/// `"a\n"` becomes `"a\n\n"`.
pub fn expand_tabs(content: &str) -> String {
    let content = normalize_newlines(content);
    let mut out = String::with_capacity(content.len() + 1);
    for line in content.split('\n') {
        out.push_str(&expand_line(line));
        out.push('\n');
    }
    out
}

/// `"\r\n"` and lone `'\r'` become `'\n'`.
fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if !content.contains('\r') {
        return Cow::Borrowed(content);
    }
    Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
}
