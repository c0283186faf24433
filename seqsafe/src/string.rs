//! The string instantiations of the trimming operations, and a
//! carriage-return-aware line splitter.
//!
//! A string is a sequence of characters, but `&str` and `&[T]` are
//! separate surfaces in Rust, so the trimming helpers exist on both.

/// The remainder of `text` after a leading `prefix`, or `None` if `text`
/// does not start with `prefix`.
pub fn strip_prefix<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    text.strip_prefix(prefix)
}

/// The remainder of `text` after a trailing `suffix`, or `None` if `text`
/// does not end with `suffix`.
pub fn strip_suffix<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    text.strip_suffix(suffix)
}

/// `text` without a leading `prefix` if one is present, otherwise `text`
/// unchanged.
pub fn drop_prefix<'a>(text: &'a str, prefix: &str) -> &'a str {
    text.strip_prefix(prefix).unwrap_or(text)
}

/// `text` without a trailing `suffix` if one is present, otherwise `text`
/// unchanged.
pub fn drop_suffix<'a>(text: &'a str, suffix: &str) -> &'a str {
    text.strip_suffix(suffix).unwrap_or(text)
}

/// Split `text` into lines at `'\n'`, removing one trailing `'\r'` from
/// each line.
///
/// The newline is not part of any line, and a trailing newline does not
/// produce an empty final line. Equivalent to a plain split on `'\n'`
/// followed by [`drop_suffix`]`(line, "\r")` on every element — which
/// means a bare `"a\r"` with no newline at all also loses its `'\r'`,
/// unlike with [`str::lines`].
pub fn lines_cr(text: &str) -> LinesCr<'_> {
    LinesCr {
        remainder: Some(text),
    }
}

/// Iterator over the lines of a string with any trailing carriage return
/// removed. Created by [`lines_cr`].
#[derive(Debug, Clone)]
pub struct LinesCr<'a> {
    remainder: Option<&'a str>,
}

impl<'a> Iterator for LinesCr<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.remainder?;
        // an empty remainder is the end of input, not an empty final
        // line; this is what drops the segment after a trailing newline
        if rest.is_empty() {
            self.remainder = None;
            return None;
        }
        let line = match rest.find('\n') {
            Some(at) => {
                self.remainder = Some(&rest[at + 1..]);
                &rest[..at]
            }
            None => {
                self.remainder = None;
                rest
            }
        };
        Some(drop_suffix(line, "\r"))
    }
}
