//! Text statistics over an input buffer.
//!
//! Every function here is total: any string, including the empty one,
//! yields a count or a transformed string. Character counts use UTF-16
//! code units, matching the length a browser text field reports, so a
//! character outside the basic multilingual plane counts as two.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Terminal punctuation, ASCII and fullwidth.
const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?', '。', '！', '？'];

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("paragraph pattern compiles"));

pub fn char_count_with_spaces(text: &str) -> usize {
    text.encode_utf16().count()
}

pub fn char_count_without_spaces(text: &str) -> usize {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(char::len_utf16)
        .sum()
}

pub fn byte_size_utf8(text: &str) -> usize {
    text.len()
}

/// Approximate EUC-KR size: one byte per ASCII code unit, two for anything else.
///
/// This is not a transcoder. Characters EUC-KR cannot represent still
/// count as two bytes, and a surrogate pair counts as four.
pub fn byte_size_euc_kr_approx(text: &str) -> usize {
    text.encode_utf16()
        .map(|unit| if unit <= 0x7F { 1 } else { 2 })
        .sum()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count segments between runs of terminal punctuation that hold more than whitespace.
pub fn sentence_count(text: &str) -> usize {
    text.split(SENTENCE_TERMINATORS)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// Count blocks separated by a blank line (newline, optional whitespace, newline).
pub fn paragraph_count(text: &str) -> usize {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// Count `\n`-separated segments. A trailing newline adds an empty last line.
pub fn line_count(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.split('\n').count()
    }
}

pub fn strip_all_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Trim every line, rejoin with `\n`, then trim the whole result.
pub fn trim_each_line_and_outer(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Every counter for one snapshot of a text buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextReport {
    pub chars_with_spaces: usize,
    pub chars_without_spaces: usize,
    pub bytes_utf8: usize,
    pub bytes_euc_kr: usize,
    pub words: usize,
    pub sentences: usize,
    pub lines: usize,
    pub paragraphs: usize,
}

impl TextReport {
    pub fn analyze(text: &str) -> Self {
        Self {
            chars_with_spaces: char_count_with_spaces(text),
            chars_without_spaces: char_count_without_spaces(text),
            bytes_utf8: byte_size_utf8(text),
            bytes_euc_kr: byte_size_euc_kr_approx(text),
            words: word_count(text),
            sentences: sentence_count(text),
            lines: line_count(text),
            paragraphs: paragraph_count(text),
        }
    }

    /// Label/value pairs in display order.
    pub fn rows(&self) -> [(&'static str, usize); 8] {
        [
            ("Characters (with spaces)", self.chars_with_spaces),
            ("Characters (without spaces)", self.chars_without_spaces),
            ("Bytes (UTF-8)", self.bytes_utf8),
            ("Bytes (EUC-KR, approx.)", self.bytes_euc_kr),
            ("Words", self.words),
            ("Sentences", self.sentences),
            ("Lines", self.lines),
            ("Paragraphs", self.paragraphs),
        ]
    }
}

impl fmt::Display for TextReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Text analysis")?;
        write!(f, "=============")?;
        for (label, value) in self.rows() {
            write!(f, "\n{label}: {}", group_thousands(value))?;
        }
        Ok(())
    }
}

/// Render a count with `,` between groups of three digits.
pub fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_counts() {
        assert_eq!(char_count_with_spaces(""), 0);
        assert_eq!(char_count_with_spaces("a b\tc"), 5);
        assert_eq!(char_count_without_spaces("a b\tc\n"), 3);
        assert_eq!(char_count_with_spaces("가나"), 2);
    }

    #[test]
    fn test_char_counts_use_code_units() {
        // U+1F600 is a surrogate pair in UTF-16
        assert_eq!(char_count_with_spaces("😀"), 2);
        assert_eq!(char_count_without_spaces(" 😀 "), 2);
    }

    #[test]
    fn test_byte_sizes() {
        assert_eq!(byte_size_utf8("a"), 1);
        assert_eq!(byte_size_utf8("가"), 3);
        assert_eq!(byte_size_euc_kr_approx("가"), 2);
        assert_eq!(byte_size_euc_kr_approx("a가"), 3);
        assert_eq!(byte_size_euc_kr_approx("é"), 2);
        assert_eq!(byte_size_euc_kr_approx("😀"), 4);
        assert_eq!(byte_size_euc_kr_approx(""), 0);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count("  a   b  "), 2);
        assert_eq!(word_count("one\ntwo\tthree"), 3);
    }

    #[test]
    fn test_sentence_count() {
        assert_eq!(sentence_count("Hello world. How are you? Fine!"), 3);
        assert_eq!(sentence_count("Wait... what?!"), 2);
        assert_eq!(sentence_count("안녕하세요。반갑습니다！"), 2);
        assert_eq!(sentence_count("No terminator"), 1);
        assert_eq!(sentence_count("..."), 0);
        assert_eq!(sentence_count(""), 0);
    }

    #[test]
    fn test_paragraph_count() {
        assert_eq!(paragraph_count("a\n\nb\n\n\nc"), 3);
        assert_eq!(paragraph_count("a\n  \nb"), 2);
        assert_eq!(paragraph_count("a\nb"), 1);
        assert_eq!(paragraph_count("\n\n"), 0);
        assert_eq!(paragraph_count(""), 0);
    }

    #[test]
    fn test_line_count_keeps_trailing_segment() {
        assert_eq!(line_count(""), 0);
        assert_eq!(line_count("a"), 1);
        assert_eq!(line_count("a\nb"), 2);
        assert_eq!(line_count("a\nb\n"), 3);
        assert_eq!(line_count("\n"), 2);
    }

    #[test]
    fn test_whitespace_transforms() {
        assert_eq!(strip_all_whitespace(" a b\tc\n"), "abc");
        assert_eq!(strip_all_whitespace(""), "");
        assert_eq!(trim_each_line_and_outer("  a  \n  b  \n"), "a\nb");
        assert_eq!(trim_each_line_and_outer("\n\n  x \n\n y"), "x\n\ny");
        assert_eq!(trim_each_line_and_outer(""), "");
    }

    #[test]
    fn test_report_collects_every_counter() {
        let report = TextReport::analyze("Hello world.\n\nBye!");
        assert_eq!(
            report,
            TextReport {
                chars_with_spaces: 18,
                chars_without_spaces: 15,
                bytes_utf8: 18,
                bytes_euc_kr: 18,
                words: 3,
                sentences: 2,
                lines: 3,
                paragraphs: 2,
            }
        );
    }

    #[test]
    fn test_report_display() {
        let rendered = TextReport::analyze("").to_string();
        assert!(rendered.starts_with("Text analysis\n============="));
        assert!(rendered.contains("\nWords: 0"));
        assert_eq!(rendered.lines().count(), 10);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
