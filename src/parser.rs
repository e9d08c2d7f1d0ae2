use crate::ast::{REDIRECT_OP, SEGMENT_SEPARATOR, TokenizedSegment};

/// Characters that separate words inside a segment.
const WORD_SEPARATORS: [char; 2] = [' ', '\t'];

/// Split a line on `;` into the segments worth evaluating, left to right.
/// Empty and whitespace-only segments are dropped.
pub fn split_segments(line: &str) -> Vec<&str> {
    line.split(SEGMENT_SEPARATOR)
        .filter(|segment| !is_blank(segment))
        .collect()
}

/// True if the text has nothing but ASCII whitespace in it
/// (space, tab, newline, vertical tab, form feed, carriage return).
pub fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_whitespace() || c == '\x0b')
}

/// Tokenize one segment into words.
///
/// Every `>` is padded with a space on either side first, so `echo hi>out`
/// and `echo hi > out` produce the same words. No quoting or escaping.
pub fn tokenize(segment: &str) -> TokenizedSegment {
    let redirect_count = segment.matches(REDIRECT_OP).count();

    let mut padded = String::with_capacity(segment.len() + 2 * redirect_count);
    for ch in segment.chars() {
        if ch == REDIRECT_OP {
            padded.push(' ');
            padded.push(ch);
            padded.push(' ');
        } else {
            padded.push(ch);
        }
    }

    let words = padded
        .split(WORD_SEPARATORS)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect();

    TokenizedSegment {
        words,
        redirect_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(segment: &str) -> Vec<String> {
        tokenize(segment).words
    }

    #[test]
    fn splits_on_semicolons_in_order() {
        assert_eq!(split_segments("pwd ; ls -l;exit"), vec!["pwd ", " ls -l", "exit"]);
    }

    #[test]
    fn blank_segments_are_dropped() {
        assert_eq!(split_segments(";;  ;\t; pwd ;"), vec![" pwd "]);
        assert!(split_segments("").is_empty());
        assert!(split_segments("   ").is_empty());
    }

    #[test]
    fn only_ascii_whitespace_is_blank() {
        assert!(is_blank(" \t\r\n\x0b\x0c"));
        assert!(!is_blank("\u{a0}"));
        assert_eq!(split_segments("pwd;\u{a0};\x0b"), vec!["pwd", "\u{a0}"]);
    }

    #[test]
    fn segment_keeps_internal_whitespace() {
        assert_eq!(split_segments("echo  a\tb"), vec!["echo  a\tb"]);
    }

    #[test]
    fn splits_on_spaces_and_tabs() {
        assert_eq!(words("  ls\t-l   /tmp "), vec!["ls", "-l", "/tmp"]);
    }

    #[test]
    fn unspaced_operator_matches_spaced_operator() {
        assert_eq!(tokenize("echo hi>out.txt"), tokenize("echo hi > out.txt"));
        assert_eq!(words("echo hi>out.txt"), vec!["echo", "hi", ">", "out.txt"]);
    }

    #[test]
    fn operator_next_to_command_name() {
        assert_eq!(words("ls>out"), vec!["ls", ">", "out"]);
    }

    #[test]
    fn counts_raw_operator_characters() {
        assert_eq!(tokenize("ls").redirect_count, 0);
        assert_eq!(tokenize("ls > a").redirect_count, 1);
        assert_eq!(tokenize("ls >> a").redirect_count, 2);
        assert_eq!(words("ls>>a"), vec!["ls", ">", ">", "a"]);
    }

    #[test]
    fn trailing_operator_is_its_own_word() {
        let segment = tokenize("echo hi>");
        assert_eq!(segment.words, vec!["echo", "hi", ">"]);
        assert_eq!(segment.redirect_count, 1);
    }

    #[test]
    fn quotes_are_not_special() {
        assert_eq!(words("echo \"a b\""), vec!["echo", "\"a", "b\""]);
    }
}
