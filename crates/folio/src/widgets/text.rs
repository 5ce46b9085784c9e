//! Display-width aware word wrapping.
//!
//! Section heights must be known before drawing, so text is wrapped here
//! once and rendered line by line instead of through `Paragraph::wrap`.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `s` in terminal cells.
pub fn width(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

/// Word-wrap `text` to `max` cells. Words longer than a line are split.
/// Explicit newlines are kept; empty input gives no lines.
pub fn wrap(text: &str, max: u16) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let max = usize::from(max.max(1));
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0usize;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let gap = usize::from(!line.is_empty());

            if line_width + gap + word_width <= max {
                if gap == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += gap + word_width;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width <= max {
                line.push_str(word);
                line_width = word_width;
                continue;
            }

            // Hard-split an overlong word.
            for c in word.chars() {
                let cw = c.width().unwrap_or(0);
                if line_width + cw > max && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(c);
                line_width += cw;
            }
        }

        lines.push(line);
    }

    lines
}

/// Rows `text` occupies when wrapped to `max` cells.
pub fn height(text: &str, max: u16) -> u16 {
    u16::try_from(wrap(text, max).len()).unwrap_or(u16::MAX)
}

/// Left offset that centers `content` cells within `available` cells.
pub fn center(content: u16, available: u16) -> u16 {
    available.saturating_sub(content) / 2
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap("Desarrollo de APIs robustas", 12),
            vec!["Desarrollo", "de APIs", "robustas"]
        );
    }

    #[test]
    fn splits_words_longer_than_the_line() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn keeps_explicit_newlines_and_skips_blank_input() {
        assert_eq!(wrap("uno\ndos", 20), vec!["uno", "dos"]);
        assert!(wrap("   ", 20).is_empty());
        assert_eq!(height("", 20), 0);
    }

    #[test]
    fn measures_display_width() {
        assert_eq!(width("Tecnologías"), 11);
        assert_eq!(center(10, 30), 10);
        assert_eq!(center(40, 30), 0);
    }
}
