//! Word counting and reading-time estimation for chapter content.

/// Words a reader is assumed to get through per minute.
const WORDS_PER_MINUTE: i32 = 200;

/// Strips HTML tags from rich-text content, leaving only the visible text.
///
/// Chapter bodies come from the authoring editor as HTML; counting words on
/// the raw markup would inflate the totals with tag names and attributes.
pub fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => {
                if in_tag {
                    in_tag = false;
                    // Tag boundaries separate words ("</p><p>" must not glue
                    // adjacent paragraphs together).
                    text.push(' ');
                } else {
                    text.push(c);
                }
            }
            c if !in_tag => text.push(c),
            _ => {}
        }
    }

    text
}

/// Counts whitespace-separated words in tag-stripped content.
pub fn word_count(content: &str) -> i32 {
    strip_tags(content).split_whitespace().count() as i32
}

/// Estimated minutes to read `words` words, never less than one minute for
/// non-empty content.
pub fn reading_time(words: i32) -> i32 {
    if words <= 0 {
        return 0;
    }
    std::cmp::max(1, (words + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_words_in_plain_text() {
        assert_eq!(word_count("một hai ba bốn"), 4);
    }

    #[test]
    fn ignores_html_markup() {
        assert_eq!(word_count("<p>một hai</p><p>ba</p>"), 3);
        assert_eq!(word_count("<img src=\"x.png\"/>"), 0);
    }

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(reading_time(0), 0);
        assert_eq!(reading_time(1), 1);
        assert_eq!(reading_time(200), 1);
        assert_eq!(reading_time(201), 2);
        assert_eq!(reading_time(1000), 5);
    }
}
