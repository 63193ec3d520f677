/// Wraps `text` so that no line exceeds `width` characters, breaking only at
/// whitespace. Whitespace runs inside a line are kept as-is; only the
/// whitespace at a break point is consumed. Embedded newlines are treated as
/// hard breaks. A single word longer than `width` is emitted on its own line
/// rather than split.
pub fn wrap(text: &str, width: usize) -> String {
    text.split('\n')
        .map(|line| wrap_line(line, width))
        .collect::<Vec<String>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for (gap, word) in split_words(line) {
        let gap_width = gap.chars().count();
        let word_width = word.chars().count();
        if current.is_empty() {
            // First word keeps any leading whitespace as indentation.
            current.push_str(gap);
            current.push_str(word);
            current_width = gap_width + word_width;
        } else if current_width + gap_width + word_width <= width {
            current.push_str(gap);
            current.push_str(word);
            current_width += gap_width + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Splits a line into words, each paired with the whitespace run preceding it.
/// Trailing whitespace with no word after it is dropped.
fn split_words(line: &str) -> Vec<(&str, &str)> {
    let mut words = Vec::new();
    let mut gap_start = 0;
    let mut word_start = None;
    for (index, letter) in line.char_indices() {
        match (letter.is_whitespace(), word_start) {
            (true, Some(start)) => {
                words.push((&line[gap_start..start], &line[start..index]));
                gap_start = index;
                word_start = None;
            }
            (false, None) => {
                word_start = Some(index);
            }
            _ => {}
        }
    }
    if let Some(start) = word_start {
        words.push((&line[gap_start..start], &line[start..]));
    }
    words
}

/// Joins items into a prose list, e.g. `["3", "7", "12"]` with the conjunction
/// `"and"` and an Oxford comma becomes `"3, 7, and 12"`.
pub fn join_with_conjunction<S: AsRef<str>>(
    items: &[S],
    conjunction: &str,
    oxford_comma: bool,
) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} {} {}", first.as_ref(), conjunction, second.as_ref()),
        [head @ .., last] => {
            let listed = head
                .iter()
                .map(|item| item.as_ref())
                .collect::<Vec<&str>>()
                .join(", ");
            format!(
                "{}{} {} {}",
                listed,
                if oxford_comma { "," } else { "" },
                conjunction,
                last.as_ref()
            )
        }
    }
}

/// A horizontal rule of `width` dashes, padded with blank lines above and
/// below.
pub fn divider(width: usize, blank_above: usize, blank_below: usize) -> String {
    format!(
        "{}{}{}",
        "\n".repeat(blank_above),
        "-".repeat(width),
        "\n".repeat(blank_below)
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn wrap_breaks_at_whitespace() {
        assert_eq!(wrap("hello world foo", 10), "hello\nworld foo");
    }

    #[test]
    fn wrap_never_splits_words() {
        let wrapped = wrap("an extraordinarily long word", 10);

        for line in wrapped.lines() {
            assert!(line.chars().count() <= 10 || !line.contains(' '));
        }
        assert_eq!(wrapped, "an\nextraordinarily\nlong word");
    }

    #[test]
    fn wrap_preserves_whitespace_runs_within_a_line() {
        assert_eq!(wrap("a  b", 10), "a  b");
    }

    #[test]
    fn wrap_preserves_blank_lines() {
        assert_eq!(wrap("one\n\ntwo", 10), "one\n\ntwo");
    }

    #[test]
    fn wrap_keeps_short_text_intact() {
        assert_eq!(wrap("short", 10), "short");
        assert_eq!(wrap("", 10), "");
    }

    #[test]
    fn join_with_conjunction_empty() {
        assert_eq!(join_with_conjunction(&[] as &[&str], "and", false), "");
    }

    #[test]
    fn join_with_conjunction_single_item() {
        assert_eq!(join_with_conjunction(&["3"], "and", false), "3");
    }

    #[test]
    fn join_with_conjunction_two_items() {
        assert_eq!(join_with_conjunction(&["3", "7"], "and", false), "3 and 7");
    }

    #[test]
    fn join_with_conjunction_oxford_comma() {
        assert_eq!(
            join_with_conjunction(&["3", "7", "12"], "and", true),
            "3, 7, and 12"
        );
    }

    #[test]
    fn join_with_conjunction_no_oxford_comma() {
        assert_eq!(
            join_with_conjunction(&["3", "7", "12"], "or", false),
            "3, 7 or 12"
        );
    }

    #[test]
    fn divider_pads_with_blank_lines() {
        assert_eq!(divider(4, 1, 2), "\n----\n\n");
        assert_eq!(divider(3, 0, 0), "---");
    }
}
