use crate::results::GameError;
use std::io::{BufRead, Write};

/// Writes `prompt` and reads one line, then loops — writing `reprompt` and
/// reading again — until `parse` accepts the trimmed line. Returns the first
/// accepted value. Blocks indefinitely on the input source; end-of-file is
/// fatal, since there is nothing left to reprompt.
pub fn prompt_until_valid<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    reprompt: &str,
    parse: F,
) -> Result<T, GameError>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    output.write_all(prompt.as_bytes())?;
    output.flush()?;
    loop {
        let line = read_line(input)?;
        if let Some(value) = parse(line.trim()) {
            return Ok(value);
        }
        tracing::debug!(rejected = line.trim(), "input did not validate");
        output.write_all(reprompt.as_bytes())?;
        output.flush()?;
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String, GameError> {
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Err(GameError::InputClosed);
    }
    Ok(buffer)
}

/// Returns a parser that accepts a base-10 integer within `min` to `max`
/// inclusive.
pub fn int_in_range(min: i32, max: i32) -> impl Fn(&str) -> Option<i32> {
    move |text| {
        text.parse::<i32>()
            .ok()
            .filter(|value| (min..=max).contains(value))
    }
}

/// Parses the accepted yes/no spellings, case-insensitively. `y`, `ye`, `ys`
/// and `yes` mean yes; `n` and `no` mean no.
pub fn yes_or_no(text: &str) -> Option<bool> {
    match text.to_lowercase().as_str() {
        "y" | "ye" | "ys" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_until_valid_accepts_first_valid_line() {
        let mut input = Cursor::new(String::from("4\n"));
        let mut output: Vec<u8> = Vec::new();

        let value = prompt_until_valid(
            &mut input,
            &mut output,
            "Pick: ",
            "Again: ",
            int_in_range(1, 10),
        );

        assert_eq!(value.unwrap(), 4);
        assert_eq!(String::from_utf8(output).unwrap(), "Pick: ");
    }

    #[test]
    fn prompt_until_valid_reprompts_until_accepted() {
        let mut input = Cursor::new(String::from("abc\n15\n4\n"));
        let mut output: Vec<u8> = Vec::new();

        let value = prompt_until_valid(
            &mut input,
            &mut output,
            "Pick: ",
            "Again: ",
            int_in_range(1, 10),
        );

        assert_eq!(value.unwrap(), 4);
        assert_eq!(String::from_utf8(output).unwrap(), "Pick: Again: Again: ");
    }

    #[test]
    fn prompt_until_valid_fails_on_exhausted_input() {
        let mut input = Cursor::new(String::new());
        let mut output: Vec<u8> = Vec::new();

        let value = prompt_until_valid(
            &mut input,
            &mut output,
            "Pick: ",
            "Again: ",
            int_in_range(1, 10),
        );

        assert!(matches!(value, Err(GameError::InputClosed)));
    }

    #[test]
    fn int_in_range_rejects_junk_and_out_of_bounds() {
        let parse = int_in_range(1, 10);

        assert_eq!(parse("4"), Some(4));
        assert_eq!(parse("1"), Some(1));
        assert_eq!(parse("10"), Some(10));
        assert_eq!(parse("0"), None);
        assert_eq!(parse("15"), None);
        assert_eq!(parse("abc"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("4.5"), None);
    }

    #[test]
    fn int_in_range_handles_negative_bounds() {
        let parse = int_in_range(-1000, 1000);

        assert_eq!(parse("-1000"), Some(-1000));
        assert_eq!(parse("-1001"), None);
    }

    #[test]
    fn yes_or_no_accepts_known_spellings() {
        for word in ["y", "ye", "ys", "yes", "Y", "YES", "Ye"] {
            assert_eq!(yes_or_no(word), Some(true), "expected yes for {}", word);
        }
        for word in ["n", "no", "N", "NO"] {
            assert_eq!(yes_or_no(word), Some(false), "expected no for {}", word);
        }
    }

    #[test]
    fn yes_or_no_rejects_everything_else() {
        for word in ["yep", "nah", "maybe", "", "yess"] {
            assert_eq!(yes_or_no(word), None, "expected rejection for {}", word);
        }
    }
}
