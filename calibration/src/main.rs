use std::collections::BTreeMap;
use sdk::*;
use sdk::anyhow::anyhow;

lazy_static! {
    static ref WORDS: BTreeMap<&'static str, char> = [
        ("one", '1'),
        ("two", '2'),
        ("three", '3'),
        ("four", '4'),
        ("five", '5'),
        ("six", '6'),
        ("seven", '7'),
        ("eight", '8'),
        ("nine", '9'),
    ].into_iter().collect();
}

fn main() -> Result<()> {
    init();
    let path = input_path("calibration/input.txt");
    let mut digit_sum = 0;
    let mut word_sum = 0;
    for line in lines(&path)? {
        let line = line?;
        let (a, b) = extract_digits(&line).ok_or(anyhow!("No digit in line {line}"))?;
        let value = calibration_value(a, b)?;
        trace!("Calibration for {line}: {value}");
        digit_sum += value;

        let (a, b) = extract_digits_and_words(&line).ok_or(anyhow!("No digit or digit word in line {line}"))?;
        let value = calibration_value(a, b)?;
        trace!("Word-aware calibration for {line}: {value}");
        word_sum += value;
    }
    info!("Sum of calibration values: {digit_sum}");
    info!("Sum of word-aware calibration values: {word_sum}");
    Ok(())
}

fn calibration_value(first: char, last: char) -> Result<usize> {
    Ok([first, last].into_iter().collect::<String>().parse()?)
}

fn extract_digits(line: &str) -> Option<(char, char)> {
    let mut digits = line.chars().filter(char::is_ascii_digit);
    let first = digits.next()?;
    let last = digits.last().unwrap_or(first);
    Some((first, last))
}

/// Like [`extract_digits`], but spelled-out words also count as digits. The
/// scan restarts at every position without consuming matches, so overlapping
/// words ("twone") each produce their own match.
fn extract_digits_and_words(line: &str) -> Option<(char, char)> {
    let mut matches = Vec::new();
    for (i, c) in line.char_indices() {
        if c.is_ascii_digit() {
            matches.push(c);
            continue;
        }
        let rest = &line[i..];
        if let Some((_, digit)) = WORDS.iter().find(|(word, _)| rest.starts_with(*word)) {
            matches.push(*digit);
        }
    }
    Some((*matches.first()?, *matches.last()?))
}
