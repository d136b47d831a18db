// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Small checks and conversions on numbers and strings.
//!
//! These are straight branching or summation; none of them keeps state.

/// A square on a chessboard, as (file, rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// True for zero and positive numbers.
pub fn is_positive(number: f64) -> bool {
    number >= 0.0
}

/// The largest of three numbers.
pub fn max_of_three<T: PartialOrd>(a: T, b: T, c: T) -> T {
    let ab = if b > a { b } else { a };
    if c > ab {
        c
    } else {
        ab
    }
}

/// True if a queen at `queen` attacks `king`: same file, rank or diagonal.
pub fn can_queen_capture_king(queen: Position, king: Position) -> bool {
    queen.x == king.x
        || queen.y == king.y
        || (queen.x - king.x).abs() == (queen.y - king.y).abs()
}

/// True if the sides form a non-degenerate triangle with exactly two equal
/// sides. Equilateral triangles do not count.
pub fn is_isosceles_triangle(a: u32, b: u32, c: u32) -> bool {
    let valid = |side: u32, other1: u32, other2: u32| {
        side > other1.abs_diff(other2)
            && u64::from(side) < u64::from(other1) + u64::from(other2)
    };
    let pairs_equal = [a == b, b == c, a == c].iter().filter(|&&eq| eq).count();
    valid(a, b, c) && valid(b, c, a) && valid(c, a, b) && pairs_equal == 1
}

/// Roman numeral for 1..=39 (tens as repeated `X`, then the units).
///
/// Larger numbers get more `X`s rather than `L`/`C`; zero is the empty string.
pub fn to_roman_numerals(number: u32) -> String {
    const UNITS: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];
    let mut roman = "X".repeat((number / 10) as usize);
    roman.push_str(UNITS[(number % 10) as usize]);
    roman
}

/// Spell a number written as text, one word per character.
///
/// Digits become `zero`..`nine`, `-` becomes `minus`, and both `.` and `,`
/// become `point`. Any other character is skipped.
///
/// ```
/// use grid_digit_algos::basics::number_to_words;
///
/// assert_eq!(number_to_words("-10,5"), "minus one zero point five");
/// ```
pub fn number_to_words(text: &str) -> String {
    const DIGITS: [&str; 10] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ];
    let words: Vec<&str> = text
        .chars()
        .filter_map(|c| match c {
            '0'..='9' => c.to_digit(10).map(|d| DIGITS[d as usize]),
            '.' | ',' => Some("point"),
            '-' => Some("minus"),
            _ => None,
        })
        .collect();
    words.join(" ")
}

/// True if `text` reads the same forwards and backwards, by character.
pub fn is_palindrome(text: &str) -> bool {
    text.chars().eq(text.chars().rev())
}

/// Character index of the first `letter` in `text`.
pub fn index_of(text: &str, letter: char) -> Option<usize> {
    text.chars().position(|c| c == letter)
}

/// True if the decimal form of `number` contains `digit`.
pub fn contains_digit(mut number: u64, digit: u8) -> bool {
    loop {
        if number % 10 == u64::from(digit) {
            return true;
        }
        number /= 10;
        if number == 0 {
            return false;
        }
    }
}

/// First interior index whose left sum equals its right sum.
///
/// The first and last elements are never balance points.
pub fn balance_index(values: &[i64]) -> Option<usize> {
    if values.len() < 3 {
        return None;
    }
    let total: i128 = values.iter().map(|&v| i128::from(v)).sum();
    let mut left = i128::from(values[0]);
    for (i, &value) in values.iter().enumerate().take(values.len() - 1).skip(1) {
        let value = i128::from(value);
        if left == total - left - value {
            return Some(i);
        }
        left += value;
    }
    None
}
