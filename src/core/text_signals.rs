//! Extraction of bedroom, bathroom and occupancy signals from the free-text descriptions used by
//! the reference scenario tables (e.g. "4-Bed House, 2 Bath, 5 Occ." or "a family of 4").

use regex::Regex;
use std::sync::LazyLock;

static BEDROOMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*\+?\s*-?\s*bed").expect("valid bedroom pattern"));
static BATHROOMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*\+?\s*-?\s*bath").expect("valid bathroom pattern"));
static OCCUPANTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*\+?\s*occ").expect("valid occupant pattern"));
static RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(?:-|to)\s*(\d+)").expect("valid range pattern"));
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid number pattern"));

static NUMBER_WORDS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        ("one", "1"),
        ("two", "2"),
        ("three", "3"),
        ("four", "4"),
        ("five", "5"),
        ("six", "6"),
        ("seven", "7"),
        ("eight", "8"),
        ("nine", "9"),
        ("ten", "10"),
    ]
    .into_iter()
    .map(|(word, digits)| {
        (
            Regex::new(&format!(r"\b{word}\b")).expect("valid number word pattern"),
            digits,
        )
    })
    .collect()
});

pub fn bedrooms_in(text: &str) -> Option<u32> {
    first_capture(&BEDROOMS, text)
}

pub fn bathrooms_in(text: &str) -> Option<u32> {
    first_capture(&BATHROOMS, text)
}

pub fn occupants_in(text: &str) -> Option<u32> {
    first_capture(&OCCUPANTS, text)
}

/// Whether a property description reads as a flat (or apartment/maisonette).
pub fn describes_flat(text: &str) -> bool {
    let text = text.to_lowercase();
    ["flat", "apartment", "maisonette"]
        .iter()
        .any(|word| text.contains(word))
}

pub fn describes_house(text: &str) -> bool {
    let text = text.to_lowercase();
    ["house", "bungalow", "detached", "terrace", "cottage"]
        .iter()
        .any(|word| text.contains(word))
}

/// Estimate a head count from a loose occupancy phrase such as "1-2 adults", "a family of four"
/// or "a couple". Ranges resolve to their upper bound.
pub fn estimate_occupants(phrase: &str) -> Option<u32> {
    let mut text = phrase.to_lowercase();
    for (word, digits) in NUMBER_WORDS.iter() {
        text = word.replace_all(&text, *digits).into_owned();
    }

    if let Some(range) = RANGE.captures(&text) {
        return range.get(2).and_then(|upper| upper.as_str().parse().ok());
    }
    if let Some(number) = NUMBER.find(&text) {
        return number.as_str().parse().ok();
    }
    if text.contains("large family") {
        Some(6)
    } else if text.contains("family") {
        Some(4)
    } else if text.contains("couple") {
        Some(2)
    } else if ["single", "individual", "person", "professional"]
        .iter()
        .any(|word| text.contains(word))
    {
        Some(1)
    } else {
        None
    }
}

fn first_capture(pattern: &Regex, text: &str) -> Option<u32> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .and_then(|count| count.as_str().parse().ok())
}
