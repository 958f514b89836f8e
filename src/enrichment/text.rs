// ABOUTME: Text cleanup and distance extraction for generator-written workout descriptions
// ABOUTME: Typo fixes are idempotent; distance parsing takes the largest mile mention
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Known misspellings and their corrections, applied in order
/// Stored as Option to handle compilation failures gracefully (never expected for static patterns)
static TYPO_PATTERNS: LazyLock<Vec<(Option<Regex>, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)\bmiless\b", "miles"),
        (r"(?i)\bmilles\b", "miles"),
        (r"(?i)\bmille\b", "mile"),
        (r"(?i)\bequivalance\b", "equivalence"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).ok(), replacement))
    .collect()
});

static MILE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 5 miles, 5-mile, 6.5 mi, 4 equivalence miles
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:-\s*)?(?:equivalence[\s-]+)?(?:miles?|mi)\b").ok()
});

/// Two distances closer than this are the same mention (miles)
const SAME_DISTANCE_EPSILON: f64 = 0.05;

/// Correct known distance-unit typos
///
/// Idempotent: corrected text contains no pattern that matches again.
#[must_use]
pub fn fix_distance_typos(text: &str) -> String {
    let mut fixed = text.to_owned();
    let patterns = TYPO_PATTERNS
        .iter()
        .filter_map(|(pattern, replacement)| Some((pattern.as_ref()?, *replacement)));
    for (pattern, replacement) in patterns {
        fixed = pattern.replace_all(&fixed, replacement).into_owned();
    }
    fixed
}

/// Largest mile distance mentioned in `text`, if any
#[must_use]
pub fn parse_distance(text: &str) -> Option<f64> {
    let pattern = MILE_PATTERN.as_ref()?;
    pattern
        .captures_iter(text)
        .filter_map(|cap| cap.get(1)?.as_str().parse::<f64>().ok())
        .filter(|miles| miles.is_finite() && *miles > 0.0)
        .reduce(f64::max)
}

/// Render a distance the way a person would write it: `5` or `5.5`
#[must_use]
pub fn format_miles(miles: f64) -> String {
    if (miles - miles.round()).abs() < SAME_DISTANCE_EPSILON {
        format!("{miles:.0}")
    } else {
        format!("{miles:.1}")
    }
}

/// Replace every mile mention equal to `old` with `new`, leaving other mentions untouched
#[must_use]
pub fn rewrite_distance_mentions(text: &str, old: f64, new: f64) -> String {
    let Some(pattern) = MILE_PATTERN.as_ref() else {
        return text.to_owned();
    };
    pattern
        .replace_all(text, |cap: &Captures<'_>| {
            let whole = cap.get(0).map_or("", |m| m.as_str());
            let Some(number) = cap.get(1) else {
                return whole.to_owned();
            };
            match number.as_str().parse::<f64>() {
                Ok(value) if (value - old).abs() < SAME_DISTANCE_EPSILON => {
                    let suffix = &whole[number.as_str().len()..];
                    format!("{}{suffix}", format_miles(new))
                }
                _ => whole.to_owned(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typos_are_fixed_and_idempotent() {
        let once = fix_distance_typos("Easy 5 miless, then 3 Milles and 1 mille bike equivalance");
        assert_eq!(once, "Easy 5 miles, then 3 miles and 1 mile bike equivalence");
        assert_eq!(fix_distance_typos(&once), once);
    }

    #[test]
    fn test_parse_takes_largest_mention() {
        assert_eq!(parse_distance("2 mi warm-up, 6 miles total"), Some(6.0));
        assert_eq!(parse_distance("10-mile long run"), Some(10.0));
        assert_eq!(parse_distance("Ride 8 equivalence miles"), Some(8.0));
        assert_eq!(parse_distance("6.5 mi steady"), Some(6.5));
        assert_eq!(parse_distance("6 x 800m at 5K pace"), None);
        assert_eq!(parse_distance("5 minutes easy"), None);
    }

    #[test]
    fn test_rewrite_only_matching_mentions() {
        let rewritten = rewrite_distance_mentions("Run 6 miles with 2 mi at tempo", 6.0, 7.5);
        assert_eq!(rewritten, "Run 7.5 miles with 2 mi at tempo");
        let hyphen = rewrite_distance_mentions("A 10-mile run", 10.0, 12.0);
        assert_eq!(hyphen, "A 12-mile run");
    }
}
