//! Human-readable names for university identifiers.
//!
//! University icons are named after the university in concatenated form
//! (`UniversityofMelbourne.png`); the API wants both the raw name and a
//! display name (`University of Melbourne`).

use std::sync::LazyLock;

use regex::Regex;

static OF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)of").expect("valid regex"));
static AND: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)and").expect("valid regex"));
static OF_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bOf\b").expect("valid regex"));
static AND_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bAnd\b").expect("valid regex"));

/// Derives a display name from a raw identifier.
///
/// Inserts a space before every uppercase letter and before every
/// case-insensitive `of`/`and` that is not already preceded by whitespace,
/// lowercases the standalone words `Of`/`And`, then trims. Consecutive
/// capitals are split too (`USA` → `U S A`). Applying it to its own output
/// yields the same string.
pub fn format_displayed_name(raw: &str) -> String {
    let spaced = space_before_uppercase(raw);
    let spaced = space_before_matches(&spaced, &OF);
    let spaced = space_before_matches(&spaced, &AND);
    let spaced = OF_WORD.replace_all(&spaced, "of");
    let spaced = AND_WORD.replace_all(&spaced, "and");
    spaced.trim().to_string()
}

fn space_before_uppercase(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    let mut prev: Option<char> = None;
    for c in input.chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(|p| !p.is_whitespace()) {
            out.push(' ');
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

fn space_before_matches(input: &str, pattern: &Regex) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    let mut last = 0;
    for m in pattern.find_iter(input) {
        let head = &input[last..m.start()];
        out.push_str(head);
        let preceded_by_space = input[..m.start()]
            .chars()
            .next_back()
            .map_or(true, char::is_whitespace);
        if !preceded_by_space {
            out.push(' ');
        }
        out.push_str(m.as_str());
        last = m.end();
    }
    out.push_str(&input[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::format_displayed_name;

    #[test]
    fn splits_lowercase_of() {
        assert_eq!(
            format_displayed_name("UniversityofMelbourne"),
            "University of Melbourne"
        );
    }

    #[test]
    fn lowercases_capitalised_connectives() {
        assert_eq!(
            format_displayed_name("UniversityOfScienceAndTechnology"),
            "University of Science and Technology"
        );
    }

    #[test]
    fn splits_lowercase_and() {
        assert_eq!(
            format_displayed_name("TexasAandMUniversity"),
            "Texas A and M University"
        );
    }

    #[test]
    fn splits_acronyms_letter_by_letter() {
        assert_eq!(format_displayed_name("USA"), "U S A");
    }

    #[test]
    fn single_word_is_unchanged() {
        assert_eq!(format_displayed_name("Harvard"), "Harvard");
        assert_eq!(format_displayed_name(""), "");
    }

    #[test]
    fn already_spaced_input_is_a_fixed_point() {
        for raw in [
            "UniversityofMelbourne",
            "UniversityOfScienceAndTechnology",
            "KingsCollegeLondon",
            "USA",
            "TexasAandMUniversity",
            "University of Oxford",
        ] {
            let once = format_displayed_name(raw);
            let twice = format_displayed_name(&once);
            assert_eq!(once, twice, "formatting {raw:?} is not idempotent");
        }
    }

    #[test]
    fn does_not_double_space_existing_words() {
        assert_eq!(
            format_displayed_name("University Of Oxford"),
            "University of Oxford"
        );
    }
}
