//! Splitting free-text ingredient lines into a name and a quantity.
//!
//! Lines on the site look like `배추 1/2포기`: a run of Hangul words followed by
//! an amount. The split is a character-class heuristic, not a grammar, so lines
//! that do not start with Hangul are kept whole.

use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Leading Hangul/whitespace run, then an optional run of quantity characters
static INGREDIENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([가-힣\s]+)([\d\s/\w().]+)?").expect("ingredient pattern is valid")
});

/// An ingredient line after parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedIngredient {
    /// The line started with a Hangul run and was split
    Split { name: String, amount: Option<String> },
    /// The pattern did not match; the raw line is kept as the name
    Verbatim(String),
}

impl ParsedIngredient {
    pub fn name(&self) -> &str {
        match self {
            ParsedIngredient::Split { name, .. } => name,
            ParsedIngredient::Verbatim(line) => line,
        }
    }

    pub fn amount(&self) -> Option<&str> {
        match self {
            ParsedIngredient::Split { amount, .. } => amount.as_deref(),
            ParsedIngredient::Verbatim(_) => None,
        }
    }

    pub fn is_verbatim(&self) -> bool {
        matches!(self, ParsedIngredient::Verbatim(_))
    }
}

/// Parse one raw ingredient line. Never fails.
pub fn parse_ingredient(line: &str) -> ParsedIngredient {
    let Some(captures) = INGREDIENT_PATTERN.captures(line) else {
        debug!("Ingredient line kept verbatim: {:?}", line);
        return ParsedIngredient::Verbatim(line.to_string());
    };

    let name = captures
        .get(1)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    let amount = captures
        .get(2)
        .map(|m| m.as_str().trim())
        .filter(|a| !a.is_empty())
        .map(str::to_string);

    ParsedIngredient::Split { name, amount }
}

/// Split a joined ingredient string into raw lines.
///
/// The delimiter is a fixed `", "`; a comma inside one ingredient's text splits it too.
pub fn split_ingredient_lines(joined: &str) -> impl Iterator<Item = &str> {
    joined.split(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(name: &str, amount: Option<&str>) -> ParsedIngredient {
        ParsedIngredient::Split {
            name: name.to_string(),
            amount: amount.map(str::to_string),
        }
    }

    #[test]
    fn test_name_and_amount() {
        assert_eq!(parse_ingredient("배추 1/2포기"), split("배추", Some("1/2포기")));
        assert_eq!(parse_ingredient("돼지고기 300g"), split("돼지고기", Some("300g")));
    }

    #[test]
    fn test_name_only() {
        let parsed = parse_ingredient("소금");
        assert_eq!(parsed, split("소금", None));
        assert_eq!(parsed.amount(), None);
    }

    #[test]
    fn test_hangul_amount_stays_in_name() {
        // "약간" is Hangul, so the leading run swallows it
        assert_eq!(parse_ingredient("소금 약간"), split("소금 약간", None));
    }

    #[test]
    fn test_parenthesised_note_goes_to_amount() {
        assert_eq!(
            parse_ingredient("돼지고기(목살) 300g"),
            split("돼지고기", Some("(목살) 300g"))
        );
    }

    #[test]
    fn test_amount_stops_at_unlisted_character() {
        assert_eq!(parse_ingredient("간장 2T+1t"), split("간장", Some("2T")));
    }

    #[test]
    fn test_whitespace_only_amount_is_absent() {
        assert_eq!(parse_ingredient("  양파  "), split("양파", None));
    }

    #[test]
    fn test_leading_whitespace_gives_empty_name() {
        assert_eq!(parse_ingredient(" 1개"), split("", Some("1개")));
    }

    #[test]
    fn test_non_hangul_line_is_verbatim() {
        let parsed = parse_ingredient("Olive oil 2T");
        assert_eq!(parsed, ParsedIngredient::Verbatim("Olive oil 2T".to_string()));
        assert!(parsed.is_verbatim());
        assert_eq!(parsed.name(), "Olive oil 2T");
    }

    #[test]
    fn test_empty_line_is_verbatim_empty() {
        let parsed = parse_ingredient("");
        assert_eq!(parsed, ParsedIngredient::Verbatim(String::new()));
        assert_eq!(parsed.name(), "");
        assert_eq!(parsed.amount(), None);
    }

    #[test]
    fn test_split_lines_on_fixed_delimiter() {
        let lines: Vec<_> = split_ingredient_lines("배추 1/2포기, 소금, 고춧가루 2큰술").collect();
        assert_eq!(lines, vec!["배추 1/2포기", "소금", "고춧가루 2큰술"]);
    }

    #[test]
    fn test_split_lines_breaks_inner_comma() {
        let lines: Vec<_> = split_ingredient_lines("파, 마늘 (다진 것, 1큰술)").collect();
        assert_eq!(lines, vec!["파", "마늘 (다진 것", "1큰술)"]);
    }
}
