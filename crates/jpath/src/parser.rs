//! A `nom`-based parser for dot-separated field paths.
use crate::ast::FieldPath;
use crate::error::JPathError;
use nom::{
    IResult, Parser,
    bytes::complete::take_while1,
    character::complete::char,
    combinator::{all_consuming, verify},
    multi::separated_list1,
};

// --- Main Public Parser ---

pub fn parse_field_path(input: &str) -> Result<FieldPath, JPathError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(JPathError::EmptyPath);
    }

    // The grammar only fails on a leading, trailing, doubled or blank segment.
    match all_consuming(segments).parse(trimmed) {
        Ok((_, parts)) => Ok(FieldPath::from_parts(
            trimmed.to_string(),
            parts.into_iter().map(|s| s.trim().to_string()).collect(),
        )),
        Err(_) => Err(JPathError::EmptySegment(trimmed.to_string())),
    }
}

// --- Combinators ---

fn segment(input: &str) -> IResult<&str, &str> {
    verify(take_while1(|c: char| c != '.'), |s: &str| !s.trim().is_empty()).parse(input)
}

fn segments(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(char('.'), segment).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_segment() {
        let path = parse_field_path("name").unwrap();
        assert_eq!(path.segments(), ["name"]);
        assert_eq!(path.as_str(), "name");
    }

    #[test]
    fn nested_segments() {
        let path = parse_field_path("system.owner.name").unwrap();
        assert_eq!(path.segments(), ["system", "owner", "name"]);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let path = parse_field_path("  system.name ").unwrap();
        assert_eq!(path.as_str(), "system.name");
    }

    #[test]
    fn segments_may_hold_any_non_dot_character() {
        let path = parse_field_path("custom-fields.serial_no").unwrap();
        assert_eq!(path.segments(), ["custom-fields", "serial_no"]);
    }

    #[test]
    fn empty_paths_are_rejected() {
        assert_eq!(parse_field_path(""), Err(JPathError::EmptyPath));
        assert_eq!(parse_field_path("   "), Err(JPathError::EmptyPath));
    }

    #[test]
    fn empty_segments_are_rejected() {
        for bad in ["a..b", ".a", "a.", "a. .b", "..", "a.b..", " .a"] {
            assert!(
                matches!(parse_field_path(bad), Err(JPathError::EmptySegment(_))),
                "expected '{bad}' to be rejected"
            );
        }
    }
}
