//! Parsing of model completions into structured scenarios.
//!
//! The model is instructed to reply as `Situation: ...` followed by two
//! numbered actions, but instruction-following is best effort. The parser
//! tolerates leading prose, blank lines and extra numbered items, and only
//! requires the two structural anchors the frontend depends on: the
//! `Situation:` marker and at least two numbered lines.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use thiserror::Error;

/// Marker that introduces the situation text in a completion.
const SITUATION_MARKER: &str = "Situation:";

static ENUMERATED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.").expect("valid enumerated line regex"));

static CHOICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s*(\S.*)$").expect("valid choice regex"));

/// Structured scenario extracted from a model completion.
///
/// All three fields are non-empty when parsing succeeds; a completion that
/// only partially matches the expected shape is a [`ParseError`], never a
/// partially filled record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedScenario {
    pub situation: String,
    pub choice1: String,
    pub choice2: String,
}

/// Ways a completion can fail to yield a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("completion has no 'Situation:' marker")]
    NoSituationMarker,
    #[error("completion has an empty situation")]
    EmptySituation,
    #[error("completion has fewer than two numbered actions")]
    InsufficientChoices,
}

/// Extract the situation and the first two numbered actions from a raw
/// completion.
///
/// The situation is everything after the first `Situation:` marker up to the
/// first line that starts with digits and a period; it may span multiple
/// lines. Numbered lines beyond the first two are discarded.
pub fn parse(raw: &str) -> Result<ParsedScenario, ParseError> {
    let start = raw
        .find(SITUATION_MARKER)
        .ok_or(ParseError::NoSituationMarker)?;
    let segment = raw[start + SITUATION_MARKER.len()..].trim();

    let mut situation_lines: Vec<&str> = Vec::new();
    let mut candidates: Vec<String> = Vec::new();
    let mut in_choices = false;
    for line in segment.lines() {
        if !in_choices && ENUMERATED_LINE_RE.is_match(line) {
            in_choices = true;
        }
        if in_choices {
            if let Some(caps) = CHOICE_RE.captures(line) {
                candidates.push(caps[1].trim().to_string());
            }
        } else {
            situation_lines.push(line);
        }
    }

    let situation = situation_lines.join("\n").trim().to_string();
    if situation.is_empty() {
        return Err(ParseError::EmptySituation);
    }

    let mut candidates = candidates.into_iter();
    match (candidates.next(), candidates.next()) {
        (Some(choice1), Some(choice2)) => Ok(ParsedScenario {
            situation,
            choice1,
            choice2,
        }),
        _ => Err(ParseError::InsufficientChoices),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_well_formed_completion() {
        let raw = "Situation: You find a wallet on the street.\n\n1. Keep it\n2. Return it";
        let parsed = parse(raw).unwrap();
        assert_eq!(parsed.situation, "You find a wallet on the street.");
        assert_eq!(parsed.choice1, "Keep it");
        assert_eq!(parsed.choice2, "Return it");
    }

    #[test]
    fn test_discards_leading_prose() {
        let raw = "Sure! Here is your scenario.\n\nSituation: A storm hits your camp.\n1. Pack up\n2. Wait it out";
        let parsed = parse(raw).unwrap();
        assert_eq!(parsed.situation, "A storm hits your camp.");
    }

    #[test]
    fn test_ignores_extra_numbered_lines() {
        let raw = "Situation: Your boss asks you to lie.\n1. Refuse\n2. Agree\n3. Quit on the spot";
        let parsed = parse(raw).unwrap();
        assert_eq!(parsed.choice1, "Refuse");
        assert_eq!(parsed.choice2, "Agree");
    }

    #[test]
    fn test_multiline_situation() {
        let raw = "Situation: The elevator stops between floors.\nThe alarm button does nothing.\n1. Pry the doors\n2. Wait for help";
        let parsed = parse(raw).unwrap();
        assert_eq!(
            parsed.situation,
            "The elevator stops between floors.\nThe alarm button does nothing."
        );
    }

    #[test]
    fn test_missing_marker() {
        let raw = "You find a wallet.\n1. Keep it\n2. Return it";
        assert_eq!(parse(raw), Err(ParseError::NoSituationMarker));
    }

    #[test]
    fn test_empty_situation() {
        let raw = "Situation:\n1. Keep it\n2. Return it";
        assert_eq!(parse(raw), Err(ParseError::EmptySituation));
    }

    #[test]
    fn test_insufficient_choices() {
        let raw = "Situation: You find a wallet.\n1. Keep it";
        assert_eq!(parse(raw), Err(ParseError::InsufficientChoices));
    }

    #[test]
    fn test_parse_is_pure() {
        let raw = "Situation: You find a wallet.\n1. Keep it\n2. Return it";
        assert_eq!(parse(raw), parse(raw));
    }
}
