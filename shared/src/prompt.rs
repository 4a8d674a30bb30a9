//! Prompt templates for the Gemini model.
//!
//! Both builders are pure: the same inputs always produce the same prompt
//! text. The scenario template pins the reply format that `scenario::parse`
//! expects.

use crate::models::PersonalityMode;

/// Literal reply requested in "nice" mode instead of a real analysis.
pub const NICE_ANALYSIS: &str = "You are a wonderful person with great taste in life choices.";

/// Build the prompt that generates a decision-forcing situation with two
/// actions.
pub fn scenario(themes: &str) -> String {
    format!(
        "Pick one of the following themes: {themes}.\n\
         Create a single realistic situation based on that theme. The situation must \
         force the user to make a decision and must be at most 50 words.\n\
         Then provide exactly two distinct actions the user could take. Make each \
         action reveal something about the user's personality.\n\n\
         Format:\n\
         Situation: [the situation]\n\n\
         1. [first action]\n\
         2. [second action]"
    )
}

/// Build the personality analysis prompt for the given mode.
///
/// "Nice" mode skips real analysis and asks for a fixed compliment; the
/// savage mode embeds what the user chose and avoided and asks for an
/// irreverent second-person summary.
pub fn analysis(mode: PersonalityMode, choices: &[String], avoided: &[String]) -> String {
    match mode {
        PersonalityMode::Nice => format!(
            "Reply with exactly this sentence and nothing else: {NICE_ANALYSIS}"
        ),
        PersonalityMode::Savage => format!(
            "A user played a decision game. These are the actions they chose:\n\
             {}\n\
             And these are the actions they avoided:\n\
             {}\n\
             Write a personality summary of the user in 2 to 4 sentences. Address the \
             user directly in the second person. Be engaging and don't hold back: the \
             tone should be irreverent, even a little savage.",
            bullet_list(choices),
            bullet_list(avoided),
        ),
    }
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_prompt_embeds_theme_and_format() {
        let prompt = scenario("space, cooking");
        assert!(prompt.contains("space, cooking"));
        assert!(prompt.contains("Situation:"));
        assert!(prompt.contains("1."));
        assert!(prompt.contains("2."));
    }

    #[test]
    fn test_scenario_prompt_is_deterministic() {
        assert_eq!(scenario("travel"), scenario("travel"));
    }

    #[test]
    fn test_nice_mode_requests_fixed_reply() {
        let prompt = analysis(PersonalityMode::Nice, &["Keep it".into()], &[]);
        assert!(prompt.contains(NICE_ANALYSIS));
        assert!(!prompt.contains("Keep it"));
    }

    #[test]
    fn test_savage_mode_embeds_choices_and_avoided() {
        let choices = vec!["Keep the wallet".to_string()];
        let avoided = vec!["Return the wallet".to_string()];
        let prompt = analysis(PersonalityMode::Savage, &choices, &avoided);
        assert!(prompt.contains("Keep the wallet"));
        assert!(prompt.contains("Return the wallet"));
        assert_ne!(prompt, analysis(PersonalityMode::Nice, &choices, &avoided));
    }
}
