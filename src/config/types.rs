// Configuration type definitions

use serde::Deserialize;

use super::options::{DEFAULT_LOADING_TEXT, DEFAULT_PLACEHOLDER, MentionsOptions, parse_trigger};
use crate::error::MentionsError;
use crate::tracker::TriggerLocation;

/// Input section, sized in terminal rows
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub trigger: String,
    pub trigger_location: TriggerLocation,
    pub horizontal: bool,
    pub max_visible_row_count: Option<usize>,
    pub suggestion_row_height: u16,
    pub text_input_min_height: u16,
    pub text_input_max_height: u16,
    pub loading_text: String,
    pub placeholder: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            trigger: "@".to_string(),
            trigger_location: TriggerLocation::NewWordOnly,
            horizontal: false,
            max_visible_row_count: Some(5),
            suggestion_row_height: 1,
            text_input_min_height: 3,
            text_input_max_height: 8,
            loading_text: DEFAULT_LOADING_TEXT.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl InputConfig {
    pub fn to_options(&self) -> Result<MentionsOptions, MentionsError> {
        let trigger = parse_trigger(&self.trigger)?;

        let mut options = MentionsOptions::new(trigger, self.trigger_location, self.suggestion_row_height)
            .horizontal(self.horizontal)
            .text_input_heights(self.text_input_min_height, self.text_input_max_height)
            .loading_text(self.loading_text.clone())
            .placeholder(self.placeholder.clone());
        options.max_visible_row_count = self.max_visible_row_count;

        Ok(options)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.input.trigger, "@");
        assert_eq!(config.input.max_visible_row_count, Some(5));
    }

    #[test]
    fn test_full_input_section() {
        let config: Config = toml::from_str(
            r##"
[input]
trigger = "#"
trigger_location = "anywhere"
horizontal = true
suggestion_row_height = 2
text_input_min_height = 4
text_input_max_height = 10
loading_text = "Searching..."
placeholder = "Message"
"##,
        )
        .unwrap();

        assert_eq!(config.input.trigger, "#");
        assert_eq!(config.input.trigger_location, TriggerLocation::Anywhere);
        assert!(config.input.horizontal);
        assert_eq!(config.input.suggestion_row_height, 2);
        assert_eq!(config.input.loading_text, "Searching...");
        assert_eq!(config.input.placeholder, "Message");
    }

    #[test]
    fn test_to_options_carries_every_field() {
        let options = InputConfig::default().to_options().unwrap();

        assert_eq!(options.trigger, '@');
        assert_eq!(options.trigger_location, TriggerLocation::NewWordOnly);
        assert!(!options.horizontal);
        assert_eq!(options.max_visible_row_count, Some(5));
        assert_eq!(options.suggestion_row_height, 1);
        assert_eq!(options.text_input_min_height, 3);
        assert_eq!(options.text_input_max_height, 8);
    }

    #[test]
    fn test_to_options_rejects_long_trigger() {
        let input = InputConfig {
            trigger: "@@".to_string(),
            ..InputConfig::default()
        };
        assert_eq!(
            input.to_options(),
            Err(MentionsError::InvalidTrigger("@@".to_string()))
        );
    }

    #[test]
    fn test_unknown_trigger_location_fails_to_parse() {
        let result: Result<Config, _> = toml::from_str("[input]\ntrigger_location = \"sometimes\"\n");
        assert!(result.is_err());
    }

    // Any subset of the input section parses, missing keys fall back to defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_trigger in prop::bool::ANY,
            include_horizontal in prop::bool::ANY,
            include_height in prop::bool::ANY,
        ) {
            let mut toml_content = String::from("[input]\n");
            if include_trigger {
                toml_content.push_str("trigger = \"+\"\n");
            }
            if include_horizontal {
                toml_content.push_str("horizontal = true\n");
            }
            if include_height {
                toml_content.push_str("suggestion_row_height = 3\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");

            let input = config.unwrap().input;
            let defaults = InputConfig::default();
            prop_assert_eq!(input.trigger.as_str(), if include_trigger { "+" } else { "@" });
            prop_assert_eq!(input.horizontal, include_horizontal || defaults.horizontal);
            prop_assert_eq!(
                input.suggestion_row_height,
                if include_height { 3 } else { defaults.suggestion_row_height }
            );
        }
    }
}
