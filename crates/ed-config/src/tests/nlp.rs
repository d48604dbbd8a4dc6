use crate::NlpConfig;

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

#[test]
fn given_defaults_when_validate_then_ok() {
    assert_that!(NlpConfig::default().validate(), ok(anything()));
}

#[test]
fn given_disabled_when_validate_then_model_names_are_not_checked() {
    let config = NlpConfig {
        enabled: false,
        emotion_model: String::new(),
        summarizer_model: String::new(),
        ..NlpConfig::default()
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_enabled_with_empty_emotion_model_when_validate_then_error() {
    let config = NlpConfig {
        emotion_model: String::new(),
        ..NlpConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_enabled_with_empty_summarizer_model_when_validate_then_error() {
    let config = NlpConfig {
        summarizer_model: String::new(),
        ..NlpConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_zero_timeout_when_validate_then_error() {
    let config = NlpConfig {
        timeout_secs: 0,
        ..NlpConfig::default()
    };

    assert_that!(config.validate(), err(anything()));
}
