//! CSS class helpers shared by the calculator components.

pub const CARD: &str = "card";
pub const CARD_TITLE: &str = "card-title";
pub const INPUT_GROUP: &str = "input-group";
pub const INPUT_LABEL: &str = "input-label";
pub const SOURCE_TAG: &str = "source-tag";
pub const ERROR_BANNER: &str = "error-banner";

pub fn input_class(is_source: bool, is_invalid: bool) -> String {
    let mut class = String::from("field-input");
    if is_source {
        class.push_str(" is-source");
    }
    if is_invalid {
        class.push_str(" is-invalid");
    }
    class
}
