//! Conversion entry point: parse → wrap-if-array → infer → emit → join.

use serde_json::{Value, json};

use crate::emit;
use crate::lang::Language;
use crate::schema;

/// Everything that can end a single conversion call. All three are terminal:
/// either the full declaration text is produced or nothing is.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Missing or empty JSON argument. A precondition violation, reported
    /// distinctly from a parse failure.
    #[error("missing JSON input")]
    EmptyInput,

    /// Malformed JSON. The parser's own diagnostic is surfaced unwrapped.
    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    /// Requested target is not one of the supported languages.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Convert a JSON document into class/struct declarations for `language`.
///
/// The output is the blank-line-joined declaration text, rooted at a type
/// named `Root`. A top-level array is wrapped in `{ "Items": <array> }`
/// before inference, which is observable in the output as an extra
/// `Items`-named wrapper.
pub fn convert(json: &str, language: Language) -> Result<String, ConvertError> {
    if json.trim().is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    let mut value: Value = serde_json::from_str(json)?;
    if value.is_array() {
        value = json!({ "Items": value });
    }

    let emitter = emit::emitter_for(language);
    let (_, declarations) = schema::infer(&value, "Root", &emitter.policy());
    Ok(emitter.emit(&declarations))
}
