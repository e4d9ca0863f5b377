//! Per-language type-mapping tables.
//!
//! One scalar table and one collection-spelling rule per target language.
//! These are total: `ScalarKind::Null` (a JSON `null`, or an empty array's
//! element) maps to the language's untyped marker rather than failing.
//! The spellings must match what a consumer of the generated code expects,
//! so they are fixed here and nowhere else.

use crate::lang::Language;
use crate::schema::ScalarKind;

/// Primitive type name for `kind` in `language`.
pub fn scalar_type(language: Language, kind: ScalarKind) -> &'static str {
    match language {
        Language::CSharp => match kind {
            ScalarKind::Int => "int",
            ScalarKind::Float => "double",
            ScalarKind::Str => "string",
            ScalarKind::Bool => "bool",
            ScalarKind::Null => "object",
        },
        Language::Python => match kind {
            ScalarKind::Int => "int",
            ScalarKind::Float => "float",
            ScalarKind::Str => "str",
            ScalarKind::Bool => "bool",
            ScalarKind::Null => "object",
        },
        Language::Java => match kind {
            ScalarKind::Int => "int",
            ScalarKind::Float => "double",
            ScalarKind::Str => "String",
            ScalarKind::Bool => "boolean",
            ScalarKind::Null => "Object",
        },
        Language::JavaScript => match kind {
            ScalarKind::Int | ScalarKind::Float => "number",
            ScalarKind::Str => "string",
            ScalarKind::Bool => "boolean",
            ScalarKind::Null => "*",
        },
        Language::TypeScript => match kind {
            ScalarKind::Int | ScalarKind::Float => "number",
            ScalarKind::Str => "string",
            ScalarKind::Bool => "boolean",
            ScalarKind::Null => "any",
        },
        Language::Php => match kind {
            ScalarKind::Int => "int",
            ScalarKind::Float => "float",
            ScalarKind::Str => "string",
            ScalarKind::Bool => "bool",
            ScalarKind::Null => "mixed",
        },
        Language::Ruby => match kind {
            ScalarKind::Int => "Integer",
            ScalarKind::Float => "Float",
            ScalarKind::Str => "String",
            ScalarKind::Bool => "T::Boolean",
            ScalarKind::Null => "T.untyped",
        },
        Language::Swift => match kind {
            ScalarKind::Int => "Int",
            ScalarKind::Float => "Double",
            ScalarKind::Str => "String",
            ScalarKind::Bool => "Bool",
            ScalarKind::Null => "Any",
        },
    }
}

/// Spelling of a collection of `element` in `language`.
///
/// PHP is the odd one out: its type hints have no generic arrays, so every
/// collection is spelled `array` regardless of element type.
pub fn collection_type(language: Language, element: &str) -> String {
    match language {
        Language::CSharp | Language::Java => format!("List<{element}>"),
        Language::Python => format!("List[{element}]"),
        Language::JavaScript => format!("Array<{element}>"),
        Language::TypeScript => format!("{element}[]"),
        Language::Php => "array".to_string(),
        Language::Ruby => format!("T::Array[{element}]"),
        Language::Swift => format!("[{element}]"),
    }
}
