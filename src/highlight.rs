//! Console syntax coloring for the generated source.
//!
//! A token-level pass, not a parser: keywords, known primitive types, type
//! names, numbers, and string literals get colors; everything else passes
//! through. Keyword tables are process-wide read-only data. Only the tokens
//! the emitters actually produce need to be covered.

use std::collections::{BTreeMap, BTreeSet};

use colored::Colorize;
use once_cell::sync::Lazy;

use crate::lang::Language;

static KEYWORDS: Lazy<BTreeMap<Language, BTreeSet<&'static str>>> = Lazy::new(|| {
    let table: [(Language, &[&str]); 8] = [
        (
            Language::CSharp,
            &["public", "class", "get", "set", "new", "return"],
        ),
        (Language::Python, &["class", "def", "self", "None", "return"]),
        (
            Language::Java,
            &["public", "private", "class", "void", "return", "this", "new"],
        ),
        (
            Language::JavaScript,
            &["class", "constructor", "this", "null", "return"],
        ),
        (
            Language::TypeScript,
            &["class", "constructor", "this", "null", "return"],
        ),
        (
            Language::Php,
            &["class", "public", "private", "function", "return"],
        ),
        (
            Language::Ruby,
            &["class", "end", "def", "extend", "sig", "returns", "nil", "attr_accessor"],
        ),
        (Language::Swift, &["struct", "var", "let", "func", "return"]),
    ];
    table
        .into_iter()
        .map(|(language, words)| (language, words.iter().copied().collect()))
        .collect()
});

static PRIMITIVES: Lazy<BTreeMap<Language, BTreeSet<&'static str>>> = Lazy::new(|| {
    let table: [(Language, &[&str]); 8] = [
        (
            Language::CSharp,
            &["int", "double", "string", "bool", "object", "List"],
        ),
        (
            Language::Python,
            &["int", "float", "str", "bool", "object", "List", "Optional"],
        ),
        (
            Language::Java,
            &["int", "double", "boolean", "String", "Object", "List"],
        ),
        (Language::JavaScript, &["number", "string", "boolean"]),
        (Language::TypeScript, &["number", "string", "boolean", "any"]),
        (
            Language::Php,
            &["int", "float", "string", "bool", "mixed", "array"],
        ),
        (
            Language::Ruby,
            &["Integer", "Float", "String", "T"],
        ),
        (
            Language::Swift,
            &["Int", "Double", "String", "Bool", "Any", "Codable"],
        ),
    ];
    table
        .into_iter()
        .map(|(language, words)| (language, words.iter().copied().collect()))
        .collect()
});

fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Colorize `source` for display. Respects the global `colored` override, so
/// `--no-color` (or a non-tty) leaves the text untouched.
pub fn highlight(source: &str, language: Language) -> String {
    let keywords = &KEYWORDS[&language];
    let primitives = &PRIMITIVES[&language];

    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c == '"' || c == '\'' {
            let quote = c;
            let mut literal = String::new();
            literal.push(chars.next().unwrap_or(quote));
            while let Some(&next) = chars.peek() {
                literal.push(next);
                chars.next();
                if next == quote {
                    break;
                }
            }
            out.push_str(&literal.green().to_string());
        } else if c.is_ascii_digit() {
            let mut number = String::new();
            while let Some(&next) = chars.peek() {
                if next.is_ascii_digit() || next == '.' {
                    number.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            out.push_str(&number.green().to_string());
        } else if is_word_start(c) {
            let mut word = String::new();
            while let Some(&next) = chars.peek() {
                if is_word(next) {
                    word.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            if keywords.contains(word.as_str()) {
                out.push_str(&word.magenta().to_string());
            } else if primitives.contains(word.as_str()) {
                out.push_str(&word.cyan().to_string());
            } else if word.chars().next().is_some_and(|f| f.is_uppercase()) {
                // type names: declarations are PascalCase in most targets
                out.push_str(&word.bright_cyan().to_string());
            } else {
                out.push_str(&word);
            }
        } else {
            out.push(c);
            chars.next();
        }
    }
    out
}
