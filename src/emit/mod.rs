//! Per-language emitters.
//!
//! Each emitter is a pure function from an inferred declaration list to
//! source text for one target language; no console or file I/O. Selection
//! happens through a closed, process-wide registry keyed by [`Language`],
//! initialized once and never mutated.

pub mod csharp;
pub mod java;
pub mod javascript;
pub mod php;
pub mod python;
pub mod ruby;
pub mod swift;
pub mod typescript;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::lang::Language;
use crate::mapping;
use crate::schema::{InferencePolicy, TypeDeclaration, TypeRef};

/// One target language's rendering rules.
pub trait Emitter: Send + Sync {
    fn language(&self) -> Language;

    /// The language-dependent inference knobs (nested-name casing and array
    /// style) the walk must use so that every `Named` reference matches a
    /// declaration this emitter will render.
    fn policy(&self) -> InferencePolicy;

    /// Render a single declaration.
    fn declaration(&self, decl: &TypeDeclaration) -> String;

    /// Render the whole run: declarations in the order received (parent
    /// before descendants), joined with one blank line.
    fn emit(&self, declarations: &[TypeDeclaration]) -> String {
        declarations
            .iter()
            .map(|d| self.declaration(d))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

static EMITTERS: Lazy<BTreeMap<Language, Box<dyn Emitter>>> = Lazy::new(|| {
    let emitters: [Box<dyn Emitter>; 8] = [
        Box::new(csharp::CSharpEmitter),
        Box::new(python::PythonEmitter),
        Box::new(java::JavaEmitter),
        Box::new(javascript::JavaScriptEmitter),
        Box::new(typescript::TypeScriptEmitter),
        Box::new(php::PhpEmitter),
        Box::new(ruby::RubyEmitter),
        Box::new(swift::SwiftEmitter),
    ];
    emitters.into_iter().map(|e| (e.language(), e)).collect()
});

/// Look up the emitter for `language`. Total: every `Language` variant is
/// registered at startup.
pub fn emitter_for(language: Language) -> &'static dyn Emitter {
    EMITTERS
        .get(&language)
        .map(|b| b.as_ref())
        .unwrap_or_else(|| unreachable!("emitter registered for every language"))
}

/// Spell a type reference in `language`, consulting the mapping registry for
/// primitives and collection syntax.
pub(crate) fn spell(language: Language, ty: &TypeRef) -> String {
    match ty {
        TypeRef::Primitive(kind) => mapping::scalar_type(language, *kind).to_string(),
        TypeRef::Named(name) => name.clone(),
        TypeRef::Collection(element) => {
            let inner = spell(language, element);
            mapping::collection_type(language, &inner)
        }
    }
}
