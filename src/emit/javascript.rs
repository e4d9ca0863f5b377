//! JavaScript emitter: constructor nulls plus one JSDoc block carrying an
//! `@type` line per field.

use super::{Emitter, spell};
use crate::ident::Convention;
use crate::lang::Language;
use crate::schema::{ArrayStyle, DeclBody, InferencePolicy, TypeDeclaration};

pub struct JavaScriptEmitter;

impl Emitter for JavaScriptEmitter {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn policy(&self) -> InferencePolicy {
        InferencePolicy {
            nested_names: Convention::Pascal,
            array_style: ArrayStyle::Inline,
        }
    }

    fn declaration(&self, decl: &TypeDeclaration) -> String {
        let DeclBody::Record { fields } = &decl.body else {
            unreachable!("inline-array languages never produce collection declarations");
        };
        let mut out = format!("class {} {{", decl.name);
        out.push_str("\n    constructor() {");
        for field in fields {
            out.push_str(&format!("\n        this.{} = null;", field.name));
        }
        out.push_str("\n    }");
        out.push_str("\n\n    /**");
        for field in fields {
            let ty = spell(self.language(), &field.ty);
            out.push_str(&format!("\n     * @type {{{ty}}}"));
        }
        out.push_str("\n     */");
        out.push_str("\n}");
        out
    }
}
