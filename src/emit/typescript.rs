//! TypeScript emitter: typed field declarations plus a constructor that
//! nulls them, and `T[]` wrapper classes for arrays.

use super::{Emitter, spell};
use crate::ident::Convention;
use crate::lang::Language;
use crate::schema::{ArrayStyle, DeclBody, InferencePolicy, TypeDeclaration};

pub struct TypeScriptEmitter;

impl Emitter for TypeScriptEmitter {
    fn language(&self) -> Language {
        Language::TypeScript
    }

    fn policy(&self) -> InferencePolicy {
        InferencePolicy {
            nested_names: Convention::AsIs,
            array_style: ArrayStyle::Wrapped,
        }
    }

    fn declaration(&self, decl: &TypeDeclaration) -> String {
        match &decl.body {
            DeclBody::Record { fields } => {
                let mut out = format!("class {} {{", decl.name);
                for field in fields {
                    let ty = spell(self.language(), &field.ty);
                    out.push_str(&format!("\n    {}: {ty};", field.name));
                }
                out.push_str("\n\n    constructor() {");
                for field in fields {
                    out.push_str(&format!("\n        this.{} = null;", field.name));
                }
                out.push_str("\n    }\n}");
                out
            }
            DeclBody::Collection { element } => {
                let elem = spell(self.language(), element);
                format!(
                    "class {} {{\n    items: {elem}[];\n\n    constructor() {{\n        this.items = [];\n    }}\n}}",
                    decl.name
                )
            }
        }
    }
}
