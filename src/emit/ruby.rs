//! Ruby emitter: Sorbet type signatures, `attr_accessor`s, and an
//! `initialize` that nils every field.

use super::{Emitter, spell};
use crate::ident::Convention;
use crate::lang::Language;
use crate::schema::{ArrayStyle, DeclBody, InferencePolicy, TypeDeclaration};

pub struct RubyEmitter;

impl Emitter for RubyEmitter {
    fn language(&self) -> Language {
        Language::Ruby
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
        let mut signatures = Vec::with_capacity(fields.len());
        let mut accessors = Vec::with_capacity(fields.len());
        let mut init = String::from("    def initialize\n");
        for field in fields {
            let ty = spell(self.language(), &field.ty);
            signatures.push(format!("    sig {{ returns({ty}).nilable }}"));
            accessors.push(format!("    attr_accessor :{}", field.name));
            init.push_str(&format!("        @{} = nil\n", field.name));
        }
        init.push_str("    end");
        format!(
            "class {}\n    extend T::Sig\n\n{}\n\n{}\n\n{}\nend",
            decl.name,
            signatures.join("\n"),
            accessors.join("\n"),
            init
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::convert::convert;
    use crate::lang::Language;

    #[test]
    fn flat_object() {
        let out = convert(r#"{"name":"John"}"#, Language::Ruby).unwrap();
        assert_eq!(
            out,
            "class Root\n    extend T::Sig\n\n    sig { returns(String).nilable }\n\n    attr_accessor :name\n\n    def initialize\n        @name = nil\n    end\nend"
        );
    }

    #[test]
    fn typed_arrays_and_untyped_nulls() {
        let out = convert(r#"{"tags":["a"],"blob":null}"#, Language::Ruby).unwrap();
        assert!(out.contains("sig { returns(T::Array[String]).nilable }"));
        assert!(out.contains("sig { returns(T.untyped).nilable }"));
    }
}
