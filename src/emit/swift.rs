//! Swift emitter: `Codable` structs with optional `var` fields.

use super::{Emitter, spell};
use crate::ident::Convention;
use crate::lang::Language;
use crate::schema::{ArrayStyle, DeclBody, InferencePolicy, TypeDeclaration};

pub struct SwiftEmitter;

impl Emitter for SwiftEmitter {
    fn language(&self) -> Language {
        Language::Swift
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
        let mut out = format!("struct {}: Codable {{", decl.name);
        for field in fields {
            let ty = spell(self.language(), &field.ty);
            out.push_str(&format!("\n    var {}: {ty}?", field.name));
        }
        out.push_str("\n}");
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::convert::convert;
    use crate::lang::Language;

    #[test]
    fn flat_object() {
        let out = convert(r#"{"name":"John","age":30}"#, Language::Swift).unwrap();
        assert_eq!(
            out,
            "struct Root: Codable {\n    var name: String?\n    var age: Int?\n}"
        );
    }

    #[test]
    fn nested_object_and_array() {
        let out = convert(r#"{"user":{"scores":[1.5]}}"#, Language::Swift).unwrap();
        assert_eq!(
            out,
            "struct Root: Codable {\n    var user: User?\n}\n\nstruct User: Codable {\n    var scores: [Double]?\n}"
        );
    }
}
