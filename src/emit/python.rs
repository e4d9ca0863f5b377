//! Python emitter: `Optional[...]` annotations plus an `__init__` that nulls
//! every field. Field names are lowercased; nested type names are PascalCase.

use super::{Emitter, spell};
use crate::ident::Convention;
use crate::lang::Language;
use crate::schema::{ArrayStyle, DeclBody, InferencePolicy, TypeDeclaration};

pub struct PythonEmitter;

impl Emitter for PythonEmitter {
    fn language(&self) -> Language {
        Language::Python
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
        let mut annotations = Vec::with_capacity(fields.len());
        let mut init = String::from("    def __init__(self):");
        for field in fields {
            let name = field.name.to_lowercase();
            let ty = spell(self.language(), &field.ty);
            annotations.push(format!("    {name}: Optional[{ty}]"));
            init.push_str(&format!("\n        self.{name}: Optional[{ty}] = None"));
        }
        format!("class {}:\n{}\n\n{init}", decl.name, annotations.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use crate::convert::convert;
    use crate::lang::Language;

    #[test]
    fn flat_object() {
        let out = convert(r#"{"Name":"John"}"#, Language::Python).unwrap();
        assert_eq!(
            out,
            "class Root:\n    name: Optional[str]\n\n    def __init__(self):\n        self.name: Optional[str] = None"
        );
    }

    #[test]
    fn scalar_array_is_inline_list_of_primitive() {
        let out = convert(r#"{"tags":["a","b"]}"#, Language::Python).unwrap();
        assert_eq!(
            out,
            "class Root:\n    tags: Optional[List[str]]\n\n    def __init__(self):\n        self.tags: Optional[List[str]] = None"
        );
    }

    #[test]
    fn object_array_declares_pascal_item_class() {
        let out = convert(r#"{"users":[{"id":1}]}"#, Language::Python).unwrap();
        let classes: Vec<&str> = out.split("\n\n").filter(|s| s.starts_with("class ")).collect();
        assert_eq!(classes.len(), 2);
        assert!(out.contains("users: Optional[List[UsersItem]]"));
        assert!(out.contains("class UsersItem:"));
    }
}
