//! PHP emitter: private `$fields` plus get/set pairs with a PascalCase
//! method suffix. Collections are type-hinted as plain `array`.

use super::{Emitter, spell};
use crate::ident::{Convention, pascal_case};
use crate::lang::Language;
use crate::schema::{ArrayStyle, DeclBody, InferencePolicy, TypeDeclaration};

pub struct PhpEmitter;

impl Emitter for PhpEmitter {
    fn language(&self) -> Language {
        Language::Php
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
        let mut properties = Vec::with_capacity(fields.len());
        let mut methods = Vec::with_capacity(fields.len() * 2);
        for field in fields {
            let key = &field.name;
            let ty = spell(self.language(), &field.ty);
            properties.push(format!("    private {ty} ${key};"));

            let suffix = pascal_case(key);
            methods.push(format!(
                "    public function get{suffix}() {{ return $this->{key}; }}"
            ));
            methods.push(format!(
                "    public function set{suffix}({ty} ${key}) {{ $this->{key} = ${key}; }}"
            ));
        }
        format!(
            "class {}\n{{\n{}\n\n{}\n}}",
            decl.name,
            properties.join("\n"),
            methods.join("\n")
        )
    }
}
