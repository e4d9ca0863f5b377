//! Java emitter: private fields with paired getter/setter methods. Method
//! suffixes use the raw member key verbatim (`getname`, not `getName`).

use super::{Emitter, spell};
use crate::ident::Convention;
use crate::lang::Language;
use crate::schema::{ArrayStyle, DeclBody, InferencePolicy, TypeDeclaration};

pub struct JavaEmitter;

impl Emitter for JavaEmitter {
    fn language(&self) -> Language {
        Language::Java
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
                let mut out = format!("public class {} {{", decl.name);
                for field in fields {
                    let ty = spell(self.language(), &field.ty);
                    let key = &field.name;
                    out.push_str(&format!("\n    private {ty} {key};"));
                    out.push_str(&format!("\n    public {ty} get{key}() {{ return {key}; }}"));
                    out.push_str(&format!(
                        "\n    public void set{key}({ty} {key}) {{ this.{key} = {key}; }}"
                    ));
                }
                out.push_str("\n}");
                out
            }
            DeclBody::Collection { element } => {
                let elem = spell(self.language(), element);
                format!(
                    "public class {} {{\n    private List<{elem}> items;\n    public List<{elem}> getItems() {{ return items; }}\n    public void setItems(List<{elem}> items) {{ this.items = items; }}\n}}",
                    decl.name
                )
            }
        }
    }
}
