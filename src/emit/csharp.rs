//! C# emitter: public auto-properties, explicit `List<T>` wrapper classes
//! for arrays, nested type names taken verbatim from the member key.

use super::{Emitter, spell};
use crate::ident::Convention;
use crate::lang::Language;
use crate::schema::{ArrayStyle, DeclBody, InferencePolicy, TypeDeclaration};

pub struct CSharpEmitter;

impl Emitter for CSharpEmitter {
    fn language(&self) -> Language {
        Language::CSharp
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
                let mut out = format!("public class {}\n{{", decl.name);
                for field in fields {
                    let ty = spell(self.language(), &field.ty);
                    out.push_str(&format!("\n    public {ty} {} {{ get; set; }}", field.name));
                }
                out.push_str("\n}");
                out
            }
            DeclBody::Collection { element } => {
                let elem = spell(self.language(), element);
                format!(
                    "public class {}\n{{\n    public List<{elem}> Items {{ get; set; }} = new List<{elem}>();\n}}",
                    decl.name
                )
            }
        }
    }
}
