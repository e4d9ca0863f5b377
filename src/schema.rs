//! Schema inference.
//!
//! A single recursive walk over a parsed JSON value that assigns a type name
//! to every object and array node and records the ordered field list each
//! declaration needs. Inference is pure: it returns immutable declaration
//! lists and never touches the input tree. Emission is a separate pass.
//!
//! Two decisions are language-dependent and are threaded through as an
//! [`InferencePolicy`] instead of being baked into the walk:
//! - how a nested type name is derived from the member key (raw key vs
//!   PascalCase of the key), and
//! - whether an array gets its own collection-wrapper declaration (C#, Java,
//!   TypeScript) or is spelled inline on the field (the rest).
//!
//! Arrays are typed from their first element only; later elements are never
//! reconciled. Empty arrays yield the untyped marker. Both are deliberate
//! simplifications, not defects to fix.

use serde_json::Value;

use crate::ident::{self, Convention};

/// Scalar kinds a JSON leaf can carry. `Null` doubles as "no information"
/// (empty arrays, explicit nulls) and maps to each language's untyped marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Int,
    Float,
    Str,
    Bool,
    Null,
}

/// Reference to a type: a mapped primitive, another declaration produced in
/// the same run, or a collection of either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Primitive(ScalarKind),
    Named(String),
    Collection(Box<TypeRef>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Raw member key as it appeared in the document. Emitters apply their
    /// own casing when rendering.
    pub name: String,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclBody {
    /// A class/struct with one field per object member, in document order.
    Record { fields: Vec<Field> },
    /// An explicit wrapper around a collection element type.
    Collection { element: TypeRef },
}

/// One emittable named type. Built in one pass, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub name: String,
    pub body: DeclBody,
}

/// Whether arrays become wrapper declarations or inline collection types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayStyle {
    Wrapped,
    Inline,
}

/// The language-dependent knobs of the walk.
#[derive(Debug, Clone, Copy)]
pub struct InferencePolicy {
    pub nested_names: Convention,
    pub array_style: ArrayStyle,
}

impl InferencePolicy {
    fn nested_name(&self, key: &str) -> String {
        ident::normalize(key, self.nested_names)
    }
}

/// Classify a JSON leaf. Returns `None` for objects and arrays.
pub fn scalar_kind(value: &Value) -> Option<ScalarKind> {
    match value {
        Value::Null => Some(ScalarKind::Null),
        Value::Bool(_) => Some(ScalarKind::Bool),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                Some(ScalarKind::Int)
            } else {
                Some(ScalarKind::Float)
            }
        }
        Value::String(_) => Some(ScalarKind::Str),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Infer the type of `value` under the name `suggested`.
///
/// Returns the reference a parent field would use for this value plus every
/// declaration the subtree produced, parent-first: the node's own declaration
/// (if any) comes first, descendants follow in the order their owning member
/// appeared.
pub fn infer(value: &Value, suggested: &str, policy: &InferencePolicy) -> (TypeRef, Vec<TypeDeclaration>) {
    match value {
        Value::Object(members) => {
            let mut fields = Vec::with_capacity(members.len());
            let mut nested = Vec::new();
            for (key, member) in members {
                let nested_name = policy.nested_name(key);
                match member {
                    Value::Object(_) | Value::Array(_) => {
                        let (ty, decls) = infer(member, &nested_name, policy);
                        fields.push(Field { name: key.clone(), ty });
                        nested.extend(decls);
                    }
                    _ => {
                        // scalar_kind is total over leaves
                        let kind = scalar_kind(member).unwrap_or(ScalarKind::Null);
                        fields.push(Field {
                            name: key.clone(),
                            ty: TypeRef::Primitive(kind),
                        });
                    }
                }
            }
            let mut decls = Vec::with_capacity(nested.len() + 1);
            decls.push(TypeDeclaration {
                name: suggested.to_string(),
                body: DeclBody::Record { fields },
            });
            decls.extend(nested);
            (TypeRef::Named(suggested.to_string()), decls)
        }
        Value::Array(elements) => infer_array(elements, suggested, policy),
        leaf => {
            let kind = scalar_kind(leaf).unwrap_or(ScalarKind::Null);
            (TypeRef::Primitive(kind), Vec::new())
        }
    }
}

/// Only the first element determines the element type; heterogeneous arrays
/// are not reconciled.
fn infer_array(elements: &[Value], suggested: &str, policy: &InferencePolicy) -> (TypeRef, Vec<TypeDeclaration>) {
    let (element, nested) = match elements.first() {
        None => (TypeRef::Primitive(ScalarKind::Null), Vec::new()),
        Some(first @ (Value::Object(_) | Value::Array(_))) => {
            let item_name = format!("{suggested}Item");
            let (ty, decls) = infer(first, &item_name, policy);
            match policy.array_style {
                // the item declaration is itself the collection when the
                // element is an array; the wrapper refers to it by name
                ArrayStyle::Wrapped => (TypeRef::Named(item_name), decls),
                ArrayStyle::Inline => (ty, decls),
            }
        }
        Some(first) => {
            let kind = scalar_kind(first).unwrap_or(ScalarKind::Null);
            (TypeRef::Primitive(kind), Vec::new())
        }
    };

    match policy.array_style {
        ArrayStyle::Wrapped => {
            let mut decls = Vec::with_capacity(nested.len() + 1);
            decls.push(TypeDeclaration {
                name: suggested.to_string(),
                body: DeclBody::Collection { element },
            });
            decls.extend(nested);
            (
                TypeRef::Collection(Box::new(TypeRef::Named(suggested.to_string()))),
                decls,
            )
        }
        ArrayStyle::Inline => (TypeRef::Collection(Box::new(element)), nested),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn inline_pascal() -> InferencePolicy {
        InferencePolicy {
            nested_names: Convention::Pascal,
            array_style: ArrayStyle::Inline,
        }
    }

    fn wrapped_as_is() -> InferencePolicy {
        InferencePolicy {
            nested_names: Convention::AsIs,
            array_style: ArrayStyle::Wrapped,
        }
    }

    #[test]
    fn flat_object_is_single_record() {
        let value = json!({"name": "John", "age": 30, "score": 4.5, "ok": true, "meta": null});
        let (ty, decls) = infer(&value, "Root", &inline_pascal());
        assert_eq!(ty, TypeRef::Named("Root".into()));
        assert_eq!(decls.len(), 1);
        let DeclBody::Record { fields } = &decls[0].body else {
            panic!("expected record");
        };
        let kinds: Vec<_> = fields.iter().map(|f| f.ty.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                TypeRef::Primitive(ScalarKind::Str),
                TypeRef::Primitive(ScalarKind::Int),
                TypeRef::Primitive(ScalarKind::Float),
                TypeRef::Primitive(ScalarKind::Bool),
                TypeRef::Primitive(ScalarKind::Null),
            ]
        );
        // document order survives
        assert_eq!(fields[0].name, "name");
        assert_eq!(fields[4].name, "meta");
    }

    #[test]
    fn nested_object_emits_parent_first() {
        let value = json!({"user": {"age": 30}});
        let (_, decls) = infer(&value, "Root", &inline_pascal());
        let names: Vec<_> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Root", "User"]);
        let DeclBody::Record { fields } = &decls[0].body else {
            panic!("expected record");
        };
        assert_eq!(fields[0].ty, TypeRef::Named("User".into()));
    }

    #[test]
    fn raw_key_naming_keeps_key_verbatim() {
        let value = json!({"user": {"age": 30}});
        let (_, decls) = infer(&value, "Root", &wrapped_as_is());
        assert_eq!(decls[1].name, "user");
    }

    #[test]
    fn scalar_array_inline_has_no_item_declaration() {
        let value = json!({"tags": ["a", "b"]});
        let (_, decls) = infer(&value, "Root", &inline_pascal());
        assert_eq!(decls.len(), 1);
        let DeclBody::Record { fields } = &decls[0].body else {
            panic!("expected record");
        };
        assert_eq!(
            fields[0].ty,
            TypeRef::Collection(Box::new(TypeRef::Primitive(ScalarKind::Str)))
        );
    }

    #[test]
    fn scalar_array_wrapped_gets_collection_declaration() {
        let value = json!({"tags": ["a", "b"]});
        let (_, decls) = infer(&value, "Root", &wrapped_as_is());
        let names: Vec<_> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Root", "tags"]);
        assert_eq!(
            decls[1].body,
            DeclBody::Collection {
                element: TypeRef::Primitive(ScalarKind::Str)
            }
        );
        let DeclBody::Record { fields } = &decls[0].body else {
            panic!("expected record");
        };
        // the field references the wrapper, not the element
        assert_eq!(
            fields[0].ty,
            TypeRef::Collection(Box::new(TypeRef::Named("tags".into())))
        );
    }

    #[test]
    fn object_array_produces_item_declaration() {
        let value = json!({"users": [{"id": 1}, {"id": "later elements ignored"}]});
        let (_, decls) = infer(&value, "Root", &inline_pascal());
        let names: Vec<_> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Root", "UsersItem"]);
        let DeclBody::Record { fields } = &decls[1].body else {
            panic!("expected record");
        };
        // first element wins
        assert_eq!(fields[0].ty, TypeRef::Primitive(ScalarKind::Int));
    }

    #[test]
    fn empty_array_element_is_untyped() {
        let value = json!({"xs": []});
        let (_, decls) = infer(&value, "Root", &inline_pascal());
        let DeclBody::Record { fields } = &decls[0].body else {
            panic!("expected record");
        };
        assert_eq!(
            fields[0].ty,
            TypeRef::Collection(Box::new(TypeRef::Primitive(ScalarKind::Null)))
        );
    }

    #[test]
    fn nested_array_of_arrays_chains_item_names() {
        let value = json!({"grid": [[1, 2], [3]]});
        let (_, decls) = infer(&value, "Root", &wrapped_as_is());
        let names: Vec<_> = decls.iter().map(|d| d.name.as_str()).collect();
        // wrapper first, then its element wrapper (parent-first preorder)
        assert_eq!(names, vec!["Root", "grid", "gridItem"]);
        // the outer wrapper's element is the item wrapper itself, not a
        // collection of it; the item wrapper carries the scalar element
        assert_eq!(
            decls[1].body,
            DeclBody::Collection {
                element: TypeRef::Named("gridItem".into())
            }
        );
        assert_eq!(
            decls[2].body,
            DeclBody::Collection {
                element: TypeRef::Primitive(ScalarKind::Int)
            }
        );
    }

    #[test]
    fn every_named_ref_resolves_to_an_earlier_declaration() {
        let value = json!({
            "user": {"address": {"city": "x"}, "pets": [{"name": "y"}]},
            "tags": ["a"]
        });
        for policy in [inline_pascal(), wrapped_as_is()] {
            let (_, decls) = infer(&value, "Root", &policy);
            let mut seen: Vec<&str> = Vec::new();
            fn named<'a>(ty: &'a TypeRef) -> Option<&'a str> {
                match ty {
                    TypeRef::Named(n) => Some(n),
                    TypeRef::Collection(inner) => named(inner),
                    TypeRef::Primitive(_) => None,
                }
            }
            for decl in &decls {
                seen.push(&decl.name);
                let refs: Vec<&str> = match &decl.body {
                    DeclBody::Record { fields } => {
                        fields.iter().filter_map(|f| named(&f.ty)).collect()
                    }
                    DeclBody::Collection { element } => named(element).into_iter().collect(),
                };
                for r in refs {
                    let declared_later = decls.iter().any(|d| d.name == r);
                    assert!(declared_later, "dangling reference {r}");
                }
            }
            // and the root always comes first
            assert_eq!(seen[0], "Root");
        }
    }

    #[test]
    fn top_level_scalar_produces_no_declarations() {
        let (ty, decls) = infer(&json!(42), "Root", &inline_pascal());
        assert_eq!(ty, TypeRef::Primitive(ScalarKind::Int));
        assert!(decls.is_empty());
    }
}
