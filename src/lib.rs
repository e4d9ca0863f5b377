//! json-binder: infer a nominal type schema from a sample JSON document and
//! emit equivalent class/struct declarations for one of eight target
//! languages (C#, Python, Java, JavaScript, TypeScript, PHP, Ruby, Swift).
//!
//! The pipeline is pure and single-pass: parse → wrap-if-array → infer →
//! emit → join. [`convert`] is the only entry point external callers need;
//! the CLI in [`cli`] is a thin front end over it.
//!
//! Known limitations, kept deliberately for output stability:
//! - arrays are typed from their first element only;
//! - two keys normalizing to the same identifier collide silently.

pub mod cli;
pub mod convert;
pub mod emit;
pub mod highlight;
pub mod ident;
pub mod lang;
pub mod mapping;
pub mod schema;

pub use convert::{ConvertError, convert};
pub use lang::Language;
