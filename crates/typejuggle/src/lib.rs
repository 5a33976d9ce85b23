//! Shape-tolerant object mapping.
//!
//! `fill_fields` copies whatever lines up between two values of related but
//! possibly different types: fields are paired by name (with `ID` and `Id`
//! treated as aliases), optional layers on the destination are allocated on
//! demand, sequences are rebuilt element by element, and scalars are copied
//! when their kinds match or, in lossy mode, coerced.
//!
//! ```
//! use typejuggle::{fill_fields, Mappable};
//!
//! #[allow(non_snake_case)]
//! #[derive(Mappable, Default)]
//! struct ApiUser {
//!     ID: i64,
//!     name: String,
//!     tags: Vec<String>,
//! }
//!
//! #[allow(non_snake_case)]
//! #[derive(Mappable, Default)]
//! struct UserRow {
//!     Id: i64,
//!     name: Option<String>,
//!     tags: Vec<String>,
//! }
//!
//! let api = ApiUser { ID: 7, name: "Ada".into(), tags: vec!["admin".into()] };
//! let mut row = UserRow::default();
//! fill_fields(&api, &mut row);
//! assert_eq!(row.Id, 7);
//! assert_eq!(row.name.as_deref(), Some("Ada"));
//! assert_eq!(row.tags, ["admin"]);
//! ```

extern crate self as typejuggle;

#[macro_use]
mod macros;

pub mod config;
pub mod convert;
pub mod engine;
pub mod error;
pub mod impls;
pub mod names;
pub mod path;
pub mod shape;

// Re-export commonly used items for convenience
pub use tracing;
pub use typejuggle_macro::Mappable;

pub use config::Options;
pub use engine::{fill_fields, fill_fields_lossy, fill_fields_with, Report};
pub use error::{Error, Mismatch, MismatchKind, Mismatches, Result};
pub use path::{FieldPath, Segment};
pub use shape::{
    Aggregate, AggregateMut, Leaf, LeafMut, Mappable, MappableMut, Node, NodeMut, Scalar,
    ScalarKind, ScalarMut, Sequence, SequenceMut,
};
