//! Shape model shared by the engine and the `Mappable` derive.
//!
//! A value exposes itself to the engine as a [`Node`] (read side) or a
//! [`NodeMut`] (write side). Indirections never appear as nodes: they resolve
//! themselves before answering, following existing layers on the read side
//! and allocating missing layers on the write side.

use std::any::Any;
use std::fmt::{Display, Formatter};

/// Read access to a value's shape.
pub trait Mappable {
    fn node(&self) -> Node<'_>;
}

/// Write access to a value's shape.
///
/// Implementations for optional layers allocate `Default::default()` at every
/// absent layer, so the returned node always refers to a concrete value.
pub trait MappableMut {
    fn node_mut(&mut self) -> NodeMut<'_>;

    /// Same as [`node_mut`](Self::node_mut), adding one to `allocated` for
    /// every absent layer filled in on the way. Indirections override this.
    fn node_mut_counting(&mut self, _allocated: &mut usize) -> NodeMut<'_> {
        self.node_mut()
    }
}

pub enum Node<'a> {
    /// The innermost layer of an indirection chain holds nothing.
    Absent,
    Aggregate(&'a dyn Aggregate),
    Sequence(&'a dyn Sequence),
    Scalar(Scalar<'a>),
    Leaf(Leaf<'a>),
}

pub enum NodeMut<'a> {
    Aggregate(&'a mut dyn AggregateMut),
    Sequence(&'a mut dyn SequenceMut),
    Scalar(ScalarMut<'a>),
    Leaf(LeafMut<'a>),
}

impl Node<'_> {
    pub fn describe(&self) -> String {
        match self {
            Node::Absent => "absent".to_string(),
            Node::Aggregate(aggregate) => format!("aggregate `{}`", aggregate.type_name()),
            Node::Sequence(_) => "sequence".to_string(),
            Node::Scalar(scalar) => format!("scalar {}", scalar.kind()),
            Node::Leaf(leaf) => format!("leaf `{}`", leaf.type_name()),
        }
    }
}

impl NodeMut<'_> {
    pub fn describe(&self) -> String {
        match self {
            NodeMut::Aggregate(aggregate) => format!("aggregate `{}`", aggregate.type_name()),
            NodeMut::Sequence(_) => "sequence".to_string(),
            NodeMut::Scalar(scalar) => format!("scalar {}", scalar.kind()),
            NodeMut::Leaf(leaf) => format!("leaf `{}`", leaf.type_name()),
        }
    }
}

/// A fixed set of named fields.
///
/// `field` must return `Some` for every name listed by `field_names`.
pub trait Aggregate {
    fn type_name(&self) -> &'static str;
    /// Exposed field names in declaration order.
    fn field_names(&self) -> &'static [&'static str];
    fn field(&self, name: &str) -> Option<&dyn Mappable>;

    fn has_field(&self, name: &str) -> bool {
        self.field_names().contains(&name)
    }
}

pub trait AggregateMut: Aggregate {
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn MappableMut>;
}

/// An ordered list of homogeneous elements.
pub trait Sequence {
    fn len(&self) -> usize;
    fn elements(&self) -> Box<dyn Iterator<Item = &dyn Mappable> + '_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait SequenceMut {
    fn clear(&mut self);
    /// Appends a freshly defaulted element and hands it back for filling.
    fn push_default(&mut self) -> &mut dyn MappableMut;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Char,
    Text,
}

impl ScalarKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::I128 => "i128",
            ScalarKind::Isize => "isize",
            ScalarKind::U8 => "u8",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::U128 => "u128",
            ScalarKind::Usize => "usize",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::Char => "char",
            ScalarKind::Text => "text",
        }
    }

    pub fn is_signed_integer(&self) -> bool {
        matches!(
            self,
            ScalarKind::I8
                | ScalarKind::I16
                | ScalarKind::I32
                | ScalarKind::I64
                | ScalarKind::I128
                | ScalarKind::Isize
        )
    }
}

impl Display for ScalarKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    Char(char),
    Str(&'a str),
}

impl Scalar<'_> {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::I8(_) => ScalarKind::I8,
            Scalar::I16(_) => ScalarKind::I16,
            Scalar::I32(_) => ScalarKind::I32,
            Scalar::I64(_) => ScalarKind::I64,
            Scalar::I128(_) => ScalarKind::I128,
            Scalar::Isize(_) => ScalarKind::Isize,
            Scalar::U8(_) => ScalarKind::U8,
            Scalar::U16(_) => ScalarKind::U16,
            Scalar::U32(_) => ScalarKind::U32,
            Scalar::U64(_) => ScalarKind::U64,
            Scalar::U128(_) => ScalarKind::U128,
            Scalar::Usize(_) => ScalarKind::Usize,
            Scalar::F32(_) => ScalarKind::F32,
            Scalar::F64(_) => ScalarKind::F64,
            Scalar::Char(_) => ScalarKind::Char,
            Scalar::Str(_) => ScalarKind::Text,
        }
    }
}

#[derive(Debug)]
pub enum ScalarMut<'a> {
    Bool(&'a mut bool),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    I128(&'a mut i128),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    U128(&'a mut u128),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Char(&'a mut char),
    String(&'a mut String),
}

impl ScalarMut<'_> {
    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarMut::Bool(_) => ScalarKind::Bool,
            ScalarMut::I8(_) => ScalarKind::I8,
            ScalarMut::I16(_) => ScalarKind::I16,
            ScalarMut::I32(_) => ScalarKind::I32,
            ScalarMut::I64(_) => ScalarKind::I64,
            ScalarMut::I128(_) => ScalarKind::I128,
            ScalarMut::Isize(_) => ScalarKind::Isize,
            ScalarMut::U8(_) => ScalarKind::U8,
            ScalarMut::U16(_) => ScalarKind::U16,
            ScalarMut::U32(_) => ScalarKind::U32,
            ScalarMut::U64(_) => ScalarKind::U64,
            ScalarMut::U128(_) => ScalarKind::U128,
            ScalarMut::Usize(_) => ScalarKind::Usize,
            ScalarMut::F32(_) => ScalarKind::F32,
            ScalarMut::F64(_) => ScalarKind::F64,
            ScalarMut::Char(_) => ScalarKind::Char,
            ScalarMut::String(_) => ScalarKind::Text,
        }
    }
}

/// An opaque value copied only between identical concrete types.
pub struct Leaf<'a> {
    value: &'a dyn Any,
    type_name: &'static str,
}

impl<'a> Leaf<'a> {
    pub fn new<T: Any>(value: &'a T) -> Self {
        Self {
            value,
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn value(&self) -> &'a dyn Any {
        self.value
    }
}

pub struct LeafMut<'a> {
    value: &'a mut dyn Any,
    type_name: &'static str,
    assign: fn(&mut dyn Any, &dyn Any) -> bool,
}

impl<'a> LeafMut<'a> {
    pub fn new<T: Any + Clone>(value: &'a mut T) -> Self {
        Self {
            value,
            type_name: std::any::type_name::<T>(),
            assign: assign_cloned::<T>,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Clones `source` into this slot. Returns `false` when the concrete
    /// types differ, leaving the slot untouched.
    pub fn assign_from(&mut self, source: &Leaf<'_>) -> bool {
        (self.assign)(&mut *self.value, source.value)
    }
}

fn assign_cloned<T: Any + Clone>(destination: &mut dyn Any, source: &dyn Any) -> bool {
    match (destination.downcast_mut::<T>(), source.downcast_ref::<T>()) {
        (Some(destination), Some(source)) => {
            destination.clone_from(source);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Token(u64);

    #[test]
    fn leaf_clones_between_identical_types() {
        let source = Token(7);
        let mut destination = Token(0);
        let mut slot = LeafMut::new(&mut destination);
        assert!(slot.assign_from(&Leaf::new(&source)));
        assert_eq!(destination, Token(7));
    }

    #[test]
    fn leaf_refuses_foreign_types() {
        let source = 7u64;
        let mut destination = Token(1);
        let mut slot = LeafMut::new(&mut destination);
        assert!(!slot.assign_from(&Leaf::new(&source)));
        assert_eq!(destination, Token(1));
    }

    #[test]
    fn scalar_kinds_report_signedness() {
        assert!(Scalar::I16(1).kind().is_signed_integer());
        assert!(!Scalar::U16(1).kind().is_signed_integer());
        assert_eq!(Scalar::Str("x").kind().to_string(), "text");
    }
}
