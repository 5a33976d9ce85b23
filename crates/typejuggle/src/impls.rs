use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use crate::shape::{
    Mappable, MappableMut, Node, NodeMut, Scalar, ScalarMut, Sequence, SequenceMut,
};

macro_rules! scalar_impls {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Mappable for $ty {
                fn node(&self) -> Node<'_> {
                    Node::Scalar(Scalar::$variant(*self))
                }
            }

            impl MappableMut for $ty {
                fn node_mut(&mut self) -> NodeMut<'_> {
                    NodeMut::Scalar(ScalarMut::$variant(self))
                }
            }
        )*
    };
}

scalar_impls! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    char => Char,
}

impl Mappable for str {
    fn node(&self) -> Node<'_> {
        Node::Scalar(Scalar::Str(self))
    }
}

impl Mappable for String {
    fn node(&self) -> Node<'_> {
        Node::Scalar(Scalar::Str(self.as_str()))
    }
}

impl MappableMut for String {
    fn node_mut(&mut self) -> NodeMut<'_> {
        NodeMut::Scalar(ScalarMut::String(self))
    }
}

leaf!(Duration, SystemTime, PathBuf);

// Indirections: the read side follows existing layers, the write side
// allocates every missing one.

impl<T: Mappable> Mappable for Option<T> {
    fn node(&self) -> Node<'_> {
        match self {
            Some(value) => value.node(),
            None => Node::Absent,
        }
    }
}

impl<T: MappableMut + Default> MappableMut for Option<T> {
    fn node_mut(&mut self) -> NodeMut<'_> {
        self.node_mut_counting(&mut 0)
    }

    fn node_mut_counting(&mut self, allocated: &mut usize) -> NodeMut<'_> {
        if self.is_none() {
            *allocated += 1;
        }
        self.get_or_insert_with(T::default)
            .node_mut_counting(allocated)
    }
}

impl<T: Mappable + ?Sized> Mappable for Box<T> {
    fn node(&self) -> Node<'_> {
        (**self).node()
    }
}

impl<T: MappableMut + ?Sized> MappableMut for Box<T> {
    fn node_mut(&mut self) -> NodeMut<'_> {
        (**self).node_mut()
    }

    fn node_mut_counting(&mut self, allocated: &mut usize) -> NodeMut<'_> {
        (**self).node_mut_counting(allocated)
    }
}

impl<T: Mappable + ?Sized> Mappable for &T {
    fn node(&self) -> Node<'_> {
        (**self).node()
    }
}

impl<T: Mappable + ?Sized> Mappable for &mut T {
    fn node(&self) -> Node<'_> {
        (**self).node()
    }
}

impl<T: MappableMut + ?Sized> MappableMut for &mut T {
    fn node_mut(&mut self) -> NodeMut<'_> {
        (**self).node_mut()
    }

    fn node_mut_counting(&mut self, allocated: &mut usize) -> NodeMut<'_> {
        (**self).node_mut_counting(allocated)
    }
}

impl<T: Mappable + ?Sized> Mappable for Rc<T> {
    fn node(&self) -> Node<'_> {
        (**self).node()
    }
}

impl<T: Mappable + ?Sized> Mappable for Arc<T> {
    fn node(&self) -> Node<'_> {
        (**self).node()
    }
}

// Sequences.

impl<T: Mappable> Sequence for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &dyn Mappable> + '_> {
        Box::new(self.iter().map(|element| element as &dyn Mappable))
    }
}

impl<T: Mappable> Mappable for Vec<T> {
    fn node(&self) -> Node<'_> {
        Node::Sequence(self)
    }
}

impl<T: MappableMut + Default> SequenceMut for Vec<T> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn push_default(&mut self) -> &mut dyn MappableMut {
        let index = Vec::len(self);
        self.push(T::default());
        &mut self[index]
    }
}

impl<T: MappableMut + Default> MappableMut for Vec<T> {
    fn node_mut(&mut self) -> NodeMut<'_> {
        NodeMut::Sequence(self)
    }
}

impl<T: Mappable> Sequence for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &dyn Mappable> + '_> {
        Box::new(self.iter().map(|element| element as &dyn Mappable))
    }
}

impl<T: Mappable> Mappable for VecDeque<T> {
    fn node(&self) -> Node<'_> {
        Node::Sequence(self)
    }
}

impl<T: MappableMut + Default> SequenceMut for VecDeque<T> {
    fn clear(&mut self) {
        VecDeque::clear(self);
    }

    fn push_default(&mut self) -> &mut dyn MappableMut {
        let index = VecDeque::len(self);
        self.push_back(T::default());
        &mut self[index]
    }
}

impl<T: MappableMut + Default> MappableMut for VecDeque<T> {
    fn node_mut(&mut self) -> NodeMut<'_> {
        NodeMut::Sequence(self)
    }
}

/// Arrays and slices are read-only sequences: their length cannot follow the
/// source.
impl<T: Mappable, const N: usize> Sequence for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &dyn Mappable> + '_> {
        Box::new(self.iter().map(|element| element as &dyn Mappable))
    }
}

impl<T: Mappable, const N: usize> Mappable for [T; N] {
    fn node(&self) -> Node<'_> {
        Node::Sequence(self)
    }
}

impl<T: Mappable> Sequence for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &dyn Mappable> + '_> {
        Box::new(self.iter().map(|element| element as &dyn Mappable))
    }
}

impl<T: Mappable> Mappable for [T] {
    fn node(&self) -> Node<'_> {
        Node::Sequence(self)
    }
}
