/// Log a debug message
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::tracing::debug!($($arg)*)
    };
}

/// Log a trace message
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::tracing::trace!($($arg)*)
    };
}

/// Registers foreign `Clone + 'static` types as opaque leaves.
///
/// ```
/// #[derive(Clone, Debug, PartialEq)]
/// struct Millis(u64);
///
/// typejuggle::leaf!(Millis);
///
/// let mut slot = Millis(0);
/// typejuggle::fill_fields(&Millis(5), &mut slot);
/// assert_eq!(slot, Millis(5));
/// ```
#[macro_export]
macro_rules! leaf {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Mappable for $ty {
                fn node(&self) -> $crate::Node<'_> {
                    $crate::Node::Leaf($crate::Leaf::new(self))
                }
            }

            impl $crate::MappableMut for $ty {
                fn node_mut(&mut self) -> $crate::NodeMut<'_> {
                    $crate::NodeMut::Leaf($crate::LeafMut::new(self))
                }
            }
        )+
    };
}
