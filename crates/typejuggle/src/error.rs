use itertools::Itertools;
use std::fmt::{Display, Formatter};
use std::result;
use thiserror::Error;

use crate::path::FieldPath;
use crate::shape::ScalarKind;

/// Why a subtree was not copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MismatchKind {
    /// Source and destination nodes have different shapes.
    Shape { source: String, destination: String },
    /// Scalars of different kinds and no applicable conversion.
    Conversion {
        source: ScalarKind,
        destination: ScalarKind,
    },
    /// No destination field under the reconciled or original name.
    UnmatchedField { name: &'static str },
    /// Opaque leaves of different concrete types.
    LeafType {
        source: &'static str,
        destination: &'static str,
    },
}

impl Display for MismatchKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MismatchKind::Shape {
                source,
                destination,
            } => write!(f, "cannot map {source} onto {destination}"),
            MismatchKind::Conversion {
                source,
                destination,
            } => write!(f, "no conversion from {source} to {destination}"),
            MismatchKind::UnmatchedField { name } => {
                write!(f, "no destination field for `{name}`")
            }
            MismatchKind::LeafType {
                source,
                destination,
            } => write!(f, "leaf `{source}` is not `{destination}`"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub path: FieldPath,
    pub kind: MismatchKind,
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mismatches(pub Vec<Mismatch>);

impl Display for Mismatches {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join("; "))
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Mapping mismatch: {0}")]
    Mismatch(Mismatches),
}

impl Error {
    pub fn mismatches(&self) -> &[Mismatch] {
        match self {
            Error::Mismatch(mismatches) => &mismatches.0,
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Segment;

    #[test]
    fn mismatch_error_lists_every_path() {
        let mut street = FieldPath::root();
        street.push(Segment::Field("addr"));
        street.push(Segment::Field("street"));
        let err = Error::Mismatch(Mismatches(vec![
            Mismatch {
                path: street,
                kind: MismatchKind::Conversion {
                    source: ScalarKind::I32,
                    destination: ScalarKind::Text,
                },
            },
            Mismatch {
                path: FieldPath::root(),
                kind: MismatchKind::UnmatchedField { name: "extra" },
            },
        ]));
        assert_eq!(
            err.to_string(),
            "Mapping mismatch: addr.street: no conversion from i32 to text; \
             <root>: no destination field for `extra`"
        );
        assert_eq!(err.mismatches().len(), 2);
    }
}
