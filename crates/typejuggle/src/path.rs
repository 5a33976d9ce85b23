use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Field(&'static str),
    Index(usize),
}

/// Location of a node relative to the value passed to the engine,
/// rendered as `addr.street` or `items[1].city`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_root() {
            return write!(f, "<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) if i == 0 => write!(f, "{name}")?,
                Segment::Field(name) => write!(f, ".{name}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_fields_and_indices() {
        let mut path = FieldPath::root();
        assert_eq!(path.to_string(), "<root>");
        path.push(Segment::Field("items"));
        path.push(Segment::Index(1));
        path.push(Segment::Field("city"));
        assert_eq!(path.to_string(), "items[1].city");
        assert_eq!(path.pop(), Some(Segment::Field("city")));
        assert_eq!(path.to_string(), "items[1]");
        path.pop();
        path.pop();
        assert!(path.is_root());
    }

    #[test]
    fn renders_top_level_sequence_index() {
        let mut path = FieldPath::root();
        path.push(Segment::Index(0));
        path.push(Segment::Field("name"));
        assert_eq!(path.to_string(), "[0].name");
    }
}
