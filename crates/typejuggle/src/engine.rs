//! The recursive assignment engine.
//!
//! Every node pair is handled the same way: the destination resolves first
//! (allocating absent optional layers), then the source resolves (read-only),
//! then the pair is dispatched on shape. Anything that does not line up is
//! skipped and recorded, never raised mid-traversal.

use crate::config::Options;
use crate::convert;
use crate::error::{Error, Mismatch, MismatchKind, Mismatches, Result};
use crate::names;
use crate::path::{FieldPath, Segment};
use crate::shape::{
    Aggregate, AggregateMut, Leaf, LeafMut, Mappable, MappableMut, Node, NodeMut, Scalar,
    ScalarMut, Sequence, SequenceMut,
};

/// Summary of one traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Scalars written without conversion.
    pub copied: usize,
    /// Scalars written through the lossy fallback.
    pub converted: usize,
    /// Opaque leaves cloned.
    pub cloned: usize,
    /// Absent destination layers filled with a default value.
    pub allocated: usize,
    /// Sequence elements rebuilt.
    pub elements: usize,
    pub mismatches: Vec<Mismatch>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Copies everything that lines up from `source` into `destination`.
///
/// Absent optional layers on the destination side are allocated; an absent
/// source leaves the destination data as it was. Mismatched names, shapes and
/// scalar kinds are skipped silently.
pub fn fill_fields<S, D>(source: &S, destination: &mut D)
where
    S: Mappable + ?Sized,
    D: MappableMut + ?Sized,
{
    run(source, destination, Options::default(), false);
}

/// Like [`fill_fields`], additionally coercing scalars of different kinds.
pub fn fill_fields_lossy<S, D>(source: &S, destination: &mut D)
where
    S: Mappable + ?Sized,
    D: MappableMut + ?Sized,
{
    run(source, destination, Options::new().lossy(true), false);
}

/// Runs the engine with explicit options and returns what happened.
///
/// Only strict mode fails, and only after the whole traversal: work done on
/// other subtrees is kept.
pub fn fill_fields_with<S, D>(source: &S, destination: &mut D, options: &Options) -> Result<Report>
where
    S: Mappable + ?Sized,
    D: MappableMut + ?Sized,
{
    let report = run(source, destination, *options, true);
    if options.strict && !report.is_clean() {
        return Err(Error::Mismatch(Mismatches(report.mismatches)));
    }
    Ok(report)
}

fn run<S, D>(source: &S, destination: &mut D, options: Options, record: bool) -> Report
where
    S: Mappable + ?Sized,
    D: MappableMut + ?Sized,
{
    let _span =
        tracing::debug_span!("fill_fields", lossy = options.lossy, strict = options.strict)
            .entered();
    let mut engine = Engine::new(options, record);
    let destination = destination.node_mut_counting(&mut engine.report.allocated);
    let source = source.node();
    engine.assign_node(source, destination);
    if engine.skipped > 0 {
        debug!("fill_fields skipped {} subtree(s)", engine.skipped);
    }
    engine.report
}

struct Engine {
    options: Options,
    /// Whether mismatches are kept in the report.
    record: bool,
    skipped: usize,
    path: FieldPath,
    report: Report,
}

impl Engine {
    fn new(options: Options, record: bool) -> Self {
        Self {
            options,
            record,
            skipped: 0,
            path: FieldPath::root(),
            report: Report::default(),
        }
    }

    fn assign(&mut self, source: &dyn Mappable, destination: &mut dyn MappableMut) {
        let destination = destination.node_mut_counting(&mut self.report.allocated);
        let source = source.node();
        self.assign_node(source, destination);
    }

    fn assign_node(&mut self, source: Node<'_>, destination: NodeMut<'_>) {
        match (source, destination) {
            (Node::Absent, _) => {
                trace!("{}: source absent, destination kept", self.path);
            }
            (Node::Aggregate(source), NodeMut::Aggregate(destination)) => {
                self.assign_aggregate(source, destination);
            }
            (Node::Sequence(source), NodeMut::Sequence(destination)) => {
                self.assign_sequence(source, destination);
            }
            (Node::Scalar(source), NodeMut::Scalar(destination)) => {
                self.assign_scalar(source, destination);
            }
            (Node::Leaf(source), NodeMut::Leaf(mut destination)) => {
                self.assign_leaf(&source, &mut destination);
            }
            (source, destination) => {
                self.skip(|| MismatchKind::Shape {
                    source: source.describe(),
                    destination: destination.describe(),
                });
            }
        }
    }

    fn assign_aggregate(&mut self, source: &dyn Aggregate, destination: &mut dyn AggregateMut) {
        for &name in source.field_names() {
            let Some(source_field) = source.field(name) else {
                panic!(
                    "`{}` lists field `{name}` but does not expose it",
                    source.type_name()
                );
            };
            let Some(destination_field) = names::resolve_field(destination, name) else {
                self.skip(|| MismatchKind::UnmatchedField { name });
                continue;
            };
            self.path.push(Segment::Field(name));
            self.assign(source_field, destination_field);
            self.path.pop();
        }
    }

    fn assign_sequence(&mut self, source: &dyn Sequence, destination: &mut dyn SequenceMut) {
        destination.clear();
        if source.is_empty() {
            trace!("{}: empty source, destination cleared", self.path);
            return;
        }
        trace!("{}: rebuilding {} element(s)", self.path, source.len());
        for (index, element) in source.elements().enumerate() {
            self.path.push(Segment::Index(index));
            let slot = destination.push_default();
            self.assign(element, slot);
            self.path.pop();
            self.report.elements += 1;
        }
    }

    fn assign_scalar(&mut self, source: Scalar<'_>, mut destination: ScalarMut<'_>) {
        if convert::assign_exact(source, &mut destination) {
            trace!("{}: copied {}", self.path, source.kind());
            self.report.copied += 1;
            return;
        }
        if self.options.lossy && convert::convert_lossy(source, &mut destination) {
            trace!(
                "{}: converted {} to {}",
                self.path,
                source.kind(),
                destination.kind()
            );
            self.report.converted += 1;
            return;
        }
        self.skip(|| MismatchKind::Conversion {
            source: source.kind(),
            destination: destination.kind(),
        });
    }

    fn assign_leaf(&mut self, source: &Leaf<'_>, destination: &mut LeafMut<'_>) {
        if destination.assign_from(source) {
            trace!("{}: cloned {}", self.path, source.type_name());
            self.report.cloned += 1;
            return;
        }
        self.skip(|| MismatchKind::LeafType {
            source: source.type_name(),
            destination: destination.type_name(),
        });
    }

    fn skip(&mut self, kind: impl FnOnce() -> MismatchKind) {
        self.skipped += 1;
        if !self.record && !tracing::enabled!(tracing::Level::DEBUG) {
            return;
        }
        let kind = kind();
        debug!("{}: skipped, {}", self.path, kind);
        if self.record {
            self.report.mismatches.push(Mismatch {
                path: self.path.clone(),
                kind,
            });
        }
    }
}
