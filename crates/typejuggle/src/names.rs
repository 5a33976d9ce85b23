//! Pairing of source fields with destination fields.

use crate::shape::{AggregateMut, MappableMut};

/// Applies the single supported alias: `ID` and `Id` map onto each other,
/// every other name maps onto itself.
pub fn reconcile(name: &str) -> &str {
    match name {
        "ID" => "Id",
        "Id" => "ID",
        other => other,
    }
}

/// Finds the destination field for a source field name.
///
/// The reconciled name wins; the original name is the fallback. Matching is
/// exact and case-sensitive otherwise.
pub fn resolve_field<'a>(
    destination: &'a mut (dyn AggregateMut + '_),
    name: &str,
) -> Option<&'a mut dyn MappableMut> {
    let reconciled = reconcile(name);
    if destination.has_field(reconciled) {
        return destination.field_mut(reconciled);
    }
    if destination.has_field(name) {
        return destination.field_mut(name);
    }
    None
}
