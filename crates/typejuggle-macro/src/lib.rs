//! `#[derive(Mappable)]` for the `typejuggle` mapper.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod attrs;
mod expand;

/// Implements `Mappable` and `MappableMut` for a type.
///
/// Structs become aggregates whose fields are exposed by name; enums and
/// structs marked `#[mappable(leaf)]` become opaque leaves copied by `Clone`.
///
/// Container attributes: `leaf`, `crate = "path::to::typejuggle"`.
/// Field attributes: `rename = "Name"`, `skip`.
#[proc_macro_derive(Mappable, attributes(mappable))]
pub fn derive_mappable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
