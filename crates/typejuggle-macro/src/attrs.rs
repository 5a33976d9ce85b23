use syn::{Attribute, LitStr, Path};

const ATTR: &str = "mappable";

#[derive(Default)]
pub struct ContainerAttrs {
    pub leaf: bool,
    pub read_only: bool,
    pub krate: Option<Path>,
}

#[derive(Default)]
pub struct FieldAttrs {
    pub rename: Option<LitStr>,
    pub skip: bool,
}

pub fn container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut parsed = ContainerAttrs::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("leaf") {
                parsed.leaf = true;
                Ok(())
            } else if meta.path.is_ident("read_only") {
                parsed.read_only = true;
                Ok(())
            } else if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                parsed.krate = Some(lit.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `leaf`, `read_only` or `crate = \"...\"`"))
            }
        })?;
    }
    Ok(parsed)
}

pub fn field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut parsed = FieldAttrs::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTR)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                parsed.rename = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("skip") {
                parsed.skip = true;
                Ok(())
            } else {
                Err(meta.error("expected `rename = \"...\"` or `skip`"))
            }
        })?;
    }
    Ok(parsed)
}
