use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_quote, Data, DataStruct, DeriveInput, Index, Member, Path, Type};

use crate::attrs::{container_attrs, field_attrs};

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let attrs = container_attrs(&input.attrs)?;
    let krate = attrs.krate.unwrap_or_else(|| parse_quote!(::typejuggle));
    match &input.data {
        Data::Struct(data) if !attrs.leaf => expand_aggregate(input, data, &krate, attrs.read_only),
        Data::Struct(_) | Data::Enum(_) => Ok(expand_leaf(input, &krate)),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Mappable cannot be derived for unions",
        )),
    }
}

struct ExposedField {
    name: String,
    member: Member,
    ty: Type,
}

fn exposed_fields(data: &DataStruct) -> syn::Result<Vec<ExposedField>> {
    let mut fields: Vec<ExposedField> = Vec::new();
    for (index, field) in data.fields.iter().enumerate() {
        let attrs = field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let (member, default_name) = match &field.ident {
            Some(ident) => (Member::Named(ident.clone()), ident.unraw().to_string()),
            None => (Member::Unnamed(Index::from(index)), index.to_string()),
        };
        let name = attrs.rename.map(|lit| lit.value()).unwrap_or(default_name);
        if fields.iter().any(|existing| existing.name == name) {
            return Err(syn::Error::new_spanned(
                field,
                format!("field name `{name}` is exposed twice"),
            ));
        }
        fields.push(ExposedField {
            name,
            member,
            ty: field.ty.clone(),
        });
    }
    Ok(fields)
}

fn expand_aggregate(
    input: &DeriveInput,
    data: &DataStruct,
    krate: &Path,
    read_only: bool,
) -> syn::Result<TokenStream> {
    let ident = &input.ident;
    let type_name = ident.unraw().to_string();
    let fields = exposed_fields(data)?;

    // Field bounds only matter for generic containers; adding them to
    // concrete types would send recursive types into trait-solver cycles.
    let mut generics = input.generics.clone();
    if generics.type_params().next().is_some() {
        let where_clause = generics.make_where_clause();
        for field in &fields {
            let ty = &field.ty;
            let bound: syn::WherePredicate = if read_only {
                parse_quote!(#ty: #krate::Mappable)
            } else {
                parse_quote!(#ty: #krate::Mappable + #krate::MappableMut)
            };
            where_clause.predicates.push(bound);
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let names: Vec<&str> = fields.iter().map(|field| field.name.as_str()).collect();
    let members: Vec<&Member> = fields.iter().map(|field| &field.member).collect();

    let read = quote! {
        impl #impl_generics #krate::Aggregate for #ident #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn field_names(&self) -> &'static [&'static str] {
                &[#(#names),*]
            }

            fn field(&self, name: &str) -> ::core::option::Option<&dyn #krate::Mappable> {
                match name {
                    #(#names => ::core::option::Option::Some(&self.#members as &dyn #krate::Mappable),)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #impl_generics #krate::Mappable for #ident #ty_generics #where_clause {
            fn node(&self) -> #krate::Node<'_> {
                #krate::Node::Aggregate(self)
            }
        }
    };
    if read_only {
        return Ok(read);
    }

    Ok(quote! {
        #read

        impl #impl_generics #krate::AggregateMut for #ident #ty_generics #where_clause {
            fn field_mut(&mut self, name: &str) -> ::core::option::Option<&mut dyn #krate::MappableMut> {
                match name {
                    #(#names => ::core::option::Option::Some(&mut self.#members as &mut dyn #krate::MappableMut),)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #impl_generics #krate::MappableMut for #ident #ty_generics #where_clause {
            fn node_mut(&mut self) -> #krate::NodeMut<'_> {
                #krate::NodeMut::Aggregate(self)
            }
        }
    })
}

fn expand_leaf(input: &DeriveInput, krate: &Path) -> TokenStream {
    let ident = &input.ident;
    let mut generics = input.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(Self: ::core::clone::Clone + 'static));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #krate::Mappable for #ident #ty_generics #where_clause {
            fn node(&self) -> #krate::Node<'_> {
                #krate::Node::Leaf(#krate::Leaf::new(self))
            }
        }

        impl #impl_generics #krate::MappableMut for #ident #ty_generics #where_clause {
            fn node_mut(&mut self) -> #krate::NodeMut<'_> {
                #krate::NodeMut::Leaf(#krate::LeafMut::new(self))
            }
        }
    }
}
