//! `#[derive(Reflect)]`.
//!
//! Writes down each field's name, visibility, type and `#[reform(...)]` directive for the runtime introspector.  No
//! validation happens here: a bogus declaration must still compile so that the introspector can report it with the
//! same error the static analyzer gives.
use darling::{ast, FromDeriveInput, FromField};
use proc_macro::{self, TokenStream};
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

use reform_parse::{directive_payload, type_text, visibility_text};

#[derive(darling::FromDeriveInput)]
#[darling(forward_attrs(reform), supports(struct_named, struct_newtype, struct_tuple, struct_unit))]
struct ReflectMacroInput {
    ident: syn::Ident,
    generics: syn::Generics,
    attrs: Vec<syn::Attribute>,
    data: ast::Data<(), ReflectField>,
}

#[derive(darling::FromField)]
#[darling(forward_attrs(reform))]
struct ReflectField {
    ident: Option<syn::Ident>,
    vis: syn::Visibility,
    ty: syn::Type,
    attrs: Vec<syn::Attribute>,
}

fn option_str(value: Option<String>) -> proc_macro2::TokenStream {
    match value {
        Some(v) => quote!(::std::option::Option::Some(#v)),
        None => quote!(::std::option::Option::None),
    }
}

impl ReflectField {
    fn info(&self) -> proc_macro2::TokenStream {
        let name = option_str(self.ident.as_ref().map(|i| i.to_string()));
        let visibility = visibility_text(&self.vis);
        let declared_type = type_text(&self.ty);
        let directive = option_str(directive_payload(&self.attrs));
        let ty = &self.ty;

        quote! {
            ::reform::metadata::FieldInfo {
                name: #name,
                visibility: #visibility,
                declared_type: #declared_type,
                resolved_type: ::std::any::type_name::<#ty>(),
                directive: #directive,
            }
        }
    }
}

#[proc_macro_derive(Reflect, attributes(reform))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let derive_input: DeriveInput = parse_macro_input!(input);
    let input = match ReflectMacroInput::from_derive_input(&derive_input) {
        Err(e) => return e.write_errors().into(),
        Ok(x) => x,
    };

    let ReflectMacroInput {
        ident,
        generics,
        attrs,
        data,
    } = input;

    let fields = data
        .take_struct()
        .map(|s| s.fields)
        .unwrap_or_default()
        .iter()
        .map(ReflectField::info)
        .collect::<Vec<_>>();

    let name = ident.to_string();
    let directive = option_str(directive_payload(&attrs));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let out = quote! {
        impl #impl_generics ::reform::metadata::Reflect for #ident #ty_generics #where_clause {
            fn type_info() -> ::reform::metadata::TypeInfo {
                ::reform::metadata::TypeInfo {
                    name: #name,
                    module_path: ::std::module_path!(),
                    directive: #directive,
                    fields: ::std::vec![#(#fields),*],
                }
            }
        }
    };

    out.into()
}
