use darling::ast;
use proc_macro2::TokenStream;
use quote::quote;

pub struct ContainerData {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub crate_path: syn::Path,
    pub style: ast::Style,
    pub fields: Vec<FieldData>,
}

pub struct FieldData {
    pub member: syn::Member,
    /// Integer map key; `None` for tuple fields.
    pub key: Option<u64>,
}

impl ContainerData {
    pub fn into_variant_impl(&self) -> TokenStream {
        let Self {
            ident, crate_path, ..
        } = self;
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let value_binding = quote!(__dynvar_value);

        let body = match self.style {
            ast::Style::Struct => {
                let insert = self.fields.iter().map(|field| {
                    let FieldData { member, key } = field;
                    quote! {
                        __dynvar_map.insert(#key, #crate_path::Variant::from(#value_binding.#member));
                    }
                });
                quote! {
                    #[allow(unused_mut)]
                    let mut __dynvar_map = #crate_path::IntegerVariantMap::new();
                    #( #insert )*
                    #crate_path::Variant::IntegerVariantMap(__dynvar_map)
                }
            }
            ast::Style::Tuple => {
                let member = self.fields.iter().map(|field| &field.member);
                quote! {
                    #crate_path::Variant::List(::std::vec![
                        #( #crate_path::Variant::from(#value_binding.#member), )*
                    ])
                }
            }
            ast::Style::Unit => quote! {
                let _ = #value_binding;
                #crate_path::Variant::None
            },
        };

        quote! {
            impl #impl_generics ::std::convert::From<#ident #ty_generics> for #crate_path::Variant
                #where_clause
            {
                fn from(#value_binding: #ident #ty_generics) -> Self {
                    #body
                }
            }
        }
    }
}
