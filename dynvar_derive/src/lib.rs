mod data;

use self::data::{ContainerData, FieldData};
use darling::util::Ignored;
use darling::{ast, Error, FromDeriveInput, FromField};
use quote::ToTokens;
use std::collections::BTreeMap;
use syn::{parse_macro_input, parse_quote, DeriveInput};

#[proc_macro_derive(IntoVariant, attributes(variant))]
pub fn derive_into_variant(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    ContainerReceiver::from_derive_input(&input)
        .and_then(|receiver| receiver.validate())
        .map(|data| data.into_variant_impl().into_token_stream())
        .unwrap_or_else(|error| error.write_errors())
        .into()
}

#[derive(FromDeriveInput)]
#[darling(attributes(variant))]
struct ContainerReceiver {
    ident: syn::Ident,
    generics: syn::Generics,
    data: ast::Data<Ignored, FieldReceiver>,

    #[darling(default)]
    crate_path: Option<syn::Path>,
}

impl ContainerReceiver {
    fn validate(&self) -> Result<ContainerData, Error> {
        let mut errors = Vec::new();

        let ident = self.ident.clone();
        let generics = self.generics.clone();
        let crate_path = self
            .crate_path
            .clone()
            .unwrap_or_else(|| parse_quote!(dynvar));

        let fields = match &self.data {
            ast::Data::Struct(fields) => fields,
            ast::Data::Enum(..) => {
                return Err(Error::custom(
                    "`IntoVariant` can only be derived for structs",
                )
                .with_span(&self.ident));
            }
        };
        let style = fields.style;

        let mut seen_keys: BTreeMap<u64, syn::Member> = BTreeMap::new();
        let mut data_fields = Vec::new();
        for (index, field) in fields.iter().enumerate() {
            match field.validate(style, index) {
                Ok(Some(data)) => {
                    if let Some(key) = data.key {
                        if let Some(previous) = seen_keys.insert(key, data.member.clone()) {
                            errors.push(
                                Error::custom(format!(
                                    "key {} is already used by field `{}`",
                                    key,
                                    previous.into_token_stream()
                                ))
                                .with_span(&data.member),
                            );
                        }
                    }
                    data_fields.push(data);
                }
                Ok(None) => {}
                Err(error) => errors.push(error),
            }
        }

        if errors.is_empty() {
            Ok(ContainerData {
                ident,
                generics,
                crate_path,
                style,
                fields: data_fields,
            })
        } else {
            Err(Error::multiple(errors))
        }
    }
}

#[derive(FromField)]
#[darling(attributes(variant))]
struct FieldReceiver {
    ident: Option<syn::Ident>,
    ty: syn::Type,

    #[darling(default)]
    key: Option<syn::LitStr>,

    #[darling(default)]
    skip: bool,
}

impl FieldReceiver {
    /// Returns `None` for skipped fields.
    fn validate(&self, style: ast::Style, index: usize) -> Result<Option<FieldData>, Error> {
        if self.skip {
            if self.key.is_some() {
                return Err(Error::custom("`key` and `skip` are incompatible with each other")
                    .with_span(&self.ty));
            }
            return Ok(None);
        }

        let member = match &self.ident {
            Some(ident) => syn::Member::Named(ident.clone()),
            None => syn::Member::Unnamed(syn::Index::from(index)),
        };

        let key = match (style, &self.key) {
            (ast::Style::Struct, Some(lit)) => Some(parse_key(lit)?),
            (ast::Style::Struct, None) => Some(index as u64),
            (_, Some(lit)) => {
                return Err(Error::custom("`key` is only allowed on named fields").with_span(lit));
            }
            (_, None) => None,
        };

        Ok(Some(FieldData { member, key }))
    }
}

fn parse_key(lit: &syn::LitStr) -> Result<u64, Error> {
    lit.parse::<syn::LitInt>()
        .and_then(|int| int.base10_parse::<u64>())
        .map_err(|error| from_syn_error(error, lit))
}

fn from_syn_error(err: syn::Error, lit: &syn::LitStr) -> Error {
    Error::custom(&err).with_span(lit)
}
