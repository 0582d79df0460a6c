use crate::macros::error::derived_traits;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Data, DeriveInput, ItemFn, Lit, LitStr, Meta, MetaNameValue, Token};

/// Which serde policy applies to the annotated item.
#[derive(Clone, Copy)]
enum ModelKind {
    Struct,
    Enum,
}

impl ModelKind {
    const fn default_rename(self) -> &'static str {
        match self {
            Self::Struct => "camelCase",
            Self::Enum => "lowercase",
        }
    }
}

#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

#[derive(Default)]
struct SerdeAttrs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

/// Expands `#[api_model]`.
pub fn expand_api_model(args: TokenStream, input: DeriveInput) -> TokenStream {
    match api_model(args, &input) {
        Ok(attrs) => quote! {
            #attrs
            #input
        },
        Err(err) => err.to_compile_error(),
    }
}

fn api_model(args: TokenStream, input: &DeriveInput) -> syn::Result<TokenStream> {
    let kind = match &input.data {
        Data::Struct(_) => ModelKind::Struct,
        Data::Enum(_) => ModelKind::Enum,
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(&input.ident, "api_model does not support unions"));
        },
    };

    let args = parse_args(args)?;
    let serde = existing_serde(&input.attrs)?;
    let derives = derived_traits(&input.attrs);

    let mut missing = Vec::new();
    for (name, path) in [
        ("Debug", quote! { Debug }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ] {
        if !derives.contains(name) {
            missing.push(path);
        }
    }
    let derive_attr =
        if missing.is_empty() { quote! {} } else { quote! { #[derive(#(#missing),*)] } };

    let schema_attr = if derives.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    let rename_attr = rename_attr(kind, args.rename_all, serde.rename_all.as_ref())?;
    let deny_attr = deny_attr(kind, args.deny_unknown_fields, serde.deny_unknown_fields, input)?;

    Ok(quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #deny_attr
    })
}

/// Expands `#[api_handler]`.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

fn parse_args(args: TokenStream) -> syn::Result<ModelArgs> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
    let mut parsed = ModelArgs::default();

    for meta in metas {
        let Meta::NameValue(pair) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "Expected name-value arguments like `rename_all = \"...\"`",
            ));
        };

        if pair.path.is_ident("rename_all") {
            let value = string_literal(&pair)?;
            set_once(&mut parsed.rename_all, &pair, value)?;
        } else if pair.path.is_ident("deny_unknown_fields") {
            let value = bool_literal(&pair)?;
            set_once(&mut parsed.deny_unknown_fields, &pair, value)?;
        } else {
            return Err(syn::Error::new_spanned(
                pair.path,
                "Unsupported argument; expected rename_all or deny_unknown_fields",
            ));
        }
    }

    Ok(parsed)
}

fn string_literal(pair: &MetaNameValue) -> syn::Result<LitStr> {
    match &pair.value {
        syn::Expr::Lit(syn::ExprLit { lit: Lit::Str(lit), .. }) => Ok(lit.clone()),
        other => Err(syn::Error::new_spanned(other, "expected a string literal")),
    }
}

fn bool_literal(pair: &MetaNameValue) -> syn::Result<bool> {
    match &pair.value {
        syn::Expr::Lit(syn::ExprLit { lit: Lit::Bool(lit), .. }) => Ok(lit.value),
        other => Err(syn::Error::new_spanned(other, "expected a boolean literal")),
    }
}

fn set_once<T>(slot: &mut Option<T>, token: &MetaNameValue, value: T) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(token, "Duplicate argument"));
    }
    *slot = Some(value);
    Ok(())
}

fn existing_serde(attrs: &[Attribute]) -> syn::Result<SerdeAttrs> {
    let mut found = SerdeAttrs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                found.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                found.deny_unknown_fields = true;
            } else if meta.input.peek(Token![=]) {
                // Other serde keys are left to serde; skip their value.
                let _: syn::Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }

    Ok(found)
}

fn rename_attr(
    kind: ModelKind,
    requested: Option<LitStr>,
    existing: Option<&LitStr>,
) -> syn::Result<TokenStream> {
    let wanted =
        requested.unwrap_or_else(|| LitStr::new(kind.default_rename(), Span::call_site()));

    match existing {
        Some(existing) if existing.value() != wanted.value() => Err(syn::Error::new_spanned(
            existing,
            "Conflicting serde rename_all; remove it or set api_model(rename_all = \"...\") to match",
        )),
        Some(_) => Ok(quote! {}),
        None => Ok(quote! { #[serde(rename_all = #wanted)] }),
    }
}

fn deny_attr(
    kind: ModelKind,
    requested: Option<bool>,
    already_set: bool,
    input: &DeriveInput,
) -> syn::Result<TokenStream> {
    let deny = match kind {
        ModelKind::Struct => requested.unwrap_or(true),
        ModelKind::Enum => requested.unwrap_or(false),
    };

    if already_set {
        if !deny {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "deny_unknown_fields is already set via serde; remove it before disabling",
            ));
        }
        return Ok(quote! {});
    }

    Ok(if deny { quote! { #[serde(deny_unknown_fields)] } } else { quote! {} })
}
