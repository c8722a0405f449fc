use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::{Attribute, Data, DataEnum, DeriveInput, Fields, Ident, LitStr, Meta, Token, Variant};

const WIDE_REPRS: [&str; 4] = ["u64", "usize", "i128", "u128"];

struct VariantMeta<'a> {
    ident: &'a Ident,
    description: Option<LitStr>,
    is_default: bool,
}

#[derive(Default)]
struct ContainerOptions {
    from_str: bool,
    display: bool,
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    let name = &input.ident;

    let Data::Enum(data) = &input.data else {
        return syn::Error::new_spanned(name, "Enumeration can only be derived for enums")
            .to_compile_error();
    };
    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input.generics,
            "Enumeration cannot be derived for generic enums",
        )
        .to_compile_error();
    }

    if let Err(err) = check_repr(&input.attrs) {
        return err;
    }

    let options = match parse_container(&input.attrs) {
        Ok(options) => options,
        Err(err) => return err,
    };
    let variants = match parse_variants(name, data) {
        Ok(variants) => variants,
        Err(err) => return err,
    };

    let enumeration_impl = generate_enumeration_impl(name, &variants);
    let reflect_impl = generate_reflect_impl(name);
    let from_str_impl = options.from_str.then(|| generate_from_str_impl(name));
    let display_impl = options.display.then(|| generate_display_impl(name));

    quote! {
        #enumeration_impl
        #reflect_impl
        #from_str_impl
        #display_impl
    }
}

fn parse_container(attrs: &[Attribute]) -> Result<ContainerOptions, TokenStream> {
    let mut options = ContainerOptions::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("enumeration")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("from_str") {
                options.from_str = true;
                Ok(())
            } else if meta.path.is_ident("display") {
                options.display = true;
                Ok(())
            } else {
                Err(meta.error("unsupported enumeration option, expected `from_str` or `display`"))
            }
        })
        .map_err(|err| err.to_compile_error())?;
    }

    Ok(options)
}

/// Codes are stored as `i64`, so wider discriminant types are refused.
fn check_repr(attrs: &[Attribute]) -> Result<(), TokenStream> {
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
        let metas = attr
            .parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
            .map_err(|err| err.to_compile_error())?;
        for meta in metas {
            let Meta::Path(path) = meta else { continue };
            if WIDE_REPRS.iter().any(|wide| path.is_ident(wide)) {
                return Err(syn::Error::new_spanned(
                    &path,
                    "Enumeration codes are i64, use a discriminant type no wider than i64",
                )
                .to_compile_error());
            }
        }
    }
    Ok(())
}

fn parse_variants<'a>(
    name: &Ident,
    data: &'a DataEnum,
) -> Result<Vec<VariantMeta<'a>>, TokenStream> {
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(name, "Enumeration requires at least one variant")
            .to_compile_error());
    }

    let variants: Vec<VariantMeta<'a>> =
        data.variants.iter().map(parse_variant).collect::<Result<_, _>>()?;

    let mut defaults = variants.iter().filter(|v| v.is_default);
    if let (Some(_), Some(second)) = (defaults.next(), defaults.next()) {
        return Err(syn::Error::new_spanned(
            second.ident,
            "only one variant can be marked #[enumeration(default)]",
        )
        .to_compile_error());
    }

    Ok(variants)
}

fn parse_variant(v: &Variant) -> Result<VariantMeta<'_>, TokenStream> {
    if !matches!(v.fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(v, "Enumeration variants cannot carry fields")
            .to_compile_error());
    }

    let mut description = None;
    let mut is_default = false;
    for attr in v.attrs.iter().filter(|attr| attr.path().is_ident("enumeration")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("description") {
                description = Some(meta.value()?.parse::<LitStr>()?);
                Ok(())
            } else if meta.path.is_ident("default") {
                is_default = true;
                Ok(())
            } else {
                Err(meta.error("unsupported variant option, expected `description` or `default`"))
            }
        })
        .map_err(|err| err.to_compile_error())?;
    }

    Ok(VariantMeta { ident: &v.ident, description, is_default })
}

fn generate_enumeration_impl(name: &Ident, variants: &[VariantMeta<'_>]) -> TokenStream {
    let type_name = name.unraw().to_string();
    let idents: Vec<&Ident> = variants.iter().map(|v| v.ident).collect();
    let ordinals = 0..variants.len();

    let members = variants.iter().map(|v| {
        let ident = v.ident;
        let member_name = ident.unraw().to_string();
        let description = v.description.as_ref().map_or_else(
            || quote! { ::core::option::Option::None },
            |lit| quote! { ::core::option::Option::Some(#lit) },
        );
        quote! { ::enumx::Member::new(#member_name, #name::#ident as i64, #description) }
    });

    let default_expr = match variants.iter().find(|v| v.is_default) {
        Some(v) => {
            let ident = v.ident;
            quote! { Self::#ident }
        }
        None => {
            let first = idents[0];
            quote! {
                match <Self as ::enumx::Enumeration>::from_code(0) {
                    ::core::option::Option::Some(value) => value,
                    ::core::option::Option::None => Self::#first,
                }
            }
        }
    };

    quote! {
        #[automatically_derived]
        impl ::enumx::Enumeration for #name {
            const TABLE: &'static ::enumx::EnumTable = {
                const MEMBERS: &[::enumx::Member] = &[#(#members),*];
                const ENUM_TABLE: ::enumx::EnumTable = ::enumx::EnumTable::new(#type_name, MEMBERS);
                &ENUM_TABLE
            };

            const VARIANTS: &'static [Self] = &[#(Self::#idents),*];

            #[inline]
            fn ordinal(self) -> usize {
                match self {
                    #(Self::#idents => #ordinals,)*
                }
            }

            #[inline]
            fn default_value() -> Self {
                #default_expr
            }
        }
    }
}

fn generate_reflect_impl(name: &Ident) -> TokenStream {
    quote! {
        #[automatically_derived]
        impl ::enumx::Reflect for #name {
            type Underlying = Self;

            #[inline]
            fn descriptor() -> ::enumx::TypeDescriptor {
                ::enumx::TypeDescriptor::enumeration::<Self>(<Self as ::enumx::Enumeration>::TABLE)
            }
        }
    }
}

fn generate_from_str_impl(name: &Ident) -> TokenStream {
    quote! {
        #[automatically_derived]
        impl ::core::str::FromStr for #name {
            type Err = ::enumx::EnumError;

            #[inline]
            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                ::enumx::parse::<Self>(s)
            }
        }
    }
}

fn generate_display_impl(name: &Ident) -> TokenStream {
    quote! {
        #[automatically_derived]
        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<Self as ::enumx::Enumeration>::name(*self))
            }
        }
    }
}
