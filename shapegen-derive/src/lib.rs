//! # shapegen derive
//!
//! `#[derive(Record)]` makes a Rust struct describe itself to the shapegen
//! interface generator, standing in for runtime reflection.
//!
//! Field attributes:
//!
//! - `#[shapegen(json = "name,omitempty")]` - serialization name and modifiers
//! - `#[shapegen(tstype = "ExplicitEnum")]` - literal output type
//! - `#[shapegen(tsdesc = "...")]` - description rendered as a comment
//! - `#[shapegen(skip)]` - leave the field out entirely
//!
//! The serde field spellings `rename`, `skip`, `skip_serializing` and
//! `skip_serializing_if` are understood too, as are the serde container
//! attributes `rename` and `rename_all`, so types that are already
//! serialized with serde describe the same field names they serialize to.
//!
//! Container attribute: `#[shapegen(rename = "Name")]` overrides the record
//! name used for identity and for the rendered interface name. It takes
//! precedence over `#[serde(rename = "...")]`.
//!
//! Generic records are named per instantiation: `Wrapper<Inner>` registers
//! as `Wrapper_Inner`, `Wrapper<String>` as `Wrapper_String`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Data, DeriveInput, Fields, GenericArgument, LitStr, PathArguments, Type, Visibility,
    ext::IdentExt, meta::ParseNestedMeta, parse_macro_input, parse_quote,
};

/// Derives `Describe` and `Record` for a struct with named fields.
///
/// # Example
/// ```ignore
/// #[derive(Record)]
/// pub struct Inner {
///     #[shapegen(json = "x,omitempty")]
///     pub x: Option<i32>,
///     #[shapegen(json = "y")]
///     pub y: Option<i32>,
/// }
/// ```
#[proc_macro_derive(Record, attributes(shapegen))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let container = ContainerAttrs::parse(&input)?;
    let record_name = container
        .rename
        .clone()
        .unwrap_or_else(|| ident.unraw().to_string());

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    ident,
                    "Record can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "Record can only be derived for structs",
            ));
        }
    };

    let mut field_exprs = Vec::with_capacity(fields.len());
    let mut registered = Vec::new();

    for field in fields {
        let attrs = FieldAttrs::parse(field)?;
        let name = field
            .ident
            .as_ref()
            .map(|i| i.unraw().to_string())
            .unwrap_or_default();
        let ty = &field.ty;
        let exported = matches!(field.vis, Visibility::Public(_));

        let described = exported && !attrs.skip && attrs.ts_type.is_none();
        let descriptor = if described {
            registered.push(ty.clone());
            quote! { <#ty as ::shapegen::ir::Describe>::descriptor() }
        } else {
            syntactic_descriptor(ty)
        };

        let mut expr = quote! { ::shapegen::ir::FieldDef::new(#name, #descriptor) };
        if let Some(json) = attrs.json_annotation(&name, container.rename_all) {
            expr = quote! { #expr.json(#json) };
        }
        if let Some(ts_type) = &attrs.ts_type {
            expr = quote! { #expr.ts_type(#ts_type) };
        }
        if let Some(description) = &attrs.description {
            expr = quote! { #expr.description(#description) };
        }
        if !exported {
            expr = quote! { #expr.private() };
        }
        field_exprs.push(expr);
    }

    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::shapegen::ir::Describe));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let type_params: Vec<_> = generics.type_params().map(|p| &p.ident).collect();
    let name_expr = if type_params.is_empty() {
        quote! { #record_name }
    } else {
        quote! {
            ::shapegen::ir::instantiated_name(
                #record_name,
                &[ #( <#type_params as ::shapegen::ir::Describe>::descriptor() ),* ],
            )
        }
    };

    Ok(quote! {
        impl #impl_generics ::shapegen::ir::Describe for #ident #ty_generics #where_clause {
            fn descriptor() -> ::shapegen::ir::TypeDescriptor {
                ::shapegen::ir::TypeDescriptor::record(#name_expr)
            }

            fn register(registry: &mut ::shapegen::ir::TypeRegistry) {
                if registry.insert(<Self as ::shapegen::ir::Record>::record_type()) {
                    #( <#registered as ::shapegen::ir::Describe>::register(registry); )*
                }
            }
        }

        impl #impl_generics ::shapegen::ir::Record for #ident #ty_generics #where_clause {
            fn record_type() -> ::shapegen::ir::RecordType {
                ::shapegen::ir::RecordType::new(#name_expr)
                    #( .field(#field_exprs) )*
            }
        }
    })
}

#[derive(Default)]
struct ContainerAttrs {
    rename: Option<String>,
    rename_all: Option<RenameRule>,
}

impl ContainerAttrs {
    fn parse(input: &DeriveInput) -> syn::Result<Self> {
        let mut shapegen_rename = None;
        let mut attrs = Self::default();
        for attr in &input.attrs {
            if attr.path().is_ident("shapegen") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename") {
                        shapegen_rename = Some(meta.value()?.parse::<LitStr>()?.value());
                        Ok(())
                    } else {
                        Err(meta.error("unsupported shapegen container attribute"))
                    }
                })?;
            } else if attr.path().is_ident("serde") {
                attr.parse_nested_meta(|meta| attrs.parse_serde(meta))?;
            }
        }
        if shapegen_rename.is_some() {
            attrs.rename = shapegen_rename;
        }
        Ok(attrs)
    }

    fn parse_serde(&mut self, meta: ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("rename") {
            if let Some(name) = serialize_value(&meta)? {
                self.rename = Some(name.value());
            }
        } else if meta.path.is_ident("rename_all") {
            if let Some(rule) = serialize_value(&meta)? {
                self.rename_all = Some(RenameRule::parse(&rule)?);
            }
        } else {
            skip_meta_value(&meta)?;
        }
        Ok(())
    }
}

/// Read `key = "..."` or the `serialize` half of `key(serialize = "...", ...)`.
fn serialize_value(meta: &ParseNestedMeta<'_>) -> syn::Result<Option<LitStr>> {
    if meta.input.peek(syn::Token![=]) {
        return Ok(Some(meta.value()?.parse::<LitStr>()?));
    }
    let mut serialize = None;
    meta.parse_nested_meta(|inner| {
        if inner.path.is_ident("serialize") {
            serialize = Some(inner.value()?.parse::<LitStr>()?);
            Ok(())
        } else {
            skip_meta_value(&inner)
        }
    })?;
    Ok(serialize)
}

/// Case conversion applied to snake_case field names by `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenameRule {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> syn::Result<Self> {
        let rule = match lit.value().as_str() {
            "lowercase" => Self::Lower,
            "UPPERCASE" => Self::Upper,
            "PascalCase" => Self::Pascal,
            "camelCase" => Self::Camel,
            "snake_case" => Self::Snake,
            "SCREAMING_SNAKE_CASE" => Self::ScreamingSnake,
            "kebab-case" => Self::Kebab,
            "SCREAMING-KEBAB-CASE" => Self::ScreamingKebab,
            other => {
                return Err(syn::Error::new_spanned(
                    lit,
                    format!("unknown rename rule `{}`", other),
                ));
            }
        };
        Ok(rule)
    }

    fn apply(self, field: &str) -> String {
        match self {
            Self::Lower | Self::Snake => field.to_ascii_lowercase(),
            Self::Upper | Self::ScreamingSnake => field.to_ascii_uppercase(),
            Self::Pascal => {
                let mut out = String::with_capacity(field.len());
                let mut capitalize = true;
                for c in field.chars() {
                    if c == '_' {
                        capitalize = true;
                    } else if capitalize {
                        out.push(c.to_ascii_uppercase());
                        capitalize = false;
                    } else {
                        out.push(c);
                    }
                }
                out
            }
            Self::Camel => {
                let pascal = Self::Pascal.apply(field);
                let mut chars = pascal.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
                    None => pascal,
                }
            }
            Self::Kebab => field.replace('_', "-"),
            Self::ScreamingKebab => field.to_ascii_uppercase().replace('_', "-"),
        }
    }
}

/// Describe a field whose type is never inferred, keeping only nullability.
fn syntactic_descriptor(ty: &Type) -> TokenStream2 {
    match option_inner(ty) {
        Some(inner) => {
            let name = quote!(#inner).to_string();
            quote! {
                ::shapegen::ir::TypeDescriptor::nullable(
                    ::shapegen::ir::TypeDescriptor::opaque(#name)
                )
            }
        }
        None => {
            let name = quote!(#ty).to_string();
            quote! { ::shapegen::ir::TypeDescriptor::opaque(#name) }
        }
    }
}

fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

#[derive(Default)]
struct FieldAttrs {
    json: Option<String>,
    rename: Option<String>,
    ts_type: Option<String>,
    description: Option<String>,
    skip: bool,
    omit_empty: bool,
}

impl FieldAttrs {
    fn parse(field: &syn::Field) -> syn::Result<Self> {
        let mut attrs = Self::default();
        for attr in &field.attrs {
            if attr.path().is_ident("shapegen") {
                attr.parse_nested_meta(|meta| attrs.parse_shapegen(meta))?;
            } else if attr.path().is_ident("serde") {
                attr.parse_nested_meta(|meta| attrs.parse_serde(meta))?;
            }
        }
        Ok(attrs)
    }

    fn parse_shapegen(&mut self, meta: ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("json") {
            self.json = Some(meta.value()?.parse::<LitStr>()?.value());
        } else if meta.path.is_ident("tstype") {
            self.ts_type = Some(meta.value()?.parse::<LitStr>()?.value());
        } else if meta.path.is_ident("tsdesc") {
            self.description = Some(meta.value()?.parse::<LitStr>()?.value());
        } else if meta.path.is_ident("skip") {
            self.skip = true;
        } else {
            return Err(meta.error("unsupported shapegen field attribute"));
        }
        Ok(())
    }

    fn parse_serde(&mut self, meta: ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("rename") {
            if let Some(name) = serialize_value(&meta)? {
                self.rename = Some(name.value());
            }
        } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
            self.skip = true;
        } else if meta.path.is_ident("skip_serializing_if") {
            meta.value()?.parse::<LitStr>()?;
            self.omit_empty = true;
        } else {
            skip_meta_value(&meta)?;
        }
        Ok(())
    }

    /// The serialization-name annotation in `name,modifier` form.
    ///
    /// `rename_all` only applies to fields without an explicit name.
    fn json_annotation(&self, field: &str, rename_all: Option<RenameRule>) -> Option<String> {
        if self.skip {
            return Some("-".to_string());
        }
        if self.json.is_some() {
            return self.json.clone();
        }
        let rename = self
            .rename
            .clone()
            .or_else(|| rename_all.map(|rule| rule.apply(field)));
        if rename.is_none() && !self.omit_empty {
            return None;
        }
        let mut tag = rename.unwrap_or_default();
        if self.omit_empty {
            tag.push_str(",omitempty");
        }
        Some(tag)
    }
}

/// Consume the value of a serde option this macro does not interpret.
fn skip_meta_value(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        content.parse::<TokenStream2>()?;
    }
    Ok(())
}
