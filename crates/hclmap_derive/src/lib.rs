//! `#[derive(Model)]`: generates the shape declaration table and field accessors for `hclmap`.

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, LitBool, LitStr, parse_macro_input};

/// Tag data parsed from one field's `#[hcl(...)]` attribute.
#[derive(Default)]
struct FieldTags {
	name: Option<LitStr>,
	computed: bool,
}

/// `#[derive(Model)]`: implements `hclmap::sdk::Model` and `hclmap::sdk::Field`.
///
/// Fields carrying `#[hcl(name = "key")]` are mapped under `key`; adding
/// `computed` marks them host-managed. Fields without the attribute are
/// declared but excluded from mapping, and need no trait support.
///
/// Example:
/// ```ignore
/// use hclmap::sdk::Model;
///
/// #[derive(Default, Model)]
/// struct Subnet {
///     #[hcl(name = "name")]
///     name: String,
///     #[hcl(name = "address_prefixes")]
///     address_prefixes: Vec<String>,
///     #[hcl(name = "id", computed)]
///     id: String,
/// }
/// ```
#[proc_macro_derive(Model, attributes(hcl))]
pub fn derive_model(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	match expand(&input) {
		Ok(tokens) => tokens.into(),
		Err(err) => err.to_compile_error().into(),
	}
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
	let name = &input.ident;
	let name_str = name.to_string();
	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	let fields = match &input.data {
		Data::Struct(data) => match &data.fields {
			Fields::Named(fields) => &fields.named,
			_ => return Err(syn::Error::new_spanned(input, "Model requires named fields")),
		},
		_ => return Err(syn::Error::new_spanned(input, "Model can only be derived for structs")),
	};

	let mut decls = Vec::new();
	let mut getters = Vec::new();
	let mut setters = Vec::new();

	for field in fields {
		let Some(ident) = field.ident.as_ref() else {
			return Err(syn::Error::new_spanned(field, "field must have a name"));
		};
		let ty = &field.ty;
		let field_str = ident.unraw().to_string();
		let tags = parse_tags(field)?;

		let Some(tag) = tags.name else {
			decls.push(quote! {
				::hclmap::sdk::FieldDecl {
					field: #field_str,
					tag: ::core::option::Option::None,
					computed: false,
					ty: ::hclmap::sdk::TypeInfo::Opaque(::core::any::type_name::<#ty>()),
				}
			});
			continue;
		};

		let computed = tags.computed;
		decls.push(quote! {
			::hclmap::sdk::FieldDecl {
				field: #field_str,
				tag: ::core::option::Option::Some(#tag),
				computed: #computed,
				ty: <#ty as ::hclmap::sdk::Field>::type_info(),
			}
		});
		getters.push(quote! {
			#field_str => ::hclmap::sdk::Field::to_native(&self.#ident, mapper),
		});
		setters.push(quote! {
			#field_str => {
				self.#ident = <#ty as ::hclmap::sdk::Field>::from_native(value, mapper)?;
				::core::result::Result::Ok(())
			}
		});
	}

	Ok(quote! {
		#[automatically_derived]
		impl #impl_generics ::hclmap::sdk::Model for #name #ty_generics #where_clause {
			fn shape() -> ::hclmap::sdk::ShapeDecl {
				::hclmap::sdk::ShapeDecl {
					name: #name_str,
					fields: ::std::vec![#(#decls),*],
				}
			}

			#[allow(unused_variables)]
			fn get_field(
				&self,
				field: &str,
				mapper: &::hclmap::sdk::Mapper<'_>,
			) -> ::core::result::Result<::hclmap::sdk::Native, ::hclmap::sdk::NativeError> {
				match field {
					#(#getters)*
					other => ::core::result::Result::Err(::hclmap::sdk::NativeError::UnknownField(::std::string::String::from(other))),
				}
			}

			#[allow(unused_variables)]
			fn set_field(
				&mut self,
				field: &str,
				value: ::hclmap::sdk::Native,
				mapper: &::hclmap::sdk::Mapper<'_>,
			) -> ::core::result::Result<(), ::hclmap::sdk::NativeError> {
				match field {
					#(#setters)*
					other => ::core::result::Result::Err(::hclmap::sdk::NativeError::UnknownField(::std::string::String::from(other))),
				}
			}
		}

		#[automatically_derived]
		impl #impl_generics ::hclmap::sdk::Field for #name #ty_generics #where_clause {
			fn type_info() -> ::hclmap::sdk::TypeInfo {
				::hclmap::sdk::TypeInfo::Object(::hclmap::sdk::ShapeRef::of::<Self>())
			}

			fn to_native(&self, mapper: &::hclmap::sdk::Mapper<'_>) -> ::core::result::Result<::hclmap::sdk::Native, ::hclmap::sdk::NativeError> {
				mapper
					.encode(self)
					.map(::hclmap::sdk::Native::Object)
					.map_err(::hclmap::sdk::NativeError::nested)
			}

			fn from_native(
				value: ::hclmap::sdk::Native,
				mapper: &::hclmap::sdk::Mapper<'_>,
			) -> ::core::result::Result<Self, ::hclmap::sdk::NativeError> {
				match value {
					::hclmap::sdk::Native::Object(object) => mapper.decode(&object).map_err(::hclmap::sdk::NativeError::nested),
					other => ::core::result::Result::Err(::hclmap::sdk::NativeError::Mismatch {
						expected: "object",
						actual: other.kind(),
					}),
				}
			}
		}
	})
}

/// Parse `#[hcl(name = "...", computed)]` on one field.
fn parse_tags(field: &syn::Field) -> syn::Result<FieldTags> {
	let mut tags = FieldTags::default();
	let mut seen = false;

	for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("hcl")) {
		seen = true;
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("name") {
				tags.name = Some(meta.value()?.parse::<LitStr>()?);
				Ok(())
			} else if meta.path.is_ident("computed") {
				tags.computed = if meta.input.peek(syn::Token![=]) {
					meta.value()?.parse::<LitBool>()?.value
				} else {
					true
				};
				Ok(())
			} else {
				Err(meta.error("unsupported hcl attribute; expected `name` or `computed`"))
			}
		})?;
	}

	if seen && tags.name.is_none() {
		return Err(syn::Error::new_spanned(field, "#[hcl(...)] requires `name = \"...\"`"));
	}
	Ok(tags)
}
