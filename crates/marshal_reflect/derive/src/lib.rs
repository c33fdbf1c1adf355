//! Derive macro of `marshal_reflect`, see [`Reflect`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits for a struct with
/// named fields (or a unit struct):
///
/// - `TypePath`
/// - `Typed`, with a `StructInfo` listing the fields in declaration order
/// - `Struct`
/// - `Reflect`
///
/// Every field type must implement `Reflect` and `Typed`. Type parameters
/// receive these bounds automatically. Enums, tuple structs, lifetime and
/// const parameters are rejected.
///
/// ## Type Attributes
///
/// ### Custom Type Path
///
/// The default path is `module_path!()` followed by the type name.
/// Generics are appended automatically.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "app::model::Node")]
/// struct Node { /* ... */ }
/// ```
///
/// ### Constructor
///
/// `default` records `Default::default` as the zero-argument constructor
/// used by the structural adapter. Unit structs always have one.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Settings { /* ... */ }
/// ```
///
/// ### Adapter Directive
///
/// `adapter` names a type implementing `marshal_engine::Adapter + Default`.
/// With the `auto_register` feature, the pair is submitted to the engine's
/// directive table, which installs the adapter the first time the type is
/// seen without one. Generic types are skipped.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(adapter = crate::adapters::MoneyAdapter)]
/// struct Money { /* ... */ }
/// ```
///
/// ### Disabling Implementations
///
/// `TypePath = false` and `Typed = false` skip those traits, they must then
/// be written by hand.
///
/// ## Field Attributes
///
/// `skip` hides a field from reflection. Such a struct can only be
/// deserialized through a constructor or an instance provider.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Session {
///     user: String,
///     #[reflect(skip)]
///     token_cache: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectStruct::from_input(ast) {
        Ok(data) => impls::impl_reflect_struct(&data).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
