mod system;

use proc_macro::TokenStream;
use syn::DeriveInput;

/// Implements `SystemTypeInfo` for a struct or enum, giving it a process-wide `SystemId`.
#[proc_macro_derive(System)]
pub fn derive_system(input: TokenStream) -> TokenStream {
    match syn::parse::<DeriveInput>(input) {
        Ok(ast) => system::impl_system(&ast),
        Err(error) => error.to_compile_error().into(),
    }
}
