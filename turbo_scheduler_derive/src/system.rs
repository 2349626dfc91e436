use proc_macro::TokenStream;
use syn::DeriveInput;
use quote::quote;

pub fn impl_system(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;

    // Every instantiation of a generic type would share the one static below.
    if !ast.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &ast.generics,
            "#[derive(System)] does not support generic types",
        )
        .to_compile_error()
        .into();
    }

    let name_str = name.to_string();

    let gen = quote! {
        const _: () = {
            turbo_scheduler::lazy_static! {
                static ref SYSTEM_ID: turbo_scheduler::systems::SystemId =
                    turbo_scheduler::systems::next_system_id();
            }

            impl turbo_scheduler::systems::SystemTypeInfo for #name {
                #[inline(always)]
                fn system_id() -> turbo_scheduler::systems::SystemId {
                    *SYSTEM_ID
                }

                #[inline(always)]
                fn type_name() -> &'static str {
                    #name_str
                }
            }
        };
    };
    gen.into()
}
