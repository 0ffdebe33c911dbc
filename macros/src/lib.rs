use proc_macro::TokenStream;
use quote::quote;
use syn::{Ident, ItemFn, LitStr, parse_macro_input, parse_quote, spanned::Spanned};

const USAGE: &str = "reactive_macro::test only accepts: #[reactive_macro::test], \
                     #[reactive_macro::test(local)], #[reactive_macro::test(shared)], or string \
                     equivalents";

/// Marks a test function.
///
/// Sync functions become plain `#[test]`s. Async functions run on tokio:
/// `local` selects the current-thread runtime (the default), `shared` the
/// multi-thread one. Either way the body starts by installing a
/// `tracing_subscriber` that writes through the test harness, so `RUST_LOG`
/// works when debugging a failing test.
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
  let mut input = parse_macro_input!(item as ItemFn);

  let is_async = input.sig.asyncness.is_some();

  let raw_args = proc_macro2::TokenStream::from(attr);
  let flavor = if raw_args.is_empty() {
    None
  } else {
    if !is_async {
      return TokenStream::from(
        syn::Error::new(
          raw_args.span(),
          "reactive_macro::test flavor args are only supported for async tests. Use \
           #[reactive_macro::test] for sync tests, or make the function async.",
        )
        .to_compile_error(),
      );
    }

    let name = if let Ok(ident) = syn::parse2::<Ident>(raw_args.clone()) {
      (ident.to_string(), ident.span())
    } else if let Ok(lit) = syn::parse2::<LitStr>(raw_args.clone()) {
      (lit.value(), lit.span())
    } else {
      return TokenStream::from(syn::Error::new(raw_args.span(), USAGE).to_compile_error());
    };

    match name.0.as_str() {
      "local" => Some(quote!(flavor = "current_thread")),
      "shared" => Some(quote!(flavor = "multi_thread")),
      _ => return TokenStream::from(syn::Error::new(name.1, USAGE).to_compile_error()),
    }
  };

  let body = &input.block;
  input.block = parse_quote!({
    let _ = ::tracing_subscriber::fmt()
      .with_env_filter(::tracing_subscriber::EnvFilter::from_default_env())
      .with_test_writer()
      .try_init();
    #body
  });

  let runner = match (is_async, flavor) {
    (false, _) => quote!(#[test]),
    (true, Some(flavor)) => quote!(#[::tokio::test(#flavor)]),
    (true, None) => quote!(#[::tokio::test]),
  };

  TokenStream::from(quote! {
      #runner
      #input
  })
}
