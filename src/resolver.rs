//! Module name resolution.

use std::sync::Arc;

use crate::asset::Asset;

/// Pluggable module name resolver.
///
/// A resolver is total over its input: it never fails, it produces
/// whatever string falls out of the identity it is given. Resolvers
/// must not produce names containing an unescaped double quote; the
/// rewriter inserts the name verbatim.
pub type ModuleNameResolver = Arc<dyn Fn(&Asset) -> String + Send + Sync>;

/// Default naming policy: the final path segment of the source
/// identity with the trailing extension stripped.
///
/// `src/models/MyFoo.js` resolves to `MyFoo`; an identity without an
/// extension is used as-is.
pub fn default_module_name(asset: &Asset) -> String {
    asset
        .source_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// The default resolver, boxed for injection into the pipeline.
pub fn default_resolver() -> ModuleNameResolver {
    Arc::new(default_module_name)
}

/// A resolver that prepends a namespace prefix to the default name,
/// e.g. prefix `app` names `MyFoo.js` as `app/MyFoo`.
pub fn prefixed_resolver(prefix: impl Into<String>) -> ModuleNameResolver {
    let prefix = prefix.into();
    Arc::new(move |asset| {
        format!(
            "{}/{}",
            prefix.trim_end_matches('/'),
            default_module_name(asset)
        )
    })
}
