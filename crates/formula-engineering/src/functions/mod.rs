use std::collections::HashMap;
use std::sync::OnceLock;

use crate::settings::EngineeringSettings;
use crate::value::{ErrorKind, Value};

pub mod engineering;

// Worksheet-function registrations live in a dedicated module, separate from the algorithms.
mod builtins_engineering;

/// Host services available to a function implementation.
///
/// Arguments are already evaluated scalars, so the only thing an implementation needs from its
/// caller is the active configuration.
pub trait FunctionContext {
    fn settings(&self) -> &EngineeringSettings;
}

impl FunctionContext for EngineeringSettings {
    fn settings(&self) -> &EngineeringSettings {
        self
    }
}

pub type FunctionImpl = fn(&dyn FunctionContext, &[Value]) -> Value;

#[derive(Clone, Copy)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub min_args: usize,
    pub max_args: usize,
    pub implementation: FunctionImpl,
}

impl std::fmt::Debug for FunctionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionSpec")
            .field("name", &self.name)
            .field("min_args", &self.min_args)
            .field("max_args", &self.max_args)
            .finish_non_exhaustive()
    }
}

inventory::collect!(FunctionSpec);

/// Iterate all [`FunctionSpec`] registrations collected via [`inventory`].
pub fn registered_functions() -> impl Iterator<Item = &'static FunctionSpec> {
    inventory::iter::<FunctionSpec>.into_iter()
}

fn registry() -> &'static HashMap<String, &'static FunctionSpec> {
    static REGISTRY: OnceLock<HashMap<String, &'static FunctionSpec>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        #[cfg(target_arch = "wasm32")]
        builtins_engineering::__force_link();

        registered_functions()
            .map(|spec| (spec.name.to_ascii_uppercase(), spec))
            .collect()
    })
}

pub fn lookup_function(name: &str) -> Option<&'static FunctionSpec> {
    let upper = name.trim().to_ascii_uppercase();
    if let Some(spec) = registry().get(&upper).copied() {
        return Some(spec);
    }

    // Files written by newer spreadsheet versions prefix some functions with `_xlfn.`
    // (e.g. `_xlfn.BITAND`). Treat these as aliases of the unprefixed built-in.
    if let Some(stripped) = upper.strip_prefix("_XLFN.") {
        return registry().get(stripped).copied();
    }

    None
}

pub fn call_function(ctx: &dyn FunctionContext, name: &str, args: &[Value]) -> Value {
    let spec = match lookup_function(name) {
        Some(spec) => spec,
        None => {
            log::debug!("unknown engineering function `{name}`");
            return Value::Error(ErrorKind::Name);
        }
    };

    if args.len() < spec.min_args || args.len() > spec.max_args {
        return Value::Error(ErrorKind::Value);
    }

    (spec.implementation)(ctx, args)
}
