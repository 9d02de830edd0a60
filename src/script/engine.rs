use rhai::{
    module_resolvers::DummyModuleResolver,
    packages::{Package, StandardPackage},
    Engine,
};

use super::config::ScriptConfig;

/// Engine with the standard library and nothing else.
///
/// Undefined variables are compile errors, which is what keeps the root
/// object out of `fn` bodies. Scripts cannot `import` modules.
pub(crate) fn build_engine(config: &ScriptConfig) -> Engine {
    let mut engine = Engine::new_raw();
    engine.register_global_module(StandardPackage::new().as_shared_module());

    engine.set_strict_variables(true);
    engine.set_fail_on_invalid_map_property(true);
    engine.set_module_resolver(DummyModuleResolver::new());

    engine.set_max_operations(config.max_operations);
    engine.set_max_call_levels(config.max_call_levels);
    engine.set_max_expr_depths(config.max_expr_depth, config.max_expr_depth / 2);
    engine.set_max_string_size(config.max_string_size);
    engine.set_max_array_size(config.max_collection_size);
    engine.set_max_map_size(config.max_collection_size);
    engine.set_max_variables(config.max_variables);

    engine
}
