/// Built-in function implementations.
///
/// The evaluation rules and domain guards of every function in the registry.
pub mod builtin;

/// The function registry and call evaluation.
pub mod core;
