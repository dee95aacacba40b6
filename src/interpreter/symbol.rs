/// Built-in named constants.
///
/// The constant table is fixed for the lifetime of the process. Its names are
/// reserved and can never be assigned to.
pub mod constant;
/// User variables.
///
/// Holds the session's `let` bindings and the rules a variable name must
/// satisfy.
pub mod variable;
