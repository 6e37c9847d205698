/// Core runtime value representation.
///
/// Defines the `Value` enum and all supported value variants, the type names
/// used in error messages, truthiness, identity comparison, and the inspect
/// form produced by `puts` and the REPL.
pub mod core;
/// Hash key representation.
///
/// Defines the `HashKey` type, the canonical hashable projection of the
/// integer, boolean and string values. The variant tag keeps keys of
/// different types distinct even when their contents coincide.
pub mod hash_key;
