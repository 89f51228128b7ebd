// capuchin-object - Runtime values and built-in functions for the Capuchin programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Runtime values for Capuchin.
//!
//! [`Value`] is the central enum representing every value a Capuchin program
//! can produce, including the compiled-function and closure objects the VM
//! executes. The [`builtins`] module holds the host functions reachable
//! through the `OpGetBuiltin` instruction.

pub mod builtins;
pub mod value;

pub use value::{
    Builtin, Closure, CompiledFunction, HashKey, HashKind, HashPair, Value, FALSE, NULL, TRUE,
};
