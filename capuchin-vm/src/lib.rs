// capuchin-vm - Stack-based virtual machine for the Capuchin programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Stack-based virtual machine for executing Capuchin bytecode.
//!
//! The compiler hands the VM a [`Bytecode`]: a flat instruction stream for
//! the top-level program plus a constant pool. The VM wraps the main
//! instructions in a closure, pushes its call frame, and runs the
//! fetch/decode/execute loop until the frame's instruction pointer leaves
//! its instructions or a runtime error halts execution.

pub mod bytecode;
pub mod vm;

pub use bytecode::Bytecode;
pub use vm::{
    new_globals_store, Globals, Result, RuntimeError, VM, GLOBALS_SIZE, MAX_FRAMES, STACK_SIZE,
};
