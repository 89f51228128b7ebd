// capuchin-vm - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared helpers for VM integration tests.
//!
//! The compiler lives outside this workspace, so tests assemble their
//! programs by hand with [`make`], exactly as the compiler would emit them:
//! a list of instruction parts for the main program, a constant pool, and
//! compiled-function constants built from their own instruction parts.
//! Jump targets and constant indexes are written as literal offsets; the
//! disassembly (`Instructions::to_string`) is the quickest way to re-derive
//! them when editing a test program.
//!
//! # Available Helpers
//!
//! - [`assemble`] - Concatenate instruction parts into one stream
//! - [`program`] - Build a `Bytecode` from constants and main instructions
//! - [`function`] - Build a compiled-function constant
//! - [`run`] - Run a program, returning the last popped value
//! - [`run_err`] - Run a program that must fail, returning the error
//! - [`int`], [`string`], [`array`] - Expected-value shorthands

#![allow(dead_code)]

use std::rc::Rc;

pub use capuchin_bytecode::{make, Instructions, Op};
pub use capuchin_object::{CompiledFunction, Value, FALSE, NULL, TRUE};
pub use capuchin_vm::{Bytecode, RuntimeError, VM};

/// Concatenate instruction parts into a single stream.
pub fn assemble(parts: Vec<Instructions>) -> Instructions {
    parts.into_iter().collect()
}

/// Build a program from its constant pool and main-function instructions.
pub fn program(constants: Vec<Value>, parts: Vec<Instructions>) -> Bytecode {
    Bytecode::new(assemble(parts), constants)
}

/// Build a compiled-function constant. `num_locals` counts parameters too.
pub fn function(parts: Vec<Instructions>, num_locals: usize, num_parameters: usize) -> Value {
    Value::Function(Rc::new(CompiledFunction {
        instructions: assemble(parts),
        num_locals,
        num_parameters,
    }))
}

/// Run a program to completion and return the result of its final
/// expression statement (the value the trailing `OpPop` discarded).
pub fn run(bytecode: Bytecode) -> Value {
    let mut vm = VM::new(bytecode);
    if let Err(err) = vm.run() {
        panic!("vm error: {}", err);
    }
    vm.last_popped_stack_elem().clone()
}

/// Run a program that must halt with a runtime error.
pub fn run_err(bytecode: Bytecode) -> RuntimeError {
    let mut vm = VM::new(bytecode);
    match vm.run() {
        Ok(()) => panic!(
            "expected vm error, got {}",
            vm.last_popped_stack_elem()
        ),
        Err(err) => err,
    }
}

pub fn int(n: i64) -> Value {
    Value::Integer(n)
}

pub fn string(s: &str) -> Value {
    Value::string(s)
}

pub fn array(elements: Vec<Value>) -> Value {
    Value::array(elements)
}
