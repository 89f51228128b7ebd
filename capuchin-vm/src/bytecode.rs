// capuchin-vm - Stack-based virtual machine for the Capuchin programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The compiled artifact handed from the compiler to the VM.

use capuchin_bytecode::Instructions;
use capuchin_object::Value;

/// A compiled program: the top-level instruction stream plus the constant
/// pool it references. Constants are frozen once the compiler hands the
/// bytecode over; compiled-function constants embed their own instructions.
#[derive(Debug, Clone, Default)]
pub struct Bytecode {
    pub instructions: Instructions,
    pub constants: Vec<Value>,
}

impl Bytecode {
    pub fn new(instructions: Instructions, constants: Vec<Value>) -> Self {
        Bytecode {
            instructions,
            constants,
        }
    }
}
