// capuchin-vm - Stack-based virtual machine for the Capuchin programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Call frames for the VM.

use std::rc::Rc;

use capuchin_bytecode::Instructions;
use capuchin_object::Closure;

/// A call frame: the activation record of one closure invocation.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The closure this frame is executing.
    pub closure: Rc<Closure>,

    /// Instruction pointer into the closure's function's instructions.
    /// The run loop fetches at `ip` and post-increments; jump targets are
    /// absolute byte offsets.
    pub ip: usize,

    /// Operand-stack index where this frame's local slots begin. Arguments
    /// occupy the first `num_parameters` slots; the callee sits one below.
    pub base_pointer: usize,
}

impl Frame {
    /// Create a frame for a closure whose locals start at `base_pointer`.
    pub fn new(closure: Rc<Closure>, base_pointer: usize) -> Self {
        Frame {
            closure,
            ip: 0,
            base_pointer,
        }
    }

    /// The instruction bytes this frame is executing.
    pub fn instructions(&self) -> &Instructions {
        &self.closure.func.instructions
    }
}
