// capuchin-vm - Stack-based virtual machine for the Capuchin programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Runtime errors for the VM.
//!
//! The taxonomy is deliberately flat: every error halts the current `run`
//! and reaches the host as one of the catalog strings below. No rollback is
//! attempted; a VM that has errored should be discarded.

use capuchin_bytecode::DecodeError;

/// Runtime error during VM execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// The operand stack is full.
    StackOverflow,
    /// The call-frame stack is full.
    FrameOverflow,
    /// The instruction stream contained a byte that names no opcode.
    UndefinedOpcode(u8),
    /// Binary operation on an unsupported type pairing.
    UnsupportedBinaryTypes {
        left: &'static str,
        right: &'static str,
    },
    /// Arithmetic opcode dispatched on integers it does not cover.
    UnknownIntegerOperator(u8),
    /// Non-concatenation operator applied to two strings.
    UnknownStringOperator(u8),
    /// Comparison opcode on operands it does not cover.
    UnknownOperator {
        opcode: u8,
        left: &'static str,
        right: &'static str,
    },
    /// Integer division by zero.
    DivisionByZero,
    /// Unary minus on a non-integer.
    UnsupportedNegation(&'static str),
    /// Index applied to a value that is neither array nor hash.
    IndexNotSupported(&'static str),
    /// Hash key of an unhashable type.
    UnusableHashKey(&'static str),
    /// Call of a value that is neither a closure nor a built-in.
    NotCallable,
    /// Closure called with the wrong argument count.
    WrongArity { want: usize, got: usize },
    /// `OpClosure` pointed at a constant that is not a compiled function.
    NotAFunction(String),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeError::StackOverflow => write!(f, "stack overflow"),
            RuntimeError::FrameOverflow => write!(f, "frame overflow"),
            RuntimeError::UndefinedOpcode(byte) => write!(f, "opcode {} undefined", byte),
            RuntimeError::UnsupportedBinaryTypes { left, right } => {
                write!(f, "unsupported types for binary operation: {} {}", left, right)
            }
            RuntimeError::UnknownIntegerOperator(opcode) => {
                write!(f, "unknown integer operator: {}", opcode)
            }
            RuntimeError::UnknownStringOperator(opcode) => {
                write!(f, "unknown string operator: {}", opcode)
            }
            RuntimeError::UnknownOperator { opcode, left, right } => {
                write!(f, "unknown operator: {} ({} {})", opcode, left, right)
            }
            RuntimeError::DivisionByZero => write!(f, "division by zero"),
            RuntimeError::UnsupportedNegation(type_name) => {
                write!(f, "unsupported type for negation: {}", type_name)
            }
            RuntimeError::IndexNotSupported(type_name) => {
                write!(f, "index operator not supported: {}", type_name)
            }
            RuntimeError::UnusableHashKey(type_name) => {
                write!(f, "unusable as hash key: {}", type_name)
            }
            RuntimeError::NotCallable => write!(f, "calling non-closure and non-builtin"),
            RuntimeError::WrongArity { want, got } => {
                write!(f, "wrong number of arguments: want={}, got={}", want, got)
            }
            RuntimeError::NotAFunction(inspect) => write!(f, "not a function: {}", inspect),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<DecodeError> for RuntimeError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::UndefinedOpcode(byte) => RuntimeError::UndefinedOpcode(byte),
        }
    }
}

/// Result type for VM operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;
