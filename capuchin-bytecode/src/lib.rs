// capuchin-bytecode - Bytecode instruction set for the Capuchin programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Bytecode instruction set for the Capuchin VM.
//!
//! An instruction is a single opcode byte followed by zero or more big-endian
//! operands; the widths are fixed per opcode. This crate owns the opcode
//! catalog, the encoder ([`make`]), the decoder ([`read_operands`]), and the
//! disassembler (`Display` on [`Instructions`]). The compiler and the VM are
//! both written against these primitives.

pub mod instructions;
pub mod opcode;

pub use instructions::{make, read_operands, read_u8, read_u16, Instructions};
pub use opcode::{DecodeError, Definition, Op};
