// capuchin-object - Runtime values and built-in functions for the Capuchin programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for Capuchin.
//!
//! `Value` is a closed tagged sum: the language's value set is fixed, so the
//! VM's truthiness, arithmetic, and indexing dispatch can match on it
//! exhaustively. Compound payloads are persistent `im` collections or `Rc`s,
//! keeping a clone of any value cheap enough to move freely through the
//! operand stack.

use std::fmt;
use std::rc::Rc;

use im::{HashMap, Vector};

use capuchin_bytecode::Instructions;

/// The canonical `true`. Every `true` a program observes is this value.
pub const TRUE: Value = Value::Boolean(true);

/// The canonical `false`.
pub const FALSE: Value = Value::Boolean(false);

/// The canonical `null`.
pub const NULL: Value = Value::Null;

/// A Capuchin runtime value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// 64-bit signed integer.
    Integer(i64),
    /// Boolean true or false.
    Boolean(bool),
    /// Immutable string.
    Str(Rc<str>),
    /// The null value, representing nothing/absence.
    Null,
    /// Ordered sequence of values (persistent, structural sharing).
    Array(Vector<Value>),
    /// Hash map from hashed key to its original key/value pair.
    Hash(HashMap<HashKey, HashPair>),
    /// A compiled function literal, as stored in the constant pool.
    Function(Rc<CompiledFunction>),
    /// A compiled function bundled with its captured free variables.
    Closure(Rc<Closure>),
    /// A host-implemented function.
    Builtin(Builtin),
    /// A runtime error produced by a built-in; flows as an ordinary value.
    Error(Rc<str>),
}

impl Value {
    /// Build a string value.
    pub fn string(s: impl Into<Rc<str>>) -> Value {
        Value::Str(s.into())
    }

    /// Build an array value.
    pub fn array(elements: Vec<Value>) -> Value {
        Value::Array(Vector::from(elements))
    }

    /// Build an error value.
    pub fn error(message: impl Into<Rc<str>>) -> Value {
        Value::Error(message.into())
    }

    /// The canonical type tag, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Str(_) => "STRING",
            Value::Null => "NULL",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::Function(_) => "COMPILED_FUNCTION_OBJ",
            Value::Closure(_) => "CLOSURE",
            Value::Builtin(_) => "BUILTIN",
            Value::Error(_) => "ERROR",
        }
    }

    /// Everything is truthy except `false` and `null`.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    /// The hash key for this value, if it can be used as one.
    ///
    /// Only integers, booleans, and strings are hashable; the key is
    /// deterministic across processes so hashes built from equal keys are
    /// interchangeable.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Integer(n) => Some(HashKey {
                kind: HashKind::Integer,
                value: *n as u64,
            }),
            Value::Boolean(b) => Some(HashKey {
                kind: HashKind::Boolean,
                value: u64::from(*b),
            }),
            Value::Str(s) => Some(HashKey {
                kind: HashKind::Str,
                value: fnv1a(s.as_bytes()),
            }),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        if b {
            TRUE
        } else {
            FALSE
        }
    }
}

/// `Display` is the language's `inspect` form, shown at the REPL boundary.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Str(s) => f.write_str(s),
            Value::Null => f.write_str("null"),
            Value::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                f.write_str("]")
            }
            Value::Hash(pairs) => {
                f.write_str("{")?;
                for (i, (_, pair)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                f.write_str("}")
            }
            Value::Function(func) => write!(f, "CompiledFunction[{:p}]", Rc::as_ptr(func)),
            Value::Closure(closure) => write!(f, "Closure[{:p}]", Rc::as_ptr(closure)),
            Value::Builtin(_) => f.write_str("builtin function"),
            Value::Error(message) => write!(f, "ERROR: {}", message),
        }
    }
}

/// Which hashable variant a [`HashKey`] was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKind {
    Integer,
    Boolean,
    Str,
}

/// The key actually stored in a hash: the originating type plus a 64-bit
/// hash. Equality is componentwise, so keys of different types never
/// collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    pub kind: HashKind,
    pub value: u64,
}

/// A hash entry, keeping the original key for display and iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashPair {
    pub key: Value,
    pub value: Value,
}

/// The compiled form of a function literal: its instruction bytes plus the
/// frame layout the VM needs to call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFunction {
    pub instructions: Instructions,
    /// Local slots to reserve, parameters included.
    pub num_locals: usize,
    pub num_parameters: usize,
}

/// A function plus the free-variable values captured when the closure was
/// created. Capture is by value of the binding at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Closure {
    pub func: Rc<CompiledFunction>,
    pub free: Vec<Value>,
}

/// A host function callable from bytecode through `OpGetBuiltin`/`OpCall`.
///
/// Built-ins report domain errors by returning [`Value::Error`]; they never
/// abort the VM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Builtin {
    pub name: &'static str,
    pub func: fn(&[Value]) -> Value,
}

// Deterministic (non-cryptographic) 64-bit FNV-1a over the key bytes.
const FNV1A_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV1A_PRIME: u64 = 0x100000001b3;

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV1A_OFFSET_BASIS;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(FNV1A_PRIME);
    }
    hash
}
