// capuchin-object - Runtime values and built-in functions for the Capuchin programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Built-in functions: len, puts, first, last, rest, push.
//!
//! The registry is ordered; `OpGetBuiltin` addresses it by index, so the
//! compiler's symbol table and [`BUILTINS`] must agree. Domain errors come
//! back as [`Value::Error`] results, which the VM pushes like any other
//! value.

use crate::value::{Builtin, Value, NULL};

/// Every built-in, in registry order.
pub static BUILTINS: &[Builtin] = &[
    Builtin {
        name: "len",
        func: len,
    },
    Builtin {
        name: "puts",
        func: puts,
    },
    Builtin {
        name: "first",
        func: first,
    },
    Builtin {
        name: "last",
        func: last,
    },
    Builtin {
        name: "rest",
        func: rest,
    },
    Builtin {
        name: "push",
        func: push,
    },
];

/// Fetch a built-in by registry index (`OpGetBuiltin` operand).
pub fn get(index: usize) -> Option<Builtin> {
    BUILTINS.get(index).copied()
}

/// Fetch a built-in by name (compiler symbol resolution).
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTINS.iter().find(|b| b.name == name).copied()
}

fn wrong_arity(got: usize, want: usize) -> Value {
    Value::error(format!("wrong number of arguments, got={}, want={}", got, want))
}

/// Byte length of a string, or element count of an array.
fn len(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }

    match &args[0] {
        Value::Str(s) => Value::Integer(s.len() as i64),
        Value::Array(elements) => Value::Integer(elements.len() as i64),
        other => Value::error(format!(
            "argument to `len` not supported, got {}",
            other.type_name()
        )),
    }
}

/// Print each argument's inspect form on its own line.
fn puts(args: &[Value]) -> Value {
    for arg in args {
        println!("{}", arg);
    }
    NULL
}

fn first(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }

    match &args[0] {
        Value::Array(elements) => elements.front().cloned().unwrap_or(NULL),
        other => Value::error(format!(
            "argument to `first` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn last(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }

    match &args[0] {
        Value::Array(elements) => elements.back().cloned().unwrap_or(NULL),
        other => Value::error(format!(
            "argument to `last` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

/// Everything after the first element, as a new array; null when empty.
fn rest(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity(args.len(), 1);
    }

    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                NULL
            } else {
                Value::Array(elements.iter().skip(1).cloned().collect())
            }
        }
        other => Value::error(format!(
            "argument to `rest` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

/// A new array with the second argument appended; the original is untouched.
fn push(args: &[Value]) -> Value {
    if args.len() != 2 {
        return wrong_arity(args.len(), 2);
    }

    match &args[0] {
        Value::Array(elements) => {
            let mut appended = elements.clone();
            appended.push_back(args[1].clone());
            Value::Array(appended)
        }
        other => Value::error(format!(
            "argument to `push` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}
