// capuchin-vm - Stack-based virtual machine for the Capuchin programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Arithmetic, comparison, and unary opcode handlers.

use std::rc::Rc;

use capuchin_bytecode::Op;
use capuchin_object::Value;

use crate::vm::{Result, RuntimeError, VM};

impl VM {
    /// Execute Add, Sub, Mul, or Div. Integer pairs use 64-bit wrapping
    /// arithmetic; string pairs support Add (concatenation) only.
    pub(crate) fn execute_binary_operation(&mut self, op: Op) -> Result<()> {
        let right = self.pop();
        let left = self.pop();

        match (&left, &right) {
            (Value::Integer(l), Value::Integer(r)) => {
                self.execute_binary_integer_operation(op, *l, *r)
            }
            (Value::Str(l), Value::Str(r)) => self.execute_binary_string_operation(op, l, r),
            _ => Err(RuntimeError::UnsupportedBinaryTypes {
                left: left.type_name(),
                right: right.type_name(),
            }),
        }
    }

    fn execute_binary_integer_operation(&mut self, op: Op, left: i64, right: i64) -> Result<()> {
        let result = match op {
            Op::Add => left.wrapping_add(right),
            Op::Sub => left.wrapping_sub(right),
            Op::Mul => left.wrapping_mul(right),
            Op::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                // wrapping_div: i64::MIN / -1 wraps rather than trapping.
                left.wrapping_div(right)
            }
            other => return Err(RuntimeError::UnknownIntegerOperator(other as u8)),
        };

        self.push(Value::Integer(result))
    }

    fn execute_binary_string_operation(
        &mut self,
        op: Op,
        left: &Rc<str>,
        right: &Rc<str>,
    ) -> Result<()> {
        if op != Op::Add {
            return Err(RuntimeError::UnknownStringOperator(op as u8));
        }

        let mut combined = String::with_capacity(left.len() + right.len());
        combined.push_str(left);
        combined.push_str(right);
        self.push(Value::string(combined))
    }

    /// Execute Equal, NotEqual, or GreaterThan. Integer pairs compare by
    /// value; any other pairing supports only (in)equality, also by value.
    /// For the canonical booleans and null that coincides with identity.
    pub(crate) fn execute_comparison(&mut self, op: Op) -> Result<()> {
        let right = self.pop();
        let left = self.pop();

        if let (Value::Integer(l), Value::Integer(r)) = (&left, &right) {
            return self.execute_integer_comparison(op, *l, *r);
        }

        match op {
            Op::Equal => self.push(Value::from(left == right)),
            Op::NotEqual => self.push(Value::from(left != right)),
            _ => Err(RuntimeError::UnknownOperator {
                opcode: op as u8,
                left: left.type_name(),
                right: right.type_name(),
            }),
        }
    }

    fn execute_integer_comparison(&mut self, op: Op, left: i64, right: i64) -> Result<()> {
        let result = match op {
            Op::Equal => left == right,
            Op::NotEqual => left != right,
            Op::GreaterThan => left > right,
            other => return Err(RuntimeError::UnknownIntegerOperator(other as u8)),
        };

        self.push(Value::from(result))
    }

    /// Logical negation by truthiness.
    pub(crate) fn execute_bang_operator(&mut self) -> Result<()> {
        let operand = self.pop();
        self.push(Value::from(!operand.is_truthy()))
    }

    /// Integer negation.
    pub(crate) fn execute_minus_operator(&mut self) -> Result<()> {
        let operand = self.pop();
        match operand {
            Value::Integer(value) => self.push(Value::Integer(value.wrapping_neg())),
            other => Err(RuntimeError::UnsupportedNegation(other.type_name())),
        }
    }
}
