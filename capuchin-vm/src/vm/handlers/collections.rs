// capuchin-vm - Stack-based virtual machine for the Capuchin programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Composite construction and indexing handlers.

use im::{HashMap, Vector};

use capuchin_object::{HashPair, Value, NULL};

use crate::vm::{Result, RuntimeError, VM};

impl VM {
    /// Build an array from the top `count` stack values, deepest first.
    pub(crate) fn build_array(&mut self, count: usize) -> Result<()> {
        let start = self.stack.sp() - count;
        let elements: Vector<Value> = self
            .stack
            .slice(start, start + count)
            .iter()
            .cloned()
            .collect();

        self.stack.set_sp(start);
        self.push(Value::Array(elements))
    }

    /// Build a hash from the top `count` stack values, read bottom-up as
    /// key/value pairs. Every key must be hashable.
    pub(crate) fn build_hash(&mut self, count: usize) -> Result<()> {
        let start = self.stack.sp() - count;

        let mut pairs = HashMap::new();
        let mut i = start;
        while i < start + count {
            let key = self.stack.get(i).clone();
            let value = self.stack.get(i + 1).clone();

            let hash_key = key
                .hash_key()
                .ok_or_else(|| RuntimeError::UnusableHashKey(key.type_name()))?;
            pairs.insert(hash_key, HashPair { key, value });

            i += 2;
        }

        self.stack.set_sp(start);
        self.push(Value::Hash(pairs))
    }

    /// Execute the index operator. Array misses (out of range, negative)
    /// and hash misses push null; unindexable containers and unhashable
    /// keys are errors.
    pub(crate) fn execute_index_expression(&mut self, left: Value, index: Value) -> Result<()> {
        match (&left, &index) {
            (Value::Array(elements), Value::Integer(i)) => {
                let element = if *i < 0 {
                    NULL
                } else {
                    elements.get(*i as usize).cloned().unwrap_or(NULL)
                };
                self.push(element)
            }
            (Value::Hash(pairs), _) => {
                let key = index
                    .hash_key()
                    .ok_or_else(|| RuntimeError::UnusableHashKey(index.type_name()))?;
                let value = pairs.get(&key).map(|pair| pair.value.clone()).unwrap_or(NULL);
                self.push(value)
            }
            _ => Err(RuntimeError::IndexNotSupported(left.type_name())),
        }
    }
}
