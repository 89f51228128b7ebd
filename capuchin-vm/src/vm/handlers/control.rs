// capuchin-vm - Stack-based virtual machine for the Capuchin programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Call, return, and closure-construction handlers.
//!
//! Stack layout during a call: the callee sits at `sp - 1 - num_args`, the
//! arguments above it. Entering a closure turns that region into the new
//! frame: the arguments become local slots `0..num_args` and the remaining
//! local slots are reserved above them. Returning resets `sp` to one below
//! the frame's base pointer, dropping callee and locals together, then
//! pushes the result.

use std::rc::Rc;

use capuchin_object::{Builtin, Closure, Value, NULL};

use crate::vm::{Frame, Result, RuntimeError, VM, STACK_SIZE};

impl VM {
    /// Execute `OpCall`: dispatch on the callee below the arguments.
    pub(crate) fn execute_call(&mut self, num_args: usize) -> Result<()> {
        let callee = self.stack.get(self.stack.sp() - 1 - num_args).clone();

        match callee {
            Value::Closure(closure) => self.call_closure(closure, num_args),
            Value::Builtin(builtin) => self.call_builtin(builtin, num_args),
            _ => Err(RuntimeError::NotCallable),
        }
    }

    fn call_closure(&mut self, closure: Rc<Closure>, num_args: usize) -> Result<()> {
        if num_args != closure.func.num_parameters {
            return Err(RuntimeError::WrongArity {
                want: closure.func.num_parameters,
                got: num_args,
            });
        }

        let base_pointer = self.stack.sp() - num_args;
        let num_locals = closure.func.num_locals;
        if base_pointer + num_locals > STACK_SIZE {
            return Err(RuntimeError::StackOverflow);
        }

        self.push_frame(Frame::new(closure, base_pointer))?;

        // Arguments already sit in slots 0..num_args; reserve the rest of
        // the locals above them. Unwritten slots hold whatever was there.
        self.stack.set_sp(base_pointer + num_locals);

        Ok(())
    }

    fn call_builtin(&mut self, builtin: Builtin, num_args: usize) -> Result<()> {
        let sp = self.stack.sp();
        let result = (builtin.func)(self.stack.slice(sp - num_args, sp));

        // Drop the arguments and the callee, then push whatever the
        // built-in produced, error values included.
        self.stack.set_sp(sp - num_args - 1);
        self.push(result)
    }

    /// Execute `OpReturnValue`: unwind the frame, hand the popped value to
    /// the caller.
    pub(crate) fn execute_return_value(&mut self) -> Result<()> {
        let return_value = self.pop();

        let frame = self.pop_frame();
        self.stack.set_sp(frame.base_pointer - 1);

        self.push(return_value)
    }

    /// Execute `OpReturn`: as `OpReturnValue`, but the caller gets null.
    pub(crate) fn execute_return(&mut self) -> Result<()> {
        let frame = self.pop_frame();
        self.stack.set_sp(frame.base_pointer - 1);

        self.push(NULL)
    }

    /// Execute `OpClosure`: wrap the compiled function at `const_index` in
    /// a closure capturing the top `num_free` stack values, in push order.
    pub(crate) fn push_closure(&mut self, const_index: usize, num_free: usize) -> Result<()> {
        let constant = self.constants[const_index].clone();
        let func = match constant {
            Value::Function(func) => func,
            other => return Err(RuntimeError::NotAFunction(other.to_string())),
        };

        let sp = self.stack.sp();
        let free = self.stack.slice(sp - num_free, sp).to_vec();
        self.stack.set_sp(sp - num_free);

        self.push(Value::Closure(Rc::new(Closure { func, free })))
    }
}
