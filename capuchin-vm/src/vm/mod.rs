// capuchin-vm - Stack-based virtual machine for the Capuchin programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The virtual machine: fetch/decode/execute over a byte-encoded
//! instruction stream, with an operand stack, a call-frame stack, and a
//! global slot array.

pub mod error;
pub mod frame;
mod handlers;
mod stack;

use std::cell::RefCell;
use std::rc::Rc;

use capuchin_bytecode::{read_u16, read_u8, Op};
use capuchin_object::{Closure, CompiledFunction, Value, FALSE, NULL, TRUE};

use crate::bytecode::Bytecode;

pub use error::{Result, RuntimeError};
pub use frame::Frame;
use stack::OperandStack;

/// Operand-stack capacity.
pub const STACK_SIZE: usize = 2048;

/// Global slot count; `OpGetGlobal`/`OpSetGlobal` carry 16-bit operands.
pub const GLOBALS_SIZE: usize = 65536;

/// Call-frame capacity.
pub const MAX_FRAMES: usize = 1024;

/// The global slot array, shareable between successive VMs so a REPL can
/// keep bindings alive across inputs. The host must not touch it while
/// `run` is executing.
pub type Globals = Rc<RefCell<Vec<Value>>>;

/// Allocate a fresh, fully null global store.
pub fn new_globals_store() -> Globals {
    Rc::new(RefCell::new(vec![NULL; GLOBALS_SIZE]))
}

/// The Capuchin virtual machine.
///
/// Strictly single-threaded and synchronous: [`run`](Self::run) executes
/// until the main frame's instructions are exhausted or the first runtime
/// error, whichever comes first.
pub struct VM {
    constants: Vec<Value>,

    stack: OperandStack,

    globals: Globals,

    /// Frame stack; the executing frame is the last element, and the main
    /// frame is never popped.
    frames: Vec<Frame>,
}

impl VM {
    /// Build a VM for a compiled program with a private global store.
    pub fn new(bytecode: Bytecode) -> Self {
        Self::with_globals_store(bytecode, new_globals_store())
    }

    /// Build a VM sharing a host-owned global store (see [`Globals`]).
    /// The store must have been allocated with [`new_globals_store`] or be
    /// at least `GLOBALS_SIZE` slots long.
    pub fn with_globals_store(bytecode: Bytecode, globals: Globals) -> Self {
        let main_fn = CompiledFunction {
            instructions: bytecode.instructions,
            num_locals: 0,
            num_parameters: 0,
        };
        let main_closure = Closure {
            func: Rc::new(main_fn),
            free: Vec::new(),
        };

        let mut frames = Vec::with_capacity(MAX_FRAMES);
        frames.push(Frame::new(Rc::new(main_closure), 0));

        VM {
            constants: bytecode.constants,
            stack: OperandStack::new(),
            globals,
            frames,
        }
    }

    /// The shared global store, for handing to the next VM in a REPL.
    pub fn globals(&self) -> Globals {
        Rc::clone(&self.globals)
    }

    /// The current top of the operand stack, if any.
    pub fn stack_top(&self) -> Option<&Value> {
        self.stack.top()
    }

    /// The value the most recent `OpPop` discarded: the result of the
    /// program's final expression statement once `run` has finished.
    pub fn last_popped_stack_elem(&self) -> &Value {
        self.stack.last_popped()
    }

    /// Execute until the main frame's instructions are exhausted.
    pub fn run(&mut self) -> Result<()> {
        while self.frame().ip < self.frame().instructions().len() {
            // FETCH
            let frame = self.frames.last_mut().expect("no active frame");
            let byte = frame.closure.func.instructions[frame.ip];
            frame.ip += 1;

            let op = Op::try_from(byte)?;

            // DECODE & EXECUTE
            match op {
                Op::Constant => {
                    let index = self.read_u16_operand() as usize;
                    let constant = self.constants[index].clone();
                    self.push(constant)?;
                }

                Op::Pop => {
                    self.pop();
                }

                Op::Add | Op::Sub | Op::Mul | Op::Div => self.execute_binary_operation(op)?,

                Op::True => self.push(TRUE)?,
                Op::False => self.push(FALSE)?,
                Op::Null => self.push(NULL)?,

                Op::Equal | Op::NotEqual | Op::GreaterThan => self.execute_comparison(op)?,

                Op::Minus => self.execute_minus_operator()?,
                Op::Bang => self.execute_bang_operator()?,

                Op::Jump => {
                    let target = self.read_u16_operand() as usize;
                    self.frame_mut().ip = target;
                }

                Op::JumpNotTruthy => {
                    let target = self.read_u16_operand() as usize;
                    let condition = self.pop();
                    if !condition.is_truthy() {
                        self.frame_mut().ip = target;
                    }
                }

                Op::GetGlobal => {
                    let index = self.read_u16_operand() as usize;
                    self.execute_get_global(index)?;
                }

                Op::SetGlobal => {
                    let index = self.read_u16_operand() as usize;
                    self.execute_set_global(index);
                }

                Op::Array => {
                    let count = self.read_u16_operand() as usize;
                    self.build_array(count)?;
                }

                Op::Hash => {
                    let count = self.read_u16_operand() as usize;
                    self.build_hash(count)?;
                }

                Op::Index => {
                    let index = self.pop();
                    let left = self.pop();
                    self.execute_index_expression(left, index)?;
                }

                Op::Call => {
                    let num_args = self.read_u8_operand() as usize;
                    self.execute_call(num_args)?;
                }

                Op::ReturnValue => self.execute_return_value()?,
                Op::Return => self.execute_return()?,

                Op::GetLocal => {
                    let index = self.read_u8_operand() as usize;
                    self.execute_get_local(index)?;
                }

                Op::SetLocal => {
                    let index = self.read_u8_operand() as usize;
                    self.execute_set_local(index);
                }

                Op::GetBuiltin => {
                    let index = self.read_u8_operand() as usize;
                    self.execute_get_builtin(index)?;
                }

                Op::Closure => {
                    let const_index = self.read_u16_operand() as usize;
                    let num_free = self.read_u8_operand() as usize;
                    self.push_closure(const_index, num_free)?;
                }

                Op::GetFree => {
                    let index = self.read_u8_operand() as usize;
                    self.execute_get_free(index)?;
                }

                Op::CurrentClosure => {
                    let closure = Rc::clone(&self.frame().closure);
                    self.push(Value::Closure(closure))?;
                }
            }
        }

        Ok(())
    }

    fn frame(&self) -> &Frame {
        self.frames.last().expect("no active frame")
    }

    fn frame_mut(&mut self) -> &mut Frame {
        self.frames.last_mut().expect("no active frame")
    }

    fn push_frame(&mut self, frame: Frame) -> Result<()> {
        if self.frames.len() >= MAX_FRAMES {
            return Err(RuntimeError::FrameOverflow);
        }
        self.frames.push(frame);
        Ok(())
    }

    fn pop_frame(&mut self) -> Frame {
        self.frames.pop().expect("no active frame")
    }

    /// Decode the next two instruction bytes as a big-endian operand and
    /// advance the instruction pointer past them.
    fn read_u16_operand(&mut self) -> u16 {
        let frame = self.frames.last_mut().expect("no active frame");
        let value = read_u16(&frame.closure.func.instructions[frame.ip..]);
        frame.ip += 2;
        value
    }

    /// Decode the next instruction byte as an operand and advance past it.
    fn read_u8_operand(&mut self) -> u8 {
        let frame = self.frames.last_mut().expect("no active frame");
        let value = read_u8(&frame.closure.func.instructions[frame.ip..]);
        frame.ip += 1;
        value
    }

    fn push(&mut self, value: Value) -> Result<()> {
        self.stack.push(value)
    }

    fn pop(&mut self) -> Value {
        self.stack.pop()
    }
}
