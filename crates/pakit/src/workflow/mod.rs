//! Step pipeline over a shared execution context.
//!
//! A command body is an ordered list of steps, each a plain function taking
//! the mutable context. A step may report through the sink, request that the
//! pipeline terminate with a specific exit code, or fail outright; the
//! executor checks the termination slot before each step and propagates
//! step errors unmodified. It never inspects or translates them.

use anyhow::Result;

use crate::cli::HashArgs;
use crate::report::Reporter;

pub use self::hash::hash_file;
pub use self::verify::{FILE_NOT_FOUND, verify_file};

mod hash;
mod verify;

/// Mutable state shared by every step of one command invocation.
///
/// Arguments are read-only from the steps' perspective; the termination
/// slot is first-write-wins and never cleared once set.
pub struct Context {
    pub args: HashArgs,
    pub reporter: Box<dyn Reporter>,
    termination: Option<i32>,
}

impl Context {
    pub fn new(args: HashArgs, reporter: Box<dyn Reporter>) -> Self {
        Self {
            args,
            reporter,
            termination: None,
        }
    }

    /// Request pipeline termination with the given exit code.
    /// The first request wins; later requests are ignored.
    pub fn terminate(&mut self, code: i32) {
        if self.termination.is_none() {
            self.termination = Some(code);
        }
    }

    pub fn termination(&self) -> Option<i32> {
        self.termination
    }

    pub fn is_terminated(&self) -> bool {
        self.termination.is_some()
    }
}

/// A unit of pipeline behavior. Stateless between invocations.
pub type Step = fn(&mut Context) -> Result<()>;

/// Run steps strictly in order against the context.
///
/// Once a step has requested termination, no further step body executes.
/// A step returning `Err` aborts the run; failed steps are never retried.
pub fn run(ctx: &mut Context, steps: &[Step]) -> Result<()> {
    for step in steps {
        if ctx.is_terminated() {
            break;
        }
        step(ctx)?;
    }
    Ok(())
}
