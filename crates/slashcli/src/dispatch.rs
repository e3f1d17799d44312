//! The dispatcher: assemble, resolve, bind, execute, return an exit code.

use thiserror::Error;
use tracing::debug;

use slashcli_argparse::args::{ArgumentSet, ParseError, ParseOptions};

use crate::bind::{BindError, bind};
use crate::registry::{CommandRegistry, ResolvedCommand};
use crate::usage;

/// Conventional exit code for a successful command.
pub const SUCCESS: i32 = 0;
/// Exit code when no registered command matches the first argument.
pub const COMMAND_NOT_FOUND: i32 = 1;
/// Exit code when assembling or binding fails before a command could run.
pub const USAGE_ERROR: i32 = 2;

/// A fatal error raised before any command body runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Bind(#[from] BindError),
}

/// Orchestrates one invocation: tokenize, resolve, bind, execute.
///
/// The registry is injected at construction; a dispatcher owns no other
/// state and every `run` builds a fresh argument set.
#[derive(Debug)]
pub struct Dispatcher {
    registry: CommandRegistry,
    options: ParseOptions,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry) -> Self {
        Self::with_options(registry, ParseOptions::default())
    }

    pub fn with_options(registry: CommandRegistry, options: ParseOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Handle one invocation and convert any fatal error into
    /// [`USAGE_ERROR`] plus a stderr report. This is the single boundary at
    /// which parse and binding errors become exit codes.
    pub fn run<S: AsRef<str>>(&self, tokens: &[S]) -> i32 {
        match self.try_run(tokens) {
            Ok(code) => code,
            Err(err) => {
                eprintln!("{err}");
                USAGE_ERROR
            }
        }
    }

    /// Handle one invocation, surfacing fatal errors to the caller.
    ///
    /// `Ok` carries the resolved command's exit code, or
    /// [`COMMAND_NOT_FOUND`] after printing usage when nothing matched.
    pub fn try_run<S: AsRef<str>>(&self, tokens: &[S]) -> Result<i32, DispatchError> {
        let args = ArgumentSet::parse_with(tokens, self.options)?;
        debug!(arguments = args.len(), "assembled argument set");

        match self.registry.resolve(&args, self.options.case_sensitive) {
            None => {
                debug!("no command resolved, printing usage");
                usage::print(&self.registry.specs(), self.options.escape);
                Ok(COMMAND_NOT_FOUND)
            }
            Some(ResolvedCommand::Manual(cmd)) => {
                debug!(command = cmd.name(), "dispatching manual command");
                Ok(cmd.invoke(&args))
            }
            Some(ResolvedCommand::Declared(cmd)) => {
                debug!(command = %cmd.spec().name, "dispatching declared command");
                let mut instance = cmd.instantiate();
                bind(cmd.spec(), &args, &mut *instance)?;
                Ok(instance.execute(&args))
            }
        }
    }
}
