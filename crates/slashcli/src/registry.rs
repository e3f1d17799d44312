//! The command registry: manual registrations and declared command schemas.
//!
//! The registry is an explicit value the caller owns and hands to the
//! [`Dispatcher`](crate::Dispatcher). There is no process-global state; the
//! execution context is whatever scope the caller gives the registry.

use std::fmt;

use indexmap::IndexMap;
use slashcli_argparse::args::ArgumentSet;
use slashcli_metadata::CommandSpec;

use crate::command::Command;

pub(crate) fn names_match(a: &str, b: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        a.to_lowercase() == b.to_lowercase()
    }
}

/// A command registered imperatively with a name and a callable.
pub struct ManualCommand {
    name: String,
    help: Option<String>,
    handler: Box<dyn Fn(&ArgumentSet) -> i32>,
}

impl ManualCommand {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub(crate) fn invoke(&self, args: &ArgumentSet) -> i32 {
        (self.handler)(args)
    }
}

impl fmt::Debug for ManualCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualCommand")
            .field("name", &self.name)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

/// A command registered through its [`Command`] schema and a factory that
/// constructs a fresh instance per dispatch.
pub struct DeclaredCommand {
    spec: CommandSpec,
    construct: Box<dyn Fn() -> Box<dyn Command>>,
}

impl DeclaredCommand {
    pub fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    pub(crate) fn instantiate(&self) -> Box<dyn Command> {
        (self.construct)()
    }
}

impl fmt::Debug for DeclaredCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeclaredCommand")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

/// The command selected for the first token of an invocation.
#[derive(Debug)]
pub enum ResolvedCommand<'a> {
    Manual(&'a ManualCommand),
    Declared(&'a DeclaredCommand),
}

/// Holds every command an invocation can dispatch to.
///
/// Manual registrations are searched before declared ones; within each kind
/// the first registration that matches wins, in registration order.
#[derive(Default)]
pub struct CommandRegistry {
    manual: IndexMap<String, ManualCommand>,
    declared: Vec<DeclaredCommand>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a manual command: a name and a callable taking the argument
    /// set and returning an exit code. Re-registering a name replaces the
    /// earlier registration.
    pub fn command<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&ArgumentSet) -> i32 + 'static,
    {
        self.insert_manual(name.into(), None, Box::new(handler));
    }

    /// Register a manual command with help text for the usage listing.
    pub fn command_with_help<F>(
        &mut self,
        name: impl Into<String>,
        help: impl Into<String>,
        handler: F,
    ) where
        F: Fn(&ArgumentSet) -> i32 + 'static,
    {
        self.insert_manual(name.into(), Some(help.into()), Box::new(handler));
    }

    fn insert_manual(
        &mut self,
        name: String,
        help: Option<String>,
        handler: Box<dyn Fn(&ArgumentSet) -> i32>,
    ) {
        self.manual.insert(
            name.clone(),
            ManualCommand {
                name,
                help,
                handler,
            },
        );
    }

    /// Register a declarative command constructed via `Default`.
    pub fn register<C>(&mut self)
    where
        C: Command + Default + 'static,
    {
        self.register_with(C::default);
    }

    /// Register a declarative command with an explicit factory, for commands
    /// that need context injected at construction time.
    pub fn register_with<C, F>(&mut self, factory: F)
    where
        C: Command + 'static,
        F: Fn() -> C + 'static,
    {
        self.declared.push(DeclaredCommand {
            spec: C::spec(),
            construct: Box::new(move || Box::new(factory()) as Box<dyn Command>),
        });
    }

    /// Match the argument set's selector against the registered commands.
    ///
    /// Returns `None` for an empty set or when no name matches under the
    /// given case policy.
    pub fn resolve(&self, args: &ArgumentSet, case_sensitive: bool) -> Option<ResolvedCommand<'_>> {
        let selector = args.selector()?;
        let name = selector.name();

        if let Some(cmd) = self
            .manual
            .values()
            .find(|c| names_match(&c.name, name, case_sensitive))
        {
            return Some(ResolvedCommand::Manual(cmd));
        }

        self.declared
            .iter()
            .find(|c| names_match(&c.spec.name, name, case_sensitive))
            .map(ResolvedCommand::Declared)
    }

    /// All discoverable command descriptors, declared first, then manual
    /// ones as bare specs. Hidden commands are included; the usage printer
    /// filters them.
    pub fn specs(&self) -> Vec<CommandSpec> {
        let mut out: Vec<CommandSpec> = self.declared.iter().map(|c| c.spec.clone()).collect();
        out.extend(self.manual.values().map(|c| {
            let mut spec = CommandSpec::new(c.name.clone());
            if let Some(help) = &c.help {
                spec = spec.describe(help.clone());
            }
            spec
        }));
        out
    }

    pub fn len(&self) -> usize {
        self.manual.len() + self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.manual.is_empty() && self.declared.is_empty()
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("manual", &self.manual.keys().collect::<Vec<_>>())
            .field(
                "declared",
                &self.declared.iter().map(|c| &c.spec.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}
