//! Slash-style command dispatch for command-line programs.
//!
//! slashcli turns raw command-line tokens into an ordered
//! [`ArgumentSet`], resolves the first argument against a
//! [`CommandRegistry`], binds the remaining arguments onto the resolved
//! command's declared schema, and executes it for a process exit code.
//!
//! # Example
//!
//! ```rust,ignore
//! use slashcli::{CommandRegistry, Dispatcher, SUCCESS};
//!
//! let mut registry = CommandRegistry::new();
//! registry.command_with_help("Hello", "Says hello", |args| {
//!     match args.get("Name").and_then(|a| a.value()) {
//!         Some(name) => println!("Hello, {name}!"),
//!         None => println!("Hello!"),
//!     }
//!     SUCCESS
//! });
//!
//! let dispatcher = Dispatcher::new(registry);
//! let tokens: Vec<String> = std::env::args().skip(1).collect();
//! std::process::exit(dispatcher.run(&tokens));
//! ```

pub mod bind;
pub mod command;
pub mod dispatch;
pub mod registry;
pub mod usage;

pub use bind::{BindError, FieldValue, bind};
pub use command::Command;
pub use dispatch::{COMMAND_NOT_FOUND, DispatchError, Dispatcher, SUCCESS, USAGE_ERROR};
pub use registry::{CommandRegistry, DeclaredCommand, ManualCommand, ResolvedCommand};

pub use slashcli_argparse::args::{
    Argument, ArgumentSet, ArgumentValue, ParseError, ParseOptions,
};
pub use slashcli_argparse::token;
pub use slashcli_metadata::{CommandSpec, FieldSpec, ValueType};
