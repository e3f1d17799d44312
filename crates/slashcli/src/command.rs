//! The declarative command trait.

use slashcli_argparse::args::ArgumentSet;
use slashcli_metadata::CommandSpec;

use crate::bind::FieldValue;

/// A declaratively described command.
///
/// `spec()` declares the schema once, statically; the binder populates a
/// fresh instance per dispatch by calling [`Command::assign`] for each field
/// that matched an argument, then the dispatcher calls [`Command::execute`].
///
/// # Example
///
/// ```rust,ignore
/// use slashcli::{Command, CommandSpec, FieldSpec, FieldValue, ValueType};
///
/// #[derive(Default)]
/// struct Greet {
///     name: String,
///     shout: bool,
/// }
///
/// impl Command for Greet {
///     fn spec() -> CommandSpec {
///         CommandSpec::new("Greet")
///             .describe("Greets someone by name")
///             .field(FieldSpec::new("Name").required().describe("Who to greet"))
///             .field(FieldSpec::new("Shout").typed(ValueType::Boolean))
///     }
///
///     fn assign(&mut self, field: &str, value: FieldValue) {
///         match (field, value) {
///             ("Name", FieldValue::Str(v)) => self.name = v,
///             ("Shout", FieldValue::Bool(v)) => self.shout = v,
///             _ => {}
///         }
///     }
///
///     fn execute(&mut self, _args: &slashcli::ArgumentSet) -> i32 {
///         println!("Hello, {}!", self.name);
///         slashcli::SUCCESS
///     }
/// }
/// ```
pub trait Command {
    /// The command descriptor: canonical name, description, visibility and
    /// ordered field descriptors.
    fn spec() -> CommandSpec
    where
        Self: Sized;

    /// Store one bound field value. Called by the binder, in field
    /// declaration order, once per field that matched an argument. Fields
    /// with no matching optional argument keep their zero value.
    fn assign(&mut self, field: &str, value: FieldValue);

    /// Run the command body with the assembled argument set, returning the
    /// process exit code.
    fn execute(&mut self, args: &ArgumentSet) -> i32;
}
