//! Sample program: one manual command and one declarative command.
//!
//! Try:
//!   cargo run --example greet -- /Hello /Name World
//!   cargo run --example greet -- /Greet /Name World /Shout
//!   cargo run --example greet -- /Unknown

use slashcli::{
    Command, CommandRegistry, CommandSpec, Dispatcher, FieldSpec, FieldValue, SUCCESS, ValueType,
};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Default)]
struct Greet {
    name: String,
    shout: bool,
}

impl Command for Greet {
    fn spec() -> CommandSpec {
        CommandSpec::new("Greet")
            .describe("Greets someone by name")
            .field(FieldSpec::new("Name").required().describe("Who to greet"))
            .field(
                FieldSpec::new("Shout")
                    .typed(ValueType::Boolean)
                    .describe("Greet loudly"),
            )
    }

    fn assign(&mut self, field: &str, value: FieldValue) {
        match (field, value) {
            ("Name", FieldValue::Str(v)) => self.name = v,
            ("Shout", FieldValue::Bool(v)) => self.shout = v,
            _ => {}
        }
    }

    fn execute(&mut self, _args: &slashcli::ArgumentSet) -> i32 {
        let greeting = format!("Hello, {}!", self.name);
        if self.shout {
            println!("{}", greeting.to_uppercase());
        } else {
            println!("{greeting}");
        }
        SUCCESS
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() {
    init_tracing();

    let mut registry = CommandRegistry::new();
    registry.command_with_help("Hello", "Says hello, optionally to /Name", |args| {
        match args.get("Name").and_then(|a| a.value()) {
            Some(name) => println!("Hello, {name}!"),
            None => println!("Hello!"),
        }
        SUCCESS
    });
    registry.register::<Greet>();

    let dispatcher = Dispatcher::new(registry);
    let tokens: Vec<String> = std::env::args().skip(1).collect();
    std::process::exit(dispatcher.run(&tokens));
}
