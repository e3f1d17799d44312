//! Schema binding: map assembled arguments onto a command's declared fields.

use thiserror::Error;

use slashcli_argparse::args::{Argument, ArgumentSet, ArgumentValue};
use slashcli_metadata::{CommandSpec, FieldSpec, ValueType};

use crate::command::Command;

/// Errors raised while binding an argument set onto a command schema.
///
/// Both variants are fatal: binding stops at the first error and the
/// command body never runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("argument \"{0}\" is required and not found")]
    MissingRequired(String),

    #[error("cannot convert {value:?} to {expected} for argument \"{field}\"")]
    Coercion {
        field: String,
        value: String,
        expected: ValueType,
    },
}

/// A coerced value ready to assign to a command field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
}

/// Bind the argument set onto `command` following `spec`'s field order.
///
/// Required fields with no matching argument fail the whole binding;
/// optional ones are skipped. The argument set itself is never modified.
pub fn bind(
    spec: &CommandSpec,
    args: &ArgumentSet,
    command: &mut dyn Command,
) -> Result<(), BindError> {
    for field in &spec.fields {
        let Some(argument) = args.get(&field.name) else {
            if field.required {
                return Err(BindError::MissingRequired(field.name.clone()));
            }
            continue;
        };
        command.assign(&field.name, coerce(field, argument)?);
    }
    Ok(())
}

fn coercion_error(field: &FieldSpec, value: &str) -> BindError {
    BindError::Coercion {
        field: field.name.clone(),
        value: value.to_string(),
        expected: field.value_type,
    }
}

/// Coerce one argument to the field's declared type.
fn coerce(field: &FieldSpec, argument: &Argument) -> Result<FieldValue, BindError> {
    match argument.payload() {
        ArgumentValue::Flag => match field.value_type {
            ValueType::Boolean => Ok(FieldValue::Bool(true)),
            // A bare flag carries no value to convert.
            _ => Err(coercion_error(field, argument.name())),
        },
        ArgumentValue::Value(raw) => match field.value_type {
            ValueType::String => Ok(FieldValue::Str(raw.clone())),
            ValueType::Integer => raw
                .parse::<i64>()
                .map(FieldValue::Int)
                .map_err(|_| coercion_error(field, raw)),
            ValueType::Boolean => raw
                .parse::<bool>()
                .map(FieldValue::Bool)
                .map_err(|_| coercion_error(field, raw)),
            ValueType::StringList => Ok(FieldValue::List(vec![raw.clone()])),
        },
        ArgumentValue::Values(all) => match field.value_type {
            ValueType::StringList => Ok(FieldValue::List(all.clone())),
            // A multi-valued argument never fits a scalar field.
            _ => Err(coercion_error(field, &all.join(" "))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Probe {
        assigned: Vec<(String, FieldValue)>,
    }

    impl Command for Probe {
        fn spec() -> CommandSpec {
            CommandSpec::new("Probe")
        }

        fn assign(&mut self, field: &str, value: FieldValue) {
            self.assigned.push((field.to_string(), value));
        }

        fn execute(&mut self, _args: &ArgumentSet) -> i32 {
            0
        }
    }

    fn parse(tokens: &[&str]) -> ArgumentSet {
        ArgumentSet::parse(tokens).unwrap()
    }

    #[test]
    fn binds_scalars_in_declaration_order() {
        let spec = CommandSpec::new("Probe")
            .field(FieldSpec::new("Name"))
            .field(FieldSpec::new("Count").typed(ValueType::Integer))
            .field(FieldSpec::new("Loud").typed(ValueType::Boolean));
        let args = parse(&["/Loud", "true", "/Name", "World", "/Count", "3"]);

        let mut probe = Probe::default();
        bind(&spec, &args, &mut probe).unwrap();

        assert_eq!(
            probe.assigned,
            vec![
                ("Name".to_string(), FieldValue::Str("World".to_string())),
                ("Count".to_string(), FieldValue::Int(3)),
                ("Loud".to_string(), FieldValue::Bool(true)),
            ]
        );
    }

    #[test]
    fn missing_required_field_fails() {
        let spec = CommandSpec::new("Probe").field(FieldSpec::new("Name").required());
        let args = parse(&["/Other", "x"]);

        let err = bind(&spec, &args, &mut Probe::default()).unwrap_err();
        assert_eq!(err, BindError::MissingRequired("Name".to_string()));
    }

    #[test]
    fn missing_optional_field_is_skipped() {
        let spec = CommandSpec::new("Probe").field(FieldSpec::new("Name"));
        let args = parse(&["/Other", "x"]);

        let mut probe = Probe::default();
        bind(&spec, &args, &mut probe).unwrap();
        assert!(probe.assigned.is_empty());
    }

    #[test]
    fn field_lookup_is_case_insensitive() {
        let spec = CommandSpec::new("Probe").field(FieldSpec::new("Name").required());
        let args = parse(&["/NAME", "World"]);

        let mut probe = Probe::default();
        bind(&spec, &args, &mut probe).unwrap();
        assert_eq!(
            probe.assigned,
            vec![("Name".to_string(), FieldValue::Str("World".to_string()))]
        );
    }

    #[test]
    fn flag_binds_true_to_boolean() {
        let spec = CommandSpec::new("Probe").field(FieldSpec::new("Loud").typed(ValueType::Boolean));
        let args = parse(&["/Loud"]);

        let mut probe = Probe::default();
        bind(&spec, &args, &mut probe).unwrap();
        assert_eq!(
            probe.assigned,
            vec![("Loud".to_string(), FieldValue::Bool(true))]
        );
    }

    #[test]
    fn flag_into_scalar_is_a_coercion_error() {
        let spec = CommandSpec::new("Probe").field(FieldSpec::new("Name"));
        let args = parse(&["/Name"]);

        let err = bind(&spec, &args, &mut Probe::default()).unwrap_err();
        assert!(matches!(err, BindError::Coercion { ref field, .. } if field == "Name"));
    }

    #[test]
    fn unparsable_integer_is_a_coercion_error() {
        let spec = CommandSpec::new("Probe").field(FieldSpec::new("Count").typed(ValueType::Integer));
        let args = parse(&["/Count", "many"]);

        let err = bind(&spec, &args, &mut Probe::default()).unwrap_err();
        assert_eq!(
            err,
            BindError::Coercion {
                field: "Count".to_string(),
                value: "many".to_string(),
                expected: ValueType::Integer,
            }
        );
    }

    #[test]
    fn multi_values_bind_to_list() {
        let spec =
            CommandSpec::new("Probe").field(FieldSpec::new("Files").typed(ValueType::StringList));
        let args = parse(&["/Files", "a", "b"]);

        let mut probe = Probe::default();
        bind(&spec, &args, &mut probe).unwrap();
        assert_eq!(
            probe.assigned,
            vec![(
                "Files".to_string(),
                FieldValue::List(vec!["a".to_string(), "b".to_string()])
            )]
        );
    }

    #[test]
    fn single_value_binds_to_list_as_singleton() {
        let spec =
            CommandSpec::new("Probe").field(FieldSpec::new("Files").typed(ValueType::StringList));
        let args = parse(&["/Files", "a"]);

        let mut probe = Probe::default();
        bind(&spec, &args, &mut probe).unwrap();
        assert_eq!(
            probe.assigned,
            vec![("Files".to_string(), FieldValue::List(vec!["a".to_string()]))]
        );
    }

    #[test]
    fn multi_values_into_scalar_is_a_coercion_error() {
        let spec = CommandSpec::new("Probe").field(FieldSpec::new("Name"));
        let args = parse(&["/Name", "a", "b"]);

        let err = bind(&spec, &args, &mut Probe::default()).unwrap_err();
        assert!(matches!(err, BindError::Coercion { expected, .. } if expected == ValueType::String));
    }

    #[test]
    fn binding_stops_at_first_error() {
        let spec = CommandSpec::new("Probe")
            .field(FieldSpec::new("Count").typed(ValueType::Integer))
            .field(FieldSpec::new("Name"));
        let args = parse(&["/Count", "many", "/Name", "World"]);

        let mut probe = Probe::default();
        assert!(bind(&spec, &args, &mut probe).is_err());
        // Nothing after the failing field was assigned.
        assert!(probe.assigned.is_empty());
    }
}
