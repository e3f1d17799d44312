//! Slash-style argument tokenizing.
//!
//! Arguments are named by an escape-character prefix (`/Name` by default),
//! and every token that is not a name attaches to the most recent name as a
//! value. This crate covers the token classifier and the single-pass
//! assembler; command resolution and schema binding are built on top in
//! `slashcli`.

pub mod token {
    /// Default escape character marking a token as an argument name.
    pub const DEFAULT_ESCAPE: char = '/';

    fn is_word(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }

    /// Classify a token as an argument name.
    ///
    /// Returns the name with the escape prefix stripped if the token is
    /// `<escape><word-characters>` exactly. Tokens that merely start with
    /// the escape character but carry illegal characters after it are
    /// literal values, not names.
    pub fn argument_name(token: &str, escape: char) -> Option<&str> {
        let rest = token.strip_prefix(escape)?;
        if rest.is_empty() || !rest.chars().all(is_word) {
            return None;
        }
        Some(rest)
    }

    /// Classify a token as the full `<escape><name>=<value>` form.
    ///
    /// The value part must be non-empty; `/name=` is a literal value.
    pub fn argument_name_value(token: &str, escape: char) -> Option<(&str, &str)> {
        let rest = token.strip_prefix(escape)?;
        let (name, value) = rest.split_once('=')?;
        if name.is_empty() || value.is_empty() || !name.chars().all(is_word) {
            return None;
        }
        Some((name, value))
    }

    /// Re-serialize an argument name to its token form.
    pub fn format_argument_name(name: &str, escape: char) -> String {
        format!("{escape}{name}")
    }
}

pub mod args {
    use indexmap::IndexMap;
    use thiserror::Error;

    use crate::token;

    /// Errors raised while assembling an argument set.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum ParseError {
        /// A value token appeared before any argument name had been seen.
        #[error("argument value {0:?} found without an argument name")]
        OrphanValue(String),
    }

    /// What an argument carries. Exactly one state holds at any time: a
    /// flag carries nothing, a single value never coexists with a value
    /// list, and a second value promotes the single value into a
    /// two-element list instead of overwriting it.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ArgumentValue {
        /// Present on the command line with no value; a boolean "set" marker.
        Flag,
        Value(String),
        Values(Vec<String>),
    }

    /// One parsed command-line entry.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Argument {
        name: String,
        index: usize,
        payload: ArgumentValue,
    }

    impl Argument {
        pub(crate) fn new(name: &str, index: usize) -> Self {
            Self {
                name: name.to_string(),
                index,
                payload: ArgumentValue::Flag,
            }
        }

        /// The argument name, case preserved.
        pub fn name(&self) -> &str {
            &self.name
        }

        /// Position of the name token in the original token sequence.
        ///
        /// Only used to find the first argument, which selects the command.
        pub fn index(&self) -> usize {
            self.index
        }

        pub fn payload(&self) -> &ArgumentValue {
            &self.payload
        }

        /// Whether the argument was never assigned a value.
        pub fn is_flag(&self) -> bool {
            matches!(self.payload, ArgumentValue::Flag)
        }

        /// The single value, if exactly one value token followed the name.
        pub fn value(&self) -> Option<&str> {
            match &self.payload {
                ArgumentValue::Value(v) => Some(v),
                _ => None,
            }
        }

        /// The ordered values, if more than one value token followed the name.
        pub fn values(&self) -> Option<&[String]> {
            match &self.payload {
                ArgumentValue::Values(vs) => Some(vs),
                _ => None,
            }
        }

        /// Re-serialize to the token sequence that would reproduce this entry.
        pub fn to_tokens(&self, escape: char) -> Vec<String> {
            let mut out = vec![token::format_argument_name(&self.name, escape)];
            match &self.payload {
                ArgumentValue::Flag => {}
                ArgumentValue::Value(v) => out.push(v.clone()),
                ArgumentValue::Values(vs) => out.extend(vs.iter().cloned()),
            }
            out
        }

        fn push_value(&mut self, value: String) {
            self.payload = match std::mem::replace(&mut self.payload, ArgumentValue::Flag) {
                ArgumentValue::Flag => ArgumentValue::Value(value),
                ArgumentValue::Value(first) => ArgumentValue::Values(vec![first, value]),
                ArgumentValue::Values(mut all) => {
                    all.push(value);
                    ArgumentValue::Values(all)
                }
            };
        }
    }

    /// Assembly options: the escape character and the name-comparison policy.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParseOptions {
        pub escape: char,
        pub case_sensitive: bool,
    }

    impl Default for ParseOptions {
        fn default() -> Self {
            Self {
                escape: token::DEFAULT_ESCAPE,
                case_sensitive: false,
            }
        }
    }

    /// An ordered, name-unique mapping of name to [`Argument`], built fresh
    /// per invocation. Re-declaring a name overwrites the earlier entry
    /// (last occurrence wins). Lookups by absent name return `None`.
    #[derive(Debug, Clone, Default)]
    pub struct ArgumentSet {
        entries: IndexMap<String, Argument>,
        case_sensitive: bool,
    }

    impl ArgumentSet {
        /// Assemble a token stream with the default options.
        pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ParseError> {
            Self::parse_with(tokens, ParseOptions::default())
        }

        /// Assemble a token stream in a single left-to-right pass.
        ///
        /// A value token attaches to the most recent name; a second value
        /// promotes the stored single value into an ordered list. A value
        /// with no preceding name at all is a [`ParseError::OrphanValue`].
        /// An empty token slice yields an empty set.
        pub fn parse_with<S: AsRef<str>>(
            tokens: &[S],
            options: ParseOptions,
        ) -> Result<Self, ParseError> {
            let mut set = Self {
                entries: IndexMap::new(),
                case_sensitive: options.case_sensitive,
            };

            // Key of the most recently declared argument. A name with no
            // value yet is a flag by construction, so name-follows-name and
            // trailing-name cases need no explicit marking.
            let mut current: Option<String> = None;

            for (index, tok) in tokens.iter().enumerate() {
                let tok = tok.as_ref();

                if let Some((name, value)) = token::argument_name_value(tok, options.escape) {
                    let mut argument = Argument::new(name, index);
                    argument.push_value(value.to_string());
                    current = Some(set.insert(argument));
                } else if let Some(name) = token::argument_name(tok, options.escape) {
                    current = Some(set.insert(Argument::new(name, index)));
                } else {
                    let Some(key) = current.as_deref() else {
                        return Err(ParseError::OrphanValue(tok.to_string()));
                    };
                    if let Some(argument) = set.entries.get_mut(key) {
                        argument.push_value(tok.to_string());
                    }
                }
            }

            Ok(set)
        }

        fn fold(&self, name: &str) -> String {
            if self.case_sensitive {
                name.to_string()
            } else {
                name.to_lowercase()
            }
        }

        fn insert(&mut self, argument: Argument) -> String {
            let key = self.fold(argument.name());
            self.entries.insert(key.clone(), argument);
            key
        }

        /// Look up an argument by name under the set's case policy.
        pub fn get(&self, name: &str) -> Option<&Argument> {
            self.entries.get(&self.fold(name))
        }

        pub fn contains(&self, name: &str) -> bool {
            self.get(name).is_some()
        }

        /// The argument whose name token came first in the input; its name
        /// selects the command to dispatch.
        pub fn selector(&self) -> Option<&Argument> {
            self.entries.values().find(|a| a.index() == 0)
        }

        pub fn len(&self) -> usize {
            self.entries.len()
        }

        pub fn is_empty(&self) -> bool {
            self.entries.is_empty()
        }

        pub fn iter(&self) -> impl Iterator<Item = &Argument> {
            self.entries.values()
        }

        pub fn case_sensitive(&self) -> bool {
            self.case_sensitive
        }
    }
}
