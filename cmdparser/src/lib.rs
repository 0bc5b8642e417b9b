//! Declarative command-line option parsing.
//!
//! A table of option descriptors (long/short spellings, argument
//! requirement, default value, help text) is built once, validated at
//! construction, and consumed by a single-pass parser:
//! - `-v`, bundled `-xvz`, `-cVALUE` short forms
//! - `--name`, `--name=value` long forms
//! - `--` end-of-options marker
//! - default-value fallback for argument-taking options
//!
//! The parser returns the index of the first positional argument and
//! stores decoded values in the [`Context`], retrievable by option name.
//! Scanning stops at the first non-option token: options must precede
//! positional arguments.

use std::collections::HashMap;

// ============================================================================
// Result and Error types
// ============================================================================

pub type Result<T> = std::result::Result<T, Error>;

/// Parse-time and table-construction errors.
///
/// Each parse error names the offending token or option spelling as it
/// appeared on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Long option name outside the 1..=63 character contract, or a `=`
    /// directly after an argument-taking short option.
    MalformedOption(String),
    /// Token not matched by any table entry.
    UnknownOption(String),
    /// Inline `=value` supplied to a no-argument option.
    UnexpectedArgument(String),
    /// Argument-taking option with no inline value, no following token
    /// and no declared default.
    MissingArgument(String),
    /// Table entry with neither a long nor a short name.
    UnnamedOption,
    /// Two table entries share a short name.
    DuplicateShort(char),
    /// Two table entries share a long name.
    DuplicateLong(String),
    /// Default value declared on an option that takes no argument.
    UselessDefault(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MalformedOption(tok) => write!(f, "Invalid option: {}", tok),
            Error::UnknownOption(spelling) => write!(f, "Unknown option: {}", spelling),
            Error::UnexpectedArgument(spelling) => {
                write!(f, "Unexpected argument for: {}", spelling)
            }
            Error::MissingArgument(spelling) => write!(f, "Missing argument for: {}", spelling),
            Error::UnnamedOption => write!(f, "option has neither long nor short name"),
            Error::DuplicateShort(c) => write!(f, "duplicate short option: -{}", c),
            Error::DuplicateLong(name) => write!(f, "duplicate long option: --{}", name),
            Error::UselessDefault(name) => {
                write!(f, "default value on no-argument option: {}", name)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Longest long-option name the parser accepts.
pub const MAX_LONG_NAME: usize = 63;

// ============================================================================
// Opt — option descriptor builder
// ============================================================================

/// One recognized option, built by chaining.
///
/// ```
/// use cmdparser::Opt;
///
/// let count = Opt::new("count").short('c').arg().default_val("1")
///     .help("How many times to run");
/// let verbose = Opt::new("verbose").short('v').help("Note every step");
/// ```
///
/// An empty long name means "no long name"; an option must carry at
/// least one spelling or [`ContextBuilder::build`] rejects the table.
#[derive(Debug, Clone)]
pub struct Opt {
    long_name: String,
    short_name: Option<char>,
    takes_arg: bool,
    default_value: Option<String>,
    help: Option<String>,
}

impl Opt {
    pub fn new(long_name: &str) -> Self {
        Opt {
            long_name: long_name.to_string(),
            short_name: None,
            takes_arg: false,
            default_value: None,
            help: None,
        }
    }

    pub fn short(mut self, c: char) -> Self {
        self.short_name = Some(c);
        self
    }

    /// Mark the option as argument-taking.
    pub fn arg(mut self) -> Self {
        self.takes_arg = true;
        self
    }

    /// Value used when the option appears with no explicit argument.
    pub fn default_val(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn help(mut self, text: &str) -> Self {
        self.help = Some(text.to_string());
        self
    }
}

// ============================================================================
// OptionTable
// ============================================================================

/// Ordered, immutable collection of option descriptors.
#[derive(Debug, Clone, Default)]
pub struct OptionTable {
    options: Vec<Opt>,
}

impl OptionTable {
    pub fn new() -> Self {
        OptionTable {
            options: Vec::new(),
        }
    }

    pub fn option(mut self, opt: Opt) -> Self {
        self.options.push(opt);
        self
    }

    /// Look up an option by short or long name.
    ///
    /// Returns the first entry, in declaration order, whose short name
    /// equals `short` (when given) or whose long name equals `long`
    /// (when given and non-empty). The two dimensions are never matched
    /// against each other; the parser always passes exactly one.
    pub fn find(&self, short: Option<char>, long: Option<&str>) -> Option<&Opt> {
        self.options.iter().find(|opt| {
            (short.is_some() && opt.short_name == short)
                || (long.is_some_and(|l| !l.is_empty() && opt.long_name == l))
        })
    }

    fn iter(&self) -> impl Iterator<Item = &Opt> {
        self.options.iter()
    }
}

// ============================================================================
// Parsed values — tagged per-option results
// ============================================================================

/// Resolved result for one option: a boolean for flags, a string for
/// argument-taking options. Selected by the descriptor's `arg()` marker
/// at table-construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
enum OptValue {
    Flag,
    Value(String),
}

// ============================================================================
// ContextBuilder
// ============================================================================

/// Builds a [`Context`], validating the table invariants that the
/// parser itself assumes: every option named at least once, short and
/// long names unique, defaults only where an argument is taken.
pub struct ContextBuilder {
    prog_name: String,
    description: String,
    usage_args: String,
    table: OptionTable,
}

impl ContextBuilder {
    pub fn new(prog_name: &str) -> Self {
        ContextBuilder {
            prog_name: prog_name.to_string(),
            description: String::new(),
            usage_args: String::new(),
            table: OptionTable::new(),
        }
    }

    /// One-line program description shown at the top of the help text.
    pub fn description(mut self, text: &str) -> Self {
        self.description = text.to_string();
        self
    }

    /// Suffix for the usage line, e.g. `"[commands]"`.
    pub fn usage_args(mut self, text: &str) -> Self {
        self.usage_args = text.to_string();
        self
    }

    pub fn options(mut self, table: OptionTable) -> Self {
        self.table = table;
        self
    }

    pub fn build(self) -> Result<Context> {
        let mut seen_short = Vec::new();
        let mut seen_long = Vec::new();
        for opt in self.table.iter() {
            if opt.long_name.is_empty() && opt.short_name.is_none() {
                return Err(Error::UnnamedOption);
            }
            if let Some(c) = opt.short_name {
                if seen_short.contains(&c) {
                    return Err(Error::DuplicateShort(c));
                }
                seen_short.push(c);
            }
            if !opt.long_name.is_empty() {
                if seen_long.contains(&opt.long_name) {
                    return Err(Error::DuplicateLong(opt.long_name.clone()));
                }
                seen_long.push(opt.long_name.clone());
            }
            if opt.default_value.is_some() && !opt.takes_arg {
                return Err(Error::UselessDefault(storage_key(opt)));
            }
        }
        Ok(Context {
            prog_name: self.prog_name,
            description: self.description,
            usage_args: self.usage_args,
            table: self.table,
            values: HashMap::new(),
        })
    }
}

/// Key an option's result is stored under: the long name, or the short
/// character for short-only options.
fn storage_key(opt: &Opt) -> String {
    if !opt.long_name.is_empty() {
        opt.long_name.clone()
    } else {
        opt.short_name.map(String::from).unwrap_or_default()
    }
}

// ============================================================================
// Context — parser and help renderer
// ============================================================================

/// Program metadata, the option table, and (after [`parse`]) the
/// decoded option values.
///
/// [`parse`]: Context::parse
pub struct Context {
    prog_name: String,
    description: String,
    usage_args: String,
    table: OptionTable,
    values: HashMap<String, OptValue>,
}

impl Context {
    pub fn builder(prog_name: &str) -> ContextBuilder {
        ContextBuilder::new(prog_name)
    }

    /// Walk `argv` (index 0 is the program name and is skipped) and
    /// resolve every option token, returning the index of the first
    /// positional argument, or `argv.len()` when nothing remains.
    ///
    /// On error the context keeps any values resolved before the
    /// offending token; callers must treat such state as good for
    /// diagnostics only.
    pub fn parse(&mut self, argv: &[String]) -> Result<usize> {
        let mut i = 1;

        while i < argv.len() {
            let arg = &argv[i];

            // End of options marker
            if arg == "--" {
                i += 1;
                break;
            }

            if let Some(rest) = arg.strip_prefix("--") {
                i = self.parse_long(argv, i, arg, rest)?;
                continue;
            }

            if arg.starts_with('-') && arg.len() > 1 {
                i = self.parse_shorts(argv, i, arg)?;
                continue;
            }

            // Non-option argument; everything from here on is positional.
            break;
        }

        Ok(i)
    }

    /// Handle one `--name[=value]` token at `argv[i]`, returning the
    /// next scan index.
    fn parse_long(&mut self, argv: &[String], i: usize, arg: &str, rest: &str) -> Result<usize> {
        let (name, inline) = match rest.find('=') {
            Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
            None => (rest, None),
        };

        if name.is_empty() || name.len() > MAX_LONG_NAME {
            return Err(Error::MalformedOption(arg.to_string()));
        }

        let opt = self
            .table
            .find(None, Some(name))
            .ok_or_else(|| Error::UnknownOption(format!("--{}", name)))?
            .clone();
        let key = storage_key(&opt);

        if opt.takes_arg {
            if let Some(value) = inline {
                self.values.insert(key, OptValue::Value(value.to_string()));
                Ok(i + 1)
            } else if i + 1 < argv.len() {
                self.values
                    .insert(key, OptValue::Value(argv[i + 1].clone()));
                Ok(i + 2)
            } else if let Some(default) = &opt.default_value {
                self.values.insert(key, OptValue::Value(default.clone()));
                Ok(i + 1)
            } else {
                Err(Error::MissingArgument(format!("--{}", name)))
            }
        } else {
            if inline.is_some() {
                return Err(Error::UnexpectedArgument(format!("--{}", name)));
            }
            self.values.insert(key, OptValue::Flag);
            Ok(i + 1)
        }
    }

    /// Handle one `-abc` token at `argv[i]`: each character is a short
    /// option. The first argument-taking character consumes the rest of
    /// the token verbatim as its value (so `-cv` gives `c` the literal
    /// value `"v"` even when `v` is itself a known flag), or failing
    /// that the next token, or its default. Returns the next scan index.
    fn parse_shorts(&mut self, argv: &[String], i: usize, arg: &str) -> Result<usize> {
        let chars = &arg[1..];

        for (pos, c) in chars.char_indices() {
            let opt = self
                .table
                .find(Some(c), None)
                .ok_or_else(|| Error::UnknownOption(format!("-{}", c)))?
                .clone();
            let key = storage_key(&opt);

            if !opt.takes_arg {
                self.values.insert(key, OptValue::Flag);
                continue;
            }

            let rest = &chars[pos + c.len_utf8()..];

            // Short options do not support the key=value form.
            if rest.starts_with('=') {
                return Err(Error::MalformedOption(format!("-{}=", c)));
            }

            if !rest.is_empty() {
                self.values.insert(key, OptValue::Value(rest.to_string()));
                return Ok(i + 1);
            } else if i + 1 < argv.len() {
                self.values
                    .insert(key, OptValue::Value(argv[i + 1].clone()));
                return Ok(i + 2);
            } else if let Some(default) = &opt.default_value {
                self.values.insert(key, OptValue::Value(default.clone()));
                return Ok(i + 1);
            } else {
                return Err(Error::MissingArgument(format!("-{}", c)));
            }
        }

        Ok(i + 1)
    }

    /// True when the named no-argument option appeared on the command line.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(OptValue::Flag))
    }

    /// Resolved value of the named argument-taking option, if any.
    pub fn value(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(OptValue::Value(v)) => Some(v),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Help rendering
    // ------------------------------------------------------------------

    /// Render the full help text from the table.
    pub fn help_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.description);
        out.push('\n');
        out.push_str(&format!(
            "Usage: {} [OPTIONS] {}\n\n",
            self.prog_name, self.usage_args
        ));
        out.push_str("Options:\n");

        for opt in self.table.iter() {
            let mut left = match (opt.short_name, opt.long_name.is_empty()) {
                (Some(c), false) => format!("-{}, --{}", c, opt.long_name),
                (Some(c), true) => format!("-{}", c),
                (None, false) => format!("--{}", opt.long_name),
                (None, true) => String::new(),
            };

            if opt.takes_arg {
                if !opt.long_name.is_empty() {
                    left.push_str("=ARG");
                } else {
                    left.push_str(" ARG");
                }
            }

            let help = opt.help.as_deref().unwrap_or("");
            match &opt.default_value {
                Some(default) => {
                    out.push_str(&format!(
                        "  {:<30} {} (default: {})\n",
                        left, help, default
                    ));
                }
                None => {
                    out.push_str(&format!("  {:<30} {}\n", left, help));
                }
            }
        }
        out.push('\n');
        out
    }

    /// Print the help text to stdout.
    pub fn print_help(&self) {
        print!("{}", self.help_text());
    }
}

// ============================================================================
// Tests
// ============================================================================
