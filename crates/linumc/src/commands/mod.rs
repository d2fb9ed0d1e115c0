//! Command handlers for the linum CLI.
//!
//! Each submodule implements one group of commands. Handlers return the text
//! to print instead of printing it, so they can be tested in-process; only
//! `main.rs` touches stdout, stderr and the exit status.

use linum_arith::ArithError;
use linum_diagnostic::ErrorCode;
use linum_postfix::ConvertError;
use thiserror::Error;

mod arith;
mod explain;
mod postfix;

pub use arith::{add_numbers, compare_numbers, multiply_numbers, power_number, subtract_numbers};
pub use explain::explain_error;
pub use postfix::convert_expression;

/// Usage text printed by `linum help` and after argument errors.
pub const USAGE: &str = "\
Usage: linum <command> [args] [options]

Commands:
  add <a> <b>         Sum of two non-negative integers
  sub <a> <b>         Absolute difference |a - b|
  mul <a> <b>         Product of two non-negative integers
  pow <base> <exp>    base raised to a non-negative integer power
  cmp <a> <b>         Compare two non-negative integers
  postfix <expr>      Convert an infix expression to postfix
  explain <code>      Show documentation for an error code (e.g. E2001)
  help                Show this message
  version             Show the version

Options:
  -q, --quiet         Omit the `explain` hint after an error

Environment:
  RUST_LOG            Tracing filter, e.g. RUST_LOG=linum_arith=trace";

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cli {
    pub command: Command,
    pub options: Options,
}

/// Flags that apply to every command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Skip the `explain` hint when rendering an error.
    pub quiet: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add { lhs: String, rhs: String },
    Sub { lhs: String, rhs: String },
    Mul { lhs: String, rhs: String },
    Pow { base: String, exponent: String },
    Cmp { lhs: String, rhs: String },
    Postfix { expression: String },
    Explain { code: String },
    Help,
    Version,
}

/// Errors surfaced to the CLI user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Arith(#[from] ArithError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("unknown error code: {0}")]
    UnknownCode(String),

    #[error("no documentation available for {0}")]
    MissingDocs(ErrorCode),

    #[error("{0}")]
    Usage(String),
}

impl CommandError {
    /// Diagnostic code, for errors raised by the engines.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Arith(err) => Some(err.code()),
            Self::Convert(err) => Some(err.code()),
            Self::UnknownCode(_) | Self::MissingDocs(_) | Self::Usage(_) => None,
        }
    }

    /// Process exit status: 2 for usage errors, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            _ => 1,
        }
    }

    /// Render as `error[CODE]: message`, followed by an `explain` hint unless
    /// `quiet` is set.
    pub fn render(&self, options: Options) -> String {
        match self.code() {
            Some(code) if options.quiet => format!("error[{code}]: {self}"),
            Some(code) => format!(
                "error[{code}]: {self}\n  = help: run `linum explain {code}` for more information"
            ),
            None => format!("error: {self}"),
        }
    }
}

impl Cli {
    /// Parse command-line arguments, excluding the program name.
    ///
    /// Option flags may appear anywhere. Everything else is positional, so a
    /// negative exponent like `-3` reaches `pow` and is rejected there.
    pub fn parse(args: &[String]) -> Result<Cli, CommandError> {
        let mut options = Options::default();
        let mut positional = Vec::with_capacity(args.len());
        for arg in args {
            match arg.as_str() {
                "-q" | "--quiet" => options.quiet = true,
                _ => positional.push(arg.as_str()),
            }
        }

        let Some((&name, rest)) = positional.split_first() else {
            return Err(CommandError::Usage("missing command".to_string()));
        };

        let command = match name {
            "add" => {
                let [lhs, rhs] = expect_args(name, rest, ["a", "b"])?;
                Command::Add { lhs, rhs }
            }
            "sub" => {
                let [lhs, rhs] = expect_args(name, rest, ["a", "b"])?;
                Command::Sub { lhs, rhs }
            }
            "mul" => {
                let [lhs, rhs] = expect_args(name, rest, ["a", "b"])?;
                Command::Mul { lhs, rhs }
            }
            "pow" => {
                let [base, exponent] = expect_args(name, rest, ["base", "exp"])?;
                Command::Pow { base, exponent }
            }
            "cmp" => {
                let [lhs, rhs] = expect_args(name, rest, ["a", "b"])?;
                Command::Cmp { lhs, rhs }
            }
            "postfix" => {
                let [expression] = expect_args(name, rest, ["expr"])?;
                Command::Postfix { expression }
            }
            "explain" => {
                let [code] = expect_args(name, rest, ["code"])?;
                Command::Explain { code }
            }
            "help" | "-h" | "--help" => Command::Help,
            "version" | "-V" | "--version" => Command::Version,
            other => return Err(CommandError::Usage(format!("unknown command `{other}`"))),
        };

        Ok(Cli { command, options })
    }
}

/// Take exactly `N` positional arguments for `command`.
fn expect_args<const N: usize>(
    command: &str,
    args: &[&str],
    names: [&str; N],
) -> Result<[String; N], CommandError> {
    if args.len() != N {
        let expected: Vec<String> = names.iter().map(|name| format!("<{name}>")).collect();
        return Err(CommandError::Usage(format!(
            "`{command}` takes {N} argument{}: linum {command} {}",
            if N == 1 { "" } else { "s" },
            expected.join(" ")
        )));
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}

impl Command {
    /// Run the command and return the text to print.
    #[tracing::instrument(level = "debug", skip_all, fields(command = ?self))]
    pub fn run(&self) -> Result<String, CommandError> {
        match self {
            Command::Add { lhs, rhs } => add_numbers(lhs, rhs),
            Command::Sub { lhs, rhs } => subtract_numbers(lhs, rhs),
            Command::Mul { lhs, rhs } => multiply_numbers(lhs, rhs),
            Command::Pow { base, exponent } => power_number(base, exponent),
            Command::Cmp { lhs, rhs } => compare_numbers(lhs, rhs),
            Command::Postfix { expression } => convert_expression(expression),
            Command::Explain { code } => explain_error(code),
            Command::Help => Ok(USAGE.to_string()),
            Command::Version => Ok(format!("linum {}", env!("CARGO_PKG_VERSION"))),
        }
    }
}
