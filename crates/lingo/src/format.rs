//! Printf-style substitution of positional arguments into translated text.
//!
//! | verb | accepts | output |
//! |------|---------|--------|
//! | `%v` | anything | natural representation |
//! | `%s` | strings | the string |
//! | `%q` | strings | double-quoted, escaped |
//! | `%d` | integers | decimal |
//! | `%x` | integers | lowercase hex |
//! | `%f`, `%.Nf` | numbers | fixed point, 6 decimals unless `N` is given |
//! | `%t` | booleans | `true` / `false` |
//! | `%%` | nothing | a literal `%` |

use std::borrow::Cow;
use thiserror::Error;

/// A positional argument for a translated template.
#[derive(Clone, Debug, PartialEq)]
pub enum FormatArg {
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl FormatArg {
    fn kind(&self) -> &'static str {
        match self {
            FormatArg::Int(_) | FormatArg::Uint(_) => "integer",
            FormatArg::Float(_) => "float",
            FormatArg::Str(_) => "string",
            FormatArg::Bool(_) => "bool",
        }
    }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for FormatArg {
            fn from(value: $ty) -> Self {
                FormatArg::Int(i64::from(value))
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for FormatArg {
            fn from(value: $ty) -> Self {
                FormatArg::Uint(u64::from(value))
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<isize> for FormatArg {
    fn from(value: isize) -> Self {
        FormatArg::Int(value as i64)
    }
}

impl From<usize> for FormatArg {
    fn from(value: usize) -> Self {
        FormatArg::Uint(value as u64)
    }
}

impl From<f32> for FormatArg {
    fn from(value: f32) -> Self {
        FormatArg::Float(f64::from(value))
    }
}

impl From<f64> for FormatArg {
    fn from(value: f64) -> Self {
        FormatArg::Float(value)
    }
}

impl From<bool> for FormatArg {
    fn from(value: bool) -> Self {
        FormatArg::Bool(value)
    }
}

impl From<&str> for FormatArg {
    fn from(value: &str) -> Self {
        FormatArg::Str(value.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(value: String) -> Self {
        FormatArg::Str(value)
    }
}

impl From<&String> for FormatArg {
    fn from(value: &String) -> Self {
        FormatArg::Str(value.clone())
    }
}

impl From<Cow<'_, str>> for FormatArg {
    fn from(value: Cow<'_, str>) -> Self {
        FormatArg::Str(value.into_owned())
    }
}

/// Builds a `[FormatArg; N]` from heterogeneous values.
///
/// ```
/// let args = lingo::args!["Ada", 3, 2.5];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        [$($crate::FormatArg::from($arg)),*]
    };
}

/// The placeholders of a template did not match the supplied arguments.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("no argument for placeholder {index} in '{template}'")]
    MissingArgument { template: String, index: usize },
    #[error("'{template}' has {expected} placeholders but {given} arguments were given")]
    ExtraArguments {
        template: String,
        expected: usize,
        given: usize,
    },
    #[error("placeholder {index} (%{verb}) in '{template}' cannot format a {found}")]
    TypeMismatch {
        template: String,
        index: usize,
        verb: char,
        found: &'static str,
    },
    #[error("unknown verb %{verb} in '{template}'")]
    UnknownVerb { template: String, verb: char },
    #[error("'{template}' ends inside a placeholder")]
    Truncated { template: String },
}

enum Piece<'a> {
    Text(&'a str),
    Percent,
    Verb {
        raw: &'a str,
        verb: char,
        precision: Option<usize>,
    },
    /// A `%` with no verb before the end of the template.
    Dangling(&'a str),
}

fn pieces(template: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        if pos > 0 {
            pieces.push(Piece::Text(&rest[..pos]));
        }
        let directive = &rest[pos + 1..];

        match directive.chars().next() {
            None => {
                pieces.push(Piece::Dangling(&rest[pos..]));
                rest = "";
            },
            Some('%') => {
                pieces.push(Piece::Percent);
                rest = &directive[1..];
            },
            Some('.') => {
                let digits = directive[1..].bytes().take_while(u8::is_ascii_digit).count();
                match directive[1 + digits..].chars().next() {
                    Some(verb) => {
                        let precision = directive[1..1 + digits].parse().unwrap_or(0);
                        let end = pos + 2 + digits + verb.len_utf8();
                        pieces.push(Piece::Verb {
                            raw: &rest[pos..end],
                            verb,
                            precision: Some(precision),
                        });
                        rest = &rest[end..];
                    },
                    None => {
                        pieces.push(Piece::Dangling(&rest[pos..]));
                        rest = "";
                    },
                }
            },
            Some(verb) => {
                let end = pos + 1 + verb.len_utf8();
                pieces.push(Piece::Verb {
                    raw: &rest[pos..end],
                    verb,
                    precision: None,
                });
                rest = &rest[end..];
            },
        }
    }

    if !rest.is_empty() {
        pieces.push(Piece::Text(rest));
    }

    pieces
}

fn render(
    out: &mut String,
    template: &str,
    index: usize,
    verb: char,
    precision: Option<usize>,
    arg: &FormatArg,
) -> Result<(), FormatError> {
    let rendered = match (verb, arg) {
        ('v', FormatArg::Int(value)) | ('d', FormatArg::Int(value)) => value.to_string(),
        ('v', FormatArg::Uint(value)) | ('d', FormatArg::Uint(value)) => value.to_string(),
        ('v', FormatArg::Float(value)) => value.to_string(),
        ('v', FormatArg::Str(value)) | ('s', FormatArg::Str(value)) => value.clone(),
        ('v', FormatArg::Bool(value)) | ('t', FormatArg::Bool(value)) => value.to_string(),
        ('q', FormatArg::Str(value)) => format!("{:?}", value),
        ('x', FormatArg::Int(value)) if *value < 0 => format!("-{:x}", value.unsigned_abs()),
        ('x', FormatArg::Int(value)) => format!("{:x}", value),
        ('x', FormatArg::Uint(value)) => format!("{:x}", value),
        ('f', FormatArg::Float(value)) => format!("{:.*}", precision.unwrap_or(6), value),
        ('f', FormatArg::Int(value)) => format!("{:.*}", precision.unwrap_or(6), *value as f64),
        ('f', FormatArg::Uint(value)) => format!("{:.*}", precision.unwrap_or(6), *value as f64),
        ('v' | 's' | 'q' | 'd' | 'x' | 'f' | 't', arg) => {
            return Err(FormatError::TypeMismatch {
                template: template.to_string(),
                index,
                verb,
                found: arg.kind(),
            });
        },
        (verb, _) => {
            return Err(FormatError::UnknownVerb {
                template: template.to_string(),
                verb,
            });
        },
    };

    out.push_str(&rendered);
    Ok(())
}

/// Substitutes `args` into the placeholders of `template`, in order.
///
/// Every placeholder needs an argument of a matching type and every argument
/// needs a placeholder.
pub fn format(template: &str, args: &[FormatArg]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut next = 0;

    for piece in pieces(template) {
        match piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Percent => out.push('%'),
            Piece::Verb {
                verb, precision, ..
            } => {
                let arg = args.get(next).ok_or_else(|| FormatError::MissingArgument {
                    template: template.to_string(),
                    index: next,
                })?;
                render(&mut out, template, next, verb, precision, arg)?;
                next += 1;
            },
            Piece::Dangling(_) => {
                return Err(FormatError::Truncated {
                    template: template.to_string(),
                });
            },
        }
    }

    if next < args.len() {
        return Err(FormatError::ExtraArguments {
            template: template.to_string(),
            expected: next,
            given: args.len(),
        });
    }

    Ok(out)
}

/// Substitutes `arg` into the first placeholder of `template` only.
///
/// Later placeholders are copied through untouched, and a template without
/// any placeholder is returned as-is.
pub fn format_first(template: &str, arg: &FormatArg) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut used = false;

    for piece in pieces(template) {
        match piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Percent => out.push('%'),
            Piece::Verb {
                verb, precision, ..
            } if !used => {
                render(&mut out, template, 0, verb, precision, arg)?;
                used = true;
            },
            Piece::Verb { raw, .. } => out.push_str(raw),
            Piece::Dangling(raw) if used => out.push_str(raw),
            Piece::Dangling(_) => {
                return Err(FormatError::Truncated {
                    template: template.to_string(),
                });
            },
        }
    }

    Ok(out)
}
