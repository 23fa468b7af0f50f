//! Interactive numbered menu.
//!
//! Input is read as whitespace-separated tokens, so a choice and its operands
//! may share a line or be spread across several. Bad input is reported and the
//! menu is shown again; end of input leaves the loop like the exit choice.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::{evaluate, parse_native, parse_operand, Operation};

const MENU: &str = "\n\n***AVAILABLE OPERATIONS***\n\
\n1. Modulo of two big integers\
\n2. Square root of a big integer\
\n3. Raise a big integer to a power\
\n4. Convert a simple integer to a big integer\
\n5. Calculate factorial of a big integer\
\n6. EXIT\
\nEnter your choice : ";

enum Request {
    Evaluate {
        label: &'static str,
        operation: Operation,
    },
    Rejected(String),
    Exit,
    EndOfInput,
}

struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Tokens {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

fn prompt<W: Write>(output: &mut W, text: &str) -> io::Result<()> {
    write!(output, "\n{}", text)?;
    output.flush()
}

fn read_request<R: BufRead, W: Write>(
    tokens: &mut Tokens<R>,
    output: &mut W,
) -> io::Result<Request> {
    let Some(choice) = tokens.next_token()? else {
        return Ok(Request::EndOfInput);
    };

    let (label, operation) = match choice.as_str() {
        "1" => {
            prompt(output, "Enter two big integers: ")?;
            let Some(a) = tokens.next_token()? else {
                return Ok(Request::EndOfInput);
            };
            let Some(b) = tokens.next_token()? else {
                return Ok(Request::EndOfInput);
            };
            let operation = parse_operand(&a)
                .and_then(|a| Ok(Operation::Mod(a, parse_operand(&b)?)));
            ("Remainder is", operation)
        }
        "2" => {
            prompt(output, "Enter a big integer: ")?;
            let Some(a) = tokens.next_token()? else {
                return Ok(Request::EndOfInput);
            };
            ("answer =", parse_operand(&a).map(Operation::Sqrt))
        }
        "3" => {
            prompt(output, "Enter a big integer: ")?;
            let Some(a) = tokens.next_token()? else {
                return Ok(Request::EndOfInput);
            };
            prompt(output, "Enter pow to raise this big int: ")?;
            let Some(exponent) = tokens.next_token()? else {
                return Ok(Request::EndOfInput);
            };
            let operation = parse_operand(&a)
                .and_then(|a| Ok(Operation::Pow(a, parse_native(&exponent)?)));
            ("answer =", operation)
        }
        "4" => {
            prompt(output, "Enter a sample integer: ")?;
            let Some(n) = tokens.next_token()? else {
                return Ok(Request::EndOfInput);
            };
            ("answer =", parse_native(&n).map(Operation::Convert))
        }
        "5" => {
            prompt(output, "Enter a big integer: ")?;
            let Some(a) = tokens.next_token()? else {
                return Ok(Request::EndOfInput);
            };
            ("answer =", parse_operand(&a).map(Operation::Factorial))
        }
        "6" => return Ok(Request::Exit),
        other => {
            return Ok(Request::Rejected(format!(
                "Invalid choice made: {:?}",
                other
            )))
        }
    };

    Ok(match operation {
        Ok(operation) => Request::Evaluate { label, operation },
        Err(err) => Request::Rejected(format!("{:#}", err)),
    })
}

/// Run the menu until the exit choice or the end of `input`.
///
/// Only I/O failures end the loop with an error; invalid choices, malformed
/// operands and arithmetic errors are written to `output`.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let mut tokens = Tokens::new(input);
    loop {
        output.write_all(MENU.as_bytes())?;
        output.flush()?;

        match read_request(&mut tokens, &mut output)? {
            Request::Evaluate { label, operation } => match evaluate(&operation) {
                Ok(result) => writeln!(output, "\n{} {}", label, result)?,
                Err(err) => {
                    warn!(%err, "operation failed");
                    writeln!(output, "\nError: {}", err)?;
                }
            },
            Request::Rejected(message) => {
                warn!(%message, "rejected menu input");
                writeln!(output, "\n{}", message)?;
            }
            Request::Exit => {
                writeln!(output, "\nExiting...")?;
                return Ok(());
            }
            Request::EndOfInput => return Ok(()),
        }
    }
}
