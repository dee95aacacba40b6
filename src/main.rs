use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use reckon::{
    Diagnostic, EvaluationContext,
    interpreter::{
        evaluator::function::core::BUILTIN_FUNCTIONS,
        plot::{PlotDomain, sweep},
        symbol::constant::CONSTANTS,
    },
};

/// reckon evaluates arithmetic expressions, with named variables and the
/// previous answer available as `ans`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read `contents` as a file with one expression per line.
    #[arg(short, long)]
    file: bool,

    /// Maximum number of fractional digits printed for a result.
    #[arg(short, long, default_value_t = 10)]
    precision: usize,

    /// Number of samples the `plot` command takes.
    #[arg(long, default_value_t = 21)]
    plot_samples: usize,

    /// An expression to evaluate, or a path when `--file` is given. Without
    /// it an interactive session starts.
    contents: Option<String>,
}

/// The `help` text. Constant and function names come from the engine's
/// tables.
fn help_text() -> String {
    let constants = CONSTANTS.iter().map(|(name, _)| *name).collect::<Vec<_>>();

    format!("expressions   2 + 3 * 4, (1 + 2) ^ 2, 1.5e3, -x\n\
             constants     {}\n\
             previous      ans\n\
             functions     {}\n\
             assignment    let name = expression\n\
             commands      vars, ans, clear, plot <start> <end> <expression in x>, help, exit",
            constants.join(", "),
            BUILTIN_FUNCTIONS.join(" "))
}

/// Whether the session should keep reading input.
#[derive(PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The display side of a calculator session.
struct Session {
    context:      EvaluationContext,
    precision:    usize,
    plot_samples: usize,
}

impl Session {
    fn new(args: &Args) -> Self {
        Self { context:      EvaluationContext::new(),
               precision:    args.precision,
               plot_samples: args.plot_samples, }
    }

    /// Runs one line and prints its outcome. Returns whether the session
    /// goes on and whether the line succeeded.
    fn run_line(&mut self, line: &str) -> (Flow, bool) {
        let trimmed = line.trim();
        let (command, rest) = split_word(trimmed);

        match command {
            "exit" | "quit" if rest.is_empty() => return (Flow::Exit, true),
            "help" if rest.is_empty() => println!("{}", help_text()),
            "vars" if rest.is_empty() => {
                if self.context.variables().is_empty() {
                    println!("no variables defined");
                }
                for (name, value) in self.context.variables().all() {
                    println!("{name} = {}", self.format(value));
                }
            },
            "ans" if rest.is_empty() => match self.context.previous_answer() {
                Some(value) => println!("{}", self.format(value)),
                None => println!("no previous answer"),
            },
            "clear" if rest.is_empty() => {
                self.context.clear_variables();
                println!("variables cleared");
            },
            "plot" if !rest.is_empty() => return (Flow::Continue, self.plot(rest)),
            _ => match self.context.evaluate(line) {
                Ok(value) => println!("{}", self.format(value)),
                Err(e) => {
                    report(line, &e);
                    return (Flow::Continue, false);
                },
            },
        }

        (Flow::Continue, true)
    }

    /// `plot <start> <end> <expression>` sweeps the expression over `x` and
    /// prints one row per sample.
    fn plot(&mut self, arguments: &str) -> bool {
        let (start, rest) = split_word(arguments);
        let (end, expression) = split_word(rest);
        if start.is_empty() || end.is_empty() || expression.is_empty() {
            eprintln!("usage: plot <start> <end> <expression in x>");
            return false;
        }

        let mut bounds = [0.0; 2];
        for (bound, text) in bounds.iter_mut().zip([start, end]) {
            match self.context.evaluate_for_plot(text) {
                Ok(value) => *bound = value,
                Err(e) => {
                    report(text, &e);
                    return false;
                },
            }
        }

        let domain = PlotDomain { start:   bounds[0],
                                  end:     bounds[1],
                                  samples: self.plot_samples, };

        match sweep(expression, "x", &domain, &mut self.context) {
            Ok(samples) => {
                for sample in samples {
                    let y = if sample.is_defined() {
                        self.format(sample.y)
                    } else {
                        "undefined".to_string()
                    };
                    println!("{:>16}  {y}", self.format(sample.x));
                }
                true
            },
            Err(e) => {
                report(expression, &e);
                false
            },
        }
    }

    fn format(&self, value: f64) -> String {
        format_number(value, self.precision)
    }

    fn repl(&mut self) {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            if let Err(e) = prompt(&mut io::stdout()) {
                log::error!("cannot write the prompt: {e}");
                break;
            }

            let Some(Ok(line)) = lines.next() else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }
            if self.run_line(&line).0 == Flow::Exit {
                break;
            }
        }
    }
}

/// Writes the REPL prompt and makes sure it is visible before input is read.
fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

/// Splits off the first whitespace-separated word.
fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    text.split_once(char::is_whitespace)
        .map_or((text, ""), |(word, rest)| (word, rest.trim_start()))
}

/// Prints a diagnostic with a caret under the span it points at.
fn report(line: &str, diagnostic: &Diagnostic) {
    if let Some(span) = diagnostic.span() {
        eprintln!("  {line}");
        eprintln!("  {}{}", " ".repeat(span.position), "^".repeat(span.length));
    }
    eprintln!("error: {diagnostic}");
}

/// Formats a result with at most `precision` fractional digits and no
/// trailing zeros. Very large and very small magnitudes use scientific
/// notation.
fn format_number(value: f64, precision: usize) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-6..1e15).contains(&magnitude) {
        return format!("{value:e}");
    }

    let fixed = format!("{value:.precision$}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    if trimmed == "-0" { "0".to_string() } else { trimmed.to_string() }
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let mut session = Session::new(&args);

    match &args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(path).unwrap_or_else(|_| {
                                                     eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                                                     std::process::exit(1);
                                                 });
            for line in script.lines().filter(|line| !line.trim().is_empty()) {
                if session.run_line(line).0 == Flow::Exit {
                    break;
                }
            }
        },
        Some(expression) => {
            if !session.run_line(expression).1 {
                std::process::exit(1);
            }
        },
        None => session.repl(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::{BUILTIN_FUNCTIONS, CONSTANTS, format_number, help_text, prompt, split_word};

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn prompt_reports_a_failed_flush() {
        let mut buffer = Vec::new();
        assert!(prompt(&mut buffer).is_ok());
        assert_eq!(buffer, b"> ");

        assert_eq!(prompt(&mut Closed).map_err(|e| e.kind()), Err(io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn words_are_split_on_any_whitespace() {
        assert_eq!(split_word("plot  -1 1 x ^ 2"), ("plot", "-1 1 x ^ 2"));
        assert_eq!(split_word("vars"), ("vars", ""));
        assert_eq!(split_word(""), ("", ""));
    }

    #[test]
    fn help_lists_every_function_and_constant() {
        let help = help_text();
        assert!(BUILTIN_FUNCTIONS.iter().all(|name| help.contains(name)));
        assert!(CONSTANTS.iter().all(|(name, _)| help.contains(name)));
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        assert_eq!(format_number(14.0, 10), "14");
        assert_eq!(format_number(0.1 + 0.2, 10), "0.3");
        assert_eq!(format_number(-2.5, 10), "-2.5");
        assert_eq!(format_number(-0.0, 10), "0");
    }

    #[test]
    fn extreme_magnitudes_use_scientific_notation() {
        assert_eq!(format_number(2e20, 10), "2e20");
        assert_eq!(format_number(2e-8, 10), "2e-8");
    }
}
