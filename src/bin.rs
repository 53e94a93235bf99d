use std::fmt;
use std::io::{self, stdout, BufRead, Write};
use std::process::exit;

use atty::Stream;
use clap::{App, AppSettings, Arg};
use liner::{Context, Prompt};

use evaluate::{evaluate, EvalError};

const PROMPT: &str = "[]> ";

pub enum RuntimeError {
    Eval(EvalError),
    IO(io::Error),
}

impl From<EvalError> for RuntimeError {
    fn from(data: EvalError) -> RuntimeError {
        RuntimeError::Eval(data)
    }
}

impl From<io::Error> for RuntimeError {
    fn from(data: io::Error) -> RuntimeError {
        RuntimeError::IO(data)
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RuntimeError::Eval(ref e) => write!(f, "evaluate: {}", e),
            RuntimeError::IO(ref e) => write!(f, "evaluate: {}", e),
        }
    }
}

pub fn run(args: Vec<String>) -> Result<(), RuntimeError> {
    let stdout = stdout();
    let mut stdout = stdout.lock();

    if !args.is_empty() {
        writeln!(stdout, "{}", evaluate(&args.join(""))?)?;
    } else if !atty::is(Stream::Stdin) {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            if !line.trim().is_empty() {
                writeln!(stdout, "{}", evaluate(&line)?)?;
            }
        }
    } else {
        let mut con = Context::new();
        loop {
            let line = con.read_line(Prompt::from(PROMPT), None)?;
            match line.trim() {
                "" => (),
                "exit" => break,
                s => match evaluate(s) {
                    Ok(result) => writeln!(stdout, "{}", result)?,
                    Err(e) => writeln!(stdout, "evaluate: {}", e)?,
                },
            }
            con.history.push(line.into())?;
        }
    }
    Ok(())
}

fn main() {
    let matches = App::new("evaluate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Evaluates arithmetic expressions")
        .setting(AppSettings::AllowLeadingHyphen)
        .arg(Arg::with_name("expression").multiple(true).help(
            "expression to evaluate; reads stdin or prompts when omitted",
        ))
        .get_matches();

    let args = matches
        .values_of("expression")
        .map(|values| values.map(String::from).collect())
        .unwrap_or_else(Vec::new);

    let code = match run(args) {
        Ok(()) => 0,
        Err(e) => {
            println!("{}", e);
            1
        }
    };
    exit(code)
}
