use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{bail, Context, Result};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use thompson_nfa::Regex;

const USAGE: &str = "usage: thompson-nfa [-d|--debug] [--ast] -E <pattern>";

#[derive(Debug, PartialEq, Eq)]
struct Args {
    pattern: String,
    debug: bool,
    print_ast: bool,
}

fn parse_args<I>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut pattern = None;
    let mut debug = false;
    let mut print_ast = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-E" => pattern = Some(args.next().context("-E expects a pattern")?),
            "-d" | "--debug" => debug = true,
            "--ast" => print_ast = true,
            other => bail!("unexpected argument `{other}`\n{USAGE}"),
        }
    }

    let Some(pattern) = pattern else {
        bail!("missing -E <pattern>\n{USAGE}");
    };
    Ok(Args {
        pattern,
        debug,
        print_ast,
    })
}

fn setup_logging(debug: bool) -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} {m}{n}")))
        .build();

    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

// Returns whether any input line matched.
fn run<R, W>(args: &Args, input: R, mut out: W) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    let regex = Regex::new(&args.pattern)
        .with_context(|| format!("invalid pattern `{}`", args.pattern))?;

    if args.print_ast {
        writeln!(out, "{}", regex.ast())?;
        return Ok(true);
    }

    let mut matched = false;
    for line in input.lines() {
        let line = line.context("failed to read input")?;
        if regex.is_match(&line) {
            writeln!(out, "{line}")?;
            matched = true;
        }
    }
    log::debug!("pattern `{regex}` matched: {matched}");
    Ok(matched)
}

// Usage: echo <input_text> | thompson-nfa -E <pattern>
fn main() {
    let result = parse_args(env::args().skip(1)).and_then(|args| {
        setup_logging(args.debug)?;
        run(&args, io::stdin().lock(), io::stdout().lock())
    });

    match result {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            process::exit(2)
        }
    }
}
