//! A tiny build timestamp header generator. Writes the current Unix time into an
//! include-guarded C header so that a firmware build can compile in the moment it
//! was stamped. Designed to be invoked once per build by the surrounding build
//! system and nothing else.
//!
//! Get started with `cargo install mkstamp`
extern crate clap;

use clap::Parser;
use errors::Error;
use time::SystemTimeProvider;

mod color;
mod debug;
mod errors;
mod header;
mod test_time;
mod time;

const NAME: &str = "Mkstamp";
const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHOR: &str = "Alan Vardy <alan@vardy.cc>";
const ABOUT: &str = "A tiny build timestamp header generator";
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BUILD_PROFILE"),
    " build for ",
    env!("BUILD_TARGET"),
    ", stamped ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

#[derive(Parser, Clone)]
#[command(name = NAME)]
#[command(version = VERSION)]
#[command(long_version = LONG_VERSION)]
#[command(about = ABOUT, long_about = None)]
#[command(author = AUTHOR)]
#[command(arg_required_else_help(true))]
struct Cli {
    /// Path of the header file to write, created or overwritten
    outfile: String,

    #[arg(short, long, default_value_t = false)]
    /// Display additional debug info while processing
    verbose: bool,
}

#[cfg(not(tarpaulin_include))]
fn main() {
    let cli = Cli::parse();

    match generate(&cli) {
        Ok(text) => {
            println!("{text}");
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("\n\n{e}");
            std::process::exit(1);
        }
    }
}

fn generate(cli: &Cli) -> Result<String, Error> {
    let Cli { outfile, verbose } = cli;
    debug::maybe_print(
        *verbose,
        format!("Writing build timestamp header to {outfile}"),
    );

    let timestamp = header::write(outfile, &SystemTimeProvider)?;
    debug::maybe_print(*verbose, format!("Stamped {timestamp}"));

    Ok(color::green_string("✓"))
}

// --- TESTS ---

#[test]
fn verify_cmd() {
    use clap::CommandFactory;
    // Mostly checks that it is not going to throw an exception because of conflicting short arguments
    Cli::try_parse().err();
    Cli::command().debug_assert();
}
