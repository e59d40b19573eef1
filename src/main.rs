use clap::Parser;
use clap::error::ErrorKind;
use std::io;
use std::process::ExitCode;
use tia::cli;
use tia::error::Error;

fn main() -> ExitCode {
    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                // Argument errors print a usage line to stdout, not a
                // clap diagnostic to stderr.
                println!("{}", cli::USAGE);
                return ExitCode::from(1);
            }
        },
    };

    let config = args.into_config();
    match tia::run(&config, io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn print_error(error: &Error) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
