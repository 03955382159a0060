use std::env;
use std::process;

mod app;
mod cli;
mod regex;

// Usage: echo <subject_line> | crepe <pattern>
// Exit codes: 0 = match, 1 = no match, 2 = usage, input or pattern error.
fn main() {
    let args: Vec<String> = env::args().collect();

    let cfg = match cli::parse_args(args) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    match app::run(cfg) {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            process::exit(2);
        }
    }
}
