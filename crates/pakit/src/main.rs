use std::process;

use clap::Parser;

use pakit::cli::{App, Commands};
use pakit::report::ConsoleReporter;
use pakit::workflow::{self, Context, Step, hash_file, verify_file};

fn main() {
    let app = App::parse();

    let Commands::Hash(args) = app.cmd;
    let mut ctx = Context::new(args, Box::new(ConsoleReporter));
    let steps: &[Step] = &[verify_file, hash_file];

    if let Err(err) = workflow::run(&mut ctx, steps) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }

    if let Some(code) = ctx.termination() {
        process::exit(code);
    }
}
