//! linum CLI
//!
//! Digit-sequence big-integer arithmetic and infix to postfix conversion.

use linumc::commands::{Cli, Options, USAGE};

fn main() {
    linumc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let cli = match Cli::parse(&args) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{}", err.render(Options::default()));
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(err.exit_code());
        }
    };

    match cli.command.run() {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("{}", err.render(cli.options));
            std::process::exit(err.exit_code());
        }
    }
}
