extern crate env_logger;
extern crate translate_seed;

use std::io;
use std::process;

fn main() {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = translate_seed::seed_prompt(stdin.lock(), stdout.lock()) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
