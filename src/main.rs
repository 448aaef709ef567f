use crate::command_line::GlobalSettings;
use console::style;

mod command_line;
mod compile;
mod context;
mod error;
mod lexer;
mod loader;
mod runtime;
mod test;
mod token;
mod translate;
mod util;

#[quit::main]
fn main() {
    env_logger::init();

    let settings = match GlobalSettings::parse_cmd_line() {
        Some(settings) => settings,
        None => {
            eprintln!("{} nothing to do, try `xc compile --help`", style("error:").red().bold());
            quit::with_code(2)
        }
    };

    if let Err(err) = compile::compile_program(&settings) {
        eprintln!("{} {}", style("error:").red().bold(), err);
        quit::with_code(1)
    }
}
