use clap::{clap_app, App};
use std::path::PathBuf;

pub struct GlobalSettings {
    pub input_file: String,
    pub output_file: Option<String>,
    pub trace: bool,
    /// where includes are looked up when they're not next to us
    pub root: PathBuf,
    pub prelude: bool,
}

impl GlobalSettings {
    pub fn parse_cmd_line() -> Option<Self> {
        let matches = command_line().get_matches();

        let compile_m = matches.subcommand_matches("compile")?;
        let root = compile_m
            .value_of("root")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("XC_ROOT").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("lib"));
        Some(GlobalSettings {
            input_file: compile_m.value_of("INPUT")?.to_owned(),
            output_file: compile_m.value_of("OUTPUT").map(str::to_owned),
            trace: compile_m.is_present("trace"),
            root,
            prelude: !compile_m.is_present("no_prelude"),
        })
    }
}

fn command_line<'a, 'b>() -> App<'a, 'b> {
    clap_app!(xc =>
        (about: "translates xc source into c++")
        (version: env!("CARGO_PKG_VERSION"))

        (@subcommand compile =>
            (about: "translate INPUT, writing to OUTPUT or stdout")
            (@arg INPUT: +required "xc file to translate")
            (@arg OUTPUT: "where to put the c++")
            (@arg trace: -t --trace "Keep a call stack for tracebacks")
            (@arg root: -r --root +takes_value "Include root, defaults to $XC_ROOT or the bundled lib/")
            (@arg no_prelude: -P --("no-prelude") "Don't include core/prelude.xc")
        )
    )
}
