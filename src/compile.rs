//! take an xc file, translate it and everything it includes, write out the c++

use crate::command_line::GlobalSettings;
use crate::error::{MyError, MyResult};
use crate::loader::FileLoader;
use crate::token::Source;
use crate::translate::Translator;
use std::rc::Rc;

pub const PRELUDE: &str = "core/prelude.xc";

pub fn compile_program(settings: &GlobalSettings) -> MyResult<()> {
    let input = &settings.input_file;
    let data = std::fs::read_to_string(input)
        .map_err(|err| MyError::resource(format!("could not read {:?}: {}", input, err)))?;

    let source = Rc::new(Source::new(input.clone(), data));
    let loader = Rc::new(FileLoader::new(settings.root.clone()));
    let includes = if settings.prelude {
        vec![PRELUDE.to_string()]
    } else {
        vec![]
    };
    let code = Translator::new(source, loader, Default::default(), settings.trace)?
        .with_includes(includes)
        .translate()?;

    match &settings.output_file {
        Some(output) => {
            log::info!("writing {:?}", output);
            std::fs::write(output, code + "\n").map_err(|err| {
                MyError::resource(format!("could not write {:?}: {}", output, err))
            })?
        }
        None => println!("{}", code),
    }
    Ok(())
}
