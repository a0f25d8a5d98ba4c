use std::{fs::File, io::Read, path::Path};

pub mod ast;
pub mod codegen;
pub mod errors;
pub mod frontend;

pub const VERSION: &str = "0.1.0";

use crate::errors::{PascError, PascResult};

pub fn read(filename: &Path) -> PascResult<String> {
    let path = Path::new(filename);

    match path.extension() {
        Some(ext) => {
            if !ext.eq("pas") {
                return Err(PascError::FileReadError(
                    "File must have a .pas extension".to_string(),
                ));
            }
        }
        None => {
            return Err(PascError::FileReadError(
                "File must have a .pas extension".to_string(),
            ));
        }
    }
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Run the whole pipeline over in-memory source: lex, parse, render.
pub fn compile(source: &str) -> PascResult<String> {
    let tokens = frontend::lexer::lex(source)?;
    let tree = frontend::parser::parse(tokens)?;
    codegen::generate(&tree)
}
