use clap::Parser;
use pasc::errors::PascResult;
use pasc::{codegen, frontend, read};
use std::{fs, path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Pascal subset front end that renders pseudocode",
    long_about = "Pascal subset front end that renders pseudocode.\n\
                 The pipeline tokenizes the source, parses it into an abstract\n\
                 syntax tree, and prints a line-oriented pseudocode rendering.\n\
                 \n\
                 Example usage:\n\
                 pasc input.pas                    # Render pseudocode to stdout\n\
                 pasc input.pas -o output.txt      # Write pseudocode to a file\n\
                 pasc input.pas --show-tokens      # Print the token stream\n\
                 pasc input.pas --show-ast         # Display abstract syntax tree"
)]
struct Cli {
    // The path to the file to compile
    path: PathBuf,

    // Print the token stream after lexing
    #[arg(long)]
    show_tokens: bool,

    // Show AST after parsing
    #[arg(long)]
    show_ast: bool,

    // Output file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn run(cli: &Cli) -> PascResult<()> {
    let source = read(&cli.path)?;

    let tokens = frontend::Lexer::new(&source).tokens()?;
    if cli.show_tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let tree = frontend::Parser::new(tokens).parse()?;
    if cli.show_ast {
        println!("{:#?}", tree);
    }

    let pseudocode = codegen::generate(&tree)?;
    match &cli.output {
        Some(path) => fs::write(path, pseudocode)?,
        None => println!("{}", pseudocode),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
