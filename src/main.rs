// Sprig front end driver: tokenize and parse a source file, persisting the
// token and AST sidecars next to it.

use std::fs;
use std::path::Path;
use std::process;

use sprig::dump;
use sprig::parser::lexer::Lexer;
use sprig::parser::parse::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("sprig");
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} <file.sprig>", program_name);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} demos/hello.sprig", program_name);
        process::exit(1);
    }

    let source_path = Path::new(&args[1]);
    if !source_path.exists() {
        eprintln!("Error: File '{}' not found", source_path.display());
        process::exit(1);
    }

    let source = fs::read_to_string(source_path)?;

    eprintln!("Tokenizing {}...", source_path.display());
    let mut lexer = Lexer::new(&source);
    let tokens = match lexer.tokenize() {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    fs::write(dump::tokens_sidecar(source_path), dump::tokens_json(&tokens)?)?;

    eprintln!("Parsing {}...", source_path.display());
    let mut parser = Parser::new(tokens);
    let program = match parser.parse_program() {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    fs::write(dump::ast_sidecar(source_path), dump::program_json(&program)?)?;

    eprintln!(
        "Parsed successfully. Found {} top-level statements.",
        program.nodes.len()
    );

    Ok(())
}
