use std::{
    fs::{read_to_string, write},
    path::{Path, PathBuf},
    process::exit,
    time::Instant,
};

use clap::Parser;
use log::info;
use notgo::{
    diagnose,
    errors::errors::{Error, ErrorTip},
    generator::generator::generate,
    get_line_at_position,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

/// Translates a notgo source file into address-line pseudo-assembly.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file to translate
    input: PathBuf,

    /// Write the generated code to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print every token
    #[arg(long)]
    tokens: bool,

    /// Print the parsed tree
    #[arg(long)]
    ast: bool,

    /// Show where each syntax error is in the source
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let Ok(source) = read_to_string(&args.input) else {
        println!("Could not open file");
        exit(1);
    };

    let file_name = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let start = Instant::now();
    let tokens = tokenize(&source, file_name);
    info!("Tokenized in {:?}", start.elapsed());

    if args.tokens {
        for token in tokens.iter() {
            token.debug();
        }
    }

    let parse_start = Instant::now();
    let (ast, completed) = parse(tokens);
    info!("Parsed in {:?}", parse_start.elapsed());

    if args.ast {
        println!("{}", ast);
    }

    let check_start = Instant::now();
    let diagnostics = diagnose(&ast, completed);
    info!("Checked in {:?}", check_start.elapsed());

    if !diagnostics.is_empty() {
        print!("{}", diagnostics);

        if args.verbose {
            for error in diagnostics.syntax.iter() {
                display_error(error, &source, &args.input);
            }
        }
        exit(1);
    }

    let generate_start = Instant::now();
    let code = generate(&ast);
    info!("Generated in {:?}", generate_start.elapsed());
    info!("Total time: {:?}", start.elapsed());

    match &args.output {
        Some(path) => {
            if let Err(error) = write(path, &code) {
                println!("Could not write {}: {}", path.display(), error);
                exit(1);
            }
        }
        None => print!("{}", code),
    }
}

fn display_error(error: &Error, source: &str, file: &Path) {
    /*
        Error: UnexpectedToken
        -> main.notgo
           |
        20 | a := #
           | -----^
    */

    let Some(position) = error.get_position() else {
        return;
    };
    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.display());
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_str, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.len() - trimmed.len())
}
