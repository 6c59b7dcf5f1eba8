use std::process::exit;

use clap::{value_parser, Arg, ArgMatches, Command};
use log::info;

use argo::error::ArgoError;
use argo::frontend::{
    lexer::{Lexer, MAX_LEXEME_LEN},
    parser::Parser,
    visualize::Visualizer,
};

/// Parsed when no source is given on the command line.
const SAMPLE: &str = "class MyClass { public int x; private float y; }";

fn main() {
    let matches = Command::new("argo")
        .version("1.0.0")
        .about("Parses a class declaration and prints its abstract syntax tree.")
        .arg(Arg::new("source")
            .value_name("SOURCE")
            .help("Class declaration to parse. Defaults to a small sample class.")
            .takes_value(true)
            .value_parser(value_parser!(String)))
        .arg(Arg::new("verbose")
            .short('v')
            .help("Output the tokens as well as the AST. Useful for debugging.")
            .takes_value(false))
        .arg(Arg::new("dot")
            .long("dot")
            .help("Additionally print the AST as Graphviz DOT graph.")
            .takes_value(false))
        .arg(Arg::new("max-lexeme-len")
            .long("max-lexeme-len")
            .value_name("N")
            .help("Longest identifier or keyword accepted by the lexer (in bytes).")
            .takes_value(true)
            .value_parser(value_parser!(usize)))
        .get_matches();

    let env = env_logger::Env::default()
        .filter("ARGO_LOG")
        .write_style("ARGO_LOG_STYLE");
    env_logger::Builder::new()
        .format_timestamp(None)
        .filter_level(log::LevelFilter::Off)
        .parse_env(env)
        .init();

    if let Err(err) = run(&matches) {
        eprintln!("{}", err);
        exit(1);
    }
}

/// Parses the requested source and prints the results selected by the flags.
fn run(args: &ArgMatches) -> Result<(), ArgoError> {
    let src = args
        .get_one::<String>("source")
        .map(String::as_str)
        .unwrap_or(SAMPLE);
    let max_lexeme_len = args
        .get_one::<usize>("max-lexeme-len")
        .copied()
        .unwrap_or(MAX_LEXEME_LEN);

    // Only output tokens if verbose flag is set.
    if args.is_present("verbose") {
        let tokens = Lexer::with_max_lexeme_len(src, max_lexeme_len).tokenize()?;
        println!("Tokens:");
        tokens.iter().for_each(|token| println!("\t{}", token));
    }

    let ast = Parser::new(Lexer::with_max_lexeme_len(src, max_lexeme_len)).parse()?;
    info!(
        "parsed class {} with {} member(s)",
        ast.label(),
        ast.members().len()
    );
    println!("Abstract Syntax Tree:");
    print!("{}", ast);

    if args.is_present("dot") {
        let mut viz = Visualizer::new("ast", true);
        viz.visualize_ast(&ast);
        println!("{}", viz.graph);
    }
    Ok(())
}
