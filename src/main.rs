use std::io;
use std::path::Path;
use std::process;

use uniform_scanner::{JsonReporter, Reporter, TextReporter, UniformScanner};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let json_mode = args.iter().any(|arg| arg == "--json");
    let path = args
        .iter()
        .skip(1)
        .find(|arg| !arg.starts_with("--"))
        .cloned();

    let path = match path {
        Some(p) => p,
        None => {
            eprintln!("usage: uniform-scanner [--json] <shader-file>");
            process::exit(2);
        }
    };

    let stdout = io::stdout();
    let mut reporter: Box<dyn Reporter> = if json_mode {
        Box::new(JsonReporter::new(stdout.lock()))
    } else {
        Box::new(TextReporter::new(stdout.lock()))
    };

    let result = UniformScanner::from_file(Path::new(&path))
        .and_then(|mut scanner| scanner.scan(reporter.as_mut()));

    if let Err(e) = result {
        eprintln!("error: {}", e);
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}
