use std::{env, fs::read_to_string, path::PathBuf, process, time::Instant};

use eduscript::{lexer::lexer::Lexer, render_error};

/// Logs go to stderr, and only when `RUST_LOG` is set,
/// e.g. `RUST_LOG=eduscript=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: {} <file>", args.first().map_or("eduscript", String::as_str));
        process::exit(2);
    }

    let file_path = PathBuf::from(&args[1]);
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let source = match read_to_string(&file_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file_path.display(), err);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let mut lexer = Lexer::new(source, file_name);
    let mut count = 0;

    loop {
        match lexer.scan_token() {
            Ok(token) => {
                println!("{}", token.debug());
                count += 1;

                if token.is_eof() {
                    break;
                }
            }
            Err(error) => {
                eprint!("{}", render_error(&error, lexer.source()));
                process::exit(1);
            }
        }
    }

    println!("Tokenized {} tokens in {:?}", count, start.elapsed());
}
