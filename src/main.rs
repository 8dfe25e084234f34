use std::process::ExitCode;

use clap::Parser;
use intpoly::Polynomial;
use tracing::Level;

/// Combine two polynomials written as `3x^2+2x^1-1x^0` and optionally
/// evaluate them at a point.
#[derive(Parser, Debug)]
#[command(name = "intpoly", version)]
struct Cli {
    /// First polynomial
    #[arg(allow_hyphen_values = true)]
    p: String,

    /// Second polynomial
    #[arg(allow_hyphen_values = true)]
    q: String,

    /// Evaluation point
    #[arg(allow_negative_numbers = true)]
    x: Option<f64>,

    /// Emit trace logs on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::TRACE } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let p = match cli.p.parse::<Polynomial>() {
        Ok(p) => p,
        Err(err) => {
            eprintln!("p: {err}");
            return ExitCode::FAILURE;
        }
    };
    let q = match cli.q.parse::<Polynomial>() {
        Ok(q) => q,
        Err(err) => {
            eprintln!("q: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("p     = {p}");
    println!("q     = {q}");
    println!("p + q = {}", &p + &q);
    println!("p - q = {}", &p - &q);
    println!("p * q = {}", &p * &q);
    println!("-p    = {}", -&p);
    println!("p = q : {}", p == q);

    if let Some(x) = cli.x {
        for (name, poly) in [("p", &p), ("q", &q)] {
            match poly.evaluate(x) {
                Ok(v) => println!("{name}({x}) = {v}"),
                Err(err) => println!("{name}({x}) undefined: {err}"),
            }
        }
    }

    ExitCode::SUCCESS
}
