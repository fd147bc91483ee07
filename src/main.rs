use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

use currency::{log::init_logging, Config, Conversion, ConversionRequest, Error};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Amount to convert
    #[arg(allow_negative_numbers = true)]
    amount: f64,

    /// Currency code to convert from, e.g. EUR
    from_currency: String,

    /// Currency code to convert to, e.g. JPY
    to_currency: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = convert(&cli);
    if let Err(e) = &result {
        tracing::error!(error = ?e, "Conversion failed");
    }

    match report(&result, &mut io::stdout().lock()) {
        Ok(true) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

/// Writes the outcome to `out`, which serves both the result and the error.
/// Returns whether the conversion succeeded.
fn report<W: Write>(result: &Result<Conversion, Error>, out: &mut W) -> io::Result<bool> {
    match result {
        Ok(conversion) => {
            writeln!(out, "{}", conversion)?;
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            Ok(false)
        }
    }
}

fn convert(cli: &Cli) -> Result<Conversion, Error> {
    // No network call is made without a usable configuration.
    let config = Config::load()?;
    let request = ConversionRequest::new(cli.amount, &cli.from_currency, &cli.to_currency)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(Error::Runtime)?;
    runtime.block_on(currency::run(&config, request))
}
