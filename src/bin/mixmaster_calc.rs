//! Utility to run a single mix calculation from the command line
//!
//! Usage:
//!   mixmaster-calc <amount> <gallons|liters> [ratio]
//!   mixmaster-calc --scan <text|-> [ratio]
//!
//! With `--scan -` the pump text is read from stdin.

use std::io::Read;

use mixmaster::config::Config;
use mixmaster::tools::{mixes, readings};

fn usage() -> ! {
    eprintln!("Usage:");
    eprintln!("  mixmaster-calc <amount> <gallons|liters> [ratio]");
    eprintln!("  mixmaster-calc --scan <text|-> [ratio]");
    std::process::exit(2);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--scan") => {
            let Some(text) = args.get(1) else { usage() };
            let text = if text == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                text.clone()
            };
            let fragments: Vec<String> = text.lines().map(str::to_string).collect();

            let ratio = args.get(2).map(String::as_str);
            let response = readings::scan_reading(&config, &fragments, ratio)?;
            match (response.reading, response.mix) {
                (Some(reading), Some(mix)) => {
                    println!("Reading: {} {}", reading.amount, reading.unit);
                    println!("Gas:   {}", mix.gas_display);
                    println!("Ratio: {}", mix.ratio_label);
                    println!("Oil:   {}", mix.oil_display);
                }
                _ => {
                    println!("{}", response.message.unwrap_or_default());
                    std::process::exit(1);
                }
            }
        }
        Some(_) if args.len() >= 2 => {
            let ratio = args.get(2).map(String::as_str);
            let mix = mixes::calculate_mix(&config, &args[0], &args[1], ratio)?;
            println!("Gas:   {}", mix.gas_display);
            println!("Ratio: {}", mix.ratio_label);
            println!("Oil:   {}", mix.oil_display);
        }
        _ => usage(),
    }

    Ok(())
}
