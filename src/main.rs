mod timer;

use std::{
    io::{self, BufWriter, Write},
    process,
    str::FromStr,
};

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

use hilbert_order::{cell_count, check_order, curve, d2xy, xy2d, Error};

use crate::timer::Timer;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn is_u32(s: String) -> Result<(), String> {
    u32::from_str(&s)
        .and(Ok(()))
        .or_else(|_| Err("must be a non-negative 32-bit integer".to_string()))
}

fn is_u64(s: String) -> Result<(), String> {
    u64::from_str(&s)
        .and(Ok(()))
        .or_else(|_| Err("must be a non-negative 64-bit integer".to_string()))
}

fn main() {
    let args = App::new("hilbert_order")
        .version(VERSION)
        .about("Maps between grid coordinates and positions along a Hilbert curve")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("order")
                .value_name("ORDER")
                .help("Side length of the grid (a power of two)")
                .required(true)
                .index(1)
                .validator(is_u32),
        )
        .arg(
            Arg::with_name("stats")
                .long("stats")
                .help("Print timing statistics to stderr"),
        )
        .subcommand(
            SubCommand::with_name("encode")
                .about("Prints the curve index of the cell (X, Y)")
                .arg(
                    Arg::with_name("x")
                        .value_name("X")
                        .required(true)
                        .index(1)
                        .validator(is_u32),
                )
                .arg(
                    Arg::with_name("y")
                        .value_name("Y")
                        .required(true)
                        .index(2)
                        .validator(is_u32),
                ),
        )
        .subcommand(
            SubCommand::with_name("decode")
                .about("Prints the cell at curve index D")
                .arg(
                    Arg::with_name("d")
                        .value_name("D")
                        .required(true)
                        .index(1)
                        .validator(is_u64),
                ),
        )
        .subcommand(
            SubCommand::with_name("table")
                .about("Prints the curve index of every cell, one grid row per line"),
        )
        .subcommand(
            SubCommand::with_name("path")
                .about("Prints every step along the curve as \"d x y\""),
        )
        .get_matches();

    let t = Timer::new();

    // Validators have already run, so these parses can't fail.
    let order = u32::from_str(args.value_of("order").unwrap()).unwrap();

    if let Err(e) = run(order, &args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if args.is_present("stats") {
        eprintln!("Finished in {:.3}s (order {}).", t.elapsed(), order);
    }
}

fn run(order: u32, args: &ArgMatches) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    check_order(order)?;

    match args.subcommand() {
        ("encode", Some(sub)) => {
            let x = u32::from_str(sub.value_of("x").unwrap()).unwrap();
            let y = u32::from_str(sub.value_of("y").unwrap()).unwrap();
            let d = xy2d(order, x, y)?;
            writeln!(out, "{}", d).ok();
        }

        ("decode", Some(sub)) => {
            let d = u64::from_str(sub.value_of("d").unwrap()).unwrap();
            let (x, y) = d2xy(order, d)?;
            writeln!(out, "{} {}", x, y).ok();
        }

        ("table", Some(_)) => {
            let width = format!("{}", cell_count(order) - 1).len();
            for row in 0..order {
                let mut line = String::new();
                for col in 0..order {
                    if col > 0 {
                        line.push(' ');
                    }
                    line.push_str(&format!("{:>w$}", xy2d(order, row, col)?, w = width));
                }
                if writeln!(out, "{}", line).is_err() {
                    // Downstream closed the pipe.
                    return Ok(());
                }
            }
        }

        ("path", Some(_)) => {
            for (d, x, y) in curve(order)? {
                if writeln!(out, "{} {} {}", d, x, y).is_err() {
                    return Ok(());
                }
            }
        }

        _ => unreachable!(),
    }

    out.flush().ok();
    Ok(())
}
