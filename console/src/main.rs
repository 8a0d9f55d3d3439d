use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use hotel_console::{render, Console, Flow, Line};
use hotel_core::{GatewayConfig, Session, DEFAULT_BASE_URL};
use tracing::{debug, Level};

#[derive(Parser, Debug)]
#[command(name = "hotel-console", version, about = "Exercise the hotel reservation REST API")]
struct Args {
    /// Base URL of the reservation API
    #[arg(long, env = "HOTEL_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Log every request and response status to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::ERROR })
        .init();

    debug!(base_url = %args.base_url, "starting console");
    let mut console = Console::new(Session::from_config(&GatewayConfig::new(args.base_url)));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input).context("reading command")? == 0 {
            break;
        }
        if input.trim().is_empty() {
            continue;
        }

        let line = match Line::parse_line(&input) {
            Ok(line) => line,
            Err(err) => {
                // clap renders its own usage text, help included
                write!(stdout, "{err}")?;
                continue;
            }
        };
        if console.execute(line.command) == Flow::Quit {
            break;
        }
        writeln!(stdout, "{}", render(&console.session().display()))?;
    }
    Ok(())
}
