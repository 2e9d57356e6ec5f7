// Author: Dustin Pilgrim
// License: MIT

mod cli;
mod config;
mod logging;
mod simulate;

use clap::Parser;

use eventline::{debug, info};

use cli::{Args, Cmd};
use cropit_engine::HANDLES;
use simulate::SimulateArgs;

fn main() {
    let args = Args::parse();

    // init logging first
    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(logging::default_log_path);

    if let Err(e) = logging::init_logging(&log_path, args.verbose) {
        // logging should never block normal usage
        eprintln!("cropit: failed to init logging: {e}");
    }

    if let Err(e) = run(args) {
        // user-facing error
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    info!("starting cropit");
    debug!("parsed args: {:?}", args.cmd);

    let cfg = config::load(args.config.as_deref())?;

    match args.cmd {
        Cmd::Simulate {
            container,
            media,
            ratio,
            min_size,
            max_size,
            start_size,
            mode,
            steps,
        } => simulate::run(
            &cfg,
            SimulateArgs {
                container,
                media,
                ratio,
                min_size,
                max_size,
                start_size,
                mode,
                steps,
            },
        ),

        Cmd::Handles => {
            for h in &HANDLES {
                println!(
                    "{:<10} pos=({:.1}, {:.1}) moves: top={} right={} bottom={} left={}",
                    h.cursor,
                    h.position.x,
                    h.position.y,
                    h.top(),
                    h.right(),
                    h.bottom(),
                    h.left()
                );
            }
            Ok(())
        }

        Cmd::CheckConfig => {
            let opts = cfg.to_options();
            match opts.aspect_ratio {
                Some(r) => println!("aspect_ratio: {r}"),
                None => println!("aspect_ratio: free"),
            }
            match opts.min_size {
                Some(s) => println!("min_size: {s}"),
                None => println!("min_size: none"),
            }
            match opts.max_size {
                Some(s) => println!("max_size: {s}"),
                None => println!("max_size: none"),
            }
            println!("start_size: {}", opts.start_size);
            println!("return_mode: {}", opts.return_mode);
            opts.validate().map_err(|e| e.to_string())
        }
    }
}
