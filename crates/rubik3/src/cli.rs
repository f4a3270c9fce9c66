use std::io::BufRead;
use std::path::PathBuf;

use eyre::{Context, Result};
use rubik3_prefs::Preferences;

use crate::driver::{Driver, DriverOptions};
use crate::net::{self, NetStyle};

/// 3x3x3 twisty puzzle in the terminal
///
/// If no subcommand is specified, then keys are read from standard input one
/// line at a time and the cube is printed after each line.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Option<Subcommand>,

    /// Preferences file to load instead of the default one.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,
    /// Print stickers as plain letters, without color.
    #[arg(long, global = true)]
    pub no_color: bool,
    /// Print the angle of the turning layer on every tick.
    #[arg(long, global = true)]
    pub frames: bool,
    /// Wait for the tick interval between ticks.
    #[arg(long, global = true)]
    pub realtime: bool,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply turns written in move notation (such as `R U R' U'`) and print
    /// the result.
    Play {
        /// Turns to apply.
        moves: Vec<String>,
    },
    /// Press keys as if typed, and print the result.
    Keys {
        /// Keys to press.
        keys: String,
    },
    /// Check that every turn behaves as a quarter turn of the cube.
    Verify,
    /// Print the preferences in effect as YAML.
    Prefs {
        /// Also write them to the default preferences file.
        #[arg(long)]
        save: bool,
    },
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let prefs = Preferences::load(args.prefs.as_deref());
    let style = match args.no_color {
        true => NetStyle::Plain,
        false => NetStyle::Color,
    };
    let options = DriverOptions {
        realtime: args.realtime,
        frames: args.frames,
    };
    let mut driver = Driver::new(&prefs, options);

    match args.subcommand {
        None => interactive(&mut driver, style),

        Some(Subcommand::Play { moves }) => {
            let turns = rubik3_core::parse_turns(&moves.join(" "))?;
            driver.play(&turns)?;
            print_cube(&driver, style);
            Ok(())
        }

        Some(Subcommand::Keys { keys }) => {
            driver.press_keys(&keys)?;
            print_cube(&driver, style);
            Ok(())
        }

        Some(Subcommand::Verify) => crate::verify::run(),

        Some(Subcommand::Prefs { save }) => {
            print!("{}", prefs.to_yaml_string()?);
            if save {
                let path = rubik3_prefs::paths::prefs_file()?;
                prefs.save(path)?;
                eprintln!("saved to {}", path.display());
            }
            Ok(())
        }
    }
}

fn interactive(driver: &mut Driver, style: NetStyle) -> Result<()> {
    print_cube(driver, style);
    for line in std::io::stdin().lock().lines() {
        let line = line.wrap_err("error reading standard input")?;
        if !driver.press_keys(&line)? {
            log::info!("Quitting");
            break;
        }
        print_cube(driver, style);
    }
    Ok(())
}

fn print_cube(driver: &Driver, style: NetStyle) {
    print!("{}", net::render(driver.puzzle().cube(), style));
    println!("{}", driver.status());
}
