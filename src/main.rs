use std::process;

use clap::Parser;
use log::{debug, error, info};
use vessel::{AnyTank, Report, Tank};

mod cli;
mod config;
mod error;
mod schematic;

use self::cli::Args;
use self::config::{Config, Format};
use self::error::Error;

fn format_text(tank: &AnyTank, report: &Report) -> String {
  let mut lines = vec![
    format!("Geometry:      {} ({} heads)", tank.geometry(), tank.head()),
    format!("Total volume:  {:.2} m³ ({:.2} L / {:.2} gal)", report.total_volume, report.total_liters, report.total_gallons),
    format!("Liquid volume: {:.2} m³ ({:.2} L / {:.2} gal)", report.liquid_volume, report.liquid_liters, report.liquid_gallons),
    format!("Empty volume:  {:.2} m³ ({:.2} L / {:.2} gal)", report.empty_volume, report.empty_liters, report.empty_gallons),
    format!("Mass:          {:.2} kg", report.mass),
    format!("Filled:        {:.1} %", report.fill_percentage),
  ];

  lines.iter_mut().for_each(|line| line.push('\n'));
  lines.concat()
}

fn run(config: &Config, raw: &vessel::RawInput) -> Result<String, Error> {
  let input = raw.parse(config.mode)?;
  debug!("Parsed input: {:?}", input);

  let tank = input.build(config.mode)?;
  info!("Calculating {} tank …", tank.geometry());

  let report = Report::new(&tank);

  match config.format {
    Format::Json => Ok(serde_json::to_string_pretty(&report)?),
    Format::Text => {
      let mut output = format_text(&tank, &report);

      if config.schematic {
        output.push('\n');

        for line in schematic::render(tank.geometry(), tank.head(), tank.fill_percentage()) {
          output.push_str(&line);
          output.push('\n');
        }
      }

      Ok(output.trim_end().to_owned())
    },
  }
}

fn main() {
  env_logger::init();

  let args = Args::parse();
  let config = args.config();
  let raw = args.raw_input();

  match run(&config, &raw) {
    Ok(output) => println!("{}", output),
    Err(err) => {
      error!("{}", err);
      eprintln!("Error: {}", err);
      process::exit(1);
    },
  }
}
