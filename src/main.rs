extern crate green_measures;

use anyhow::Context;
use clap::{Args, Parser};
use green_measures::input::{ingest_config, ingest_modifiers, ImpactConfig};
use green_measures::output::FileOutput;
use green_measures::{run_project, Modifier};
use std::ffi::OsStr;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, Level};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct ImpactArgs {
    /// Path to a CSV of baseline monthly electricity consumption
    consumption_file: String,
    #[command(flatten)]
    modifier_choice: ModifierChoice,
    #[arg(long, short, help = "Path to a JSON file of tariff and measure assumptions")]
    config_file: Option<String>,
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

#[derive(Args, Clone, Default, Debug)]
#[group(required = false, multiple = true)]
struct ModifierChoice {
    #[arg(
        long,
        short,
        conflicts_with_all = ["solar_panels", "led_lighting", "all_disabled"],
        help = "Path to a JSON array of modifier selections"
    )]
    modifiers_file: Option<String>,
    #[arg(long)]
    solar_panels: Option<u32>,
    #[arg(long, default_value_t = false)]
    led_lighting: bool,
    #[arg(
        long,
        default_value_t = false,
        conflicts_with_all = ["solar_panels", "led_lighting"],
        help = "Evaluate with every measure present but switched off"
    )]
    all_disabled: bool,
}

impl ModifierChoice {
    fn modifiers(&self) -> anyhow::Result<Vec<Modifier>> {
        if let Some(file) = &self.modifiers_file {
            return ingest_modifiers(BufReader::new(
                File::open(file).with_context(|| format!("Could not open {file}"))?,
            ));
        }
        if self.all_disabled {
            return Ok(Modifier::all_disabled());
        }

        Ok(vec![
            Modifier::SolarPanels(self.solar_panels.unwrap_or(0)),
            Modifier::LedLighting(self.led_lighting),
        ])
    }
}

fn main() -> anyhow::Result<()> {
    let args = ImpactArgs::parse();

    let tracing_subscriber = tracing_subscriber::fmt::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .finish();
    tracing::subscriber::set_global_default(tracing_subscriber)
        .expect("setting tracing subscriber failed");

    let config = match &args.config_file {
        Some(file) => ingest_config(BufReader::new(
            File::open(file).with_context(|| format!("Could not open {file}"))?,
        ))?,
        None => ImpactConfig::default(),
    };
    let modifiers = args.modifier_choice.modifiers()?;
    debug!(?config, ?modifiers, "parsed inputs");

    let input_file = args.consumption_file.as_str();
    let input_file_ext = Path::new(input_file).extension().and_then(OsStr::to_str);
    let input_file_stem = match input_file_ext {
        Some(ext) => &input_file[..(input_file.len() - ext.len() - 1)],
        None => input_file,
    };
    let input_file_stem = PathBuf::from(input_file_stem);
    let input_file_name = input_file_stem
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or("consumption");

    let output_path = input_file_stem.with_file_name(format!("{input_file_name}__results"));
    fs::create_dir_all(&output_path)?;
    let file_output = FileOutput::new(output_path, format!("{input_file_name}__{{}}.{{}}"));

    let results = run_project(
        BufReader::new(File::open(Path::new(input_file))?),
        &modifiers,
        config,
        file_output,
    )?;

    print!("{}", results.summary);

    Ok(())
}
