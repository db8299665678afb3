use std::path::PathBuf;

use anyhow::Context;
use barbell_rs::{
    calculator::PlateCalculator,
    config::CalculatorConfig,
    logging,
    preferences::PercentageStore,
    request::{CalculationRequest, Load},
    warmup::WarmupPercentages,
    weight_unit::WeightUnit,
};
use clap::Parser;

#[derive(Parser)]
#[command(about = "Plates per side and warm-up sets for a barbell load")]
struct Args {
    /// Target load, e.g. 225, 225lb or 100kg.
    load: Load,

    /// standard (45lb/20kg), womens (35lb/15kg) or a bar weight in pounds.
    #[arg(short, long, default_value = "standard")]
    bar: String,

    /// Unit to load the bar in.
    #[arg(short, long, default_value = "lb")]
    unit: WeightUnit,

    /// Also print warm-up sets.
    #[arg(short, long)]
    warmup: bool,

    /// Warm-up percentages, e.g. 40,55,70,80,90. Defaults to the stored list.
    #[arg(short, long)]
    percentages: Option<WarmupPercentages>,

    /// Remember --percentages for later runs.
    #[arg(long, requires = "percentages")]
    save_percentages: bool,

    /// Where warm-up percentages are stored.
    #[arg(long)]
    preferences: Option<PathBuf>,

    /// JSON file overriding plate sets and rounding.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init(if args.verbose { "debug" } else { "warn" });

    let config = match &args.config {
        Some(path) => CalculatorConfig::load(path)?,
        None => CalculatorConfig::default(),
    };
    let calculator = PlateCalculator::new(config);

    let store = match args.preferences {
        Some(path) => Some(PercentageStore::new(path)),
        None => PercentageStore::default_location().ok(),
    };

    let percentages = match args.percentages {
        Some(percentages) => {
            if args.save_percentages {
                let store = store
                    .as_ref()
                    .context("no location to save warm-up percentages, pass --preferences")?;
                store.save(&percentages)?;
            }
            percentages
        }
        None => {
            let fallback = &calculator.config().default_percentages;
            store
                .as_ref()
                .map_or_else(|| fallback.clone(), |store| store.load_or(fallback))
        }
    };

    let bar = calculator.parse_bar(&args.bar)?;
    let request = CalculationRequest::from_load(args.load, bar, args.unit);
    let calculation = calculator.calculate(&request, args.warmup.then_some(&percentages));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&calculation)?);
        return Ok(());
    }

    let unit = calculation.unit;
    println!("Target: {}{unit}", calculation.target);
    println!("Bar:    {}{unit}", calculation.bar);
    println!("Plates: {}", calculation.plates);
    if calculation.loaded != calculation.target {
        println!("Loaded: {}{unit}", calculation.loaded);
    }

    if let Some(warmup) = calculation.warmup {
        println!();
        println!("Warm-up ({percentages}):");
        for set in warmup {
            println!("  - {set}");
        }
    }

    Ok(())
}
