use barbell_rs::{
    breakdown::{compute_plate_breakdown, load_range},
    calculator::PlateCalculator,
    weight_unit::WeightUnit,
};
use clap::Parser;

/// Prints the breakdown and unloaded leftover for every load in a range.
#[derive(Parser)]
struct Args {
    #[arg(short, long, default_value = "lb")]
    unit: WeightUnit,

    #[arg(short, long, default_value = "standard")]
    bar: String,

    #[arg(long)]
    from: Option<f64>,

    #[arg(long, default_value_t = 100.0)]
    to: f64,

    #[arg(long, default_value_t = 5.0)]
    step: f64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    anyhow::ensure!(args.step.is_finite() && args.step > 0.0, "step must be positive");
    anyhow::ensure!(args.to.is_finite(), "to must be a finite weight");

    let calculator = PlateCalculator::default();
    let plates = calculator.config().plates(args.unit);
    let bar = calculator.parse_bar(&args.bar)?.weight(args.unit);
    let from = args.from.unwrap_or(bar);
    anyhow::ensure!(from.is_finite(), "from must be a finite weight");

    println!("=== {} plates on a {}{} bar ===\n", args.unit, bar, args.unit);

    for target in load_range(from, args.to, args.step) {
        let breakdown = compute_plate_breakdown(target, bar, plates);
        let leftover = target - breakdown.loaded(bar);

        println!("{target:>7} {}: {breakdown} (leftover {leftover})", args.unit);
    }

    Ok(())
}
