use clap::Parser;
use itertools::Itertools;

use prcalc_rs::{
    nearest::nearest_loadable_total,
    percent::{DEFAULT_FROM_PERCENT, DEFAULT_STEP_PERCENT, DEFAULT_TO_PERCENT, percentage_table},
    preferences::WeightPreferences,
    solver::solve,
    unit::Unit,
};

/// Barbell loadout calculator: converts target weights into the plates to
/// put on each side of the bar.
#[derive(Parser)]
struct Args {
    /// Target total weights, in the working unit.
    targets: Vec<f64>,

    /// Working unit for targets and output.
    #[arg(long, default_value = "kg", value_parser = clap::value_parser!(Unit))]
    unit: Unit,

    /// Bar weight override.
    #[arg(long)]
    bar: Option<f64>,

    /// Rounding increment override.
    #[arg(long)]
    rounding: Option<f64>,

    /// Available plate weights, comma separated, one physical plate each.
    #[arg(long, value_delimiter = ',')]
    plates: Option<Vec<f64>>,

    /// Treat each target as a max lift and print a percentage sweep.
    #[arg(long)]
    percents: bool,

    /// Emit loadouts as JSON documents.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut prefs = WeightPreferences::default_for(args.unit);
    if let Some(bar) = args.bar {
        prefs.bar_weight = bar;
    }
    if let Some(rounding) = args.rounding {
        prefs.rounding = rounding;
    }
    if let Some(plates) = args.plates {
        prefs.plates = plates;
    }

    if args.targets.is_empty() {
        print_prefs(&prefs);
        print_prefs(&prefs.reproject(prefs.unit.other())?);
        return Ok(());
    }

    for &target in &args.targets {
        if args.percents {
            let rows = percentage_table(
                target,
                &prefs,
                DEFAULT_FROM_PERCENT,
                DEFAULT_TO_PERCENT,
                DEFAULT_STEP_PERCENT,
            )?;
            for row in rows {
                println!("{:>5}%  {}", row.percent, row.loadout);
            }
        } else if args.json {
            let loadout = solve(target, &prefs)?;
            println!("{}", serde_json::to_string_pretty(&loadout)?);
        } else {
            let loadout = solve(target, &prefs)?;
            println!("{loadout}");

            if loadout.delta().abs() > 1e-9 {
                let nearest = nearest_loadable_total(target, &prefs)?;
                println!("  nearest loadable total: {} {}", nearest.total, prefs.unit);
            }
        }
    }

    Ok(())
}

fn print_prefs(prefs: &WeightPreferences) {
    println!(
        "{}: {} bar, rounding {}, plates [{}]",
        prefs.unit,
        prefs.bar_weight,
        prefs.rounding,
        prefs.plates.iter().map(ToString::to_string).join(", ")
    );
}
