use itertools::Itertools;

use crate::{
    calc_error::CalcError, loadout::PlateLoadout, preferences::WeightPreferences,
    rounding::round_to_increment,
};

/// Upper bound on solvable targets, in either unit. The heaviest barbell
/// lifts on record sit two orders of magnitude below this; anything above it
/// is treated as input corruption rather than a workout.
pub const MAX_TARGET_WEIGHT: f64 = 10_000.0;

/// Weights are quantized to integer thousandths for the search grid.
const MILLI: f64 = 1000.0;

/// Absorbs float error when a per-side budget lands a hair under a grid line.
const BUDGET_EPS: f64 = 1e-6;

/// Finds the best symmetric loadout for `target_weight`: the combination of
/// plate pairs whose total is the largest achievable value at or under the
/// target once it has been snapped to the rounding increment.
///
/// Plate sets are user-supplied and not guaranteed to form a canonical
/// denomination system, so largest-first greedy picking can strand weight
/// (with plates [25, 20, 10] and 40 per side, greedy loads 25 + 10 = 35 while
/// 20 + 20 reaches 40). The search is an exact unbounded subset-sum
/// maximization instead.
///
/// # Errors
/// `InvalidWeight` for a negative, non-finite, or absurdly large target,
/// `TargetBelowBar` when the bar alone already exceeds it, and whatever
/// `WeightPreferences::validate` reports for a broken bundle.
///
pub fn solve(target_weight: f64, prefs: &WeightPreferences) -> Result<PlateLoadout, CalcError> {
    if !target_weight.is_finite() || target_weight < 0.0 || target_weight > MAX_TARGET_WEIGHT {
        return Err(CalcError::InvalidWeight(target_weight));
    }

    prefs.validate()?;

    if target_weight < prefs.bar_weight {
        return Err(CalcError::TargetBelowBar {
            target: target_weight,
            bar: prefs.bar_weight,
        });
    }

    let rounded_target = round_to_increment(target_weight, prefs.rounding)?;

    // Negative budgets clamp to zero: rounding can pull the target under the
    // bar, and the answer there is the bare bar.
    let per_side_budget = ((rounded_target - prefs.bar_weight) / 2.0).max(0.0);
    let budget_milli = (per_side_budget * MILLI + BUDGET_EPS).floor() as u64;

    // Distinct denominations, heaviest first. Plates below half a milli-unit
    // fall off the grid.
    let denominations: Vec<u64> = prefs
        .plates
        .iter()
        .map(|&plate| to_milli(plate))
        .filter(|&plate| plate > 0)
        .sorted_unstable_by(|a, b| b.cmp(a))
        .dedup()
        .collect();

    let per_side_milli = best_per_side(budget_milli, &denominations);
    let per_side_sum: u64 = per_side_milli.iter().sum();

    tracing::debug!(
        target = rounded_target,
        budget = per_side_budget,
        plates = per_side_milli.len(),
        "solved loadout"
    );

    Ok(PlateLoadout {
        per_side: per_side_milli.iter().map(|&plate| from_milli(plate)).collect(),
        bar_weight: prefs.bar_weight,
        total_weight: prefs.bar_weight + 2.0 * from_milli(per_side_sum),
        target_weight: rounded_target,
        unit: prefs.unit,
    })
}

/// Exact unbounded subset-sum maximization over `denominations` (descending,
/// deduped, in milli-units). Returns the winning combination heaviest-first.
fn best_per_side(budget_milli: u64, denominations: &[u64]) -> Vec<u64> {
    let Some(&smallest) = denominations.last() else {
        return Vec::new();
    };

    if budget_milli < smallest {
        return Vec::new();
    }

    // Every reachable sum is a multiple of the denomination gcd, so the table
    // only needs one cell per multiple.
    let grid = denominations.iter().fold(0, |acc, &d| gcd(acc, d));
    let cells = (budget_milli / grid) as usize;
    let scaled: Vec<usize> = denominations.iter().map(|&d| (d / grid) as usize).collect();

    // counts[s] = fewest plates summing to exactly s * grid; u32::MAX means
    // unreachable.
    let mut counts = vec![u32::MAX; cells + 1];
    counts[0] = 0;

    for sum in 1..=cells {
        for &step in &scaled {
            if step <= sum && counts[sum - step] != u32::MAX {
                let candidate = counts[sum - step] + 1;
                if candidate < counts[sum] {
                    counts[sum] = candidate;
                }
            }
        }
    }

    let mut remaining = match (0..=cells).rev().find(|&sum| counts[sum] != u32::MAX) {
        Some(best) => best,
        None => return Vec::new(),
    };

    // Walk back preferring the heaviest plate at each step; over the
    // fewest-plate combinations this yields the lexicographically largest
    // descending sequence.
    let mut per_side = Vec::with_capacity(counts[remaining] as usize);

    while remaining > 0 {
        let step = scaled
            .iter()
            .copied()
            .find(|&step| step <= remaining && counts[remaining - step] == counts[remaining] - 1);

        match step {
            Some(step) => {
                per_side.push(step as u64 * grid);
                remaining -= step;
            }
            // Every reachable sum has a predecessor; nothing sane lands here.
            None => break,
        }
    }

    per_side
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

fn to_milli(value: f64) -> u64 {
    (value * MILLI).round() as u64
}

fn from_milli(value: u64) -> f64 {
    value as f64 / MILLI
}
