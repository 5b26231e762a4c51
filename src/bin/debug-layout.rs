/// Diagnostic tool to verify observations → stats → layout → placement pipeline
use anyhow::{bail, Context};
use treemapper::layout::Rect;
use treemapper::place::Anchor;
use treemapper::plan;
use treemapper::stats;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("treemapper=debug".parse().unwrap()),
        )
        .init();

    let observations = match std::env::args().nth(1) {
        Some(path) => read_observations(&path)?,
        None => sample_observations(),
    };

    println!("=== DIAGNOSTIC: Observations → Layout Pipeline ===");
    println!("\n[1] Input: {} observations", observations.len());

    let obs_refs: Vec<(&str, f64)> = observations
        .iter()
        .map(|(label, weight)| (label.as_str(), *weight))
        .collect();

    // Aggregate
    let categories = stats::aggregate(&obs_refs);
    println!("\n[2] Aggregated into {} categories:", categories.len());
    for (i, cat) in categories.iter().take(10).enumerate() {
        println!(
            "    [{}] '{}' - total={:.2} (n={}, mean={:.2}, median={:.2}, std={:.2}, {:.1}% of total)",
            i, cat.label, cat.total, cat.count, cat.mean, cat.median, cat.std_dev, cat.pct_of_total
        );
    }

    // Build the treemap below a synthetic reference extent
    let extent = Rect::new(0.0, 0.0, 1000.0, 1000.0);
    let map = plan::build(&obs_refs, extent, Anchor::Below)?;

    println!("\n[3] Treemap computed: {} cells", map.cells.len());
    println!(
        "    Outer rect: ({:.1}, {:.1}) to ({:.1}, {:.1}) - {:.1}x{:.1}",
        map.outer.x0,
        map.outer.y0,
        map.outer.x1,
        map.outer.y1,
        map.outer.width(),
        map.outer.height()
    );

    println!("\n[4] Cells in layout order:");
    for (i, cell) in map.cells.iter().take(10).enumerate() {
        println!(
            "    [{}] '{}' - rect: {:.1}x{:.1} ({:.1} area) at ({:.1}, {:.1})",
            i,
            cell.stats.label,
            cell.rect.width(),
            cell.rect.height(),
            cell.rect.area(),
            cell.rect.x0,
            cell.rect.y0
        );
    }

    // Check for anomalies
    println!("\n[5] Checking for anomalies:");
    let area_sum: f64 = map.cells.iter().map(|c| c.rect.area()).sum();
    let outer_area = map.outer.area();
    println!("    Total cell area: {:.2}", area_sum);
    println!("    Outer area:      {:.2}", outer_area);
    if outer_area > 0.0 {
        println!("    Coverage: {:.3}%", area_sum / outer_area * 100.0);
    }
    if map.cells.len() < categories.len() {
        println!(
            "    WARNING: {} categories dropped by guards",
            categories.len() - map.cells.len()
        );
    }

    Ok(())
}

/// Read `label weight` lines; blank lines and lines starting with `#` are
/// skipped.
fn read_observations(path: &str) -> anyhow::Result<Vec<(String, f64)>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let mut observations = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((label, weight)) = line.rsplit_once(char::is_whitespace) else {
            bail!("{path}:{}: expected 'label weight'", lineno + 1);
        };
        let weight: f64 = weight
            .parse()
            .with_context(|| format!("{path}:{}: bad weight '{weight}'", lineno + 1))?;
        observations.push((label.trim().to_string(), weight));
    }
    Ok(observations)
}

fn sample_observations() -> Vec<(String, f64)> {
    [
        ("forest", 412_000.0),
        ("forest", 220_500.0),
        ("forest", 95_300.0),
        ("meadow", 182_000.0),
        ("meadow", 74_100.0),
        ("water", 130_900.0),
        ("urban", 48_700.0),
        ("urban", 22_300.0),
        ("wetland", 15_800.0),
    ]
    .iter()
    .map(|&(label, weight)| (label.to_string(), weight))
    .collect()
}
