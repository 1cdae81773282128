//! Plan Analytics CLI
//!
//! Computes the key statistics shown next to a generated financial plan

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use plan_analytics::{
    projection::{DEFAULT_PROJECTION_YEARS, MAX_PROJECTION_YEARS},
    assumptions::DEFAULT_ASSUMPTIONS_PATH,
    profile::load_profile_json,
    AggregatorConfig, Assumptions, GoalSource, KeyStatistics, Product, StatisticsAggregator,
};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "plan-analytics")]
#[command(about = "Savings, projection, goal and risk statistics for a financial plan")]
struct Args {
    /// User profile as JSON
    #[arg(long)]
    profile: PathBuf,

    /// Generated plan markdown to mine goals from
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Selected product, as "Name" or "Name=category" (repeatable)
    #[arg(long = "product")]
    products: Vec<String>,

    /// Goal label, used instead of plan text (repeatable)
    #[arg(long = "goal", conflicts_with = "plan")]
    goals: Vec<String>,

    /// Projection horizon in years (1-100)
    #[arg(long, default_value_t = DEFAULT_PROJECTION_YEARS, value_parser = years_parser())]
    years: u32,

    /// Date milestones are counted from (YYYY-MM-DD, default today)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Directory with assumption CSVs (default: data/assumptions when present, else built-in values)
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn years_parser() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(1..=i64::from(MAX_PROJECTION_YEARS))
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let profile = load_profile_json(&args.profile)
        .with_context(|| format!("Failed to load profile from {}", args.profile.display()))?;

    let assumptions = match &args.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("Failed to load assumptions from {}", dir.display()))?,
        None if Path::new(DEFAULT_ASSUMPTIONS_PATH).is_dir() => {
            Assumptions::from_csv().context("Failed to load default assumptions")?
        }
        None => Assumptions::default_bank(),
    };

    let mut config = AggregatorConfig {
        years: args.years,
        ..AggregatorConfig::default()
    };
    if let Some(as_of) = args.as_of {
        config.as_of = as_of;
    }

    let products: Vec<Product> = args.products.iter().map(|p| Product::parse_arg(p)).collect();

    let plan_text = match &args.plan {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read plan from {}", path.display()))?,
        ),
        None => None,
    };

    let goals = match &plan_text {
        Some(text) => GoalSource::PlanText(text.as_str()),
        None if args.goals.is_empty() => GoalSource::Listed(profile.financial_goals.clone()),
        None => GoalSource::Listed(args.goals.clone()),
    };

    let aggregator = StatisticsAggregator::new(assumptions, config);
    let stats = aggregator.aggregate(&profile, goals, &products);

    if args.json {
        let json = serde_json::to_string_pretty(&stats).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        print_report(&stats);
    }

    Ok(())
}

fn print_report(stats: &KeyStatistics) {
    println!("Plan Analytics v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");

    let savings = &stats.savings_capacity;
    println!("Savings Capacity:");
    println!("  Monthly Income:      {:>12.2}", savings.monthly_income);
    println!("  Monthly Expenses:    {:>12.2} ({:.1}%)", savings.monthly_expenses, savings.expense_ratio);
    println!("  Monthly Savings:     {:>12.2} ({:.1}%)", savings.monthly_savings_potential, savings.savings_ratio);
    println!("  Emergency Fund:      {:>12.2} ({:.1} months)", savings.emergency_fund_target, savings.months_to_emergency_fund);
    println!();

    let summary = &stats.wealth_projection.summary;
    println!("Wealth Projection ({} years at {:.1}%):", summary.years, summary.annual_return_rate);
    println!("{:>5} {:>14} {:>14} {:>14} {:>12}", "Year", "Balance", "Contributions", "Returns", "Yearly");
    println!("{}", "-".repeat(63));
    for row in &stats.wealth_projection.projections {
        println!(
            "{:>5} {:>14.2} {:>14.2} {:>14.2} {:>12.2}",
            row.year, row.balance, row.total_contributions, row.total_returns, row.yearly_return
        );
    }
    println!("  Final Balance: {:.2} (ROI {:.1}%)", summary.final_balance, summary.roi_percentage);
    println!();

    if !stats.goal_timelines.is_empty() {
        println!("Goal Timelines (from {}):", stats.as_of);
        for timeline in &stats.goal_timelines {
            let when = timeline.estimated_completion.as_deref().unwrap_or("not reachable");
            match timeline.months_needed {
                Some(months) => println!(
                    "  {} - {:.2} in {:.1} months, {} [{:?}]",
                    timeline.goal, timeline.target_amount, months, when, timeline.feasibility
                ),
                None => println!(
                    "  {} - {:.2}, {} [{:?}]",
                    timeline.goal, timeline.target_amount, when, timeline.feasibility
                ),
            }
            for milestone in &timeline.milestones {
                println!(
                    "    {:>3}% {:>12.2}  {} ({} months)",
                    milestone.percentage, milestone.amount, milestone.date, milestone.months_from_now
                );
            }
        }
        println!();
    }

    let risk = &stats.risk_return_analysis;
    println!("Risk/Return:");
    println!("  Average Return:      {:>8.2}%", risk.average_return);
    println!("  Risk Level:          {:?} ({:.2})", risk.risk_level, risk.risk_score);
    println!("  Sharpe Ratio:        {:>8.3}", risk.sharpe_ratio);
    println!("  Diversification:     {:>8.1}", risk.diversification_score);
    for (name, estimate) in &risk.products_analysis {
        println!(
            "    {:<40} {:<16} {:.2}%",
            name,
            estimate.category.as_str(),
            estimate.annual_return_rate * 100.0
        );
    }
    println!();
    println!("{}", stats.summary());
}
