use arcade_phys::components::{Body, Name};
use arcade_phys::config::{AxisOrder, WorldConfig, OVERLAP_BIAS};
use arcade_phys::scene::test_scene::{load_scenario, Scenario};
use arcade_phys::systems::{physics_step_with, LogObserver, NoopObserver, StepReport};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, Log, Metadata, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Order {
    Xy,
    Yx,
}

#[derive(Parser)]
#[command(name = "arcade-phys", about = "Run an arcade physics scene headless")]
struct Args {
    /// Scene to simulate
    #[arg(long, value_enum, default_value = "stack")]
    scenario: Scenario,

    /// Number of fixed 1/60 s steps to run
    #[arg(long, default_value_t = 300)]
    steps: usize,

    /// Extra overlap tolerated beyond per-step travel
    #[arg(long, default_value_t = OVERLAP_BIAS)]
    bias: f32,

    /// Axis separated first each step
    #[arg(long, value_enum, default_value = "xy")]
    axis_order: Order,

    /// Trace every separation to stderr
    #[arg(long)]
    verbose: bool,
}

/// Writes `log` records to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() {
    let args = Args::parse();

    if args.verbose {
        log::set_logger(&LOGGER).expect("logger already installed");
        log::set_max_level(LevelFilter::Trace);
    }

    let config = WorldConfig {
        overlap_bias: args.bias.max(0.0),
        axis_order: match args.axis_order {
            Order::Xy => AxisOrder::XThenY,
            Order::Yx => AxisOrder::YThenX,
        },
        ..WorldConfig::default()
    };

    let mut world = load_scenario(args.scenario);
    let mut total = StepReport::default();
    for step in 0..args.steps {
        let report = if args.verbose {
            log::trace!("[step {}]", step);
            physics_step_with(&mut world, &config, &mut LogObserver)
        } else {
            physics_step_with(&mut world, &config, &mut NoopObserver)
        };
        total.merge(report);
    }

    println!(
        "{:?}: {} steps, {} pairs, {} contacts, {} asleep",
        args.scenario, total.steps, total.pairs, total.contacts, total.asleep
    );

    let mut rows: Vec<(u32, &'static str, Body)> = world
        .query::<(&Name, &Body)>()
        .iter()
        .map(|(e, (name, body))| (e.id(), name.0, *body))
        .collect();
    rows.sort_by_key(|(id, _, _)| *id);

    for (_id, name, body) in rows {
        println!(
            "{:<10} pos=({:8.2}, {:8.2}) vel=({:8.2}, {:8.2}){}{}",
            name,
            body.position.x,
            body.position.y,
            body.velocity.x,
            body.velocity.y,
            if body.sleeping { " asleep" } else { "" },
            if body.blocked.down.is_some() { " grounded" } else { "" },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn logger_respects_the_max_level() {
        log::set_max_level(LevelFilter::Debug);
        let debug = Metadata::builder().level(Level::Debug).build();
        let trace = Metadata::builder().level(Level::Trace).build();

        assert!(LOGGER.enabled(&debug));
        assert!(!LOGGER.enabled(&trace));
    }
}
