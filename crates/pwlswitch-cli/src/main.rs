mod demos;

use clap::builder::PossibleValuesParser;
use clap::Parser;
use pwlswitch_solver::CompilerConfig;

/// pwlswitch compiles a switched analog circuit into a piecewise-linear,
/// discrete-time JSON case table.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Which built-in demo circuit to compile.
    #[arg(value_parser = PossibleValuesParser::new(demo_names()))]
    demo: String,

    /// Path to write the compiled case table to.
    #[arg(short, long, default_value = "case_table.json")]
    output: String,

    /// Override the demo's default discretization step.
    #[arg(long)]
    dt: Option<f64>,

    /// Maximum inductor disable-set attempts per degenerate case.
    #[arg(long, default_value_t = CompilerConfig::default().max_disable_attempts)]
    max_disable_attempts: usize,
}

fn demo_names() -> Vec<&'static str> {
    demos::DEMOS.iter().map(|d| d.name).collect()
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let demo = demos::DEMOS
        .iter()
        .find(|d| d.name == args.demo)
        .expect("clap value_parser already restricted this to a known demo name");

    println!("Building '{}' ({})...", demo.name, demo.description);
    let circuit = (demo.build)().unwrap_or_else(|e| {
        eprintln!("Error building circuit '{}': {e}", demo.name);
        std::process::exit(1);
    });

    let config = CompilerConfig {
        max_disable_attempts: args.max_disable_attempts,
    };

    let cases = pwlswitch_solver::solve(&circuit, &config).unwrap_or_else(|e| {
        eprintln!("Error solving circuit '{}': {e}", demo.name);
        std::process::exit(1);
    });
    println!("Solved {} of {} mode combinations.", cases.len(), 1usize << circuit.switched_elements().len());

    let dt = args.dt.unwrap_or(demo.dt);
    let table = pwlswitch_case::build_case_table(&circuit, &cases, dt);

    pwlswitch_case::write_case_table_to_json(&table, &args.output).unwrap_or_else(|e| {
        eprintln!("Error writing case table to '{}': {e}", args.output);
        std::process::exit(1);
    });
}
