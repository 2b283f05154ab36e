//! zigtable CLI
//!
//! Prints a ziggurat strip table as a Rust `static` item.

use anyhow::Context;
use clap::Parser;
use log::info;

use zigtable::{GeneratorConfig, Width, emit_rust, generate};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Element type of the table
    #[arg(short, long, value_enum, default_value_t = Width::F64)]
    width: Width,

    /// Table bits (strips = 2^bits); defaults to 7 for f64 and 6 for f32
    #[arg(short, long)]
    bits: Option<u32>,

    /// Name of the emitted static
    #[arg(short, long)]
    name: Option<String>,

    /// Starting point of the bracket search
    #[arg(long, default_value_t = 1.0)]
    seed: f64,

    /// Multiplicative bracket widening per round
    #[arg(long, default_value_t = 1.1)]
    scale: f64,

    /// Bracket rounds before giving up
    #[arg(long, default_value_t = 256)]
    max_expansions: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = GeneratorConfig {
        table_bits: args.bits.unwrap_or_else(|| args.width.default_bits()),
        seed: args.seed,
        scale: args.scale,
        max_expansions: args.max_expansions,
        ..GeneratorConfig::default()
    };
    info!("generating with {:?}", config);

    let table = generate(&config).context("table generation failed")?;

    let name = args
        .name
        .unwrap_or_else(|| format!("NORMAL_{}", args.width.type_name().to_uppercase()));
    print!("{}", emit_rust(&table, &name, args.width));
    Ok(())
}
