use posix_args::{Declaration, Parser, Value};
use std::io::{stderr, stdout};
use tracing_subscriber::EnvFilter;

// Try:
//   cargo run --example enchilada -- --height=8 -fo unlabeled --name="Absolom, Absolom" -- --weirdly-unlabeled
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(stderr)
        .init();

    let mut parser = Parser::new(
        "enchilada",
        "Parses a mix of many argument types and combinations.",
    );

    let ascii = parser.add(
        Declaration::<bool>::new("ascii", "Use ASCII instead of that UNICORN thing.")
            .short('a')
            .default_value(true),
    );
    let fast = parser.add(Declaration::<bool>::new("fast", "Should this program run fast?").short('f'));
    parser.add(Declaration::<bool>::new("calibrate", "Calibrate sensors."));
    parser.add(Declaration::<bool>::short_only('o', "No long-form argument for this one."));
    let mass = parser.add(
        Declaration::<f32>::new("mass", "The mass of the thing.")
            .short('m')
            .default_value(3.141),
    );
    parser.add(Declaration::<f32>::new("mana", "The mana of the thing.").short('M'));
    let height = parser.add(
        Declaration::<i32>::new("height", "The height of the thing.")
            .short('h')
            .make_required(),
    );
    parser.add(
        Declaration::<String>::new("name", "The name of the wind.")
            .short('s')
            .make_required(),
    );

    if let Err(e) = parser.parse(std::env::args()) {
        eprintln!("Error parsing arguments: {e}");
        parser.show_usage(stderr())?;
        std::process::exit(1);
    }

    if parser.help_requested() {
        parser.show_usage(stdout())?;
        return Ok(());
    }

    println!("ascii={} fast={}", parser.value(ascii)?, parser.value(fast)?);
    println!("mass={} height={}", parser.value(mass)?, parser.value(height)?);

    // Every switch, read without knowing its type
    for descriptor in parser.descriptors() {
        let value: Value = descriptor.converted_value()?;
        println!("{}={value}", descriptor.best_name());
    }

    println!("Unlabeled:");
    parser.for_each_unlabeled(|arg| println!("\t{arg}"));

    Ok(())
}
