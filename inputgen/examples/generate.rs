//! Example generating an input manager from a schema built in code.
//!
//! Run with: `cargo run --example generate`

use inputgen::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let schema = Schema::new("PlayerControls")
        .with_group(
            Group::new("Player")
                .with_binding("Movement", ValueType::Vector2)
                .with_binding("Mouse Delta", ValueType::Vector2)
                .with_binding("Jump", ValueType::Boolean)
                .with_binding("Fire", ValueType::Boolean),
        )
        .with_group(
            Group::new("Menu")
                .with_binding("Navigate", ValueType::Vector2)
                .with_binding("Submit", ValueType::Boolean),
        );

    let module = Generator::new(&schema, GeneratorConfig::default()).generate()?;

    println!("// {}", module.file_name());
    print!("{}", module.source());

    Ok(())
}
