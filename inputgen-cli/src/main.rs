//! `inputgen` command-line tool.
//!
//! Loads a Unity `.inputactions` asset and writes the generated input manager
//! class next to it (or into `--out-dir`).

mod args;

use anyhow::{Context, Result, bail};
use args::Cli;
use clap::Parser;
use inputgen_codegen::Generator;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs one generation. Returns false when `--check` finds a stale file.
fn run(cli: &Cli) -> Result<bool> {
    if !cli.asset.is_file() {
        bail!("Asset does not exist: {}", cli.asset.display());
    }

    let schema = inputgen_schema::parse_schema_file(&cli.asset)
        .with_context(|| format!("Failed to load asset: {}", cli.asset.display()))?;
    let module = Generator::new(&schema, cli.config())
        .generate()
        .with_context(|| format!("Failed to generate from: {}", cli.asset.display()))?;

    if cli.stdout {
        print!("{}", module.into_source());
        return Ok(true);
    }

    let out_dir = cli.output_dir();

    if cli.check {
        let path = module.path_in(&out_dir);
        if module.is_up_to_date(&out_dir)? {
            tracing::info!("{} is up to date", path.display());
            return Ok(true);
        }
        eprintln!("{} is out of date", path.display());
        return Ok(false);
    }

    let path = module
        .write_to_dir(&out_dir)
        .context("Failed to save the generated class")?;
    eprintln!("Generated {}", path.display());

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASSET: &str = r#"{
    "name": "PlayerControls",
    "maps": [
        {
            "name": "Player",
            "actions": [
                { "name": "Movement", "type": "Value", "expectedControlType": "Vector2" },
                { "name": "Jump", "type": "Button", "expectedControlType": "Button" }
            ]
        }
    ]
}"#;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("inputgen").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn test_run_writes_next_to_asset() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let asset = dir.path().join("PlayerControls.inputactions");
        std::fs::write(&asset, ASSET).expect("Failed to write asset");
        let asset = asset.to_str().expect("utf-8 path");

        assert!(run(&parse(&[asset])).expect("run succeeds"));

        let generated = std::fs::read_to_string(dir.path().join("InputManager.cs"))
            .expect("Failed to read output");
        assert!(generated.contains("public static PlayerControls playercontrols = new();"));
        assert!(generated.contains("case \"Jump\":"));
    }

    #[test]
    fn test_run_stdout_writes_no_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let asset = dir.path().join("PlayerControls.inputactions");
        std::fs::write(&asset, ASSET).expect("Failed to write asset");
        let out_dir = dir.path().join("Scripts");

        let cli = parse(&[
            asset.to_str().expect("utf-8 path"),
            "--stdout",
            "--out-dir",
            out_dir.to_str().expect("utf-8 path"),
        ]);
        assert!(run(&cli).expect("run succeeds"));

        assert!(!dir.path().join("InputManager.cs").exists());
        assert!(!out_dir.exists());
        let entries = std::fs::read_dir(dir.path())
            .expect("Failed to list temp dir")
            .count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_run_check_detects_stale_output() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let asset = dir.path().join("PlayerControls.inputactions");
        std::fs::write(&asset, ASSET).expect("Failed to write asset");
        let asset = asset.to_str().expect("utf-8 path");

        assert!(!run(&parse(&[asset, "--check"])).expect("run succeeds"));
        assert!(run(&parse(&[asset])).expect("run succeeds"));
        assert!(run(&parse(&[asset, "--check"])).expect("run succeeds"));

        std::fs::write(dir.path().join("InputManager.cs"), "// edited").expect("Failed to edit");
        assert!(!run(&parse(&[asset, "--check"])).expect("run succeeds"));
    }

    #[test]
    fn test_run_custom_out_dir_and_class() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let asset = dir.path().join("PlayerControls.inputactions");
        std::fs::write(&asset, ASSET).expect("Failed to write asset");
        let out_dir = dir.path().join("Scripts");

        let cli = parse(&[
            asset.to_str().expect("utf-8 path"),
            "--out-dir",
            out_dir.to_str().expect("utf-8 path"),
            "--class-name",
            "Inputs",
        ]);
        assert!(run(&cli).expect("run succeeds"));
        assert!(out_dir.join("Inputs.cs").is_file());
    }

    #[test]
    fn test_run_missing_asset() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("Missing.inputactions");

        let err = run(&parse(&[missing.to_str().expect("utf-8 path")])).unwrap_err();
        assert!(err.to_string().starts_with("Asset does not exist"));
    }

    #[test]
    fn test_run_invalid_asset() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let asset = dir.path().join("Broken.inputactions");
        std::fs::write(&asset, "{ broken").expect("Failed to write asset");

        let err = run(&parse(&[asset.to_str().expect("utf-8 path")])).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load asset"));
    }
}
