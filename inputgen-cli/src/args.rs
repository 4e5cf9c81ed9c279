//! Command-line arguments.

use clap::{ArgAction, Parser, ValueEnum};
use inputgen_codegen::{DuplicatePolicy, GeneratorConfig, LineEnding};
use std::path::{Path, PathBuf};

/// Generate a name-based input manager class from a Unity input-actions asset
#[derive(Parser, Debug)]
#[command(name = "inputgen", version, about)]
pub struct Cli {
    /// Path to the .inputactions asset
    #[arg(value_name = "ASSET", value_hint = clap::ValueHint::FilePath)]
    pub asset: PathBuf,

    /// Directory to write the generated class to (defaults to the asset's directory)
    #[arg(short, long, value_name = "DIR", value_hint = clap::ValueHint::DirPath)]
    pub out_dir: Option<PathBuf>,

    /// Name of the generated class and file
    #[arg(long, value_name = "NAME", default_value = GeneratorConfig::DEFAULT_CLASS_NAME)]
    pub class_name: String,

    /// Namespace to wrap the generated class in
    #[arg(long, value_name = "NAMESPACE")]
    pub namespace: Option<String>,

    /// Name of the vector accessor
    #[arg(long, value_name = "NAME", default_value = GeneratorConfig::DEFAULT_VECTOR_FUNCTION)]
    pub vector_fn: String,

    /// Name of the button accessor
    #[arg(long, value_name = "NAME", default_value = GeneratorConfig::DEFAULT_BUTTON_FUNCTION)]
    pub button_fn: String,

    /// Write CRLF line endings
    #[arg(long)]
    pub crlf: bool,

    /// What to do when two action maps share an action name
    #[arg(long, value_enum, default_value_t = Duplicates::FirstWins)]
    pub duplicates: Duplicates,

    /// Skip schema validation
    #[arg(long)]
    pub no_validate: bool,

    /// Print the generated class instead of writing it
    #[arg(long, conflicts_with = "check")]
    pub stdout: bool,

    /// Exit with an error if the generated class on disk is out of date
    #[arg(long)]
    pub check: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Command-line spelling of [`DuplicatePolicy`].
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Duplicates {
    /// The first action map in asset order wins
    FirstWins,
    /// Fail generation
    Reject,
}

impl From<Duplicates> for DuplicatePolicy {
    fn from(value: Duplicates) -> Self {
        match value {
            Duplicates::FirstWins => Self::FirstWins,
            Duplicates::Reject => Self::Reject,
        }
    }
}

impl Cli {
    /// Builds the generator configuration.
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new()
            .class_name(&self.class_name)
            .vector_function(&self.vector_fn)
            .button_function(&self.button_fn)
            .duplicates(self.duplicates.into())
            .validate(!self.no_validate);

        if let Some(namespace) = &self.namespace {
            config = config.namespace(namespace);
        }
        if self.crlf {
            config = config.line_ending(LineEnding::CrLf);
        }

        config
    }

    /// Returns the directory the class is written to.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        match &self.out_dir {
            Some(dir) => dir.clone(),
            None => self
                .asset
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map_or_else(|| Path::new(".").to_path_buf(), Path::to_path_buf),
        }
    }

    /// Returns the default log filter for the requested verbosity.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["inputgen", "Assets/Input/PlayerControls.inputactions"])
            .expect("valid arguments");

        assert_eq!(cli.output_dir(), PathBuf::from("Assets/Input"));
        assert_eq!(cli.log_filter(), "warn");
        assert_eq!(cli.config(), GeneratorConfig::default());
    }

    #[test]
    fn test_cli_bare_file_name_writes_to_current_dir() {
        let cli = Cli::try_parse_from(["inputgen", "PlayerControls.inputactions"])
            .expect("valid arguments");
        assert_eq!(cli.output_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::try_parse_from([
            "inputgen",
            "Controls.inputactions",
            "--out-dir",
            "Assets/Scripts",
            "--class-name",
            "Inputs",
            "--namespace",
            "Game",
            "--vector-fn",
            "Axis",
            "--button-fn",
            "Pressed",
            "--crlf",
            "--duplicates",
            "reject",
            "--no-validate",
            "-vv",
        ])
        .expect("valid arguments");

        assert_eq!(cli.output_dir(), PathBuf::from("Assets/Scripts"));
        assert_eq!(cli.log_filter(), "debug");

        let expected = GeneratorConfig::new()
            .class_name("Inputs")
            .namespace("Game")
            .vector_function("Axis")
            .button_function("Pressed")
            .line_ending(LineEnding::CrLf)
            .duplicates(DuplicatePolicy::Reject)
            .validate(false);
        assert_eq!(cli.config(), expected);
    }

    #[test]
    fn test_cli_stdout_conflicts_with_check() {
        let result = Cli::try_parse_from(["inputgen", "a.inputactions", "--stdout", "--check"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_asset() {
        assert!(Cli::try_parse_from(["inputgen"]).is_err());
    }
}
