use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::core::TrackingMode;

#[derive(Parser)]
#[command(name = "flightmark")]
#[command(about = "Mark timestamps on a media timeline and measure time of flight")]
#[command(long_about = "flightmark - time-of-flight marker

Mark points on a media timeline and measure the elapsed time between them.
Two tracking modes are available:

  simple     Two slots (start and end). Adding a third point replaces the
             later one. Reports the span and a calibrated estimate.
  advanced   Any number of points, paired in time order (1st-2nd, 3rd-4th,
             ...). Reports every pair and their sum.

QUICK START:
  flightmark mark                       Interactive marker (space to mark)
  flightmark calc 1.2 3.4               Span between two timestamps
  flightmark calc -m advanced 0 2 5 9   Sum of paired durations
  flightmark replay session.yaml        Apply a scripted list of edits

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  flightmark <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to the configured format (pretty unless changed).
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this config file instead of ~/.flightmark/config.yaml
    #[arg(long, global = true, env = "FLIGHTMARK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

/// Options shared by every command that computes durations.
#[derive(Args, Debug, Clone, Default)]
pub struct TrackingArgs {
    /// Tracking mode (defaults to the configured mode)
    #[arg(long, short = 'm', value_enum)]
    pub mode: Option<TrackingMode>,

    /// Calibration ratio for the simple-mode estimate
    #[arg(long, short = 'r')]
    pub ratio: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute durations for a list of timestamps
    ///
    /// Each timestamp is recorded in the order given, then sorted by time.
    /// Recording is not bound by the simple-mode capacity, so every
    /// timestamp is kept; simple mode spans the earliest to the latest.
    ///
    /// Timestamps may be plain seconds (12.5), clock form (1:02.250,
    /// 1:02:03) or unit form (1m2.5s, 90s).
    ///
    /// # Examples
    ///
    ///   flightmark calc 1.2 3.4
    ///   flightmark calc -m advanced 0 2 5 9
    ///   flightmark calc 0:01.20 0:03.45 -o json
    #[command(alias = "c")]
    Calc {
        /// Timestamps to mark
        #[arg(required = true)]
        times: Vec<String>,

        #[command(flatten)]
        tracking: TrackingArgs,
    },

    /// Apply a scripted list of edits and report the result
    ///
    /// The script is YAML with an optional starting mode and a list of
    /// operations applied in order:
    ///
    ///   mode: simple
    ///   ops:
    ///     - op: record
    ///       time: "0:01.5"
    ///     - op: add
    ///       label: Landing
    ///       time: 4.25
    ///     - op: update
    ///       id: 1
    ///       label: Takeoff
    ///     - op: remove
    ///       id: 3
    ///     - op: toggle
    ///     - op: reset
    ///
    /// Updates and removals naming an unknown id are skipped.
    Replay {
        /// Path to the YAML script ('-' reads stdin)
        file: PathBuf,

        #[command(flatten)]
        tracking: TrackingArgs,
    },

    /// Open the interactive marker
    ///
    /// Runs a virtual playhead in the terminal. Press space to mark the
    /// current position; durations update as points are added, edited or
    /// removed. Press ? inside the marker for key bindings.
    ///
    /// # Examples
    ///
    ///   flightmark mark
    ///   flightmark mark --length 2:30 --fps 60
    ///   flightmark mark -m advanced
    #[command(alias = "m")]
    Mark {
        /// Media length; the playhead stops here
        #[arg(long, short = 'l')]
        length: Option<String>,

        /// Frame rate for frame stepping (defaults to config)
        #[arg(long)]
        fps: Option<f64>,

        #[command(flatten)]
        tracking: TrackingArgs,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   flightmark completions zsh > ~/.zsh/completions/_flightmark
    ///   flightmark completions bash --install
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Show installation instructions instead
        #[arg(long)]
        install: bool,
    },

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for config management.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,

    /// Print the effective configuration
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_calc() {
        let cli = Cli::try_parse_from(["flightmark", "calc", "1.2", "3:04"]).unwrap();
        if let Commands::Calc { times, tracking } = cli.command {
            assert_eq!(times, vec!["1.2", "3:04"]);
            assert!(tracking.mode.is_none());
            assert!(tracking.ratio.is_none());
        } else {
            panic!("Expected Calc command");
        }
    }

    #[test]
    fn test_cli_calc_requires_times() {
        assert!(Cli::try_parse_from(["flightmark", "calc"]).is_err());
    }

    #[test]
    fn test_cli_calc_with_mode_and_ratio() {
        let cli = Cli::try_parse_from([
            "flightmark", "calc", "-m", "advanced", "--ratio", "0.5", "0", "2",
        ])
        .unwrap();
        if let Commands::Calc { tracking, .. } = cli.command {
            assert_eq!(tracking.mode, Some(TrackingMode::Advanced));
            assert_eq!(tracking.ratio, Some(0.5));
        } else {
            panic!("Expected Calc command");
        }
    }

    #[test]
    fn test_cli_calc_alias() {
        let cli = Cli::try_parse_from(["flightmark", "c", "1"]).unwrap();
        assert!(matches!(cli.command, Commands::Calc { .. }));
    }

    #[test]
    fn test_cli_replay() {
        let cli = Cli::try_parse_from(["flightmark", "replay", "ops.yaml"]).unwrap();
        if let Commands::Replay { file, .. } = cli.command {
            assert_eq!(file, PathBuf::from("ops.yaml"));
        } else {
            panic!("Expected Replay command");
        }
    }

    #[test]
    fn test_cli_mark_defaults() {
        let cli = Cli::try_parse_from(["flightmark", "mark"]).unwrap();
        if let Commands::Mark { length, fps, tracking } = cli.command {
            assert!(length.is_none());
            assert!(fps.is_none());
            assert!(tracking.mode.is_none());
        } else {
            panic!("Expected Mark command");
        }
    }

    #[test]
    fn test_cli_mark_options() {
        let cli = Cli::try_parse_from([
            "flightmark", "mark", "--length", "2:30", "--fps", "60", "-m", "simple",
        ])
        .unwrap();
        if let Commands::Mark { length, fps, tracking } = cli.command {
            assert_eq!(length.as_deref(), Some("2:30"));
            assert_eq!(fps, Some(60.0));
            assert_eq!(tracking.mode, Some(TrackingMode::Simple));
        } else {
            panic!("Expected Mark command");
        }
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["flightmark", "completions", "zsh"]).unwrap();
        if let Commands::Completions { shell, install } = cli.command {
            assert_eq!(shell, Shell::Zsh);
            assert!(!install);
        } else {
            panic!("Expected Completions command");
        }
    }

    #[test]
    fn test_cli_config_init_force() {
        let cli = Cli::try_parse_from(["flightmark", "config", "init", "--force"]).unwrap();
        if let Commands::Config(args) = cli.command {
            assert!(matches!(args.command, ConfigCommands::Init { force: true }));
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["flightmark", "calc", "1", "-o", "json", "-vv"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_output_format_default() {
        assert!(matches!(OutputFormat::default(), OutputFormat::Pretty));
    }
}
