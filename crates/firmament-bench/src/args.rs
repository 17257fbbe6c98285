//! Command line options for `sky-bench`.

use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: sky-bench [OPTIONS]
  --config <path>                Sky config RON (default: built-in)
  --baseline <path>              Load baseline JSON for comparison
  --output <path>                Save current results as JSON baseline
  --regression-threshold <pct>   Regression threshold percentage (default: 10)
  --ticks <n>                    Updates per scene (default: 240)
  --step <seconds>               Simulated seconds per update (default: 60)";

#[derive(Debug, Clone, PartialEq)]
pub struct BenchArgs {
    pub config: Option<PathBuf>,
    pub baseline: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub regression_threshold: f64,
    pub ticks: u32,
    pub step_seconds: f32,
}

impl Default for BenchArgs {
    fn default() -> Self {
        Self {
            config: None,
            baseline: None,
            output: None,
            regression_threshold: 10.0,
            ticks: 240,
            step_seconds: 60.0,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(BenchArgs),
    Help,
}

fn value<'a>(flag: &str, rest: &mut impl Iterator<Item = &'a str>) -> Result<&'a str, String> {
    rest.next().ok_or_else(|| format!("{flag} needs a value"))
}

fn number<T: std::str::FromStr>(flag: &str, text: &str) -> Result<T, String> {
    text.parse().map_err(|_| format!("invalid {flag} value: {text}"))
}

/// Parse arguments, excluding the program name.
pub fn parse_args<'a>(args: impl IntoIterator<Item = &'a str>) -> Result<Command, String> {
    let mut parsed = BenchArgs::default();
    let mut rest = args.into_iter();
    while let Some(flag) = rest.next() {
        match flag {
            "--config" => parsed.config = Some(value(flag, &mut rest)?.into()),
            "--baseline" => parsed.baseline = Some(value(flag, &mut rest)?.into()),
            "--output" => parsed.output = Some(value(flag, &mut rest)?.into()),
            "--regression-threshold" => {
                parsed.regression_threshold = number(flag, value(flag, &mut rest)?)?
            }
            "--ticks" => parsed.ticks = number(flag, value(flag, &mut rest)?)?,
            "--step" => parsed.step_seconds = number(flag, value(flag, &mut rest)?)?,
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(format!("Unknown argument: {other}")),
        }
    }
    Ok(Command::Run(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> BenchArgs {
        match parse_args(args.iter().copied()) {
            Ok(Command::Run(parsed)) => parsed,
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(run(&[]), BenchArgs::default());
    }

    #[test]
    fn test_all_flags() {
        let parsed = run(&[
            "--config",
            "sky.ron",
            "--baseline",
            "old.json",
            "--output",
            "new.json",
            "--regression-threshold",
            "5.5",
            "--ticks",
            "10",
            "--step",
            "0.5",
        ]);
        assert_eq!(parsed.config, Some(PathBuf::from("sky.ron")));
        assert_eq!(parsed.baseline, Some(PathBuf::from("old.json")));
        assert_eq!(parsed.output, Some(PathBuf::from("new.json")));
        assert_eq!(parsed.regression_threshold, 5.5);
        assert_eq!(parsed.ticks, 10);
        assert_eq!(parsed.step_seconds, 0.5);
    }

    #[test]
    fn test_help_wins() {
        assert_eq!(parse_args(["--ticks", "3", "-h"]), Ok(Command::Help));
    }

    #[test]
    fn test_errors() {
        assert!(parse_args(["--ticks"]).unwrap_err().contains("needs a value"));
        assert!(parse_args(["--ticks", "many"]).unwrap_err().contains("invalid --ticks"));
        assert!(parse_args(["--fast"]).unwrap_err().contains("Unknown argument"));
    }
}
