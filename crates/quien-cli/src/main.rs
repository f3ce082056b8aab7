// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;

use anyhow::{Context, Result};
use config::Config;
use quien_app::WidgetState;
use quien_data::Dataset;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `quien --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let dataset_path = options.dataset_path.clone().or_else(|| config.dataset_path());
    if options.print_dataset_path {
        match &dataset_path {
            Some(path) => println!("{}", path.display()),
            None => println!("builtin"),
        }
        return Ok(());
    }

    let dataset = match &dataset_path {
        Some(path) => Dataset::load(path).with_context(|| {
            format!(
                "open dataset {} -- if this path is wrong, set [dataset].path or QUIEN_DATASET_PATH",
                path.display()
            )
        })?,
        None => Dataset::builtin(),
    };

    let debounce = config.debounce()?;
    if options.check_only {
        return Ok(());
    }

    let mut state = WidgetState::default();
    quien_tui::run_app(&mut state, dataset.people(), debounce)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    dataset_path: Option<PathBuf>,
    print_config_path: bool,
    print_dataset_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        dataset_path: None,
        print_config_path: false,
        print_dataset_path: false,
        print_example: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--dataset" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--dataset requires a file path"))?;
                quien_data::validate_dataset_path(value.as_ref())?;
                options.dataset_path = Some(PathBuf::from(value.as_ref()));
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-dataset-path" => {
                options.print_dataset_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("quien");
    println!("  --config <path>          Use a specific config path");
    println!("  --dataset <path>         Use a specific dataset file (JSON)");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-dataset-path     Print resolved dataset path (or \"builtin\")");
    println!("  --print-example-config   Print a config template");
    println!("  --check                  Validate config + dataset and exit");
    println!("  --help                   Show this help");
}

#[cfg(test)]
mod tests {
    use super::{CliOptions, parse_cli_args};
    use anyhow::Result;
    use std::path::PathBuf;

    fn default_options_path() -> PathBuf {
        PathBuf::from("/tmp/quien-config.toml")
    }

    #[test]
    fn parse_cli_args_defaults_to_provided_config_path() -> Result<()> {
        let options = parse_cli_args(Vec::<String>::new(), default_options_path())?;
        assert_eq!(
            options,
            CliOptions {
                config_path: default_options_path(),
                dataset_path: None,
                print_config_path: false,
                print_dataset_path: false,
                print_example: false,
                check_only: false,
                show_help: false,
            }
        );
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_config_path_override() -> Result<()> {
        let options = parse_cli_args(
            vec!["--config", "/custom/config.toml"],
            default_options_path(),
        )?;
        assert_eq!(options.config_path, PathBuf::from("/custom/config.toml"));
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_dataset_override() -> Result<()> {
        let options = parse_cli_args(
            vec!["--dataset", "/data/people.json"],
            default_options_path(),
        )?;
        assert_eq!(options.dataset_path, Some(PathBuf::from("/data/people.json")));
        Ok(())
    }

    #[test]
    fn parse_cli_args_rejects_uri_dataset_values() {
        let error = parse_cli_args(
            vec!["--dataset", "https://evil.example/people.json"],
            default_options_path(),
        )
        .expect_err("URI dataset should fail");
        assert!(error.to_string().contains("looks like a URI"));
    }

    #[test]
    fn parse_cli_args_errors_for_missing_values() {
        let error = parse_cli_args(vec!["--config"], default_options_path())
            .expect_err("missing config value should fail");
        assert!(error.to_string().contains("--config requires a file path"));

        let error = parse_cli_args(vec!["--dataset"], default_options_path())
            .expect_err("missing dataset value should fail");
        assert!(error.to_string().contains("--dataset requires a file path"));
    }

    #[test]
    fn parse_cli_args_errors_for_unknown_argument() {
        let error = parse_cli_args(vec!["--wat"], default_options_path())
            .expect_err("unknown arg should fail");
        let message = error.to_string();
        assert!(message.contains("unknown argument"));
        assert!(message.contains("--help"));
    }

    #[test]
    fn parse_cli_args_sets_print_and_check_flags() -> Result<()> {
        let options = parse_cli_args(
            vec![
                "--print-config-path",
                "--print-dataset-path",
                "--print-example-config",
                "--check",
            ],
            default_options_path(),
        )?;
        assert!(options.print_config_path);
        assert!(options.print_dataset_path);
        assert!(options.print_example);
        assert!(options.check_only);
        assert!(!options.show_help);
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_help_flag_for_long_and_short_variants() -> Result<()> {
        let long = parse_cli_args(vec!["--help"], default_options_path())?;
        assert!(long.show_help);

        let short = parse_cli_args(vec!["-h"], default_options_path())?;
        assert!(short.show_help);
        Ok(())
    }
}
