//! Command implementation for pingpong.
//!
//! There is a single command: resolve configuration, load the catalog,
//! compose every topic, write the output, and report.

use crate::catalog::Catalog;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::output::save_content;
use crate::report;
use crate::run::generate_all_content;
use std::path::PathBuf;

/// Resolved inputs for a run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config: Config,
    pub output_dir: PathBuf,
    pub topics_file: Option<PathBuf>,
    pub quiet: bool,
}

impl RunOptions {
    /// Merge the config file (if any) with CLI overrides.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        let output_dir = cli
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output_dir));

        Ok(Self {
            config,
            output_dir,
            topics_file: cli.topics.clone(),
            quiet: cli.quiet,
        })
    }
}

/// Execute a full generation run.
pub fn cmd_generate(options: &RunOptions) -> Result<()> {
    let catalog = match &options.topics_file {
        Some(path) => Catalog::load_json(path)?,
        None => Catalog::builtin(),
    };
    tracing::info!(topics = catalog.len(), "catalog loaded");

    if !options.quiet {
        println!("{}", report::render_banner(catalog.len()));
    }

    let bundle = generate_all_content(&catalog, &options.config)?;
    let saved = save_content(
        &bundle,
        &options.output_dir,
        options.config.filename_title_limit,
    )?;

    if !options.quiet {
        print!(
            "{}",
            report::render_run_report(&bundle, &saved, &options.config.expert_voice)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_defaults_without_flags() {
        let options = RunOptions::from_cli(&parse(&["pingpong"])).unwrap();

        assert_eq!(options.output_dir, PathBuf::from("ai_ping_pong_expert_content"));
        assert!(options.topics_file.is_none());
        assert!(!options.quiet);
    }

    #[test]
    fn test_cli_output_dir_overrides_config() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("pingpong.yaml");
        fs::write(&config_path, "output_dir: from-config\n").unwrap();
        let config_arg = config_path.to_string_lossy().to_string();

        let options = RunOptions::from_cli(&parse(&["pingpong", "--config", &config_arg])).unwrap();
        assert_eq!(options.output_dir, PathBuf::from("from-config"));

        let options =
            RunOptions::from_cli(&parse(&["pingpong", "--config", &config_arg, "-o", "cli"]))
                .unwrap();
        assert_eq!(options.output_dir, PathBuf::from("cli"));
    }

    #[test]
    fn test_missing_config_file_is_user_error() {
        let err = RunOptions::from_cli(&parse(&["pingpong", "--config", "/nonexistent/p.yaml"]))
            .unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
    }

    #[test]
    fn test_generate_writes_output() {
        let temp = TempDir::new().unwrap();
        let options = RunOptions {
            config: Config::default(),
            output_dir: temp.path().join("out"),
            topics_file: None,
            quiet: true,
        };

        cmd_generate(&options).unwrap();

        assert_eq!(fs::read_dir(temp.path().join("out")).unwrap().count(), 13);
    }

    #[test]
    fn test_generate_with_topics_file() {
        let temp = TempDir::new().unwrap();
        let topics_path = temp.path().join("topics.json");
        fs::write(
            &topics_path,
            r#"[{"id": 1, "title": "X", "domain": "Testing", "question": "Q?", "thesis": "automated checks beat manual review"}]"#,
        )
        .unwrap();

        let options = RunOptions {
            config: Config::default(),
            output_dir: temp.path().join("out"),
            topics_file: Some(topics_path),
            quiet: true,
        };
        cmd_generate(&options).unwrap();

        let piece = fs::read_to_string(temp.path().join("out").join("opinion_piece_01_X.md")).unwrap();
        assert!(piece.starts_with("# Part 1/1: X"));
    }

    #[test]
    fn test_generate_into_unwritable_dir_is_io_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let options = RunOptions {
            config: Config::default(),
            output_dir: blocker,
            topics_file: None,
            quiet: true,
        };
        let err = cmd_generate(&options).unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::IO_FAILURE);
    }
}
