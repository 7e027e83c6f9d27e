//! Shared setup for commands: configuration, registry text and change set.

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::args::{CommentArgs, CommonArgs};
use crate::config::{CONFIG_FILE_NAME, Config, load_config};
use crate::core::{ChangeSet, CommentSettings, change_set_from_serialized};

pub struct RunContext {
    pub config: Config,
    pub registry_path: PathBuf,
    /// Raw registry contents; parsing is left to the command.
    pub registry_text: String,
    pub changed: ChangeSet,
    pub verbose: bool,
}

impl RunContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let verbose = common.verbose;
        let cwd = env::current_dir().context("Failed to resolve working directory")?;
        let config_result = load_config(&cwd)?;
        let mut config = config_result.config;

        if verbose {
            match &config_result.source {
                Some(path) => eprintln!("{} using {}", "note:".bold().cyan(), path.display()),
                None => eprintln!(
                    "{} no {} found, using default configuration",
                    "note:".bold().cyan(),
                    CONFIG_FILE_NAME
                ),
            }
        }

        if let Some(delimiter) = &common.delimiter {
            require_non_blank("--delimiter", delimiter)?;
            config.delimiter = delimiter.clone();
        }

        let registry_path = common
            .registry
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.registry_path));
        let registry_text = fs::read_to_string(&registry_path).with_context(|| {
            format!("Failed to read registry file: {}", registry_path.display())
        })?;

        let changed = change_set_from_serialized(&common.changed, &config.delimiter);

        if verbose {
            eprintln!(
                "{} registry {}, {} changed file(s)",
                "note:".bold().cyan(),
                registry_path.display(),
                changed.len()
            );
        }

        Ok(Self {
            config,
            registry_path,
            registry_text,
            changed,
            verbose,
        })
    }

    /// Comment settings from config, with command-line overrides applied.
    pub fn comment_settings(
        &self,
        overrides: &CommentArgs,
        bot_login: Option<&str>,
    ) -> Result<CommentSettings> {
        resolve_comment_settings(&self.config, overrides, bot_login)
    }
}

fn require_non_blank(flag: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!("{} must not be empty", flag);
    }
    Ok(())
}

fn resolve_comment_settings(
    config: &Config,
    overrides: &CommentArgs,
    bot_login: Option<&str>,
) -> Result<CommentSettings> {
    let header = overrides
        .header
        .clone()
        .unwrap_or_else(|| config.comment_header.clone());
    let label = overrides
        .label
        .clone()
        .unwrap_or_else(|| config.label.clone());
    let bot_login = bot_login
        .map(String::from)
        .unwrap_or_else(|| config.bot_login.clone());

    // An empty login or header would never match the existing comment.
    require_non_blank("--header", &header)?;
    require_non_blank("--label", &label)?;
    require_non_blank("--bot-login", &bot_login)?;

    Ok(CommentSettings {
        header,
        label,
        bot_login,
    })
}
