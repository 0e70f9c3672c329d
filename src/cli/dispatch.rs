// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use console::style;

use crate::config::{EnvContext, PolicyConfig};
use crate::error::{CommitError, ConfigError, CplError, Result, ResultExt, ValidationError};
use crate::rules::{LintReport, RuleEngine};

use super::args::{Cli, Commands, HooksAction, HooksArgs, InitArgs, LintArgs, OutputFormat, COMMIT_EDITMSG};

/// File written by `cpl init`.
const CONFIG_FILE: &str = "cpl.toml";

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    let env = EnvContext::new(cli.actor.clone(), cli.release_bot.clone());
    let format = cli.format.unwrap_or(OutputFormat::Text);

    // init, hooks and version work without a readable configuration
    match cli.effective_command() {
        Commands::Lint(args) => run_lint(load_config(&cli)?, env, format, args),
        Commands::Rules => run_rules(load_config(&cli)?, env, format),
        Commands::Hooks(args) => run_hooks(args),
        Commands::Version => run_version(),
        Commands::Init(args) => run_init(args),
    }
}

/// Load the configuration from `--config` or the default locations.
fn load_config(cli: &Cli) -> Result<PolicyConfig> {
    let config = if let Some(config_path) = &cli.config {
        PolicyConfig::load_from(config_path)?
    } else {
        PolicyConfig::load()?
    };

    if !config.ui.color {
        console::set_colors_enabled(false);
    }

    Ok(config)
}

/// Run the lint command.
fn run_lint(mut config: PolicyConfig, env: EnvContext, format: OutputFormat, args: LintArgs) -> Result<()> {
    tracing::debug!("Running lint command with args: {:?}", args);

    if args.strict {
        config.fail_on_warnings = true;
    }

    let engine = RuleEngine::new(config, env)?;

    let reports = if args.is_range() {
        let to = args.to.as_deref().unwrap_or("HEAD");
        engine.check_range(args.from.as_deref(), to)?
    } else {
        let (message, from_file) = read_message(&args)?;
        vec![engine.lint_with(&message, from_file)]
    };

    match format {
        OutputFormat::Json => {
            let json = match reports.as_slice() {
                [single] => single.to_json(),
                many => serde_json::Value::Array(many.iter().map(LintReport::to_json).collect()),
            };
            let rendered = serde_json::to_string_pretty(&json).context("json")?;
            println!("{}", rendered);
        }
        OutputFormat::Text => {
            for report in &reports {
                report.print(args.verbose);
            }
        }
    }

    let failed = reports.iter().filter(|r| !r.is_valid()).count();
    if failed > 0 {
        return Err(CplError::Validation(ValidationError::LintFailed {
            failed,
            total: reports.len(),
        }));
    }

    Ok(())
}

/// Pick the message source: argument, then `--edit` file, then piped stdin.
///
/// The flag is set for messages read from git's message file, whose comment
/// lines are not part of the commit.
fn read_message(args: &LintArgs) -> Result<(String, bool)> {
    let (message, from_file) = if let Some(ref message) = args.message {
        (message.clone(), false)
    } else if let Some(ref path) = args.edit {
        let path = resolve_edit_path(path);
        tracing::debug!("Reading commit message from {:?}", path);
        let content =
            std::fs::read_to_string(&path).context(format!("Failed to read {}", path.display()))?;
        (content, true)
    } else if !std::io::stdin().is_terminal() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        (buffer, false)
    } else {
        return Err(CplError::Commit(CommitError::NoInput));
    };

    if message.trim().is_empty() {
        return Err(CplError::Commit(CommitError::EmptyMessage));
    }

    Ok((message, from_file))
}

/// The default message file lives in the git dir, which is not always `.git`.
fn resolve_edit_path(path: &Path) -> PathBuf {
    if path != Path::new(COMMIT_EDITMSG) {
        return path.to_path_buf();
    }

    match crate::git::open_repo() {
        Ok(repo) => repo.git_dir().join("COMMIT_EDITMSG"),
        Err(_) => path.to_path_buf(),
    }
}

/// Run the rules command.
fn run_rules(config: PolicyConfig, env: EnvContext, format: OutputFormat) -> Result<()> {
    let engine = RuleEngine::new(config, env)?;
    let config = engine.config();

    if format == OutputFormat::Json {
        let rules: serde_json::Map<String, serde_json::Value> = config
            .rules
            .iter()
            .map(|(name, rule)| {
                let value = serde_json::json!({
                    "level": rule.level.as_str(),
                    "when": rule.when.as_str(),
                    "value": rule.value,
                });
                (name.clone(), value)
            })
            .collect();

        let json = serde_json::json!({
            "fail_on_warnings": config.fail_on_warnings,
            "default_ignores": config.default_ignores,
            "plugins": engine.registry().plugins(),
            "rules": rules,
        });
        let rendered = serde_json::to_string_pretty(&json).context("json")?;
        println!("{}", rendered);
        return Ok(());
    }

    let width = config.rules.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, rule) in &config.rules {
        let level = match rule.level.as_str() {
            "error" => style(rule.level.as_str()).red(),
            "warning" => style(rule.level.as_str()).yellow(),
            other => style(other).dim(),
        };
        let value = rule.value.as_ref().map(ToString::to_string).unwrap_or_default();
        println!(
            "{:<width$}  {:<7}  {:<6}  {}",
            name,
            level,
            rule.when.as_str(),
            value,
            width = width
        );
    }

    for plugin in engine.registry().plugins() {
        println!("{} plugin: {}", style("+").dim(), plugin);
    }

    Ok(())
}

/// Run the hooks command.
fn run_hooks(args: HooksArgs) -> Result<()> {
    use crate::hooks::HookManager;

    tracing::debug!("Running hooks command");

    let manager = HookManager::new()?;

    match args.action {
        HooksAction::Install { hook, force } => {
            if let Some(hook_name) = hook {
                manager.install_hook(&hook_name, force)?;
                println!("✓ Installed {} hook", hook_name);
            } else {
                manager.install_all(force)?;
                println!("✓ Installed all hooks");
            }
        }
        HooksAction::Uninstall { hook } => {
            if let Some(hook_name) = hook {
                manager.uninstall_hook(&hook_name)?;
                println!("✓ Uninstalled {} hook", hook_name);
            } else {
                manager.uninstall_all()?;
                println!("✓ Uninstalled all hooks");
            }
        }
        HooksAction::Status => {
            for (hook, installed) in manager.status() {
                let icon = if installed { "✓" } else { "✗" };
                println!("{} {}", icon, hook);
            }
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cpl {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new(CONFIG_FILE);

    if config_path.exists() && !args.force {
        return Err(CplError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, example_config()).map_err(|e| CplError::WithContext {
        context: "init".to_string(),
        message: format!("Failed to write configuration: {}", e),
    })?;

    println!("✓ Created {}", CONFIG_FILE);

    Ok(())
}
