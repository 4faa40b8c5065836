//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, FEED_URL_ENV};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Path => show_path(ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    println!("[feed]");
    ctx.output.kv("url", &ctx.config.feed.url);
    ctx.output.kv("format", &ctx.config.feed.format);
    ctx.output.kv("timeout_secs", &ctx.config.feed.timeout_secs.to_string());

    println!("[display]");
    ctx.output.kv("currency", &ctx.config.display.currency);
    ctx.output.kv("placeholder_image", &ctx.config.display.placeholder_image);
    ctx.output.kv("fallback_link", &ctx.config.display.fallback_link);

    println!("[search]");
    ctx.output.kv("debounce_ms", &ctx.config.search.debounce_ms.to_string());

    if std::env::var_os(FEED_URL_ENV).is_some() {
        ctx.output.info(&format!("feed.url overridden by {}", FEED_URL_ENV));
    }

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    match &ctx.config_path {
        Some(path) => println!("{}", path.display()),
        None => ctx.output.warn("No config file found; using defaults"),
    }
    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(path) = &ctx.config_path else {
        bail!("No config file found. Run `vitrine config init` to create one.");
    };
    let path = path.to_string_lossy();

    // Reload so environment overrides are not written back.
    let mut config = CliConfig::load(&path)?;
    set_config_value(&mut config, key, value)?;
    config.save(&path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));
    Ok(())
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["feed", "url"] => config.feed.url = value.to_string(),
        ["feed", "format"] => config.feed.format = value.to_string(),
        ["feed", "timeout_secs"] => config.feed.timeout_secs = value.parse()?,
        ["display", "currency"] => config.display.currency = value.to_string(),
        ["display", "placeholder_image"] => config.display.placeholder_image = value.to_string(),
        ["display", "fallback_link"] => config.display.fallback_link = value.to_string(),
        ["search", "debounce_ms"] => config.search.debounce_ms = value.parse()?,
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    let (errors, warnings) = check(&ctx.config);

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }
    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
    } else {
        ctx.output.success("Configuration is valid (with warnings)");
    }

    Ok(())
}

fn check(config: &CliConfig) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if config.feed.url.trim().is_empty() {
        errors.push("feed.url is required".to_string());
    } else if !config.feed.url.starts_with("http://") && !config.feed.url.starts_with("https://") {
        errors.push(format!("feed.url '{}' is not an http(s) URL", config.feed.url));
    }

    if let Err(e) = config.feed_format() {
        errors.push(format!("{:#}", e));
    }

    if let Err(e) = config.currency() {
        errors.push(format!("{:#}", e));
    }

    if config.feed.timeout_secs == 0 {
        errors.push("feed.timeout_secs must be greater than 0".to_string());
    }

    if config.search.debounce_ms > 2000 {
        warnings.push(format!(
            "search.debounce_ms = {} will make search feel unresponsive",
            config.search.debounce_ms
        ));
    }

    (errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let (errors, warnings) = check(&CliConfig::default());
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = CliConfig::default();
        config.feed.url = "ftp://sheet".to_string();
        config.feed.format = "xml".to_string();
        config.feed.timeout_secs = 0;
        config.search.debounce_ms = 5000;

        let (errors, warnings) = check(&config);
        assert_eq!(errors.len(), 3);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_set_config_value() {
        let mut config = CliConfig::default();
        set_config_value(&mut config, "search.debounce_ms", "150").unwrap();
        set_config_value(&mut config, "display.currency", "EUR").unwrap();
        assert_eq!(config.search.debounce_ms, 150);
        assert_eq!(config.display.currency, "EUR");

        assert!(set_config_value(&mut config, "search.debounce_ms", "soon").is_err());
        assert!(set_config_value(&mut config, "feed.retries", "3").is_err());
    }
}
