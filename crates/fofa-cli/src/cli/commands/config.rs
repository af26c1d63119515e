//! `fofa config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;
use fofa::mask;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Set { key, value } => set_config(&ctx, &key, &value),
        ConfigCommands::Get { key } => get_config(&ctx, &key),
        ConfigCommands::Path => {
            println!("{}", ctx.config_path.display());
            Ok(())
        }
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let mut config = Config::load_from(&ctx.config_path)?;
    config.key = config.key.as_deref().map(mask);

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&config)?);
        }
        _ => {
            let unset = || "(not set)".dimmed().to_string();

            println!("{}", "Current Configuration:".bold());
            println!();
            println!("  {} {}", "email:".bold(), config.email.unwrap_or_else(unset));
            println!("  {} {}", "key:".bold(), config.key.unwrap_or_else(unset));
            println!(
                "  {} {}",
                "output_format:".bold(),
                config.output_format.unwrap_or_default()
            );
            println!("  {} {}", "insecure:".bold(), config.insecure);
        }
    }

    Ok(())
}

fn set_config(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_from(&ctx.config_path)?;

    match key {
        "email" => {
            config.email = Some(value.to_string());
            println!("{} Email set to {}.", "Success:".green().bold(), value.cyan());
        }
        "key" | "api_key" => {
            config.key = Some(value.to_string());
            println!("{} API key set.", "Success:".green().bold());
        }
        "output_format" | "output" => {
            config.output_format = Some(value.parse()?);
            println!("{} Output format set to {}.", "Success:".green().bold(), value.cyan());
        }
        "insecure" => {
            config.insecure = value.parse()?;
            println!("{} insecure set to {}.", "Success:".green().bold(), value);
        }
        _ => anyhow::bail!("{}", unknown_key(key)),
    }

    config.save_to(&ctx.config_path)?;

    Ok(())
}

fn get_config(ctx: &Context, key: &str) -> Result<()> {
    let config = Config::load_from(&ctx.config_path)?;

    let value = match key {
        "email" => config.email.unwrap_or_default(),
        "key" | "api_key" => config.key.as_deref().map(mask).unwrap_or_default(),
        "output_format" | "output" => config.output_format.unwrap_or_default().to_string(),
        "insecure" => config.insecure.to_string(),
        _ => anyhow::bail!("{}", unknown_key(key)),
    };

    println!("{value}");
    Ok(())
}

fn unknown_key(key: &str) -> String {
    format!(
        "Unknown config key: {key}\n\n\
         Available keys:\n  \
         email          - Your FOFA account email\n  \
         key            - Your FOFA API key\n  \
         output_format  - Default output format (pretty/json/csv/yaml)\n  \
         insecure       - Skip TLS certificate verification (true/false)"
    )
}
