//! CLI entrypoint for Tool Relay
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use relay_application::{
    ConversationLogger, ExecutionParams, LlmGateway, NoConversationLogger, RunTurnUseCase,
    ToolCatalogPort,
};
use relay_infrastructure::{
    BuiltinToolCatalog, ConfigLoader, FileConfig, GatewaySettings, JsonlConversationLogger,
    OpenAiCompatibleGateway,
};
use relay_presentation::{ChatRepl, Cli, ReplConfig};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize logging based on verbosity level.
///
/// The returned guard must live until exit so buffered file logs are flushed.
fn init_tracing(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(dir) = &cli.log_dir else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::daily(dir, "tool-relay.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Load configuration files, then apply command-line overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(model) = &cli.model {
        config.gateway.model = model.clone();
    }
    if let Some(base_url) = &cli.base_url {
        config.gateway.base_url = base_url.clone();
    }
    if let Some(limit) = cli.search_limit {
        config.catalog.search_limit = limit;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let _log_guard = init_tracing(&cli)?;

    info!("Starting Tool Relay");

    let config = load_config(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        println!();
        println!("Effective configuration:");
        println!("{}", config.to_toml()?);
        return Ok(ExitCode::SUCCESS);
    }

    let errors = config.validate();
    if !errors.is_empty() {
        let details = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("Invalid configuration:\n{}", details);
    }

    // === Dependency Injection ===
    let catalog: Arc<dyn ToolCatalogPort> = Arc::new(BuiltinToolCatalog::with_samples());

    let gateway = OpenAiCompatibleGateway::new(GatewaySettings::from_env(
        config.gateway.base_url.clone(),
        config.gateway.model.clone(),
        &config.gateway.api_key_env,
        Duration::from_secs(config.gateway.timeout_seconds),
    ))?;
    info!(
        "Using model {} at {}",
        gateway.model_name(),
        gateway.endpoint()
    );
    let model_name = gateway.model_name().to_string();
    let gateway: Arc<dyn LlmGateway> = Arc::new(gateway);

    let conversation_logger: Arc<dyn ConversationLogger> =
        match config.logging.conversation_log_path() {
            Some(path) => match JsonlConversationLogger::new(path) {
                Some(logger) => {
                    info!("Conversation log: {}", logger.path().display());
                    Arc::new(logger)
                }
                None => {
                    warn!("Conversation logging disabled");
                    Arc::new(NoConversationLogger)
                }
            },
            None => Arc::new(NoConversationLogger),
        };

    let use_case = RunTurnUseCase::new(catalog.clone(), gateway)
        .with_params(ExecutionParams::default().with_search_limit(config.catalog.search_limit))
        .with_conversation_logger(conversation_logger);

    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress && !cli.quiet,
        history_file: config.repl.history_path(),
    };
    let mut repl = ChatRepl::new(use_case, catalog, model_name).with_config(repl_config);

    // Single prompt mode
    if let Some(prompt) = &cli.prompt {
        return Ok(match repl.run_once(prompt).await {
            Ok(_) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        });
    }

    repl.run().await?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_win_over_config() {
        let cli = Cli::parse_from([
            "tool-relay",
            "--no-config",
            "--model",
            "llama3.1",
            "--base-url",
            "http://localhost:11434/v1",
            "--search-limit",
            "4",
        ]);

        let config = load_config(&cli).unwrap();
        assert_eq!(config.gateway.model, "llama3.1");
        assert_eq!(config.gateway.base_url, "http://localhost:11434/v1");
        assert_eq!(config.catalog.search_limit, 4);
        assert_eq!(config.gateway.api_key_env, "OPENAI_API_KEY");
    }

    #[test]
    fn test_zero_search_limit_fails_validation() {
        let cli = Cli::parse_from(["tool-relay", "--no-config", "--search-limit", "0"]);
        let config = load_config(&cli).unwrap();
        assert!(!config.validate().is_empty());
    }
}
