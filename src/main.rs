use clap::Parser;
use contact_converter::core::messages::MessageHelper;
use contact_converter::domain::model::PersonDto;
use contact_converter::config::LoggingConfig;
use contact_converter::domain::ports::Storage;
use contact_converter::utils::error::{ConvertError, ErrorSeverity};
use contact_converter::utils::{logger, validation::Validate};
use contact_converter::{
    build_registry, AppConfig, CliConfig, ContactConverter, ContactRoutes, ContactService,
    InMemoryPersonRepository, LocalStorage, RouteRequest,
};
use std::path::Path;
use std::sync::Arc;

async fn run(cli: &CliConfig, config: AppConfig) -> Result<String, ConvertError> {
    let config = Arc::new(config);
    let registry = Arc::new(build_registry(&config)?);
    tracing::debug!("{:?}", registry);

    let service = ContactService::new(
        InMemoryPersonRepository::new(&config.app.audit_user),
        ContactConverter::new(),
        MessageHelper::new(&config.messages),
    );

    if let Some(input) = &cli.input {
        let storage = LocalStorage::new(".");
        let people: Vec<PersonDto> = serde_json::from_slice(&storage.read_file(input).await?)?;
        service.import(&people).await?;
    }

    let body = cli
        .body
        .as_deref()
        .map(serde_json::from_str::<PersonDto>)
        .transpose()?;
    let request = RouteRequest {
        id: cli.id,
        page: cli.page,
        page_size: cli.page_size,
        last_name: cli.last_name.clone(),
        body,
    };

    let routes = ContactRoutes::new(config, service, registry);
    let model = routes.handle(&cli.route, &request).await?;
    let json = serde_json::to_vec_pretty(&model.to_json()?)?;

    let output = Path::new(&cli.output);
    let parent = output.parent().unwrap_or_else(|| Path::new("."));
    let file_name = output
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("response.json");
    LocalStorage::new(parent).write_file(file_name, &json).await?;

    Ok(cli.output.clone())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path),
        None => Ok(AppConfig::default()),
    };

    // Falls back to the default logging section when the config fails to load.
    match &config {
        Ok(config) => logger::init_logger(&config.logging, cli.verbose),
        Err(_) => logger::init_logger(&LoggingConfig::default(), cli.verbose),
    }

    tracing::info!("Starting contact-converter CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match cli.validate() {
        Ok(()) => match config {
            Ok(config) => run(&cli, config).await,
            Err(e) => Err(e),
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(output_path) => {
            tracing::info!("✅ Route '{}' completed", cli.route);
            tracing::info!("📁 Response saved to: {}", output_path);
            println!("📁 Response saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Route '{}' failed: {} (Category: {:?}, Severity: {:?})",
                cli.route,
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 4,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
