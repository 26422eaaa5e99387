use anyhow::Result;
use clap::Parser;
use cocreate_cli::app;
use cocreate_cli::cli::{Cli, Command};
use cocreate_core::{ContentGenerator, ModelRouter, ModelRoutingParams, ProjectStore};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = app::load_settings(cli.config.as_deref(), cli.db.as_deref());
    let store = ProjectStore::from_settings(&settings);
    tracing::debug!("Project store at {}", store.path().display());

    match cli.command {
        Command::Questions {
            prompt,
            content_type,
        } => {
            let generator = ContentGenerator::from_settings(&settings)?;
            app::run_questions(&generator, &prompt, content_type).await?;
        }
        Command::Generate(args) => {
            let generator = ContentGenerator::from_settings(&settings)?;
            app::run_generate(&generator, &store, &args).await?;
        }
        Command::Route {
            use_case,
            content_type,
            has_image_ref,
            complexity,
        } => {
            let router = ModelRouter::new(settings.gemini.models.clone());
            let params = ModelRoutingParams::new(use_case, content_type)
                .with_image_ref(has_image_ref)
                .with_complexity(complexity);
            app::run_route(&router, &params);
        }
        Command::Projects { action } => {
            app::run_projects(&store, &action).await?;
        }
    }

    Ok(())
}
