use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cocreate_core::{
    ContentGenerator, ContentProject, ContentType, ModelRouter, ModelRoutingParams,
    ProjectStore, Settings,
};
use std::path::{Path, PathBuf};

use crate::cli::{GenerateArgs, ProjectsAction};

// ── Generation ──────────────────────────────────────────────────────────

pub async fn run_questions(
    generator: &ContentGenerator,
    prompt: &str,
    content_type: ContentType,
) -> Result<()> {
    let questions = generator
        .generate_initial_context_questions(prompt, content_type)
        .await?;
    println!("{questions}");
    Ok(())
}

pub async fn run_generate(
    generator: &ContentGenerator,
    store: &ProjectStore,
    args: &GenerateArgs,
) -> Result<()> {
    let context = args.context();
    let image_ref = args.image_ref.as_deref().map(resolve_image_ref).transpose()?;

    let result = generator
        .generate_final_content(&args.prompt, args.content_type, &context, image_ref.as_deref())
        .await?;

    match (&result, args.content_type) {
        (None, ContentType::Image) => eprintln!("No image was returned by the model."),
        (None, ContentType::Text) => eprintln!("No text was returned by the model."),
        (Some(uri), ContentType::Image) => {
            let path = args
                .out
                .clone()
                .unwrap_or_else(|| PathBuf::from(format!("cocreate-{}.png", uuid::Uuid::new_v4())));
            write_data_uri(uri, &path)?;
            println!("Image written to {}", path.display());
        }
        (Some(text), ContentType::Text) => println!("{text}"),
    }

    if let Some(title) = &args.save {
        let project = ContentProject::new(title.clone(), args.prompt.clone(), args.content_type)
            .with_context(context)
            .with_result(result);
        let mut projects: Vec<ContentProject> = store.load_projects().await;
        projects.push(project);
        store.save_projects(&projects).await;
        eprintln!("Saved as project '{title}' ({} total)", projects.len());
    }

    Ok(())
}

pub fn run_route(router: &ModelRouter, params: &ModelRoutingParams) {
    println!("{}", router.select_model(params));
}

// ── Projects ────────────────────────────────────────────────────────────

pub async fn run_projects(store: &ProjectStore, action: &ProjectsAction) -> Result<()> {
    match action {
        ProjectsAction::List => {
            let projects: Vec<ContentProject> = store.load_projects().await;
            if projects.is_empty() {
                println!("No saved projects.");
            }
            for p in &projects {
                let status = if p.result.is_some() { "done" } else { "draft" };
                println!(
                    "{}  {:<6}  {:<5}  {}  {}",
                    p.created_at.format("%Y-%m-%d %H:%M"),
                    p.content_type,
                    status,
                    p.title,
                    p.id
                );
            }
        }
        ProjectsAction::Export => {
            let projects: Vec<serde_json::Value> = store.load_projects().await;
            println!("{}", serde_json::to_string_pretty(&projects)?);
        }
        ProjectsAction::Clear => {
            store.save_projects::<serde_json::Value>(&[]).await;
            println!("Cleared saved projects at {}", store.path().display());
        }
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Turn a CLI image reference into what the generator expects.
///
/// Data URIs and URLs pass through; anything else is read as a local file
/// and inlined as a base64 data URI.
pub fn resolve_image_ref(reference: &str) -> Result<String> {
    if reference.starts_with("data:")
        || reference.starts_with("http://")
        || reference.starts_with("https://")
    {
        return Ok(reference.to_string());
    }

    let path = Path::new(reference);
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read image reference {}", path.display()))?;
    Ok(format!(
        "data:{};base64,{}",
        mime_for_path(path),
        STANDARD.encode(bytes)
    ))
}

pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "heic" => "image/heic",
        _ => "image/png",
    }
}

/// Decode the payload of a base64 data URI into `path`.
pub fn write_data_uri(uri: &str, path: &Path) -> Result<()> {
    let Some((_, payload)) = uri.split_once(',') else {
        bail!("Not a data URI");
    };
    let bytes = STANDARD
        .decode(payload)
        .context("Image payload is not valid base64")?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write image to {}", path.display()))?;
    Ok(())
}

/// Settings with CLI overrides applied.
pub fn load_settings(config: Option<&Path>, db: Option<&Path>) -> Settings {
    let mut settings = match config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    if let Some(db) = db {
        settings.storage.db_path = Some(db.to_path_buf());
    }
    settings
}
