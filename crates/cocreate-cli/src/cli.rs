use clap::{Args, Parser, Subcommand};
use cocreate_core::{Complexity, ContentType, GenerationContext, UseCase};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cocreate")]
#[command(about = "CoCreate - co-creative marketing content with Gemini")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Project database (overrides storage.db_path)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask the model for four clarifying questions about a brief
    Questions {
        prompt: String,
        /// Content type: IMAGEN|image or TEXTO|text
        #[arg(short = 't', long = "type", default_value = "TEXTO")]
        content_type: ContentType,
    },
    /// Generate the final image or text
    Generate(GenerateArgs),
    /// Show which model a request would be routed to
    Route {
        #[arg(long, value_parser = parse_use_case)]
        use_case: UseCase,
        #[arg(short = 't', long = "type")]
        content_type: ContentType,
        #[arg(long)]
        has_image_ref: bool,
        #[arg(long, value_parser = parse_complexity, default_value = "high")]
        complexity: Complexity,
    },
    /// Inspect or reset saved projects
    Projects {
        #[command(subcommand)]
        action: ProjectsAction,
    },
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    pub prompt: String,
    #[arg(short = 't', long = "type", default_value = "TEXTO")]
    pub content_type: ContentType,
    #[arg(long, default_value = "")]
    pub objective: String,
    #[arg(long, default_value = "")]
    pub audience: String,
    #[arg(long, default_value = "")]
    pub tone: String,
    #[arg(long, default_value = "")]
    pub style: String,
    #[arg(long, default_value = "")]
    pub restrictions: String,
    /// Reference image: a data URI, a URL, or a local file
    #[arg(long)]
    pub image_ref: Option<String>,
    /// Where to write a generated image
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Title to save the result under as a project
    #[arg(long)]
    pub save: Option<String>,
}

impl GenerateArgs {
    pub fn context(&self) -> GenerationContext {
        GenerationContext {
            objective: self.objective.clone(),
            audience: self.audience.clone(),
            tone: self.tone.clone(),
            style: self.style.clone(),
            restrictions: self.restrictions.clone(),
        }
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ProjectsAction {
    /// List saved projects
    List,
    /// Print saved projects as JSON
    Export,
    /// Remove every saved project
    Clear,
}

fn parse_use_case(s: &str) -> Result<UseCase, String> {
    match s.to_lowercase().replace('-', "_").as_str() {
        "context_questions" | "questions" => Ok(UseCase::ContextQuestions),
        "content_generation" | "generation" => Ok(UseCase::ContentGeneration),
        other => Err(format!("unknown use case '{other}'")),
    }
}

fn parse_complexity(s: &str) -> Result<Complexity, String> {
    match s.to_lowercase().as_str() {
        "low" => Ok(Complexity::Low),
        "high" => Ok(Complexity::High),
        other => Err(format!("unknown complexity '{other}'")),
    }
}
