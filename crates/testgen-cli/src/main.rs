use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use testgen_codegen::{generate_scaffolding, is_action_enabled, GenerateOptions, GenerationSummary};
use testgen_config::TestgenConfig;
use testgen_format::{render_java_file, PrintConfig};
use testgen_index::{load_java_file, IndexOptions, MemoryIndex, ProjectModel};
use testgen_model::JavaFile;

#[derive(Parser)]
#[command(name = "testgen", version, about = "Mockito/JUnit 5 test scaffolding generator")]
struct Cli {
    /// Config file (defaults to `TESTGEN_CONFIG_PATH` or `testgen.toml` in the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add mocks, constants, nested classes and imports to a test file model
    Generate(GenerateArgs),
    /// Print a test file model as Java source without changing it
    Render(RenderArgs),
    /// Print the JSON schema of `testgen.toml`
    Schema,
}

#[derive(Args)]
struct GenerateArgs {
    /// Project model JSON (`{ "classes": [...], "libraries": [...] }`)
    #[arg(long)]
    project: PathBuf,
    /// Test file model JSON
    file: PathBuf,
    /// Emit the updated model and a summary as JSON
    #[arg(long)]
    json: bool,
    /// Write to this path instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Seed for generated constant values (overrides `generation.seed`)
    #[arg(long)]
    seed: Option<u64>,
    /// Generate even when the file name does not match `action.file_suffix`
    #[arg(long)]
    force: bool,
}

#[derive(Args)]
struct RenderArgs {
    /// Test file model JSON
    file: PathBuf,
    /// Write to this path instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct GenerateReport<'a> {
    summary: GenerationSummary,
    file: &'a JavaFile,
}

fn main() {
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            2
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    let config = load_config(cli.config.as_deref())?;
    testgen_config::init_tracing(&config.logging);

    match cli.command {
        Command::Generate(args) => generate(&config, args),
        Command::Render(args) => {
            let file = load_java_file(&args.file)
                .with_context(|| format!("failed to load test file model {}", args.file.display()))?;
            let text = render_java_file(&file, &PrintConfig::default());
            write_output(&text, args.output.as_deref())?;
            Ok(0)
        }
        Command::Schema => {
            let schema = testgen_config::json_schema_string()?;
            println!("{schema}");
            Ok(0)
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<TestgenConfig> {
    if let Some(path) = explicit {
        return TestgenConfig::load_from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let (config, _path) = testgen_config::load_for_workspace(&cwd)
        .with_context(|| format!("failed to load config for {}", cwd.display()))?;
    Ok(config)
}

fn generate(config: &TestgenConfig, args: GenerateArgs) -> Result<i32> {
    let mut file = load_java_file(&args.file)
        .with_context(|| format!("failed to load test file model {}", args.file.display()))?;

    let suffix = &config.action.file_suffix;
    if !args.force && !is_action_enabled(&file.name, suffix) {
        eprintln!(
            "testgen: `{}` does not end with `{suffix}`; pass --force to generate anyway",
            file.name
        );
        return Ok(1);
    }

    let project = ProjectModel::load(&args.project)
        .with_context(|| format!("failed to load project model {}", args.project.display()))?;
    let mut index = MemoryIndex::with_builtin_libraries();
    index.extend_from_model(
        project,
        &IndexOptions {
            lombok: config.index.lombok,
        },
    );
    tracing::debug!(target: "testgen.cli", classes = index.len(), "symbol index ready");

    let options = GenerateOptions {
        seed: args.seed.or(config.generation.seed),
    };
    let summary = generate_scaffolding(&mut file, &index, &options);

    let text = if args.json {
        let mut out = serde_json::to_string_pretty(&GenerateReport {
            summary,
            file: &file,
        })?;
        out.push('\n');
        out
    } else {
        render_java_file(&file, &PrintConfig::default())
    };
    write_output(&text, args.output.as_deref())?;
    Ok(0)
}

fn write_output(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}
