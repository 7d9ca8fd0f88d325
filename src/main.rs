use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

use codekeep::editor::format_languages;
use codekeep::model::{BlockDraft, BlockId};
use codekeep::registry::CodeBlockRegistry;
use codekeep::render::render_block;
use codekeep::settings::Settings;

#[derive(Parser, Debug)]
#[command(author, version, about = "Manage code blocks stored in a registry backing field", long_about = None)]
struct Cli {
    /// File holding the serialized registry (the storage field)
    #[arg(value_name = "STORAGE_FILE")]
    storage_file: Utf8PathBuf,

    /// Optional TOML settings file with the enabled-languages list
    #[arg(long, value_name = "SETTINGS_FILE")]
    settings: Option<Utf8PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the registry as pretty JSON
    List,
    /// Print the rendered markup for every block
    Render,
    /// Add a block and print its assigned ID
    Add {
        #[arg(long)]
        language: String,
        #[arg(long)]
        code: String,
        #[arg(long)]
        title: Option<String>,
    },
    /// Remove a block by ID
    Remove {
        #[arg(value_name = "ID")]
        id: BlockId,
    },
    /// Print the language-selector options for the enabled set
    Languages,
}

fn load_registry(path: &Utf8PathBuf) -> CodeBlockRegistry {
    // A missing or malformed storage file is an empty registry, not an error.
    let field = std::fs::read_to_string(path).unwrap_or_default();
    CodeBlockRegistry::from_backing_field(&field)
}

fn save_registry(path: &Utf8PathBuf, registry: &CodeBlockRegistry) -> Result<()> {
    std::fs::write(path, registry.backing_field()).with_context(|| format!("Write {}", path))
}

fn load_settings(path: Option<&Utf8PathBuf>) -> Result<Settings> {
    match path {
        Some(p) => Ok(Settings::load_from_path(p.as_std_path())
            .with_context(|| format!("Load settings from {}", p))?
            .unwrap_or_default()),
        None => Ok(Settings::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut registry = load_registry(&cli.storage_file);

    match cli.command {
        Command::List => {
            let blocks: std::collections::BTreeMap<BlockId, _> = registry.iter().collect();
            println!("{}", serde_json::to_string_pretty(&blocks)?);
        }
        Command::Render => {
            for (id, block) in registry.iter() {
                println!("{}", render_block(id, block));
            }
        }
        Command::Add {
            language,
            code,
            title,
        } => {
            let draft = BlockDraft {
                title,
                language,
                code,
            };
            let id = registry.commit(draft, None);
            save_registry(&cli.storage_file, &registry)?;
            println!("{}", id);
        }
        Command::Remove { id } => {
            registry.remove(id);
            save_registry(&cli.storage_file, &registry)?;
        }
        Command::Languages => {
            let settings = load_settings(cli.settings.as_ref())?;
            for option in format_languages(&settings.enabled_languages) {
                println!("{}\t{}", option.value, option.label);
            }
        }
    }

    Ok(())
}
