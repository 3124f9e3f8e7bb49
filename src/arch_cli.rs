//! arch subcommand - diagrams and host tools

use arch::{render_with, tool, DiagramFormat, RenderOptions};
use clap::Subcommand;
use memory::{MemoryConfig, Store};
use std::path::Path;

#[derive(Subcommand)]
pub enum ArchCommands {
    /// Render the architecture as a C4 context diagram
    Diagram {
        /// Format (plantuml, mermaid, likec4)
        #[arg(short, long, default_value = "plantuml")]
        format: String,
        /// Output file (.md files get a fenced code block)
        #[arg(short, long)]
        output: Option<String>,
        /// Diagram title (plantuml)
        #[arg(long)]
        title: Option<String>,
        /// View name (likec4)
        #[arg(long)]
        view: Option<String>,
    },
    /// List host tool descriptors
    Tools,
    /// Invoke a host tool with JSON arguments
    Invoke {
        /// Tool name
        name: String,
        /// JSON arguments
        #[arg(default_value = "{}")]
        args: String,
    },
}

pub fn run(cmd: ArchCommands, config: &MemoryConfig) -> anyhow::Result<()> {
    match cmd {
        ArchCommands::Diagram {
            format,
            output,
            title,
            view,
        } => {
            let options = RenderOptions { title, view };
            cmd_diagram(config, &format, output.as_deref(), &options)
        }
        ArchCommands::Tools => cmd_tools(),
        ArchCommands::Invoke { name, args } => cmd_invoke(config, &name, &args),
    }
}

fn cmd_diagram(
    config: &MemoryConfig,
    format: &str,
    output: Option<&str>,
    options: &RenderOptions,
) -> anyhow::Result<()> {
    let store = Store::from_config(config);
    let resolved = DiagramFormat::resolve(Some(format));
    if DiagramFormat::from_str(format).is_none() {
        eprintln!("Unknown format '{}', using {}", format, resolved.as_str());
    }

    let diagram = render_with(resolved, &store.snapshot(), options);

    match output {
        Some(file) => {
            let is_markdown = Path::new(file)
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("md"))
                .unwrap_or(false);
            let content = if is_markdown {
                format!("```{}\n{}\n```\n", resolved.as_str(), diagram)
            } else {
                format!("{}\n", diagram)
            };
            std::fs::write(file, content)?;
            println!("Saved to: {}", file);
        }
        None => {
            println!("{}", diagram);
        }
    }

    Ok(())
}

fn cmd_tools() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&tool::descriptors())?);
    Ok(())
}

fn cmd_invoke(config: &MemoryConfig, name: &str, args: &str) -> anyhow::Result<()> {
    let args: serde_json::Value = serde_json::from_str(args)?;
    let mut tools = tool::ArchitectureTools::from_config(config);
    println!("{}", tools.invoke(name, args));
    Ok(())
}
