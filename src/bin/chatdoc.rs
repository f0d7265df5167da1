//! chatdoc CLI - chat transcripts and LaTeX math to OMML

#[cfg(feature = "cli")]
use anyhow::Context;
#[cfg(feature = "cli")]
use chatdoc::{
    build_document, compile, compile_and_serialize_with_options, segment, ChatExport,
    ExportOptions, OmmlRenderOptions,
};
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "chatdoc")]
#[command(version)]
#[command(about = "Chat transcripts and LaTeX math to Office Math Markup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    render: RenderArgs,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct RenderArgs {
    /// Omit xmlns declarations on math zone roots
    #[arg(long, global = true)]
    no_namespaces: bool,

    /// Font written into math runs (empty string disables it)
    #[arg(long, global = true, default_value = "Cambria Math")]
    math_font: String,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Compile a LaTeX expression to OMML
    Math {
        /// LaTeX source (reads stdin if not provided)
        latex: Option<String>,

        /// Print the compiled node tree instead of markup
        #[arg(long)]
        tree: bool,
    },

    /// Print the segments of a message body as JSON
    Segment {
        /// Input file (reads stdin if not provided)
        input: Option<String>,
    },

    /// Convert a chat export request (JSON) to the document IR (JSON)
    Export {
        /// Input file (reads stdin if not provided)
        input: Option<String>,

        /// Output file path (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<String>,

        /// Label for user messages
        #[arg(long, default_value = "You")]
        user_label: String,

        /// Label for all other messages
        #[arg(long, default_value = "Assistant")]
        assistant_label: String,

        /// Leave out the export timestamp
        #[arg(long)]
        no_timestamp: bool,

        /// Fail on formulas that cannot be rendered instead of keeping their source
        #[arg(long)]
        strict: bool,
    },
}

#[cfg(feature = "cli")]
impl RenderArgs {
    fn options(&self) -> OmmlRenderOptions {
        let font = self.math_font.trim();
        OmmlRenderOptions {
            declare_namespaces: !self.no_namespaces,
            math_font: (!font.is_empty()).then(|| font.to_string()),
            ..Default::default()
        }
    }
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {}", path)),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => fs::write(path, content).with_context(|| format!("writing {}", path)),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
            Ok(())
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let render = cli.render.options();

    match cli.command {
        Commands::Math { latex, tree } => {
            let latex = match latex {
                Some(latex) => latex,
                None => read_input(None)?,
            };
            let latex = latex.trim();
            if tree {
                write_output(None, &format!("{:#?}", compile(latex)))
            } else {
                let zone = compile_and_serialize_with_options(latex, &render);
                write_output(None, &zone.to_markup())
            }
        }
        Commands::Segment { input } => {
            let body = read_input(input.as_deref())?;
            let json = serde_json::to_string_pretty(&segment(&body))?;
            write_output(None, &json)
        }
        Commands::Export {
            input,
            output,
            user_label,
            assistant_label,
            no_timestamp,
            strict,
        } => {
            let request = read_input(input.as_deref())?;
            let export = ChatExport::from_json(&request)?;
            let options = ExportOptions {
                user_label,
                assistant_label,
                include_timestamp: !no_timestamp,
                strict_math: strict,
                render,
                ..Default::default()
            };
            let document = build_document(&export, &options)?;
            log::info!(
                "exported \"{}\": {} messages, {} blocks",
                export.title,
                export.messages.len(),
                document.blocks.len()
            );
            let json = serde_json::to_string_pretty(&document)?;
            write_output(output.as_deref(), &json)
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install chatdoc --features cli");
    eprintln!("  chatdoc <math|segment|export> [INPUT]");
}
