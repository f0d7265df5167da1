//! Chat export → document IR pipeline.
//!
//! This is the caller side of the core: it segments each message, sends
//! formula spans through the math compiler and collects blocks in the order
//! a document writer would append them.

use chatdoc_ir::{Alignment, Block, Document, Inline, InlineSpan, Role, Segment};
use chatdoc_omml_backend::OmmlRenderOptions;
use chrono::{Local, NaiveDateTime};
use serde::Deserialize;

use crate::core::latex2omml::{compile_and_serialize_with_options, try_compile_and_serialize};
use crate::core::markdown::{segment, split_inline};
use crate::utils::error::{ExportError, ExportResult};

pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

/// An export request: a titled list of chat messages.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatExport {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

fn default_title() -> String {
    "Chat export".to_string()
}

fn default_role() -> String {
    "user".to_string()
}

impl ChatExport {
    pub fn from_json(input: &str) -> ExportResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

impl ChatMessage {
    pub fn role(&self) -> Role {
        if self.role == "user" {
            Role::User
        } else {
            Role::Assistant
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Label printed above user messages
    pub user_label: String,
    /// Label printed above every other message
    pub assistant_label: String,
    /// Number of `─` characters in the separator between messages
    pub separator_width: usize,
    /// Add the export time under the title
    pub include_timestamp: bool,
    /// Fail the export instead of substituting a text run for broken math
    pub strict_math: bool,
    pub render: OmmlRenderOptions,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            user_label: "You".to_string(),
            assistant_label: "Assistant".to_string(),
            separator_width: 60,
            include_timestamp: true,
            strict_math: false,
            render: OmmlRenderOptions::default(),
        }
    }
}

/// Build the document IR for an export, stamped with the local time.
pub fn build_document(export: &ChatExport, options: &ExportOptions) -> ExportResult<Document> {
    build_document_at(export, options, Local::now().naive_local())
}

pub fn build_document_at(
    export: &ChatExport,
    options: &ExportOptions,
    now: NaiveDateTime,
) -> ExportResult<Document> {
    if export.messages.is_empty() {
        return Err(ExportError::invalid("No messages provided"));
    }

    let mut blocks = vec![Block::Heading {
        text: export.title.clone(),
    }];
    if options.include_timestamp {
        blocks.push(Block::Timestamp {
            text: now.format(TIMESTAMP_FORMAT).to_string(),
        });
    }

    let last = export.messages.len() - 1;
    for (i, message) in export.messages.iter().enumerate() {
        let role = message.role();
        let label = match role {
            Role::User => options.user_label.clone(),
            Role::Assistant => options.assistant_label.clone(),
        };
        blocks.push(Block::RoleLabel { role, label });
        push_message_blocks(&message.content, options, &mut blocks)?;
        if i < last {
            blocks.push(Block::Separator {
                text: "─".repeat(options.separator_width),
            });
        }
    }

    log::debug!(
        "built {} blocks from {} messages",
        blocks.len(),
        export.messages.len()
    );
    Ok(Document::new(blocks))
}

fn push_message_blocks(
    content: &str,
    options: &ExportOptions,
    blocks: &mut Vec<Block>,
) -> ExportResult<()> {
    for seg in segment(content) {
        let block = match seg {
            Segment::CodeBlock { language, lines } => Block::Code {
                language,
                text: lines.join("\n"),
            },
            Segment::TableBlock { rows } => {
                let mut table = Vec::with_capacity(rows.len());
                for row in rows.iter().filter(|r| !r.cells.is_empty()) {
                    let cells = row
                        .cells
                        .iter()
                        .map(|cell| inlines(cell, options))
                        .collect::<ExportResult<Vec<_>>>()?;
                    table.push(cells);
                }
                if table.is_empty() {
                    continue;
                }
                Block::Table { rows: table }
            }
            Segment::BlockFormula { latex } => Block::Formula {
                markup: math_markup(&latex, options)?,
                align: Alignment::Center,
            },
            Segment::Image { alt, source } => Block::Image { alt, source },
            Segment::PlainText { line } => Block::Paragraph {
                content: inlines(&line, options)?,
            },
            Segment::Blank => Block::Empty,
        };
        blocks.push(block);
    }
    Ok(())
}

fn inlines(text: &str, options: &ExportOptions) -> ExportResult<Vec<Inline>> {
    split_inline(text)
        .into_iter()
        .map(|span| {
            Ok(match span {
                InlineSpan::Text(t) => Inline::Text(t),
                InlineSpan::Strong(t) => Inline::Strong(t),
                InlineSpan::Math(latex) => Inline::Math(math_markup(&latex, options)?),
            })
        })
        .collect()
}

fn math_markup(latex: &str, options: &ExportOptions) -> ExportResult<String> {
    if options.strict_math {
        return Ok(try_compile_and_serialize(latex, &options.render)?.to_markup());
    }
    Ok(compile_and_serialize_with_options(latex, &options.render).to_markup())
}
