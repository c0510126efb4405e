//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes readability scoring over stdio so editors and assistants can score
//! Spanish text without shelling out to the CLI.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. Each `#[tool]` method delegates to
//! `legible-core` and only handles parameter validation and serialization.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use legible_core::readability::{self, ScoreOptions, Stats};
use legible_core::{syllables, text};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `score_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScoreTextParams {
    /// The Spanish text to score.
    pub text: String,
    /// Minimum acceptable readability score.
    pub min_score: Option<f64>,
}

/// Parameters for the `count_syllables` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CountSyllablesParams {
    /// Words to count. Each entry is split into words first.
    pub words: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ScoreReport {
    #[serde(flatten)]
    stats: Stats,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_score: Option<f64>,
    below_min: bool,
}

#[derive(Debug, Serialize)]
struct WordSyllables<'a> {
    word: &'a str,
    syllables: usize,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

/// MCP server exposing readability scoring.
#[derive(Clone)]
pub struct ReadabilityServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    options: ScoreOptions,
    max_input_bytes: Option<usize>,
}

impl Default for ReadabilityServer {
    fn default() -> Self {
        Self::new(ScoreOptions::default(), Some(legible_core::DEFAULT_MAX_INPUT_BYTES))
    }
}

#[tool_router]
impl ReadabilityServer {
    /// Create a new MCP server instance.
    pub fn new(options: ScoreOptions, max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            options,
            max_input_bytes,
        }
    }

    fn check_size(&self, len: usize) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if len > max => Err(McpError::invalid_params(
                format!("input too large: {len} bytes (limit: {max} bytes)"),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let text = if params.format == "json" {
            to_json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
            }))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score Spanish text with the Fernández-Huerta index.
    #[tool(
        description = "Score the readability of Spanish text (Fernández-Huerta). Returns syllables, words, sentences and readability; higher is easier."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn score_text(
        &self,
        Parameters(params): Parameters<ScoreTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "score_text", text_len = params.text.len(), "executing MCP tool");
        self.check_size(params.text.len())?;

        let stats = readability::score_with(&params.text, &self.options);
        let below_min =
            stats.words > 0 && params.min_score.is_some_and(|min| stats.readability < min);
        let report = ScoreReport {
            stats,
            min_score: params.min_score,
            below_min,
        };

        tracing::info!(
            tool = "score_text",
            readability = stats.readability,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(&report)?)]))
    }

    /// Count syllables in individual words.
    #[tool(description = "Count syllables in Spanish words using the heuristic syllabifier.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn count_syllables(
        &self,
        Parameters(params): Parameters<CountSyllablesParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "count_syllables", count = params.words.len(), "executing MCP tool");
        self.check_size(params.words.iter().map(String::len).sum())?;

        let counts: Vec<WordSyllables<'_>> = params
            .words
            .iter()
            .flat_map(|entry| text::split_words(entry))
            .map(|word| WordSyllables {
                word,
                syllables: syllables::count_syllables(word),
            })
            .collect();

        Ok(CallToolResult::success(vec![Content::text(to_json(&counts)?)]))
    }
}

#[tool_handler]
impl ServerHandler for ReadabilityServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use score_text to score Spanish text readability.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
