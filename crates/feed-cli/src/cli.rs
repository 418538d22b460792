//! CLI argument definitions for `feedtree`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use feed_xml::{DEFAULT_INDENT, Stylesheet};

#[derive(Parser)]
#[command(
    name = "feedtree",
    version,
    about = "Inspect and normalize parsed feed trees",
    long_about = "Inspect and normalize parsed RSS, Atom and RDF feed trees.\n\n\
                  Input files hold the JSON form of a parsed document: attributes\n\
                  under '@name' keys, text under '#text', CDATA under '#cdata'."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vvv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Canonicalize namespace prefixes and print the tree as JSON.
    Normalize(NormalizeArgs),

    /// List the namespace prefixes a tree uses.
    Namespaces(NamespacesArgs),

    /// Render a tree to an XML document.
    Render(RenderArgs),

    /// List the namespace registry.
    Registry(RegistryArgs),
}

#[derive(Args, Clone, Default)]
pub struct RegistryArgs {
    /// JSON file of extra prefix bindings merged over the standard registry.
    ///
    /// Each key is a prefix; each value is a URI or a list whose first
    /// element is the canonical URI and whose rest are aliases.
    #[arg(long = "registry", value_name = "FILE")]
    pub registry: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct NormalizeArgs {
    /// JSON tree to normalize.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Namespace URI of the document's own vocabulary; keys bound to it lose
    /// their prefix.
    #[arg(long = "primary-uri", value_name = "URI")]
    pub primary_uri: Option<String>,

    /// Prefix unprefixed element keys with the canonical prefix of a known
    /// default namespace.
    #[arg(long = "promote-default")]
    pub promote_default: bool,

    /// Print the tree on a single line.
    #[arg(long = "compact")]
    pub compact: bool,

    #[command(flatten)]
    pub registry: RegistryArgs,
}

#[derive(Args, Clone)]
pub struct NamespacesArgs {
    /// JSON tree to inspect.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Only inspect the top-level keys.
    #[arg(long = "shallow")]
    pub shallow: bool,

    #[command(flatten)]
    pub registry: RegistryArgs,
}

#[derive(Args, Clone)]
pub struct RenderArgs {
    /// JSON tree to render.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Spaces per nesting level (0 for compact output).
    #[arg(long = "indent", value_name = "N", default_value_t = DEFAULT_INDENT)]
    pub indent: usize,

    /// Add an `<?xml-stylesheet?>` instruction, given as TYPE=HREF.
    #[arg(long = "stylesheet", value_name = "TYPE=HREF", value_parser = parse_stylesheet)]
    pub stylesheets: Vec<Stylesheet>,

    /// Declare every known prefix the tree uses on its root element.
    #[arg(long = "declare-namespaces")]
    pub declare_namespaces: bool,

    #[command(flatten)]
    pub registry: RegistryArgs,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Parse a `TYPE=HREF` stylesheet argument.
pub fn parse_stylesheet(value: &str) -> Result<Stylesheet, String> {
    let Some((kind, href)) = value.split_once('=') else {
        return Err(format!("expected TYPE=HREF, got '{value}'"));
    };
    let (kind, href) = (kind.trim(), href.trim());
    if kind.is_empty() || href.is_empty() {
        return Err(format!("expected TYPE=HREF, got '{value}'"));
    }
    Ok(Stylesheet::new(kind, href))
}
