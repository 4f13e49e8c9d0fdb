//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "vitrine",
    bin_name = "vitrine",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3ec} In-memory product catalog editor",
    long_about = "Vitrine validates and edits a product catalog: add, edit \
                  and remove products with per-field validation.",
    after_help = "EXAMPLES:\n\
        \x20 vitrine add --title \"Trail running shoes\" --description \"Reinforced toe cap, aggressive lugs\" \\\n\
        \x20\x20\x20\x20 --image-url https://example.com/shoes.jpg --price 89.99 --color \"#1F8A70\"\n\
        \x20 vitrine list --format json\n\
        \x20 vitrine check --title \"too short\" --price abc\n\
        \x20 vitrine completions bash > /usr/share/bash-completion/completions/vitrine",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a draft and add it to the catalog.
    #[command(
        visible_alias = "a",
        about = "Add a product to the catalog",
        after_help = "EXAMPLES:\n\
            \x20 vitrine add --title \"Classic denim jacket, unisex\" \\\n\
            \x20\x20\x20\x20 --description \"Mid-wash denim with button front\" \\\n\
            \x20\x20\x20\x20 --image-url https://example.com/jacket.jpg \\\n\
            \x20\x20\x20\x20 --price 450 --color \"#13005A\" --category Clothes"
    )]
    Add(AddArgs),

    /// Re-validate and overwrite an existing product.
    #[command(
        visible_alias = "e",
        about = "Edit an existing product",
        after_help = "EXAMPLES:\n\
            \x20 vitrine edit 67e55044-10b1-426f-9247-bb680e5fe0c8 --price 59.99\n\
            \x20 vitrine edit 67e55044-10b1-426f-9247-bb680e5fe0c8 --title \"A better product title\""
    )]
    Edit(EditArgs),

    /// Remove a product from the catalog.
    #[command(
        visible_alias = "rm",
        about = "Remove a product",
        after_help = "EXAMPLES:\n\
            \x20 vitrine remove 67e55044-10b1-426f-9247-bb680e5fe0c8"
    )]
    Remove(RemoveArgs),

    /// List the products in the catalog.
    #[command(
        visible_alias = "ls",
        about = "List catalog products",
        after_help = "EXAMPLES:\n\
            \x20 vitrine list\n\
            \x20 vitrine list --format json\n\
            \x20 vitrine list --format csv"
    )]
    List(ListArgs),

    /// Validate a draft without touching the catalog.
    #[command(
        about = "Validate a draft",
        after_help = "EXAMPLES:\n\
            \x20 vitrine check --title \"too short\" --price abc\n\
            \x20 vitrine check --title \"A perfectly fine title\" --description \"Long enough to pass\" \\\n\
            \x20\x20\x20\x20 --image-url https://example.com/p.jpg --price 10 --color \"#ff0032\""
    )]
    Check(DraftArgs),

    /// Show the categories and color palette on offer.
    #[command(
        about = "Show reference data",
        after_help = "EXAMPLES:\n\
            \x20 vitrine show categories\n\
            \x20 vitrine show palette"
    )]
    Show(ShowArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 vitrine completions bash > ~/.local/share/bash-completion/completions/vitrine\n\
            \x20 vitrine completions zsh  > ~/.zfunc/_vitrine\n\
            \x20 vitrine completions fish > ~/.config/fish/completions/vitrine.fish"
    )]
    Completions(CompletionsArgs),
}

// ── draft fields ──────────────────────────────────────────────────────────────

/// The five editable product fields, shared by `add` and `check`.
#[derive(Debug, Clone, Default, Args)]
pub struct DraftArgs {
    /// Product title (10 to 80 characters after trimming).
    #[arg(long = "title", value_name = "TEXT", default_value = "")]
    pub title: String,

    /// Product description (10 to 900 characters after trimming).
    #[arg(long = "description", value_name = "TEXT", default_value = "")]
    pub description: String,

    /// Product image URL (ftp, http or https).
    #[arg(long = "image-url", value_name = "URL", default_value = "")]
    pub image_url: String,

    /// Product price (any numeric value).
    #[arg(long = "price", value_name = "NUMBER", default_value = "")]
    pub price: String,

    /// Product color token; repeat for multiple colors.
    #[arg(long = "color", value_name = "HEX", action = clap::ArgAction::Append)]
    pub colors: Vec<String>,
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `vitrine add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub draft: DraftArgs,

    /// Category name; defaults to the first built-in category.
    #[arg(long = "category", value_name = "NAME")]
    pub category: Option<String>,
}

// ── edit ──────────────────────────────────────────────────────────────────────

/// Arguments for `vitrine edit`.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Identifier of the product to edit.
    #[arg(value_name = "ID")]
    pub id: String,

    /// New title; unchanged when omitted.
    #[arg(long = "title", value_name = "TEXT")]
    pub title: Option<String>,

    /// New description; unchanged when omitted.
    #[arg(long = "description", value_name = "TEXT")]
    pub description: Option<String>,

    /// New image URL; unchanged when omitted.
    #[arg(long = "image-url", value_name = "URL")]
    pub image_url: Option<String>,

    /// New price; unchanged when omitted.
    #[arg(long = "price", value_name = "NUMBER")]
    pub price: Option<String>,

    /// Replacement color set; repeat for multiple colors. Unchanged when
    /// omitted entirely.
    #[arg(long = "color", value_name = "HEX", action = clap::ArgAction::Append)]
    pub colors: Vec<String>,

    /// New category name; unchanged when omitted.
    #[arg(long = "category", value_name = "NAME")]
    pub category: Option<String>,
}

// ── remove ────────────────────────────────────────────────────────────────────

/// Arguments for `vitrine remove`.
#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Identifier of the product to remove.
    #[arg(value_name = "ID")]
    pub id: String,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `vitrine list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format; falls back to the global `--output-format`
    /// (JSON stays JSON, everything else renders as a table).
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ListFormat>,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One title per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `vitrine show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// What to show.
    #[arg(value_enum)]
    pub what: ShowKind,
}

/// Reference data sets the editor offers.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ShowKind {
    /// The selectable product categories.
    Categories,
    /// The selectable color tokens.
    Palette,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `vitrine completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
