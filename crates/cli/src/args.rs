use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use supplestore_observability::LogFormat;
use supplestore_storefront::FilterAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Browse the supplement catalog the way the storefront grid does.
#[derive(Debug, Parser)]
#[command(name = "storefront", version)]
pub struct Args {
    /// Catalog JSON file (an array of products). Defaults to the bundled demo catalog.
    #[arg(long, env = "STOREFRONT_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Path the storefront lives at; clearing filters navigates here.
    #[arg(long, env = "STOREFRONT_BASE_PATH", default_value = "/productos")]
    pub base_path: String,

    #[arg(long, env = "STOREFRONT_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,

    /// Starting query string, e.g. `category=proteinas&goal=muscle`.
    #[arg(long, short, default_value = "")]
    pub query: String,

    /// Filter action, applied in order: `key=value`, a bare `key`, or `reset`.
    #[arg(long = "toggle", short = 't')]
    pub toggles: Vec<FilterAction>,

    /// Clear all filters after the toggles.
    #[arg(long)]
    pub reset: bool,

    /// Page to show (out-of-range requests are ignored).
    #[arg(long, short, allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Product id to add to the cart. Repeatable.
    #[arg(long = "add-to-cart")]
    pub add_to_cart: Vec<u32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use supplestore_storefront::FilterKey;

    #[test]
    fn parses_actions_in_order() {
        let args = Args::try_parse_from([
            "storefront",
            "-t",
            "category=proteinas",
            "--toggle",
            "goal=muscle",
            "-t",
            "reset",
            "--page",
            "-2",
            "--add-to-cart",
            "3",
            "--output",
            "json",
        ])
        .unwrap();

        assert_eq!(
            args.toggles,
            [
                FilterAction::toggle(FilterKey::Category, "proteinas"),
                FilterAction::toggle(FilterKey::Goal, "muscle"),
                FilterAction::Reset,
            ]
        );
        assert_eq!(args.page, Some(-2));
        assert_eq!(args.add_to_cart, [3]);
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn rejects_unknown_filter_keys() {
        assert!(Args::try_parse_from(["storefront", "-t", "price=10"]).is_err());
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(Args::try_parse_from(["storefront", "--log-format", "xml"]).is_err());
    }
}
