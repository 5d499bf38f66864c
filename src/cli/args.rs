use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "bizdir",
    version,
    about = "terminal client for the business directory API",
    long_about = "Bizdir is a full-screen terminal client for browsing, searching, paginating and editing business records behind the directory REST API.\n\nExamples:\n  bizdir\n  bizdir -u http://localhost:5290/api/business\n  bizdir --config ~/.bizdir/config.yml --page-size 20\n\nTip: Use --config to persist connection settings and keep invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 'u',
        long = "api-url",
        visible_alias = "url",
        value_name = "URL",
        help_heading = "Connection",
        help = "Base URL of the business API (default http://localhost:5290/api/business)."
    )]
    pub api_url: Option<String>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Connection",
        help = "Path to config file (defaults to ~/.bizdir/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        short = 't',
        long = "timeout",
        value_name = "SECS",
        help_heading = "Connection",
        help = "HTTP request timeout in seconds."
    )]
    pub timeout: Option<u64>,

    #[arg(
        long = "proxy",
        value_name = "URL",
        help_heading = "Connection",
        help = "Route API requests through an HTTP proxy."
    )]
    pub proxy: Option<String>,

    #[arg(
        short = 'p',
        long = "page-size",
        value_name = "N",
        help_heading = "Display",
        help = "Records shown per table page (default 10)."
    )]
    pub page_size: Option<usize>,

    #[arg(
        short = 'c',
        long = "clr",
        visible_alias = "color",
        help_heading = "Display",
        help = "Enable colored output (overrides --no-color)."
    )]
    pub color: bool,

    #[arg(
        long = "no-color",
        help_heading = "Display",
        help = "Disable colored diagnostics."
    )]
    pub no_color: bool,
}
