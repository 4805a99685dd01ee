use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "memberdesk",
    version,
    about = "terminal member table",
    long_about = "memberdesk fetches a member list from a JSON endpoint once and lets you search, paginate, edit, select and delete rows locally. Nothing is written back to the server.\n\nExamples:\n  memberdesk\n  memberdesk -u http://localhost:8000/members.json\n  memberdesk --script session.txt --format json\n\nTip: Use --config to persist settings and keep CLI invocations short."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase log verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        short = 'c',
        long = "clr",
        visible_alias = "color",
        help_heading = "Output",
        help = "Enable colored output (overrides --no-color)."
    )]
    pub color: bool,

    #[arg(
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,

    #[arg(
        short = 'o',
        long = "fmt",
        visible_alias = "format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Table rendering: text or json."
    )]
    pub format: Option<String>,

    #[arg(
        short = 'u',
        long = "u",
        visible_alias = "url",
        value_name = "URL",
        help_heading = "Input",
        help = "Member collection URL (JSON array)."
    )]
    pub url: Option<String>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.memberdesk/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "ic",
        visible_alias = "init-config",
        help_heading = "Input",
        help = "Write a default config file (at --config or the default path) and exit."
    )]
    pub init_config: bool,

    #[arg(
        short = 's',
        long = "scr",
        visible_alias = "script",
        value_name = "FILE",
        help_heading = "Input",
        help = "Read table commands from FILE instead of stdin."
    )]
    pub script: Option<String>,

    #[arg(
        long = "to",
        visible_alias = "timeout",
        value_name = "SECONDS",
        help_heading = "HTTP",
        help = "Timeout for the member request."
    )]
    pub timeout: Option<u64>,

    #[arg(
        short = 'p',
        long = "px",
        visible_alias = "proxy",
        value_name = "URL",
        help_heading = "HTTP",
        help = "Proxy for the member request."
    )]
    pub proxy: Option<String>,

    #[arg(
        long = "sap",
        visible_alias = "select-all-policy",
        value_name = "POLICY",
        help_heading = "Table",
        help = "Header checkbox rule: page-size or visible-rows."
    )]
    pub select_all_policy: Option<String>,
}
