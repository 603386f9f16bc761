use clap::Parser;

pub const DEFAULT_PROMPT: &str = "> ";

/// Command line options. The shell reads no configuration files.
#[derive(Parser, Debug)]
#[command(name = "boothshell", version, about = "A very simplistic and lightweight shell")]
pub struct Args {
    /// Never clear the terminal on startup or for `help`
    #[arg(long)]
    pub no_clear: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub prompt: String,
    pub clear_screen: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            prompt: DEFAULT_PROMPT.to_string(),
            clear_screen: true,
        }
    }
}

impl ShellConfig {
    pub fn from_args(args: &Args) -> Self {
        ShellConfig {
            clear_screen: !args.no_clear,
            ..ShellConfig::default()
        }
    }
}
