use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mtc")]
#[command(about = "Compare BART, Google Translate and Seq2Seq translations side by side.")]
#[command(version)]
pub struct Cli {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Translation API base URL (overrides config)
    #[arg(short = 'u', long)]
    pub base_url: Option<String>,

    /// Read one text per line from stdin and translate each
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Check backend health
    #[arg(long)]
    pub health: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Edit configuration file
    #[arg(long)]
    pub edit_config: bool,

    /// Text to translate
    #[arg(num_args = 1..)]
    pub text: Vec<String>,
}
