use clap::{Args, ValueEnum};

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[arg(long)]
    pub host: Option<String>,
    #[arg(long)]
    pub port: Option<u16>,
    /// Leave malformed content files out instead of failing the page.
    #[arg(long, default_value_t = false)]
    pub skip_malformed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContentKind {
    Projects,
    Certificates,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(value_enum)]
    pub kind: ContentKind,
}

#[derive(Debug, Args)]
pub struct LogoArgs {
    #[arg(required = true)]
    pub names: Vec<String>,
}
