use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use certcli::{cli, config, error, utils};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Register a new account with the registry
    Register(RegisterOptions),

    /// Log in and store the session token
    Login(LoginOptions),

    /// Remove the stored session
    Logout,

    /// Issue a certificate from a local PDF
    Issue(IssueOptions),

    /// Verify a certificate hash against the registry
    Verify(VerifyOptions),

    /// List and download issued certificates
    Certificates(CertificatesOptions),

    /// Show the account behind the current session
    Whoami,

    /// Show registry statistics (issuers only)
    Stats,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct RegisterOptions {
    /// Account email; prompted when omitted
    #[clap(long)]
    pub email: Option<String>,

    /// Account role, issuer or student; prompted when omitted
    #[clap(long, value_parser = utils::parse_role)]
    pub role: Option<String>,

    /// Account password; prompted (hidden) when omitted
    #[clap(long)]
    pub password: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct LoginOptions {
    /// Account email; prompted when omitted
    #[clap(long)]
    pub email: Option<String>,

    /// Account password; prompted (hidden) when omitted
    #[clap(long)]
    pub password: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct IssueOptions {
    /// Path to the certificate PDF
    #[clap(long)]
    pub file: PathBuf,

    /// Name of the student the certificate is issued to; prompted when omitted
    #[clap(long)]
    pub student_name: Option<String>,

    /// Email of the student; prompted when omitted
    #[clap(long)]
    pub student_email: Option<String>,

    /// Name of the course; prompted when omitted
    #[clap(long)]
    pub course_name: Option<String>,

    /// Issue date (YYYY-MM-DD or DD-MM-YYYY); prompted when omitted
    #[clap(long)]
    pub issue_date: Option<String>,

    /// Immediately download the stored copy after issuance
    #[clap(long)]
    pub download: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct VerifyOptions {
    /// Certificate hash to look up
    #[clap(long)]
    pub hash: Option<String>,

    /// Local PDF to hash and look up instead of --hash
    #[clap(long)]
    pub file: Option<PathBuf>,

    /// Dump the raw registry response as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "List and download issued certificates",
    args_conflicts_with_subcommands = true // disallow mixing query flags with `download`
)]
pub struct CertificatesOptions {
    /// Filter by student or course name
    #[clap(long)]
    pub search: Option<String>,

    /// Include the stored file hash column
    #[clap(long)]
    pub hashes: bool,

    /// Subcommands under `certificates` (e.g., `download`)
    #[command(subcommand)]
    pub command: Option<CertificatesSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CertificatesSubcommand {
    /// Download the stored PDF of one certificate
    Download(DownloadOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct DownloadOpts {
    /// Certificate id from the listing
    pub id: i64,

    /// Target directory (defaults to the download directory)
    #[clap(long)]
    pub out: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Register(opt) => cli::register(opt.email, opt.role, opt.password).await,
        Command::Login(opt) => cli::login(opt.email, opt.password).await,
        Command::Logout => cli::logout().await,
        Command::Issue(opt) => {
            cli::issue(
                opt.student_name,
                opt.student_email,
                opt.course_name,
                opt.issue_date,
                opt.file,
                opt.download,
            )
            .await
        }
        Command::Verify(opt) => cli::verify(opt.hash, opt.file, opt.json).await,

        Command::Certificates(opt) => match opt.command {
            Some(CertificatesSubcommand::Download(d)) => {
                cli::download_certificate(d.id, d.out).await
            }
            None => cli::list_certificates(opt.search, opt.hashes).await,
        },

        Command::Whoami => cli::whoami().await,
        Command::Stats => cli::stats().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
