use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mail_digest::config::{load_config, load_secrets};
use mail_digest::mail::imap_client::ImapClient;
use mail_digest::mail::save::save_email;
use mail_digest::process::process_folder;

#[derive(Parser)]
#[command(name = "mail-digest")]
#[command(about = "Fetch emails over IMAP, then summarize and categorize them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch recent emails and save each one as a text file
    Fetch {
        /// Maximum number of messages to fetch (overrides config)
        #[arg(long)]
        max: Option<usize>,

        /// Folder to write the .txt files into (overrides config)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Summarize and categorize saved emails into a CSV report
    Summarize {
        /// Folder containing .txt files (each file = one email)
        input_folder: PathBuf,

        /// Output CSV file name
        #[arg(long, default_value = "email_summaries.csv")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Fetch { max, output } => {
            let cfg = load_config().map_err(|e| anyhow!("Configuration error: {e}"))?;
            let secrets = load_secrets()?;

            let server = cfg
                .imap_server
                .clone()
                .unwrap_or_else(|| "imap.gmail.com".to_string());
            let mailbox = cfg.mailbox.clone().unwrap_or_else(|| "INBOX".to_string());
            let max = max.or(cfg.max_emails).unwrap_or(20);
            let out_dir = output.unwrap_or_else(|| {
                PathBuf::from(cfg.output_folder.clone().unwrap_or_else(|| "emails".to_string()))
            });

            std::fs::create_dir_all(&out_dir)?;

            let imap = ImapClient::new(server, secrets.account.clone());
            let emails = imap.fetch_recent(&secrets.password, &mailbox, max)?;

            let mut saved = 0usize;
            for email in &emails {
                if email.body.trim().is_empty() {
                    log::info!("message {} has no plaintext body; skipping", email.id);
                    continue;
                }
                let path = save_email(&out_dir, email)?;
                println!("Saved: {}", path.display());
                saved += 1;
            }
            println!("Fetched {} messages, saved {}.", emails.len(), saved);
            Ok(())
        }

        Command::Summarize {
            input_folder,
            output,
        } => {
            let results = process_folder(&input_folder, &output)?;
            println!(
                "Processed {} files. Results saved to {}.",
                results.len(),
                output.display()
            );
            Ok(())
        }
    }
}
