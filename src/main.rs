use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use binder::cli::{
    handle_demo, handle_encrypt_command, handle_export, handle_import, handle_new, handle_reset,
    handle_show, handle_status, EncryptCommands,
};
use binder::config::BinderPaths;

#[derive(Parser)]
#[command(
    name = "binder",
    version,
    about = "Local-first encrypted life binder",
    long_about = "binder keeps a single user's sensitive personal records \
                  (contacts, accounts, documents, estate and financial data) \
                  on this device, protected by a passphrase that is never \
                  stored. There is no server and no recovery mechanism."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show whether a plan exists and whether it is encrypted
    Status,

    /// Create a new empty plan
    New {
        /// Plan title
        #[arg(short, long, default_value = "My Life Binder")]
        title: String,

        /// Protect the plan with a passphrase
        #[arg(short, long)]
        encrypt: bool,

        /// Passphrase (prompted when omitted)
        #[arg(long, env = "BINDER_PASSPHRASE", hide_env_values = true)]
        passphrase: Option<String>,
    },

    /// Create a plan seeded with demo data
    Demo {
        /// Protect the plan with a passphrase
        #[arg(short, long)]
        encrypt: bool,

        /// Passphrase (prompted when omitted)
        #[arg(long, env = "BINDER_PASSPHRASE", hide_env_values = true)]
        passphrase: Option<String>,
    },

    /// Unlock and summarize the current plan
    Show {
        /// Passphrase (prompted when omitted)
        #[arg(long, env = "BINDER_PASSPHRASE", hide_env_values = true)]
        passphrase: Option<String>,
    },

    /// Encryption management commands
    #[command(subcommand)]
    Encrypt(EncryptCommands),

    /// Export an encrypted backup file
    Export {
        /// Output path (defaults to binder-encrypted-<date>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Passphrase of the current plan (prompted when needed)
        #[arg(long, env = "BINDER_PASSPHRASE", hide_env_values = true)]
        passphrase: Option<String>,

        /// Passphrase protecting the backup (prompted when omitted)
        #[arg(long, env = "BINDER_EXPORT_PASSPHRASE", hide_env_values = true)]
        export_passphrase: Option<String>,
    },

    /// Import an encrypted backup, replacing the current plan
    Import {
        /// Backup file to import
        input: PathBuf,

        /// Passphrase protecting the backup (prompted when omitted)
        #[arg(long, env = "BINDER_PASSPHRASE", hide_env_values = true)]
        passphrase: Option<String>,

        /// Passphrase of the current plan, if it is encrypted
        #[arg(long, env = "BINDER_PLAN_PASSPHRASE", hide_env_values = true)]
        plan_passphrase: Option<String>,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Permanently delete the plan from this device
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = BinderPaths::new()?;

    match cli.command {
        Commands::Status => handle_status(&paths),
        Commands::New {
            title,
            encrypt,
            passphrase,
        } => handle_new(&paths, &title, encrypt, passphrase),
        Commands::Demo {
            encrypt,
            passphrase,
        } => handle_demo(&paths, encrypt, passphrase),
        Commands::Show { passphrase } => handle_show(&paths, passphrase),
        Commands::Encrypt(cmd) => handle_encrypt_command(&paths, cmd),
        Commands::Export {
            output,
            passphrase,
            export_passphrase,
        } => handle_export(&paths, output, passphrase, export_passphrase),
        Commands::Import {
            input,
            passphrase,
            plan_passphrase,
            yes,
        } => handle_import(&paths, input, passphrase, plan_passphrase, yes),
        Commands::Reset { yes } => handle_reset(&paths, yes),
    }
}
