//! Command-line surface
//!
//! A thin consumer of the session controller: every command opens a
//! session, drives one operation through the core, and prints the result.
//! No binder logic lives here.

use std::io::{self, Write as _};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use chrono::Utc;
use clap::Subcommand;

use crate::backup::{
    export_encrypted, import_encrypted, read_backup_file, suggested_filename, write_backup_file,
};
use crate::config::BinderPaths;
use crate::crypto::{score_passphrase, validate_passphrase};
use crate::error::BinderError;
use crate::models::Plan;
use crate::session::SessionController;
use crate::storage::PlanStore;

/// Encryption management commands
#[derive(Subcommand)]
pub enum EncryptCommands {
    /// Protect the plan with a passphrase
    Enable {
        /// New passphrase (prompted when omitted)
        #[arg(long, env = "BINDER_NEW_PASSPHRASE", hide_env_values = true)]
        new_passphrase: Option<String>,
    },

    /// Change the passphrase
    #[command(alias = "change")]
    ChangePassphrase {
        /// Current passphrase (prompted when omitted)
        #[arg(long, env = "BINDER_PASSPHRASE", hide_env_values = true)]
        passphrase: Option<String>,
        /// New passphrase (prompted when omitted)
        #[arg(long, env = "BINDER_NEW_PASSPHRASE", hide_env_values = true)]
        new_passphrase: Option<String>,
    },

    /// Store the plan unencrypted again
    Remove {
        /// Current passphrase (prompted when omitted)
        #[arg(long, env = "BINDER_PASSPHRASE", hide_env_values = true)]
        passphrase: Option<String>,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Score a candidate passphrase (advisory only)
    Strength,
}

/// Show whether a plan exists and whether it is encrypted
pub fn handle_status(paths: &BinderPaths) -> Result<()> {
    let store = PlanStore::new(paths)?;
    let status = store.exists();
    if !status.present {
        println!("No plan exists on this device yet. Run 'binder new' to create one.");
    } else if status.is_encrypted {
        println!("A plan exists and is protected by a passphrase.");
    } else {
        println!("A plan exists and is stored unencrypted.");
    }
    Ok(())
}

/// Create a new empty plan
pub fn handle_new(
    paths: &BinderPaths,
    title: &str,
    encrypt: bool,
    passphrase: Option<String>,
) -> Result<()> {
    let store = PlanStore::new(paths)?;
    if store.exists().present {
        bail!("A plan already exists on this device. Use 'binder reset' first.");
    }

    let mut session = SessionController::new(store);
    let pass = if encrypt {
        Some(resolve_new_passphrase(passphrase, "Choose a passphrase")?)
    } else {
        None
    };
    session
        .create_new(title, pass.as_deref())
        .map_err(user_error)?;

    println!("Created plan \"{}\".", title);
    if !encrypt {
        println!("The plan is stored unencrypted. Run 'binder encrypt enable' to protect it.");
    }
    Ok(())
}

/// Create a plan seeded with demo data
pub fn handle_demo(paths: &BinderPaths, encrypt: bool, passphrase: Option<String>) -> Result<()> {
    let store = PlanStore::new(paths)?;
    if store.exists().present {
        bail!("A plan already exists on this device. Use 'binder reset' first.");
    }

    let mut session = SessionController::new(store);
    let pass = if encrypt {
        Some(resolve_new_passphrase(passphrase, "Choose a passphrase")?)
    } else {
        None
    };
    session.create_demo(pass.as_deref()).map_err(user_error)?;

    println!("Created a demo plan. Reset it when you are ready to start your own.");
    Ok(())
}

/// Unlock and summarize the current plan
pub fn handle_show(paths: &BinderPaths, passphrase: Option<String>) -> Result<()> {
    let session = unlock_session(paths, passphrase)?;
    let plan = session
        .current_plan()
        .ok_or_else(|| anyhow!("no plan loaded"))?;
    print_summary(plan);
    Ok(())
}

/// Handle encryption commands
pub fn handle_encrypt_command(paths: &BinderPaths, cmd: EncryptCommands) -> Result<()> {
    match cmd {
        EncryptCommands::Enable { new_passphrase } => enable_encryption(paths, new_passphrase),
        EncryptCommands::ChangePassphrase {
            passphrase,
            new_passphrase,
        } => change_passphrase(paths, passphrase, new_passphrase),
        EncryptCommands::Remove { passphrase, yes } => remove_encryption(paths, passphrase, yes),
        EncryptCommands::Strength => show_strength(),
    }
}

/// Export an encrypted backup
pub fn handle_export(
    paths: &BinderPaths,
    output: Option<PathBuf>,
    passphrase: Option<String>,
    export_passphrase: Option<String>,
) -> Result<()> {
    let session = unlock_session(paths, passphrase)?;
    let plan = session
        .current_plan()
        .cloned()
        .ok_or_else(|| anyhow!("no plan loaded"))?;

    let export_pass = resolve_new_passphrase(export_passphrase, "Backup passphrase")?;
    let backup = export_encrypted(&plan, &export_pass).map_err(user_error)?;

    let path = output
        .unwrap_or_else(|| PathBuf::from(suggested_filename(Utc::now().date_naive())));
    write_backup_file(&path, &backup).map_err(user_error)?;

    println!("Encrypted backup written to {}.", path.display());
    println!("It can only be read with the passphrase you just chose.");
    Ok(())
}

/// Import an encrypted backup, replacing the current plan
pub fn handle_import(
    paths: &BinderPaths,
    input: PathBuf,
    passphrase: Option<String>,
    plan_passphrase: Option<String>,
    yes: bool,
) -> Result<()> {
    let raw = read_backup_file(&input).map_err(user_error)?;
    let pass = resolve_passphrase(passphrase, "Backup passphrase: ")?;

    // Distinct guidance per failure stage
    let imported = match import_encrypted(&raw, &pass) {
        Ok(plan) => plan,
        Err(e @ BinderError::InvalidBackupFormat(_)) => {
            eprintln!("That file is not a binder backup.");
            return Err(e.into());
        }
        Err(BinderError::SchemaValidation(violations)) => {
            eprintln!("The backup contents are not a valid plan:");
            for violation in &violations {
                eprintln!("  - {}", violation);
            }
            return Err(BinderError::SchemaValidation(violations).into());
        }
        Err(e) => return Err(anyhow!(e.user_message())),
    };

    if !confirm(
        "Importing replaces the plan on this device. This cannot be undone. Continue? [y/N] ",
        yes,
    )? {
        println!("Import cancelled.");
        return Ok(());
    }

    let store = PlanStore::new(paths)?;
    let status = store.exists();
    let mut session = SessionController::new(store);
    if status.present {
        let live_pass = if status.is_encrypted {
            Some(resolve_passphrase(
                plan_passphrase,
                "Current plan passphrase: ",
            )?)
        } else {
            None
        };
        session.unlock(live_pass.as_deref()).map_err(user_error)?;
    } else {
        session
            .create_new(&imported.title, None)
            .map_err(user_error)?;
    }
    session.save_plan(imported).map_err(user_error)?;

    println!("Backup imported.");
    Ok(())
}

/// Delete the plan from this device
pub fn handle_reset(paths: &BinderPaths, yes: bool) -> Result<()> {
    if !confirm(
        "This permanently deletes the plan on this device. Continue? [y/N] ",
        yes,
    )? {
        println!("Reset cancelled.");
        return Ok(());
    }

    let mut session = SessionController::new(PlanStore::new(paths)?);
    session.reset_plan().map_err(user_error)?;

    println!("The plan has been erased from this device.");
    Ok(())
}

fn enable_encryption(paths: &BinderPaths, new_passphrase: Option<String>) -> Result<()> {
    let store = PlanStore::new(paths)?;
    let status = store.exists();
    if !status.present {
        bail!("No plan exists on this device yet. Run 'binder new' first.");
    }
    if status.is_encrypted {
        bail!("The plan is already encrypted. Use 'binder encrypt change-passphrase' instead.");
    }

    println!("Encryption protects your binder with AES-256-GCM.");
    println!("IMPORTANT: a forgotten passphrase makes the data unrecoverable.");
    let pass = resolve_new_passphrase(new_passphrase, "Choose a passphrase")?;

    let mut session = SessionController::new(store);
    session.unlock(None).map_err(user_error)?;
    session.add_encryption(&pass).map_err(user_error)?;

    println!("Encryption enabled.");
    Ok(())
}

fn change_passphrase(
    paths: &BinderPaths,
    passphrase: Option<String>,
    new_passphrase: Option<String>,
) -> Result<()> {
    let mut session = unlock_session(paths, passphrase)?;
    if !session.is_encrypted() {
        bail!("The plan is not encrypted. Use 'binder encrypt enable' first.");
    }

    let new_pass = resolve_new_passphrase(new_passphrase, "New passphrase")?;
    session.change_passphrase(&new_pass).map_err(user_error)?;

    println!("Passphrase changed.");
    Ok(())
}

fn remove_encryption(paths: &BinderPaths, passphrase: Option<String>, yes: bool) -> Result<()> {
    if !confirm(
        "The plan will be stored readable by anyone with this device. Continue? [y/N] ",
        yes,
    )? {
        println!("Cancelled.");
        return Ok(());
    }

    let mut session = unlock_session(paths, passphrase)?;
    session.remove_encryption().map_err(user_error)?;

    println!("Encryption removed. The plan is now stored unencrypted.");
    Ok(())
}

fn show_strength() -> Result<()> {
    let candidate =
        rpassword::prompt_password("Passphrase to score: ").context("Failed to read passphrase")?;
    let report = score_passphrase(&candidate);

    println!("Strength: {}/7 ({})", report.score, report.label());
    for hint in &report.hints {
        println!("  - {}", hint);
    }
    Ok(())
}

/// Open and unlock a session, prompting for the passphrase when needed
fn unlock_session(paths: &BinderPaths, passphrase: Option<String>) -> Result<SessionController> {
    let store = PlanStore::new(paths)?;
    let status = store.exists();
    if !status.present {
        bail!("No plan exists on this device yet. Run 'binder new' first.");
    }

    let pass = if status.is_encrypted {
        Some(resolve_passphrase(passphrase, "Passphrase: ")?)
    } else {
        None
    };

    let mut session = SessionController::new(store);
    session.unlock(pass.as_deref()).map_err(user_error)?;
    Ok(session)
}

fn print_summary(plan: &Plan) {
    println!("{}", plan.title);
    println!("  Updated: {}", plan.updated_at.format("%Y-%m-%d %H:%M"));
    println!("  Contacts:          {}", plan.contacts.len());
    println!("  Digital access:    {}", plan.access.len());
    println!("  Accounts:          {}", plan.accounts.len());
    println!("  Documents:         {}", plan.documents.len());
    println!("  Physical security: {}", plan.physical_security.len());
    println!("  Recovery entries:  {}", plan.security_recovery.len());
    println!("  Insurance:         {}", plan.financial.insurance_policies.len());
    println!("  Notes:             {}", plan.notes.len());
    if plan.is_demo() {
        println!("  (demo data - run 'binder reset' to start fresh)");
    }
}

/// Use the supplied value or prompt without echo
fn resolve_passphrase(flag: Option<String>, prompt: &str) -> Result<String> {
    match flag {
        Some(pass) => Ok(pass),
        None => rpassword::prompt_password(prompt).context("Failed to read passphrase"),
    }
}

/// Resolve a passphrase that will protect data from now on: enforce the
/// minimum length and, when prompting, require a matching confirmation.
fn resolve_new_passphrase(flag: Option<String>, label: &str) -> Result<String> {
    if let Some(pass) = flag {
        validate_passphrase(&pass).map_err(user_error)?;
        return Ok(pass);
    }

    let pass = rpassword::prompt_password(format!("{}: ", label))
        .context("Failed to read passphrase")?;
    validate_passphrase(&pass).map_err(user_error)?;

    let report = score_passphrase(&pass);
    if report.score < 5 {
        println!("Strength: {}/7 ({})", report.score, report.label());
        for hint in &report.hints {
            println!("  - {}", hint);
        }
    }

    let confirm_pass = rpassword::prompt_password("Confirm passphrase: ")
        .context("Failed to read passphrase")?;
    if pass != confirm_pass {
        bail!("Passphrases did not match.");
    }
    Ok(pass)
}

fn confirm(prompt: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    print!("{}", prompt);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn user_error(e: BinderError) -> anyhow::Error {
    anyhow!(e.user_message())
}
