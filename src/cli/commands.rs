// Passfile — CLI Command Handlers
//
// Each function handles one CLI subcommand, coordinating the store and the
// verifier. Presentation lives here: the storage core returns typed
// outcomes and never prints or logs.

use std::path::PathBuf;

use zeroize::Zeroizing;

use crate::auth::{PasswordHasher, Sha256Hasher, Verifier};
use crate::error::PassfileError;
use crate::store::{Database, SlotRepository, StoreError, UserRepository, CAPACITY};

use super::validate;
use super::Commands;

/// Default directory for Passfile data files.
fn data_dir() -> PathBuf {
    let base = dirs_next::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("passfile")
}

/// Path to the store file.
fn db_path() -> PathBuf {
    data_dir().join("passfile.db")
}

/// Execute the parsed CLI command.
pub fn execute(command: Commands) -> Result<(), PassfileError> {
    match command {
        Commands::Init => cmd_init(),
        Commands::Register { username, password } => cmd_register(username, password),
        Commands::Login { username, password } => cmd_login(username, password),
        Commands::List => cmd_list(),
        Commands::Reset => cmd_reset(),
    }
}

// ─── Init ────────────────────────────────────────────────────────────────────

fn cmd_init() -> Result<(), PassfileError> {
    let dir = data_dir();
    std::fs::create_dir_all(&dir)?;

    let path = db_path();
    let mut db = Database::open(&path)?;
    db.reset()?;
    db.close()?;

    tracing::info!(path = %path.display(), "store initialized");

    println!("✓ Passfile initialized");
    println!("  Store:    {}", path.display());
    println!("  Capacity: {} slots", CAPACITY);
    println!();
    println!("Next: register a user with `passfile register --username <name> --password <password>`");

    Ok(())
}

// ─── Register ────────────────────────────────────────────────────────────────

fn cmd_register(username: String, password: String) -> Result<(), PassfileError> {
    validate::username(&username)?;
    let password = Zeroizing::new(password);
    validate::password(&password)?;

    let mut db = open_db()?;
    let mut repo = SlotRepository::new(&mut db);

    // The store does not enforce uniqueness among occupied slots; refuse
    // duplicates here.
    match repo.find_by_username(&username) {
        Ok(_) => {
            return Err(PassfileError::InvalidInput(format!(
                "username already taken: {}",
                username
            )))
        }
        Err(StoreError::NotFound(_)) => {}
        Err(e) => return Err(e.into()),
    }

    let digest = Sha256Hasher.hash(password.as_bytes());
    let slot = repo.register(&username, &digest)?;
    db.close()?;

    tracing::info!(username = %username, slot, "user registered");

    println!("✓ User registered");
    println!("  Username: {}", username);
    println!("  Slot:     {}", slot);

    Ok(())
}

// ─── Login ───────────────────────────────────────────────────────────────────

fn cmd_login(username: String, password: String) -> Result<(), PassfileError> {
    let password = Zeroizing::new(password);

    // Same guard as every other command: a missing store means
    // uninitialized, not corrupt.
    let path = db_path();
    if !path.exists() {
        return Err(not_initialized());
    }

    let verifier = Verifier::new(path, Sha256Hasher);
    if verifier.verify(&username, &password)? {
        println!("✓ Login successful — welcome, {}", username);
    } else {
        // One message for both unknown user and wrong password.
        println!("Login failed: invalid username or password");
    }

    Ok(())
}

// ─── List ────────────────────────────────────────────────────────────────────

fn cmd_list() -> Result<(), PassfileError> {
    let mut db = open_db()?;
    let repo = SlotRepository::new(&mut db);

    let users: Vec<(u32, String)> = repo
        .list()
        .map(|rec| (rec.id(), rec.username().into_owned()))
        .collect();

    if users.is_empty() {
        println!("No users registered yet.");
        println!("Add one with: passfile register --username <name> --password <password>");
        return Ok(());
    }

    println!("Registered users ({} of {} slots):\n", users.len(), CAPACITY);
    for (slot, name) in &users {
        println!("  {:>3} │ {}", slot, name);
    }

    db.close()?;
    Ok(())
}

// ─── Reset ───────────────────────────────────────────────────────────────────

fn cmd_reset() -> Result<(), PassfileError> {
    let mut db = open_db()?;
    let mut repo = SlotRepository::new(&mut db);
    repo.reset()?;
    db.close()?;

    tracing::info!("store reset");

    println!("✓ Store reset — all slots are empty");
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Open and load the store, guarding against an uninitialized installation.
fn open_db() -> Result<Database, PassfileError> {
    let path = db_path();
    if !path.exists() {
        return Err(not_initialized());
    }

    let mut db = Database::open(&path)?;
    db.load()?;
    Ok(db)
}

fn not_initialized() -> PassfileError {
    PassfileError::Other("Passfile is not initialized. Run `passfile init` first.".to_string())
}
