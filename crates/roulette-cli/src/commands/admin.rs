use std::env;
use std::path::Path;

use roulette_core::auth::{CredentialVerifier, Sha256Verifier};
use roulette_core::db::{ResolutionRepository, SqliteResolutionRepository};
use roulette_core::ResolutionId;

use crate::cli::AdminCommands;
use crate::commands::common::{open_database, read_piped_stdin};
use crate::error::CliError;

/// Environment variable holding the hex SHA-256 digest of the admin password
pub const ADMIN_DIGEST_ENV: &str = "ROULETTE_ADMIN_PASSWORD_SHA256";

pub fn run_admin(password: &str, command: AdminCommands, db_path: &Path) -> Result<(), CliError> {
    let verifier = verifier_from_env()?;
    if !verifier.verify(password) {
        return Err(CliError::AdminRejected);
    }

    match command {
        AdminCommands::Audit { json } => run_audit(json, db_path),
        AdminCommands::Import { input } => run_import(input.as_deref(), db_path),
        AdminCommands::Delete { id } => run_delete(&id, db_path),
        AdminCommands::Dedupe => run_dedupe(db_path),
    }
}

fn verifier_from_env() -> Result<Sha256Verifier, CliError> {
    let digest = env::var(ADMIN_DIGEST_ENV)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(CliError::AdminNotConfigured)?;

    Ok(Sha256Verifier::new(digest)?)
}

fn run_audit(as_json: bool, db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path)?;
    let repo = SqliteResolutionRepository::new(db.connection());
    let resolutions = repo.list_all()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&resolutions)?);
        return Ok(());
    }

    if resolutions.is_empty() {
        println!("No resolutions stored");
        return Ok(());
    }

    for resolution in &resolutions {
        println!(
            "{:>6}  {:<16}  {}",
            resolution.id.as_i64(),
            resolution.category,
            resolution.text
        );
    }
    Ok(())
}

fn run_import(input: Option<&Path>, db_path: &Path) -> Result<(), CliError> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => read_piped_stdin()?.ok_or(CliError::EmptyImport)?,
    };

    let lines: Vec<&str> = raw.lines().collect();
    let db = open_database(db_path)?;
    let repo = SqliteResolutionRepository::new(db.connection());
    let outcome = repo.bulk_insert(&lines)?;

    println!(
        "Import complete. Added: {}, skipped (duplicates): {}",
        outcome.added, outcome.skipped
    );
    Ok(())
}

fn run_delete(id: &str, db_path: &Path) -> Result<(), CliError> {
    let id: ResolutionId = id
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidResolutionId(id.to_string()))?;

    let db = open_database(db_path)?;
    let repo = SqliteResolutionRepository::new(db.connection());

    // Not-found is reported, not raised; storage failures still error out
    if repo.delete_by_id(id)? {
        println!("Deleted resolution {id}");
    } else {
        println!("No resolution found with id {id}");
    }
    Ok(())
}

fn run_dedupe(db_path: &Path) -> Result<(), CliError> {
    let db = open_database(db_path)?;
    let repo = SqliteResolutionRepository::new(db.connection());

    let removed = repo.remove_duplicates()?;
    if removed > 0 {
        println!("Removed {removed} duplicate resolution(s)");
    } else {
        println!("No duplicates found");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use roulette_core::db::{Database, ResolutionRepository, SqliteResolutionRepository};
    use tempfile::tempdir;

    use super::{run_delete, run_dedupe, run_import, verifier_from_env, ADMIN_DIGEST_ENV};
    use crate::error::CliError;

    #[test]
    fn verifier_from_env_requires_configuration() {
        // Exercised in one test to avoid racing on the process environment
        std::env::remove_var(ADMIN_DIGEST_ENV);
        assert!(matches!(
            verifier_from_env(),
            Err(CliError::AdminNotConfigured)
        ));

        std::env::set_var(ADMIN_DIGEST_ENV, "not-a-digest");
        assert!(matches!(verifier_from_env(), Err(CliError::Core(_))));

        // sha256("admin123")
        std::env::set_var(
            ADMIN_DIGEST_ENV,
            "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9",
        );
        let verifier = verifier_from_env().unwrap();
        use roulette_core::auth::CredentialVerifier;
        assert!(verifier.verify("admin123"));
        assert!(!verifier.verify("letmein"));

        std::env::remove_var(ADMIN_DIGEST_ENV);
    }

    #[test]
    fn run_import_reads_file_and_reports_counts() {
        let tmp = tempdir().unwrap();
        let db_path = tmp.path().join("roulette.db");
        let input_path = tmp.path().join("import.txt");

        std::fs::write(
            &input_path,
            "Fitness,Run 5k\nFitness,run 5k.\nBadLine\n,\nCareer,Learn Go\n",
        )
        .unwrap();

        run_import(Some(&input_path), &db_path).unwrap();

        let db = Database::open(&db_path).unwrap();
        let repo = SqliteResolutionRepository::new(db.connection());
        assert_eq!(repo.list_all().unwrap().len(), 2);
    }

    #[test]
    fn run_delete_removes_row_and_tolerates_missing_id() {
        let tmp = tempdir().unwrap();
        let db_path = tmp.path().join("roulette.db");

        let id = {
            let db = Database::open(&db_path).unwrap();
            let repo = SqliteResolutionRepository::new(db.connection());
            repo.insert("Fitness", "Run 5k").unwrap();
            repo.list_all().unwrap()[0].id
        };

        run_delete(&id.to_string(), &db_path).unwrap();
        // Missing id is a normal outcome
        run_delete(&id.to_string(), &db_path).unwrap();

        let db = Database::open(&db_path).unwrap();
        let repo = SqliteResolutionRepository::new(db.connection());
        assert!(repo.list_all().unwrap().is_empty());
    }

    #[test]
    fn run_delete_rejects_garbage_id() {
        let tmp = tempdir().unwrap();
        let db_path = tmp.path().join("roulette.db");

        let error = run_delete("abc", &db_path).unwrap_err();
        assert!(matches!(error, CliError::InvalidResolutionId(_)));
    }

    #[test]
    fn run_dedupe_sweeps_legacy_rows() {
        let tmp = tempdir().unwrap();
        let db_path = tmp.path().join("roulette.db");

        {
            let db = Database::open(&db_path).unwrap();
            for (category, text, key) in [
                ("Fitness", "Run 5k", "run 5k"),
                ("Fitness", "run 5k!", "run 5k!"),
            ] {
                db.connection()
                    .execute(
                        "INSERT INTO resolutions (category, text, text_key) VALUES (?1, ?2, ?3)",
                        rusqlite::params![category, text, key],
                    )
                    .unwrap();
            }
        }

        run_dedupe(&db_path).unwrap();

        let db = Database::open(&db_path).unwrap();
        let repo = SqliteResolutionRepository::new(db.connection());
        let all = repo.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].text, "Run 5k");
    }
}
