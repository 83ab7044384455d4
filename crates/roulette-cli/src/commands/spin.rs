use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use roulette_core::db::{ResolutionRepository, SqliteResolutionRepository};

use crate::commands::common::{normalize_category, open_database};
use crate::error::CliError;

pub fn run_spin(category: &str, db_path: &Path) -> Result<(), CliError> {
    let category = normalize_category(category)?;
    let db = open_database(db_path)?;
    let repo = SqliteResolutionRepository::new(db.connection());

    let pool = repo.list_by_category(&category)?;
    let suggestion =
        pick(&pool, &mut rand::thread_rng()).ok_or_else(|| CliError::EmptyPool(category))?;

    println!("{suggestion}");
    Ok(())
}

/// Pick one suggestion uniformly at random; None on an empty pool
fn pick<'a, R: Rng>(pool: &'a [String], rng: &mut R) -> Option<&'a String> {
    pool.choose(rng)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::pick;

    #[test]
    fn pick_returns_none_on_empty_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick(&[], &mut rng), None);
    }

    #[test]
    fn pick_draws_from_the_pool() {
        let pool = vec![
            "Run 5k".to_string(),
            "Learn Go".to_string(),
            "Read more".to_string(),
        ];

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let choice = pick(&pool, &mut rng).unwrap();
            assert!(pool.contains(choice));
        }
    }

    #[test]
    fn pick_eventually_covers_every_entry() {
        let pool = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pick(&pool, &mut rng).unwrap().clone());
        }
        assert_eq!(seen.len(), pool.len());
    }
}
