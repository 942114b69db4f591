//! # Steak Catalog
//!
//! The built-in steaks plus whatever the store holds, and the random pick over both.

use crate::domain::traits::SteakStore;
use anyhow::Result;
use rand::Rng;
use rand::seq::SliceRandom;

pub const DEFAULT_STEAKS: [&str; 11] = [
    "juicy ribeye steak",
    "tender sirloin steak",
    "spicy peppercorn steak",
    "well-done T-bone steak",
    "medium-rare flank steak",
    "chargrilled tomahawk steak",
    "bloody raw steak",
    "mystery meat steak",
    "dirty steak",
    "steak with mustard",
    "soggy steak",
];

/// Built-in steaks followed by the custom ones.
pub fn full_catalog(custom: Vec<String>) -> Vec<String> {
    DEFAULT_STEAKS
        .iter()
        .map(|s| s.to_string())
        .chain(custom)
        .collect()
}

/// Uniform pick over the built-in and custom steaks.
pub fn pick<R: Rng + ?Sized>(custom: Vec<String>, rng: &mut R) -> String {
    let all = full_catalog(custom);
    // The built-in list is never empty, so this only falls back if the constant is emptied.
    all.choose(rng)
        .cloned()
        .unwrap_or_else(|| DEFAULT_STEAKS[0].to_string())
}

/// Reloads the store and picks one steak. Called once per announce.
pub async fn pick_from_store(store: &dyn SteakStore) -> Result<String> {
    let custom = store.load().await?;
    Ok(pick(custom, &mut rand::thread_rng()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_empty_custom_falls_back_to_defaults() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let steak = pick(Vec::new(), &mut rng);
            assert!(DEFAULT_STEAKS.contains(&steak.as_str()));
        }
    }

    #[test]
    fn test_pick_draws_from_union() {
        let custom = vec!["wagyu steak".to_string(), "cube steak".to_string()];
        let all = full_catalog(custom.clone());
        assert_eq!(all.len(), DEFAULT_STEAKS.len() + 2);

        let mut rng = StdRng::seed_from_u64(42);
        let mut saw_custom = false;
        for _ in 0..500 {
            let steak = pick(custom.clone(), &mut rng);
            assert!(all.contains(&steak));
            saw_custom |= custom.contains(&steak);
        }
        assert!(saw_custom, "custom entries should be reachable");
    }
}
