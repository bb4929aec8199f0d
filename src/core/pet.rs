//! Pet state and shuffling.

use leptos::prelude::*;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{PartOption, Pet, PetParts};

/// Pick a uniformly random option of one slot.
fn random_option<T: PartOption, R: Rng>(rng: &mut R) -> T {
    T::ALL.choose(rng).copied().unwrap_or_default()
}

/// Draw every slot independently and uniformly.
pub fn random_parts<R: Rng>(rng: &mut R) -> PetParts {
    PetParts {
        body: random_option(rng),
        ears: random_option(rng),
        face: random_option(rng),
    }
}

/// Single-writer handle over the displayed pet.
///
/// This struct is `Copy` because its only field is a Leptos signal; views
/// receive it as a prop.
#[derive(Clone, Copy)]
pub struct PetStore {
    pet: RwSignal<Pet>,
}

impl PetStore {
    pub fn new(pet: Pet) -> Self {
        Self {
            pet: RwSignal::new(pet),
        }
    }

    /// Current pet (tracked).
    pub fn pet(&self) -> Pet {
        self.pet.get()
    }

    /// Current parts (tracked).
    pub fn parts(&self) -> PetParts {
        self.pet.with(|pet| pet.parts)
    }

    pub fn set_parts(&self, parts: PetParts) {
        self.pet.update(|pet| pet.parts = parts);
    }

    /// Replace every part with a random one. The new parts are committed on return.
    pub fn shuffle(&self) -> PetParts {
        self.shuffle_with(&mut rand::thread_rng())
    }

    pub fn shuffle_with<R: Rng>(&self, rng: &mut R) -> PetParts {
        let parts = random_parts(rng);
        self.set_parts(parts);
        log::debug!("pet shuffled: {:?}", parts);
        parts
    }
}

impl Default for PetStore {
    fn default() -> Self {
        Self::new(Pet::default())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::models::{BodyColor, EarStyle, FaceExpression, PetId};

    #[test]
    fn test_random_parts_cover_every_option() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut bodies = HashSet::new();
        let mut ears = HashSet::new();
        let mut faces = HashSet::new();

        for _ in 0..500 {
            let parts = random_parts(&mut rng);
            assert!(BodyColor::ALL.contains(&parts.body));
            assert!(EarStyle::ALL.contains(&parts.ears));
            assert!(FaceExpression::ALL.contains(&parts.face));
            bodies.insert(parts.body);
            ears.insert(parts.ears);
            faces.insert(parts.face);
        }

        assert_eq!(bodies.len(), BodyColor::ALL.len());
        assert_eq!(ears.len(), EarStyle::ALL.len());
        assert_eq!(faces.len(), FaceExpression::ALL.len());
    }

    #[test]
    fn test_slots_are_drawn_independently() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut combos = HashSet::new();
        for _ in 0..2000 {
            let parts = random_parts(&mut rng);
            combos.insert((parts.body, parts.face));
        }
        // Every body pairs with every face.
        assert_eq!(combos.len(), BodyColor::ALL.len() * FaceExpression::ALL.len());
    }

    #[test]
    fn test_store_shuffle_commits_before_return() {
        let owner = Owner::new();
        owner.with(|| {
            let store = PetStore::default();
            let mut rng = StdRng::seed_from_u64(3);

            let mut changed = false;
            for _ in 0..20 {
                let parts = store.shuffle_with(&mut rng);
                assert_eq!(store.parts(), parts);
                changed |= parts != PetParts::default();
            }
            assert!(changed);
            assert_eq!(store.pet().id, PetId(0));
        });
    }

    #[test]
    fn test_set_parts_last_write_wins() {
        let owner = Owner::new();
        owner.with(|| {
            let store = PetStore::default();
            let first = PetParts {
                body: BodyColor::Pink,
                ..PetParts::default()
            };
            let second = PetParts {
                face: FaceExpression::Wink,
                ..PetParts::default()
            };
            store.set_parts(first);
            store.set_parts(second);
            assert_eq!(store.parts(), second);
        });
    }
}
