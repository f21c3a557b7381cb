pub use uuid_generation::*;

use crate::consts::GENERATED_IDENTIFIER_PREFIX;

mod uuid_generation {
	use rand_chacha::ChaCha20Rng;
	use rand_chacha::rand_core::{RngCore, SeedableRng};
	use std::cell::Cell;
	use std::sync::Mutex;

	static RNG: Mutex<Option<ChaCha20Rng>> = Mutex::new(None);
	thread_local! {
		pub static UUID_SEED: Cell<Option<u64>> = const { Cell::new(None) };
	}

	/// Seeds the generator. Only has an effect if called before the first identifier is generated.
	pub fn set_uuid_seed(random_seed: u64) {
		UUID_SEED.with(|seed| seed.set(Some(random_seed)))
	}

	pub fn generate_uuid() -> u64 {
		// A poisoned lock only means another thread panicked mid-draw, the generator state itself is still usable
		let mut lock = RNG.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
		let rng = lock.get_or_insert_with(|| {
			let random_seed = UUID_SEED.with(|seed| seed.get()).unwrap_or(42);
			ChaCha20Rng::seed_from_u64(random_seed)
		});
		rng.next_u64()
	}
}

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Produces a fresh `el-xxxxxxxx` style identifier from the random source.
pub fn generate_identifier() -> String {
	let mut value = generate_uuid();
	let mut digits = Vec::with_capacity(13);
	loop {
		digits.push(BASE36_DIGITS[(value % 36) as usize]);
		value /= 36;
		if value == 0 {
			break;
		}
	}
	digits.reverse();

	let mut identifier = String::with_capacity(GENERATED_IDENTIFIER_PREFIX.len() + digits.len());
	identifier.push_str(GENERATED_IDENTIFIER_PREFIX);
	identifier.extend(digits.into_iter().map(char::from));
	identifier
}

/// Whether the identifier was produced by [`generate_identifier`] rather than chosen by the user.
pub fn is_generated_identifier(identifier: &str) -> bool {
	identifier.starts_with(GENERATED_IDENTIFIER_PREFIX)
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn generated_identifiers_are_prefixed_and_alphanumeric() {
		let identifier = generate_identifier();
		assert!(is_generated_identifier(&identifier));
		assert!(identifier[GENERATED_IDENTIFIER_PREFIX.len()..].chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
	}

	#[test]
	fn user_identifiers_are_not_considered_generated() {
		assert!(!is_generated_identifier("logo"));
		assert!(!is_generated_identifier("element-1"));
		assert!(is_generated_identifier("el-x"));
	}
}
