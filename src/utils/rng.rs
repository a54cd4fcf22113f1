use rand::{prelude::*, rngs::StdRng};

/// Fixed seed in debug builds so failures reproduce
#[cfg(debug_assertions)]
pub fn make_rng() -> StdRng {
    const SEED: u64 = 2718;
    StdRng::seed_from_u64(SEED)
}

#[cfg(not(debug_assertions))]
pub fn make_rng() -> StdRng {
    use rand::rngs::SysRng;
    use rand::TryRng;
    let seed = SysRng::try_next_u64(&mut SysRng).unwrap();

    StdRng::seed_from_u64(seed)
}
