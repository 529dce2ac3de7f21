use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum SampleError {
    #[error("cannot pick {count} unique numbers from [{lower}, {upper}]")]
    InvalidSampleSize { count: usize, lower: i64, upper: i64 },
}

/// Number of integers in `[lower, upper]`, zero when the range is empty.
pub fn range_size(lower: i64, upper: i64) -> u128 {
    if upper < lower {
        0
    } else {
        (upper as i128 - lower as i128 + 1) as u128
    }
}

pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, lower: i64, upper: i64) -> i64 {
    rng.gen_range(lower..=upper)
}

/// Picks `count` distinct integers from `[lower, upper]` by drawing uniformly and throwing away
/// repeats. The request is checked up front, since an oversized one would never finish.
pub fn sample<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    lower: i64,
    upper: i64,
) -> Result<HashSet<i64>, SampleError> {
    if count as u128 > range_size(lower, upper) {
        return Err(SampleError::InvalidSampleSize {
            count,
            lower,
            upper,
        });
    }

    let mut samples = HashSet::with_capacity(count);

    while samples.len() < count {
        samples.insert(random_in_range(rng, lower, upper));
    }

    Ok(samples)
}

/// Stateless front end over [`sample`] backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sampler;

impl Sampler {
    pub fn new() -> Sampler {
        Sampler
    }

    pub fn sample(
        &self,
        count: usize,
        lower: i64,
        upper: i64,
    ) -> Result<HashSet<i64>, SampleError> {
        sample(&mut rand::thread_rng(), count, lower, upper)
    }
}
