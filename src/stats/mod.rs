//! Statistical primitives for study sizing
//!
//! - [`z_quantile`]: inverse standard normal CDF (Abramowitz & Stegun 26.2.23)
//! - [`calculate_sample_size`]: TOST-based subject count with design and
//!   attrition corrections

mod quantile;
mod sample_size;

pub use quantile::z_quantile;
pub use sample_size::{
    adjust_for_attrition, calculate_sample_size, crossover_base_n, log_variance,
    raw_per_sequence, round_up_even, SampleSizeResult, MAX_SUBJECTS,
};
