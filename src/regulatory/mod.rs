//! Regulatory checks for a planned bioequivalence study
//!
//! Simple rules based on common BE guidance (EAEU Decision No. 85, EMA, FDA)
//! evaluated over the selected design and sample size.
//!
//! | Code | Severity | Fires when |
//! |------|----------|------------|
//! | `PERIODS_INCONSISTENT` | error | cross-over type with < 2 periods |
//! | `WASHOUT_TOO_SHORT` | warning | non-parallel, t½ known, wash-out < 5 t½ |
//! | `LOW_SAMPLE_SIZE` | warning | base N < 12 |
//! | `FASTED_FED_SPLIT` | info | both regimes in a 2-period design |
//! | `RSABE_MAY_BE_CONSIDERED` | info | RSABE not applicable, CV > 0.30 |
//! | `HIGH_DROPOUT` | warning | drop-out rate > 0.30 |
//! | `LONG_WASHOUT` | info | wash-out > 28 days |

mod rules;
mod types;

pub use rules::check;
pub use types::{IssueCode, IssueList, RegulatoryIssue, Severity};
