//! Maps `(num_disk, miss1, miss2)` to the stripe operator that handles it.
//!
//! The reference C++ library builds this table via template metaprogramming,
//! instantiating one function body per `(D, m1, m2)` combination at compile
//! time. Rust's stripe operators in [`super::ops`] already accept `D`, `m1`
//! and `m2` as runtime parameters, so there is nothing to instantiate: the
//! table only needs to remember *which* operator applies to each cell. It is
//! still built once, lazily, and cached for the life of the process, the same
//! shape as [`crate::config`]'s `OnceLock` and the reference library's
//! one-time `msInitialized` table build.

use std::sync::OnceLock;

use crate::config::EIMP_DISK_NUM;

use super::ops;
use crate::config::{Word, ROWS};

/// Which stripe operator handles a given `(num_disk, miss1, miss2)` cell,
/// with `miss1 <= miss2` already normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Handler {
    BuildDiagonal,
    BuildRow,
    RecoverDr,
    RecoverDx,
    RecoverRx,
    RecoverOneFromDiagonal,
    RecoverXx,
}

impl Handler {
    pub(crate) fn invoke(self, rows: &mut [[Word; ROWS]], m1: usize, m2: usize) {
        match self {
            Handler::BuildDiagonal => ops::build_diagonal(rows),
            Handler::BuildRow => ops::build_row(rows),
            Handler::RecoverDr => ops::recover_dr(rows),
            Handler::RecoverDx => ops::recover_dx(rows, m2),
            Handler::RecoverRx => ops::recover_rx(rows, m2),
            Handler::RecoverOneFromDiagonal => ops::recover_one_from_diagonal(rows, m1),
            Handler::RecoverXx => ops::recover_xx(rows, m1, m2),
        }
    }
}

/// Classify a normalized `(num_disk, miss1, miss2)` cell. `None` means the
/// cell is out of the table's domain (caller validates disk/index ranges
/// before ever reaching this).
fn classify(m1: usize, m2: usize) -> Handler {
    match (m1, m2) {
        (0, 0) => Handler::BuildDiagonal,
        (1, 1) => Handler::BuildRow,
        (0, 1) => Handler::RecoverDr,
        (0, _) => Handler::RecoverDx,
        (1, _) => Handler::RecoverRx,
        (a, b) if a == b => Handler::RecoverOneFromDiagonal,
        _ => Handler::RecoverXx,
    }
}

type Table = Vec<Vec<Vec<Handler>>>;

static TABLE: OnceLock<Table> = OnceLock::new();

fn build_table() -> Table {
    log::debug!("initializing raid6 dispatch table for up to {EIMP_DISK_NUM} disks");
    (3..=EIMP_DISK_NUM)
        .map(|d| {
            (0..d)
                .map(|m1| (0..d).map(|m2| classify(m1, m2)).collect())
                .collect()
        })
        .collect()
}

/// Look up the handler for `(num_disk, miss1, miss2)`, building the
/// process-wide table on first use.
///
/// `miss1` and `miss2` must already be normalized (`miss1 <= miss2`) and
/// in range for `num_disk`; this is a plain index, not a validator.
pub(crate) fn dispatch(num_disk: usize, miss1: usize, miss2: usize) -> Option<Handler> {
    let table = TABLE.get_or_init(build_table);
    table
        .get(num_disk - 3)
        .and_then(|rows| rows.get(miss1))
        .and_then(|cells| cells.get(miss2))
        .copied()
}
