//! Compile-time geometry constants for the RAID-6 engine.
//!
//! `P` and `EIMP_DISK_NUM` are fixed at build time (as in the reference C++
//! library); a runtime-configurable `P` would force every stripe-sized array
//! in the crate onto the heap for no benefit, since the dispatch table is
//! already rebuilt from these constants lazily on first use.

/// The prime parameter of the EVENODD-family scheme. Must be `2^n + 1`.
pub const P: u64 = 17;

/// Upper bound on the number of disks (including both parity disks) the
/// dispatch table is built for. Must satisfy `EIMP_DISK_NUM <= P + 2`.
pub const EIMP_DISK_NUM: usize = 8;

/// Base unit of the engine: all XOR arithmetic operates on words of this type.
pub type Word = u64;

/// Size in bytes of [`Word`]; buffers passed to `recover`/`check_input` must
/// be aligned to this.
pub const WORD_BYTES: usize = std::mem::size_of::<Word>();

/// Number of rows in a stripe, i.e. `P - 1`.
pub const ROWS: usize = (P - 1) as usize;

/// Byte length of one disk's column within a single stripe.
pub const STRIPE_BYTES: usize = ROWS * WORD_BYTES;

/// Index of the diagonal parity disk.
pub const DIAG_IDX: usize = 0;

/// Index of the row parity disk.
pub const ROW_IDX: usize = 1;

const _: () = assert!(EIMP_DISK_NUM as u64 <= P + 2, "EIMP_DISK_NUM must be <= P + 2");
const _: () = assert!(EIMP_DISK_NUM >= 3, "EIMP_DISK_NUM must allow at least 3 disks");
