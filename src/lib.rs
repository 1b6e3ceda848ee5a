//! RAID-6 erasure coding over an EVENODD-family diagonal-plus-row parity
//! scheme: given up to two missing disks in an array of `D` disks, recover
//! them in place from the survivors.
//!
//! The two entry points are [`recover`] and [`check_input`]; [`config`]
//! holds the compile-time geometry (`P`, [`config::EIMP_DISK_NUM`], the
//! base word type) and [`Raid6Error`]/[`Raid6Result`] are the error surface.

pub mod config;
pub mod erasure_code;

mod error;
pub use error::{Raid6Error, Raid6Result};

pub use erasure_code::{check_input, recover};
