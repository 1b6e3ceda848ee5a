//! Public entry points: validate, normalize, and dispatch.

use crate::config::{EIMP_DISK_NUM, STRIPE_BYTES, WORD_BYTES};
use crate::error::{Raid6Error, Raid6Result};

use super::dispatch::dispatch;

/// Validate a `recover`/`check_input` call's shape without touching `block`'s contents.
pub fn check_input(
    block: &[&mut [u8]],
    num_bytes: usize,
    num_disk: usize,
    miss1: usize,
    miss2: usize,
) -> Raid6Result<()> {
    if !(3..=EIMP_DISK_NUM).contains(&num_disk) {
        log::debug!("rejecting call: num_disk {num_disk} not in 3..={EIMP_DISK_NUM}");
        return Err(Raid6Error::InvalidDiskNum {
            num_disk,
            max: EIMP_DISK_NUM,
        });
    }
    if miss1 >= num_disk || miss2 >= num_disk {
        let idx = if miss1 >= num_disk { miss1 } else { miss2 };
        log::debug!("rejecting call: miss idx {idx} not in 0..{num_disk}");
        return Err(Raid6Error::InvalidMissIdx { idx, num_disk });
    }
    if block.len() != num_disk {
        log::debug!("rejecting call: block holds {} disks, expected {num_disk}", block.len());
        return Err(Raid6Error::NullBlockPointer {
            got: block.len(),
            num_disk,
        });
    }
    if num_bytes == 0 || num_bytes % STRIPE_BYTES != 0 {
        log::debug!("rejecting call: num_bytes {num_bytes} not a positive multiple of {STRIPE_BYTES}");
        return Err(Raid6Error::SizeNotAligned {
            num_bytes,
            stripe_bytes: STRIPE_BYTES,
        });
    }
    for (idx, disk) in block.iter().enumerate() {
        if disk.len() != num_bytes {
            log::debug!("rejecting call: disk {idx} has length {}, expected {num_bytes}", disk.len());
            return Err(Raid6Error::SizeNotAligned {
                num_bytes: disk.len(),
                stripe_bytes: STRIPE_BYTES,
            });
        }
        if disk.as_ptr() as usize % WORD_BYTES != 0 {
            log::debug!("rejecting call: disk {idx} not aligned to {WORD_BYTES} bytes");
            return Err(Raid6Error::BufferNotAligned {
                idx,
                align: WORD_BYTES,
            });
        }
    }
    Ok(())
}

/// Reconstruct missing disk(s) `miss1`/`miss2` in `block` in place.
///
/// Pass `miss1 == miss2` when only one disk is missing. All other disks
/// are left byte-for-byte unchanged.
pub fn recover(
    block: &mut [&mut [u8]],
    num_bytes: usize,
    num_disk: usize,
    miss1: usize,
    miss2: usize,
) -> Raid6Result<()> {
    check_input(block, num_bytes, num_disk, miss1, miss2)?;

    let (mut miss1, mut miss2) = (miss1, miss2);
    if miss1 > miss2 {
        std::mem::swap(&mut miss1, &mut miss2);
    }

    if num_disk == 3 {
        let survivor = if miss1 > 0 {
            0
        } else if miss2 < 2 {
            2
        } else {
            1
        };
        let data = block[survivor].to_vec();
        block[miss1].copy_from_slice(&data);
        block[miss2].copy_from_slice(&data);
        return Ok(());
    }

    let handler = dispatch(num_disk, miss1, miss2).ok_or_else(|| {
        log::warn!("dispatch table miss for validated input (num_disk={num_disk}, m1={miss1}, m2={miss2})");
        Raid6Error::Fail {
            num_disk,
            m1: miss1,
            m2: miss2,
        }
    })?;
    debug_assert!(
        dispatch(num_disk, miss1, miss2).is_some(),
        "dispatch table missing a cell for validated input"
    );

    super::block::process(block, handler, miss1, miss2);
    Ok(())
}
