//! Drives a stripe operator over a whole block: loads one stripe's words
//! out of the caller's byte buffers, runs the operator, writes the words
//! back, then advances to the next stripe.

use crate::config::{Word, ROWS, STRIPE_BYTES, WORD_BYTES};

use super::dispatch::Handler;

fn load_stripe(disks: &[&mut [u8]], stripe: usize) -> Vec<[Word; ROWS]> {
    disks
        .iter()
        .map(|disk| {
            let mut rows = [0 as Word; ROWS];
            let base = stripe * STRIPE_BYTES;
            for (row, word) in rows.iter_mut().enumerate() {
                let start = base + row * WORD_BYTES;
                let bytes = disk[start..start + WORD_BYTES].try_into().unwrap();
                *word = Word::from_ne_bytes(bytes);
            }
            rows
        })
        .collect()
}

fn store_stripe(disks: &mut [&mut [u8]], stripe: usize, rows: &[[Word; ROWS]]) {
    let base = stripe * STRIPE_BYTES;
    for (disk, rows) in disks.iter_mut().zip(rows) {
        for (row, word) in rows.iter().enumerate() {
            let start = base + row * WORD_BYTES;
            disk[start..start + WORD_BYTES].copy_from_slice(&word.to_ne_bytes());
        }
    }
}

/// Run `handler` once per stripe in `disks`, in ascending address order.
///
/// `disks[i]` must all share the same length, a positive multiple of
/// [`STRIPE_BYTES`]; this is enforced by the façade before this is called.
pub(crate) fn process(disks: &mut [&mut [u8]], handler: Handler, m1: usize, m2: usize) {
    let num_stripes = disks[0].len() / STRIPE_BYTES;
    for stripe in 0..num_stripes {
        let mut rows = load_stripe(disks, stripe);
        handler.invoke(&mut rows, m1, m2);
        store_stripe(disks, stripe, &rows);
    }
}
