#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum Raid6Error {
    #[error("[kind: invalid disk num, info: {num_disk} not in 3..={max}]")]
    InvalidDiskNum { num_disk: usize, max: usize },
    #[error("[kind: invalid miss idx, info: {idx} not in 0..{num_disk}]")]
    InvalidMissIdx { idx: usize, num_disk: usize },
    #[error("[kind: null block pointer, info: block holds {got} disks, expected {num_disk}]")]
    NullBlockPointer { got: usize, num_disk: usize },
    #[error("[kind: buffer not aligned, info: disk {idx} not aligned to {align} bytes]")]
    BufferNotAligned { idx: usize, align: usize },
    #[error("[kind: size not aligned, info: {num_bytes} not a positive multiple of {stripe_bytes}]")]
    SizeNotAligned {
        num_bytes: usize,
        stripe_bytes: usize,
    },
    #[error("[kind: fail, info: no dispatch handler for (num_disk={num_disk}, m1={m1}, m2={m2})]")]
    Fail {
        num_disk: usize,
        m1: usize,
        m2: usize,
    },
}

pub type Raid6Result<T> = std::result::Result<T, Raid6Error>;
