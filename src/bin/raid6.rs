//! Thin CLI wrapper around [`raid6_evenodd::recover`]: read one file per
//! disk, reconstruct the missing disk(s) in place, write them back.
//!
//! No interesting engineering lives here; it exists so the library is
//! runnable from a shell for manual testing. Everything that matters is in
//! [`raid6_evenodd::erasure_code`].

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use raid6_evenodd::config::EIMP_DISK_NUM;

/// Reconstruct missing disk(s) of a RAID-6 EVENODD-family array in place.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Disk files, in array order (index 0 = diagonal parity, index 1 = row parity).
    #[arg(required = true, num_args = 3..)]
    disks: Vec<PathBuf>,

    /// Index of the first missing disk.
    #[arg(long)]
    miss1: usize,

    /// Index of the second missing disk (same as --miss1 if only one disk is missing).
    #[arg(long)]
    miss2: Option<usize>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let miss2 = args.miss2.unwrap_or(args.miss1);

    if args.disks.len() > EIMP_DISK_NUM {
        eprintln!(
            "error: {} disks given, this build supports at most {EIMP_DISK_NUM}",
            args.disks.len()
        );
        return ExitCode::FAILURE;
    }

    match run(&args.disks, args.miss1, miss2) {
        Ok(()) => {
            log::info!("recovered disk(s) {} and {}", args.miss1, miss2);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(paths: &[PathBuf], miss1: usize, miss2: usize) -> std::io::Result<()> {
    let mut files: Vec<_> = paths
        .iter()
        .map(|p| OpenOptions::new().read(true).write(true).open(p))
        .collect::<std::io::Result<_>>()?;

    let mut buffers: Vec<Vec<u8>> = files
        .iter_mut()
        .map(|f| {
            let mut buf = Vec::new();
            f.read_to_end(&mut buf)?;
            Ok(buf)
        })
        .collect::<std::io::Result<_>>()?;

    let num_bytes = buffers[0].len();
    let num_disk = buffers.len();
    {
        let mut views: Vec<&mut [u8]> = buffers.iter_mut().map(Vec::as_mut_slice).collect();
        if let Err(e) = raid6_evenodd::recover(&mut views, num_bytes, num_disk, miss1, miss2) {
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e));
        }
    }

    for (file, (idx, buf)) in files.iter_mut().zip(buffers.iter().enumerate()) {
        if idx == miss1 || idx == miss2 {
            file.seek(SeekFrom::Start(0))?;
            file.write_all(buf)?;
            file.set_len(buf.len() as u64)?;
        }
    }
    Ok(())
}
