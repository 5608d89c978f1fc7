//! File fingerprinting

use std::fs::File;
use std::io::Read;
use std::path::Path;

use blake3::Hasher;
use memmap2::Mmap;

use crate::types::Fingerprint;

/// File size above which hashing uses memory-mapped I/O (bytes). 100 MB.
const HASH_MMAP_THRESHOLD: u64 = 100 * 1024 * 1024;
/// Chunk size for reading files below the mmap threshold (bytes). 1 MB.
const HASH_READ_CHUNK_SIZE: usize = 1024 * 1024;

/// Fingerprint a file's full content with blake3. Memory-mapped I/O for
/// large files, chunked reading otherwise. Any I/O failure (vanished file,
/// permission denied) is returned to the caller, which carries it as a
/// per-record read error.
pub fn hash_file(path: &Path) -> std::io::Result<Fingerprint> {
    let file = File::open(path)?;
    let size = file.metadata()?.len();
    let mut hasher = Hasher::new();

    if size > HASH_MMAP_THRESHOLD {
        let mmap = unsafe { Mmap::map(&file)? };
        hasher.update(&mmap);
    } else {
        let mut reader = std::io::BufReader::with_capacity(HASH_READ_CHUNK_SIZE, file);
        let mut buffer = vec![0u8; HASH_READ_CHUNK_SIZE];
        loop {
            let n = reader.read(&mut buffer)?;
            if n == 0 {
                break;
            }
            hasher.update(&buffer[..n]);
        }
    }

    Ok(*hasher.finalize().as_bytes())
}
