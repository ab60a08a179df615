use std::io;
use thiserror::Error;

/// Everything that can stop a run.
#[derive(Debug, Error)]
pub enum Error {
    /// The object image could not be read; the machine never starts.
    #[error("failed to load image: {0}")]
    Load(#[source] io::Error),

    /// The host console failed mid-run.
    #[error("host i/o error: {0}")]
    Io(#[from] io::Error),

    /// RTI or the reserved opcode reached the execute stage. The address is
    /// that of the offending instruction.
    #[error("{mnemonic} executed at {address:#06x}")]
    Fatal {
        mnemonic: &'static str,
        address: u16,
    },
}
