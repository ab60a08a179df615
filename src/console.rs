use nix::sys::select::{select, FdSet};
use nix::sys::time::{TimeVal, TimeValLike};
use std::io::{self, Read, Write};

/// The host I/O boundary the machine runs against.
///
/// Memory consumes `poll`/`read_byte` when the keyboard status register is
/// read; the trap routines consume all four operations. Implementations may
/// block in `read_byte` and `write_byte`; `poll` must not block.
pub trait Console {
    /// Returns true iff at least one input byte is immediately available.
    fn poll(&mut self) -> io::Result<bool>;

    /// Blocking read of one input byte.
    fn read_byte(&mut self) -> io::Result<u8>;

    fn write_byte(&mut self, byte: u8) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }
}

/// `Console` over the process terminal.
///
/// The binary front end is responsible for putting the terminal into
/// non-canonical, no-echo mode; this type only moves bytes.
pub struct TerminalConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl TerminalConsole {
    pub fn new() -> TerminalConsole {
        TerminalConsole {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Console for TerminalConsole {
    fn poll(&mut self) -> io::Result<bool> {
        let mut readfds = FdSet::new();
        readfds.insert(libc::STDIN_FILENO);

        // Zero timeout: report readiness without waiting. A select error
        // (EINTR) counts as no key ready rather than killing the machine.
        match select(None, &mut readfds, None, None, &mut TimeVal::zero()) {
            Ok(ready) => Ok(ready == 1),
            Err(_) => Ok(false),
        }
    }

    fn read_byte(&mut self) -> io::Result<u8> {
        let mut buffer = [0; 1];
        self.stdin.read_exact(&mut buffer)?;
        Ok(buffer[0])
    }

    fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.stdout.write_all(&[byte])
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}
