//! An interpreter for the LC-3 (Little Computer 3) instruction set: a
//! 16-bit, word-addressed educational architecture with eight general
//! registers, a one-hot condition code, and memory-mapped keyboard I/O.

mod bits;
mod config;
mod console;
mod error;
mod instruction;
mod loader;
mod machine;
mod memory;
mod registers;
mod trap;

pub use crate::config::Config;
pub use crate::console::{Console, TerminalConsole};
pub use crate::error::Error;
pub use crate::machine::Machine;

use std::fs::File;
use std::io::BufReader;

/// Builds a machine over the process terminal, loads the configured images
/// in order, and runs until a HALT trap or an abort.
pub fn run(config: Config) -> Result<(), Error> {
    let mut machine = Machine::new(TerminalConsole::new());

    for path in &config.images {
        let file = File::open(path).map_err(Error::Load)?;
        machine.load_image(BufReader::new(file))?;
    }

    machine.run()
}
