use clap::{App, Arg};
use lc3i::{Config, Error};
use nix::sys::termios::{tcgetattr, tcsetattr, LocalFlags, SetArg, Termios};
use std::path::PathBuf;
use std::process;

fn main() {
    let matches = App::new("lc3i")
        .about("Interpreter for the LC-3 instruction set")
        .arg(
            Arg::with_name("IMAGE")
                .help("Object image(s) to load, in order")
                .required(true)
                .multiple(true)
                .index(1),
        )
        .get_matches();

    let images = matches
        .values_of("IMAGE")
        .unwrap()
        .map(PathBuf::from)
        .collect();

    let original = disable_input_buffering();
    install_interrupt_handler(original.as_ref());

    let result = lc3i::run(Config::new(images));

    if let Some(ref termios) = original {
        restore_input_buffering(termios);
    }

    if let Err(e) = result {
        eprintln!("lc3i: {}", e);
        process::exit(match e {
            Error::Fatal { .. } => 2,
            _ => 1,
        });
    }
}

/// Puts stdin into non-canonical, no-echo mode so keystrokes reach the
/// machine one byte at a time. Returns the saved attributes, or `None` when
/// stdin is not a terminal (piped input runs fine in cooked mode).
fn disable_input_buffering() -> Option<Termios> {
    let original = tcgetattr(libc::STDIN_FILENO).ok()?;

    let mut raw = original.clone();
    raw.local_flags &= !(LocalFlags::ICANON | LocalFlags::ECHO);
    if let Err(e) = tcsetattr(libc::STDIN_FILENO, SetArg::TCSANOW, &raw) {
        eprintln!("lc3i: unable to configure the terminal: {}", e);
        process::exit(1);
    }

    Some(original)
}

fn restore_input_buffering(original: &Termios) {
    if let Err(e) = tcsetattr(libc::STDIN_FILENO, SetArg::TCSANOW, original) {
        eprintln!("lc3i: unable to restore the terminal: {}", e);
    }
}

/// On SIGINT the interpreter has no cancellation of its own; restore the
/// terminal and leave with the conventional interrupt status.
fn install_interrupt_handler(original: Option<&Termios>) {
    let saved: Option<libc::termios> = original.map(|t| t.clone().into());

    let result = ctrlc::set_handler(move || {
        if let Some(raw) = saved {
            let termios = Termios::from(raw);
            let _ = tcsetattr(libc::STDIN_FILENO, SetArg::TCSANOW, &termios);
        }
        process::exit(130);
    });

    if let Err(e) = result {
        eprintln!("lc3i: unable to install the interrupt handler: {}", e);
        process::exit(1);
    }
}
