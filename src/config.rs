use std::path::PathBuf;

/// Runtime configuration assembled by the command-line front end.
#[derive(Debug, PartialEq)]
pub struct Config {
    /// Object images, loaded in order. Later images win at overlapping
    /// addresses.
    pub images: Vec<PathBuf>,
}

impl Config {
    pub fn new(images: Vec<PathBuf>) -> Config {
        Config { images }
    }
}
