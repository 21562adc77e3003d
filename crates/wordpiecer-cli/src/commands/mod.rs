use crate::commands::{bench::BenchArgs, encode::EncodeCommandArgs, tokenize::TokenizeArgs};

pub mod bench;
pub mod encode;
pub mod tokenize;

/// Subcommands for wpiece
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print the WordPiece tokens of each input line.
    Tokenize(TokenizeArgs),

    /// Encode input lines as one batch; print one id row per line.
    Encode(EncodeCommandArgs),

    /// Time batch encoding of the input lines.
    Bench(BenchArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Tokenize(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Bench(cmd) => cmd.run(),
        }
    }
}
