use std::io::{BufRead, Write};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    tokenizer_args::TokenizerArgs,
};

/// Args for the tokenize command.
#[derive(clap::Args, Debug)]
pub struct TokenizeArgs {
    #[command(flatten)]
    tokenizer: TokenizerArgs,

    /// Stop after basic (pre-subword) segmentation.
    #[arg(long)]
    basic: bool,

    /// Print `token<TAB>start<TAB>end` rows instead of one line per input.
    #[arg(long)]
    offsets: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    logging: LogArgs,
}

impl TokenizeArgs {
    /// Run the tokenize command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let tokenizer = self.tokenizer.load_tokenizer()?;
        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for line in reader.lines() {
            let line = line?;

            if self.basic {
                writeln!(writer, "{}", tokenizer.basic_tokenize(&line).join(" "))?;
            } else if self.offsets {
                let (tokens, offsets) = tokenizer.tokenize_with_offsets(&line);
                for (token, offset) in tokens.iter().zip(offsets) {
                    writeln!(writer, "{token}\t{}\t{}", offset.start, offset.end)?;
                }
                writeln!(writer)?;
            } else {
                writeln!(writer, "{}", tokenizer.tokenize(&line).join(" "))?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}
