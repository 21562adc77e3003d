use std::io::Write;

use wordpiecer::BatchEncodeOptions;

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    tokenizer_args::{EncodeArgs, TokenizerArgs},
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeCommandArgs {
    #[command(flatten)]
    tokenizer: TokenizerArgs,

    #[command(flatten)]
    encode: EncodeArgs,

    /// Worker threads; 0 selects the available parallelism.
    #[arg(long, default_value_t = 1)]
    num_threads: usize,

    /// Do not pad rows to a common length.
    #[arg(long)]
    no_padding: bool,

    /// Pad rows to at least `--max-length`.
    #[arg(long)]
    padding_to_max_length: bool,

    /// Also print the attention mask row under each id row.
    #[arg(long)]
    mask: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    logging: LogArgs,
}

impl EncodeCommandArgs {
    fn batch_options(&self) -> BatchEncodeOptions {
        BatchEncodeOptions::default()
            .with_encode(self.encode.options())
            .with_num_threads(self.num_threads)
            .with_padding(!self.no_padding)
            .with_padding_to_max_length(self.padding_to_max_length)
    }

    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let tokenizer = self.tokenizer.load_tokenizer()?;
        let texts = self.input.read_lines()?;
        let batch = tokenizer.encode_batch(&texts, &self.batch_options())?;

        let mut writer = self.output.open_writer()?;
        for (ids, mask) in batch.ids.iter().zip(&batch.attention_mask) {
            write_row(&mut writer, ids)?;
            if self.mask {
                write_row(&mut writer, mask)?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}

fn write_row(
    writer: &mut dyn Write,
    row: &[u32],
) -> std::io::Result<()> {
    for (idx, id) in row.iter().enumerate() {
        write!(writer, "{}{}", if idx == 0 { "" } else { " " }, id)?;
    }
    writeln!(writer)
}
