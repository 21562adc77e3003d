use std::time::Instant;

use wordpiecer::BatchEncodeOptions;

use crate::{
    input_output::InputArgs,
    logging::LogArgs,
    tokenizer_args::{EncodeArgs, TokenizerArgs},
};

/// Args for the bench command.
#[derive(clap::Args, Debug)]
pub struct BenchArgs {
    #[command(flatten)]
    tokenizer: TokenizerArgs,

    #[command(flatten)]
    encode: EncodeArgs,

    /// Texts per batch call.
    #[arg(long, default_value_t = 64)]
    batch_size: usize,

    /// Worker threads per batch; 0 selects the available parallelism.
    #[arg(long, default_value_t = 1)]
    num_threads: usize,

    /// Passes over the input.
    #[arg(long, default_value_t = 1)]
    repeat: usize,

    #[command(flatten)]
    input: InputArgs,

    #[clap(flatten)]
    logging: LogArgs,
}

impl BenchArgs {
    /// Run the bench command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let tokenizer = self.tokenizer.load_tokenizer()?;
        let texts = self.input.read_lines()?;
        let bytes: usize = texts.iter().map(String::len).sum();
        log::info!("read {} texts ({} bytes)", texts.len(), bytes);

        let options = BatchEncodeOptions::default()
            .with_encode(self.encode.options())
            .with_num_threads(self.num_threads);

        let batch_size = self.batch_size.max(1);
        let mut tokens = 0;
        let start = Instant::now();
        for _ in 0..self.repeat {
            for chunk in texts.chunks(batch_size) {
                let batch = tokenizer.encode_batch(chunk, &options)?;
                tokens += batch
                    .attention_mask
                    .iter()
                    .map(|row| row.iter().filter(|&&m| m != 0).count())
                    .sum::<usize>();
            }
        }
        let elapsed = start.elapsed();

        let secs = elapsed.as_secs_f64().max(f64::EPSILON);
        let total_bytes = (bytes * self.repeat) as f64;
        log::info!(
            "encoded {} texts in {:.3?}; batch_size={}, num_threads={}",
            texts.len() * self.repeat,
            elapsed,
            batch_size,
            self.num_threads,
        );
        log::info!(
            "throughput: {:.1} texts/s, {:.1} tokens/s, {:.2} MiB/s",
            (texts.len() * self.repeat) as f64 / secs,
            tokens as f64 / secs,
            total_bytes / secs / (1024.0 * 1024.0),
        );

        Ok(())
    }
}
