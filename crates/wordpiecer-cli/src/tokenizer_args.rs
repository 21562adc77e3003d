use wordpiecer::{TokenizerOptions, WordPieceTokenizer};

/// Tokenizer construction arg group.
#[derive(clap::Args, Debug)]
pub struct TokenizerArgs {
    /// Path to a ``vocab.txt`` vocabulary; one token per line.
    #[arg(long)]
    pub vocab: String,

    /// Keep case and accents (for cased vocabularies).
    #[arg(long)]
    pub cased: bool,

    /// Report offsets in codepoints rather than bytes.
    #[arg(long)]
    pub codepoint_level: bool,

    /// Words longer than this many bytes become UNK without subword search.
    #[arg(long, default_value_t = 100)]
    pub max_input_chars_per_word: usize,
}

impl TokenizerArgs {
    /// The [`TokenizerOptions`] selected by these args.
    pub fn options(&self) -> TokenizerOptions {
        TokenizerOptions::default()
            .with_do_lower_case(!self.cased)
            .with_codepoint_level(self.codepoint_level)
            .with_max_input_chars_per_word(self.max_input_chars_per_word)
    }

    /// Load the tokenizer.
    pub fn load_tokenizer(&self) -> Result<WordPieceTokenizer<u32>, Box<dyn std::error::Error>> {
        log::info!("loading vocabulary: {}", self.vocab);
        Ok(WordPieceTokenizer::from_vocab_path(&self.vocab, self.options())?)
    }
}

/// Encoding arg group.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Do not wrap sequences in [CLS] ... [SEP].
    #[arg(long)]
    pub no_cls_sep: bool,

    /// Do not truncate sequences to `--max-length`.
    #[arg(long)]
    pub no_truncation: bool,

    /// Maximum sequence length.
    #[arg(long, default_value_t = 512)]
    pub max_length: usize,
}

impl EncodeArgs {
    /// The [`EncodeOptions`](wordpiecer::EncodeOptions) selected by these args.
    pub fn options(&self) -> wordpiecer::EncodeOptions {
        wordpiecer::EncodeOptions::default()
            .with_add_cls_sep(!self.no_cls_sep)
            .with_truncation(!self.no_truncation)
            .with_max_length(self.max_length)
    }
}
