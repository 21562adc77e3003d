#![allow(missing_docs)]

use std::sync::LazyLock;

use divan::{Bencher, black_box, counter::BytesCount};
use wordpiecer::{BatchEncodeOptions, EncodeOptions, TokenizerOptions, WordPieceTokenizer};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const WORDS: &[&str] = &[
    "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "play", "##ing", "##ed",
    "##s", "un", "##believ", "##able", "token", "##izer", "word", "##piece", "café", "naive",
    "计", "算", "机", ",", ".", "!", "?",
];

const SENTENCES: &[&str] = &[
    "The quick brown fox jumps over the lazy dog.",
    "Unbelievable! The tokenizer played wordpieces, and the dogs jumped.",
    "Café NAÏVE foxes, 计算机 tokens; playing over LAZY words?",
    "  multiple   spaces\tand\ttabs\nand unknowable zyzzyva  ",
];

static TOKENIZER: LazyLock<WordPieceTokenizer<u32>> = LazyLock::new(|| {
    let vocab = ["[PAD]", "[CLS]", "[SEP]", "[UNK]", "[MASK]"]
        .iter()
        .chain(WORDS)
        .copied();
    WordPieceTokenizer::from_tokens(vocab, TokenizerOptions::default()).unwrap()
});

fn corpus_text() -> String {
    SENTENCES.join(" ").repeat(50)
}

fn corpus_batch() -> Vec<String> {
    SENTENCES
        .iter()
        .cycle()
        .take(1024)
        .map(|s| s.repeat(4))
        .collect()
}

#[divan::bench]
fn tokenize(bencher: Bencher) {
    let text = corpus_text();
    let tokenizer = &*TOKENIZER;
    bencher
        .counter(BytesCount::new(text.len()))
        .bench(|| tokenizer.tokenize(black_box(&text)));
}

#[divan::bench]
fn encode(bencher: Bencher) {
    let text = corpus_text();
    let tokenizer = &*TOKENIZER;
    let options = EncodeOptions::default().with_truncation(false);
    bencher
        .counter(BytesCount::new(text.len()))
        .bench(|| tokenizer.encode(black_box(&text), &options));
}

#[divan::bench(args = [1, 2, 4, 8])]
fn encode_batch(
    bencher: Bencher,
    num_threads: usize,
) {
    let texts = corpus_batch();
    let bytes: usize = texts.iter().map(String::len).sum();
    let tokenizer = &*TOKENIZER;
    let options = BatchEncodeOptions::default().with_num_threads(num_threads);
    bencher
        .counter(BytesCount::new(bytes))
        .bench(|| tokenizer.encode_batch(black_box(&texts), &options).unwrap());
}
