//! # Line Vocabulary IO
//!
//! One token per line; empty lines are skipped. A token's id is its
//! position among the non-empty lines, which is the layout of pretrained
//! BERT ``vocab.txt`` files.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{WPResult, WordPiecerError},
    types::TokenType,
    vocab::TokenDict,
};

/// Load the ordered token list of a vocabulary file.
///
/// ## Arguments
/// * `path` - path to the file.
///
/// ## Errors
/// [`WordPiecerError::VocabRead`] if the file can not be opened or read.
pub fn load_vocab_path<P: AsRef<Path>>(path: P) -> WPResult<Vec<String>> {
    let path = path.as_ref();
    let with_path = |source: std::io::Error| WordPiecerError::VocabRead {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(with_path)?);
    let tokens = read_vocab_lines(reader).map_err(|err| match err {
        WordPiecerError::Io(source) => with_path(source),
        err => err,
    })?;

    log::info!("loaded {} vocabulary entries from {:?}", tokens.len(), path);
    Ok(tokens)
}

/// Read the ordered token list from a line reader.
///
/// Lines are:
/// ```terminaloutput
/// {TOKEN}
/// ```
///
/// ## Arguments
/// * `reader` - the line reader.
pub fn read_vocab_lines<R: BufRead>(reader: R) -> WPResult<Vec<String>> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        tokens.push(line);
    }
    Ok(tokens)
}

/// Load a [`TokenDict`] from a vocabulary file.
pub fn load_token_dict_path<T, P>(path: P) -> WPResult<TokenDict<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    TokenDict::from_tokens(load_vocab_path(path)?)
}

/// Save a [`TokenDict`] to a vocabulary file, one token per line in id order.
pub fn save_token_dict_path<T, P>(
    dict: &TokenDict<T>,
    path: P,
) -> WPResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_token_dict(dict, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`TokenDict`] to a [`Write`] writer.
pub fn write_token_dict<T, W>(
    dict: &TokenDict<T>,
    writer: &mut W,
) -> WPResult<()>
where
    T: TokenType,
    W: Write,
{
    for token in dict.tokens() {
        writeln!(writer, "{token}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_skips_empty_lines() {
        let data = "[PAD]\n\n[UNK]\r\nhello\n\n##ing";
        let tokens = read_vocab_lines(data.as_bytes()).unwrap();
        assert_eq!(tokens, vec!["[PAD]", "[UNK]", "hello", "##ing"]);
    }

    #[test]
    fn test_missing_file() {
        let err = load_vocab_path("/definitely/not/a/vocab.txt").unwrap_err();
        assert!(matches!(err, WordPiecerError::VocabRead { .. }));
        assert!(err.to_string().contains("can not be opened"));
    }

    #[test]
    fn test_save_load_vocab() {
        type T = u32;

        let dict: TokenDict<T> =
            TokenDict::from_tokens(["[PAD]", "[UNK]", "apple", "##s", "banana"]).unwrap();

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("vocab.txt");

                save_token_dict_path(&dict, &path).expect("Failed to save vocab");

                let loaded: TokenDict<T> =
                    load_token_dict_path(&path).expect("Failed to load vocab");

                assert_eq!(&loaded, &dict);

                Ok(())
            })
            .unwrap();
    }
}
