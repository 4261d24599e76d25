//! Interactive prompts that read a wallet seed from a line-oriented stream.
//!
//! Both prompts keep asking until a valid seed is entered. Decode and length
//! errors are reported on `output` and never returned; only a failing or
//! closed `input` ends the loop early.

use std::io::prelude::*;

use super::{collapse_whitespace, decode_seed, valid_seed_len, SeedInput, Result,
            MAX_SEED_BYTES, MIN_SEED_BYTES};
use super::Error::*;

const SEED_PROMPT: &str = "Enter existing wallet seed (followed by a blank line): ";
const HEX_SEED_PROMPT: &str = "Enter existing wallet seed: ";

/// Prompt for a seed given as hex or as PGP words, terminated by a blank line.
///
/// A single token is decoded as hexadecimal (odd lengths are padded with a
/// leading `'0'`), two or more tokens as PGP words. On success the seed is
/// echoed in hex and returned.
///
/// ## Example
///
/// ```
/// use std::io::Cursor;
///
/// let input = Cursor::new("000102030405060708090a0b0c0d0e0f\n\n");
/// let mut output = Vec::new();
///
/// let seed = translate_seed::seed_prompt(input, &mut output).unwrap();
/// assert_eq!(seed, (0..16).collect::<Vec<u8>>());
/// assert!(String::from_utf8(output).unwrap().ends_with("Hex: 000102030405060708090a0b0c0d0e0f\n"));
/// ```
pub fn seed_prompt<R, W>(mut input: R, mut output: W) -> Result<Vec<u8>>
    where R: BufRead,
          W: Write
{
    loop {
        output.write_all(SEED_PROMPT.as_bytes())?;
        output.flush()?;

        let block = match read_block(&mut input)? {
            Some(block) => block,
            None => {
                info!("Input closed before a valid seed was entered");
                return Err(UnexpectedEof)
            }
        };
        let normalized = collapse_whitespace(&block).to_lowercase();

        let seed = match decode_seed(&normalized) {
            SeedInput::Empty => Vec::new(),
            SeedInput::Hex(decoded) | SeedInput::Mnemonic(decoded) => match decoded {
                Ok(seed) => seed,
                Err(e) => {
                    writeln!(output, "Input error: {}", e)?;
                    Vec::new()
                }
            },
        };

        if !valid_seed_len(seed.len()) {
            debug!("Rejecting seed of {} bytes", seed.len());
            writeln!(output, "Invalid seed specified.  Must be a word seed (usually 33 words) \
                              using the PGP wordlist or hexadecimal value that is at least {} \
                              bits and at most {} bits", MIN_SEED_BYTES * 8, MAX_SEED_BYTES * 8)?;
            continue
        }

        info!("Accepted seed of {} bytes", seed.len());
        write!(output, "\nSeed input successful. \nHex: {}\n", hex::encode(&seed))?;
        output.flush()?;
        return Ok(seed)
    }
}

/// Prompt for a seed given as a single line of hexadecimal.
///
/// Unlike [`seed_prompt`], odd-length input is rejected rather than padded and
/// nothing is echoed on success.
pub fn provide_seed<R, W>(mut input: R, mut output: W) -> Result<Vec<u8>>
    where R: BufRead,
          W: Write
{
    loop {
        output.write_all(HEX_SEED_PROMPT.as_bytes())?;
        output.flush()?;

        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Err(UnexpectedEof)
        }
        let line = String::from_utf8_lossy(&buf);

        match hex::decode(line.trim().to_lowercase()) {
            Ok(seed) if valid_seed_len(seed.len()) => return Ok(seed),
            _ => {
                writeln!(output, "Invalid seed specified.  Must be a hexadecimal value that \
                                  is at least {} bits and at most {} bits",
                         MIN_SEED_BYTES * 8, MAX_SEED_BYTES * 8)?;
            }
        }
    }
}

/// Read lines up to the next blank line or the end of `input`, joining them
/// with spaces. Returns `None` when `input` is already exhausted.
fn read_block<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut block = String::new();
    let mut lines = 0;
    loop {
        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("End of input after {} lines", lines);
            return Ok(if lines == 0 { None } else { Some(block) })
        }
        lines += 1;

        // Invalid UTF-8 is left for the decoders to reject.
        let line = String::from_utf8_lossy(&buf);
        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            break
        }
        block.push(' ');
        block.push_str(line);
    }
    debug!("Read seed block of {} lines", lines);
    Ok(Some(block))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{encode_mnemonic, word_for};
    use std::io::{self, BufReader, Cursor};

    const INVALID: &str = "Invalid seed specified.  Must be a word seed (usually 33 words) \
                           using the PGP wordlist or hexadecimal value that is at least 128 \
                           bits and at most 512 bits\n";

    fn run(input: &str) -> (Result<Vec<u8>>, String) {
        let mut output = Vec::new();
        let result = seed_prompt(Cursor::new(input), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    fn words(bytes: &[u8]) -> String {
        bytes.iter().map(|b| word_for(*b)).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_hex_even_length() {
        let (result, output) = run("000102030405060708090a0b0c0d0e0f\n\n");
        assert_eq!(result.unwrap(), (0..16).collect::<Vec<u8>>());
        assert_eq!(output, format!("{}\nSeed input successful. \n\
                                    Hex: 000102030405060708090a0b0c0d0e0f\n", SEED_PROMPT));
    }

    #[test]
    fn test_hex_odd_length_too_short() {
        let (result, output) = run("1\n\n00112233445566778899aabbccddeeff\n\n");
        assert_eq!(hex::encode(result.unwrap()), "00112233445566778899aabbccddeeff");
        assert_eq!(output, format!("{p}{}{p}\nSeed input successful. \n\
                                    Hex: 00112233445566778899aabbccddeeff\n",
                                   INVALID, p = SEED_PROMPT));
    }

    #[test]
    fn test_hex_odd_length_accepted() {
        let (result, output) = run("102030405060708090a0b0c0d0e0f\n\n");
        assert!(result.is_err());
        assert_eq!(output, format!("{p}{}{p}", INVALID, p = SEED_PROMPT));

        let (result, output) = run("f000102030405060708090a0b0c0d0e0f\n\n");
        assert_eq!(result.unwrap().len(), 17);
        assert!(output.ends_with("Hex: 0f000102030405060708090a0b0c0d0e0f\n"));
    }

    #[test]
    fn test_hex_mixed_case_and_whitespace() {
        let (result, output) = run("  000102030405060708090A0B0C0D0E0F  \n\n");
        assert_eq!(result.unwrap(), (0..16).collect::<Vec<u8>>());
        assert!(output.ends_with("Hex: 000102030405060708090a0b0c0d0e0f\n"));
    }

    #[test]
    fn test_mnemonic_too_short() {
        let input = format!("{} {}\n\n", word_for(0x00), word_for(0x01));
        let (result, output) = run(&input);
        match result {
            Err(UnexpectedEof) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(output, format!("{p}{}{p}", INVALID, p = SEED_PROMPT));
    }

    #[test]
    fn test_mnemonic_sixteen_words() {
        let input = format!("{}\n\n", words(&(0..16).collect::<Vec<u8>>()));
        let (result, output) = run(&input);
        assert_eq!(result.unwrap(), (0..16).collect::<Vec<u8>>());
        assert!(output.ends_with("Hex: 000102030405060708090a0b0c0d0e0f\n"));
    }

    #[test]
    fn test_mnemonic_across_lines_mixed_case() {
        let seed: Vec<u8> = (0..33).map(|i| (i * 7) as u8).collect();
        let phrase = encode_mnemonic(&seed).to_uppercase();
        let split: Vec<&str> = phrase.split(' ').collect();
        let input = format!("{}\r\n\t{}  \r\n\r\n", split[..10].join("   "), split[10..].join(" "));
        let (result, output) = run(&input);
        assert_eq!(result.unwrap(), seed);
        assert!(output.ends_with(&format!("Hex: {}\n", hex::encode(&seed))));
    }

    #[test]
    fn test_unknown_word() {
        let (result, output) = run("notaword anotherone\n\n");
        assert!(result.is_err());
        let expected = format!("{p}Input error: word \"notaword\" is not in the PGP wordlist\n{}{p}",
                               INVALID, p = SEED_PROMPT);
        assert_eq!(output, expected);
    }

    #[test]
    fn test_invalid_hex() {
        let (_, output) = run("xyz\n\n");
        assert!(output.contains("Input error: "));
        assert!(output.contains(INVALID));
    }

    #[test]
    fn test_empty_block_is_rejected() {
        let (result, output) = run("\n   \n\n");
        match result {
            Err(UnexpectedEof) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(output.matches(INVALID).count(), 2);
        assert!(!output.contains("Input error"));
    }

    #[test]
    fn test_error_then_valid() {
        let input = format!("bogus words here\n\n{}\n\n", words(&[0xab; 32]));
        let (result, output) = run(&input);
        assert_eq!(result.unwrap(), [0xab; 32]);
        assert_eq!(output.matches("Seed input successful.").count(), 1);
        assert_eq!(output.matches(SEED_PROMPT).count(), 2);
        assert!(output.ends_with(&format!("Hex: {}\n", "ab".repeat(32))));
    }

    #[test]
    fn test_too_long() {
        let (result, output) = run(&format!("{}\n\n", "00".repeat(MAX_SEED_BYTES + 1)));
        assert!(result.is_err());
        assert!(output.contains(INVALID));
    }

    #[test]
    fn test_eof_terminates_block() {
        let (result, _) = run("000102030405060708090a0b0c0d0e0f");
        assert_eq!(result.unwrap(), (0..16).collect::<Vec<u8>>());
    }

    #[test]
    fn test_eof_without_input() {
        let (result, output) = run("");
        match result {
            Err(UnexpectedEof) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(output, SEED_PROMPT);
    }

    #[test]
    fn test_invalid_utf8_is_recoverable() {
        let input: &[u8] = b"\xff\xfe\n\n000102030405060708090a0b0c0d0e0f\n\n";
        let mut output = Vec::new();
        let seed = seed_prompt(Cursor::new(input), &mut output).unwrap();
        assert_eq!(seed, (0..16).collect::<Vec<u8>>());

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("Input error: ").count(), 1);
        let (rejected, accepted) = output.split_at(output.find(INVALID).unwrap());
        assert!(rejected.starts_with(SEED_PROMPT));
        assert!(rejected.contains("Input error: "));
        assert_eq!(accepted, format!("{}{}\nSeed input successful. \n\
                                      Hex: 000102030405060708090a0b0c0d0e0f\n",
                                     INVALID, SEED_PROMPT));
    }

    #[test]
    fn test_provide_seed_invalid_utf8() {
        let input: &[u8] = b"\xff\n000102030405060708090a0b0c0d0e0f\n";
        let mut output = Vec::new();
        let seed = provide_seed(Cursor::new(input), &mut output).unwrap();
        assert_eq!(seed, (0..16).collect::<Vec<u8>>());
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream failed"))
        }
    }

    #[test]
    fn test_io_error_is_fatal() {
        let mut output = Vec::new();
        match seed_prompt(BufReader::new(FailingReader), &mut output) {
            Err(Io(ref e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_provide_seed() {
        let mut output = Vec::new();
        let input = Cursor::new("abc\n  000102030405060708090A0B0C0D0E0F \n");
        let seed = provide_seed(input, &mut output).unwrap();
        assert_eq!(seed, (0..16).collect::<Vec<u8>>());
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, format!("{p}Invalid seed specified.  Must be a hexadecimal value that \
                                    is at least 128 bits and at most 512 bits\n{p}",
                                   p = HEX_SEED_PROMPT));
    }

    #[test]
    fn test_provide_seed_eof() {
        let mut output = Vec::new();
        match provide_seed(Cursor::new("00\n"), &mut output) {
            Err(UnexpectedEof) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
