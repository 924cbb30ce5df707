use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use hash_core::crypto::sha1::{sha1, Sha1Digest, DIGEST_SIZE};
use hash_core::encoding::{Decodable, Encodable};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// hex encoded sha1 digest to search for
    #[arg(short, long)]
    target: Option<String>,

    /// plaintext password to derive the target digest from
    #[arg(short, long, conflicts_with = "target")]
    password: Option<String>,

    /// file of candidate words, one per line
    ///
    /// the program will read candidates from stdin if wordlist is not set
    #[arg(short, long)]
    wordlist: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args: Args = Args::try_parse()?;

    // evaluate the target digest
    let target = if let Some(hex_digest) = args.target {
        let bytes = hex_digest
            .decode_hex()
            .context("Parsing the target digest.")?;
        ensure!(
            bytes.len() == DIGEST_SIZE,
            "Target digest must be {DIGEST_SIZE} bytes."
        );
        let mut digest = [0; DIGEST_SIZE];
        digest.copy_from_slice(&bytes);
        Sha1Digest(digest)
    } else if let Some(password) = args.password {
        sha1(password)
    } else {
        bail!("No target was specified for the search.\nTry setting either --target|--password")
    };

    // read in the candidate words
    let candidates = if let Some(ref wordlist) = args.wordlist {
        fs::read_to_string(wordlist)
            .with_context(|| format!("Reading candidate words from {wordlist:?}."))?
    } else {
        let mut data = String::new();
        io::stdin().read_to_string(&mut data)?;
        data
    };

    // hash candidates in order, stopping at the first exact digest match
    for (tried, word) in candidates.lines().enumerate() {
        let digest = sha1(word);
        if digest == target {
            println!("{word}");
            eprintln!(
                "matched {} after {} candidates",
                digest.encode_hex(),
                tried + 1
            );
            return Ok(());
        }
    }

    bail!("No candidate matched the target digest.")
}
