use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hash_core::crypto::keccak::{sha3_256, sha3_256_reduced};
use hash_core::crypto::sha1::sha1;
use hash_core::encoding::Encodable;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Algorithm {
    /// FIPS 180-4 SHA-1, 20 byte digest
    Sha1,
    /// FIPS 202 SHA3-256, 32 byte digest
    #[value(name = "sha3-256")]
    Sha3_256,
    /// reduced-permutation SHA3-256 variant, not interoperable with the standard
    #[value(name = "sha3-256-reduced")]
    Sha3_256Reduced,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// algorithm to hash the input with
    #[arg(short, long, value_enum, default_value = "sha1")]
    algorithm: Algorithm,

    /// string to hash
    #[arg(short, long)]
    input: Option<String>,

    /// the file to read input from, raw bytes
    ///
    /// the program will read from stdin if neither input-file or input are set
    #[arg(long, conflicts_with = "input")]
    input_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args: Args = Args::try_parse()?;

    // read in the input data
    let input = if let Some(input_str) = args.input {
        input_str.into_bytes()
    } else if let Some(ref input_file) = args.input_file {
        fs::read(input_file)
            .with_context(|| format!("Reading from {input_file:?} to get input data."))?
    } else {
        let mut data = vec![];
        io::stdin().read_to_end(&mut data)?;
        data
    };

    let start = Instant::now();
    let digest = match args.algorithm {
        Algorithm::Sha1 => sha1(&input).encode_hex(),
        Algorithm::Sha3_256 => sha3_256(&input).encode_hex(),
        Algorithm::Sha3_256Reduced => sha3_256_reduced(&input).encode_hex(),
    };
    let elapsed = start.elapsed();

    println!("{digest}");
    eprintln!("hashed {} bytes in {}us", input.len(), elapsed.as_micros());

    Ok(())
}
