use std::process::ExitCode;

use clap::{Parser, Subcommand};
use huffcode::HuffmanCodec;

#[derive(Parser, Debug)]
#[command(about = "Huffman-code text against an alphabet taken from a seed")]
struct HuffArgs {
    /// Sample text the alphabet and frequencies are tallied from
    #[arg(long)]
    seed: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode text into a string of 0s and 1s
    Compress {
        /// Text made only of symbols present in the seed
        text: String,
    },
    /// Decode a string of 0s and 1s back into text
    Decompress {
        /// Bits produced by `compress` with the same seed
        bits: String,
    },
    /// Print the code assigned to every symbol
    Codes,
    /// Print tree shape and the expected code length
    Stats,
}

fn run(args: HuffArgs) -> huffcode::error::Result<()> {
    let mut codec = HuffmanCodec::from_seed(&args.seed)?;

    match args.command {
        Command::Compress { text } => {
            let bits = codec.compress(&text)?;
            println!("{bits}");
            log::info!("compression ratio {:.4}", codec.compression_ratio()?);
        }
        Command::Decompress { bits } => {
            println!("{}", codec.decompress(&bits)?);
        }
        Command::Codes => {
            for (symbol, code) in codec.code_table() {
                let weight = codec.alphabet()[symbol];
                println!("{symbol:?}\t{weight}\t{code}");
            }
        }
        Command::Stats => {
            let tree = codec.tree();
            println!("symbols:  {}", tree.leaf_count());
            println!("nodes:    {}", tree.len());
            println!("depth:    {}", tree.depth());
            println!("weight:   {}", tree.weight());
            println!("expected: {:.4} bits/symbol", codec.expected_encoding_length());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = HuffArgs::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
