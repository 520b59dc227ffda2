use block_signals::{BlockSize, Blocker, Boundary, EmptyInput};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Split a file into fixed-size blocks and describe the result.
#[derive(Debug, Parser)]
#[command(name = "block-signals", version, about)]
struct Args {
    /// File to block; read fully into memory.
    path: PathBuf,

    /// Elements per block (bytes, or characters with --text).
    #[arg(short = 'b', long, allow_hyphen_values = true)]
    block_size: BlockSize,

    /// Decode the file as UTF-8 and block characters instead of bytes.
    #[arg(long)]
    text: bool,

    /// Reproduce the legacy emission with trailing empty blocks.
    #[arg(long)]
    legacy: bool,

    /// Emit one empty block for an empty file instead of none.
    #[arg(long)]
    empty_block: bool,

    /// Number of blocks to list.
    #[arg(long, default_value_t = 10)]
    show: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut blocker = Blocker::from_size(args.block_size);
    if args.legacy {
        blocker = blocker.with_boundary(Boundary::Legacy);
    }
    if args.empty_block {
        blocker = blocker.with_empty_input(EmptyInput::SingleEmptyBlock);
    }

    let data = match fs::read(&args.path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("ERROR: Failed to read {}", args.path.display());
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    println!("Blocking file: {}", args.path.display());
    println!("{}", "=".repeat(60));

    if args.text {
        let text = match std::str::from_utf8(&data) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("ERROR: {} is not valid UTF-8", args.path.display());
                eprintln!("  {}", e);
                std::process::exit(1);
            }
        };
        let blocks = blocker.block_str(text);
        print_summary(&blocker, text.chars().count(), "chars", blocks.len());

        println!("\nBlocks (first {}):", args.show);
        for (i, b) in blocks.iter().take(args.show).enumerate() {
            println!("  {}. [{} chars] {:?}", i + 1, b.chars().count(), b);
        }
        print_more(blocks.len(), args.show);
    } else {
        let blocks = blocker.block(&data);
        print_summary(&blocker, data.len(), "bytes", blocks.len());

        println!("\nBlocks (first {}):", args.show);
        let mut offset = 0;
        for (i, b) in blocks.iter().enumerate() {
            if i < args.show {
                println!("  {}. {}..{} ({} bytes)", i + 1, offset, offset + b.len(), b.len());
            }
            offset += b.len();
        }
        print_more(blocks.len(), args.show);
    }
}

fn print_summary(blocker: &Blocker, len: usize, unit: &str, num_blocks: usize) {
    let layout = blocker.layout(len);
    println!("  Input length: {} {}", len, unit);
    println!("  Block size: {}", blocker.block_size());
    println!("  Boundary: {:?}", blocker.boundary());
    println!("  Full blocks: {}", layout.num_full_blocks());
    println!("  Tail length: {}", layout.tail_len());
    println!("  Total blocks: {}", num_blocks);
}

fn print_more(total: usize, shown: usize) {
    if total > shown {
        println!("  ... and {} more", total - shown);
    }
}
