//! Decode one M3UA message from a file (or stdin) and print a text dump.
//!
//! Usage: `m3ua_dump [--hex] [-v] [FILE]`. FILE defaults to `-` (stdin).
//! With `--hex` the input is whitespace-separated hex text instead of raw
//! bytes; with `-v` the raw input bytes are echoed to stderr first.

use m3ua_codec::dump::{message_to_dump, read_input};
use std::io::Write;
use std::path::PathBuf;

/// Input bytes, 16 per line, with the line's starting offset.
fn write_hex_with_offset(w: &mut dyn Write, b: &[u8]) -> std::io::Result<()> {
    const COLS: usize = 16;
    for (i, chunk) in b.chunks(COLS).enumerate() {
        let hex_line = chunk
            .iter()
            .map(|x| format!("{:02x}", x))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(w, "  offset {:3}: {}", i * COLS, hex_line)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let mut raw_args: Vec<String> = std::env::args().skip(1).collect();
    let hex = if let Some(pos) = raw_args.iter().position(|a| a == "--hex") {
        raw_args.remove(pos);
        true
    } else {
        false
    };
    let verbose = if let Some(pos) = raw_args.iter().position(|a| a == "--verbose" || a == "-v") {
        raw_args.remove(pos);
        true
    } else {
        false
    };
    let path: PathBuf = raw_args
        .into_iter()
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("-"));

    let bytes = read_input(&path, hex)?;
    if verbose {
        eprintln!("input: {} bytes", bytes.len());
        write_hex_with_offset(&mut std::io::stderr(), &bytes)?;
    }

    let msg = m3ua_codec::parse(&bytes)?;
    println!("{}", message_to_dump(&msg));
    Ok(())
}
