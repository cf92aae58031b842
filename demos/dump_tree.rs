//! Print the blocks, node tree and HTML for a markup document.
//!
//! Reads from the file named by the first argument, or stdin.
//! Set `RUST_LOG=trace` to see the segmenter's log output.

use std::io::{self, Read, Write};

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let input = if args.len() > 1 && args[1] != "-" {
        std::fs::read_to_string(&args[1])?
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    };

    let options = huemark::Options::default();
    let blocks = huemark::segment(&input);
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "== blocks ==")?;
    for block in &blocks {
        writeln!(stdout, "{block:?}")?;
    }

    let nodes = huemark::build_document(blocks, &options);
    writeln!(stdout, "\n== tree ==")?;
    for node in &nodes {
        writeln!(stdout, "{node:#?}")?;
    }

    let mut writer = huemark::HtmlWriter::with_capacity_for(input.len());
    huemark::render(&nodes, &mut writer, &options);
    writeln!(stdout, "\n== html ==")?;
    writeln!(stdout, "{}", writer.as_str())?;

    Ok(())
}
