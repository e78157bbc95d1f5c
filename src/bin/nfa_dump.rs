// src/bin/nfa_dump.rs
// Convert a JSON automaton description into the text dump format.
// Usage:
//   cargo run --bin nfa_dump -- in.json                # writes <nfa id>.nfa
//   cargo run --bin nfa_dump -- in.json out/auto.nfa
//   cargo run --bin nfa_dump -- - --stdout < in.json   # stdin in, stdout out

use std::{
    env, fs,
    io::{self, Read, Write},
    path::Path,
};

use anyhow::{Context, Result, bail};
use nfa_text::{nfa::load_nfa_json_bytes, write_nfa, write_nfa_file};

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut to_stdout = false;
    let mut positional = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--stdout" => to_stdout = true,
            _ => positional.push(arg),
        }
    }
    let Some(input) = positional.first() else {
        bail!("usage: nfa_dump <input.json|-> [out.nfa] [--stdout]");
    };
    let out = positional.get(1).cloned().unwrap_or_default();

    let data = if input == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read NFA JSON from stdin")?;
        buf
    } else {
        fs::read(input).with_context(|| format!("failed to read {input}"))?
    };
    let nfa = load_nfa_json_bytes(&data).with_context(|| format!("failed to load {input}"))?;
    log::info!(
        "[nfa_dump] loaded {} states, {} transitions",
        nfa.state_count(),
        nfa.transition_count()
    );

    if to_stdout {
        let text = write_nfa(&nfa)?;
        io::stdout()
            .write_all(text.as_bytes())
            .context("failed to write dump to stdout")?;
        return Ok(());
    }

    // Ensure parent dir exists
    if let Some(parent) = Path::new(&out).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    let written = write_nfa_file(&nfa, &out)?;
    log::info!("[nfa_dump] wrote {}", written.display());
    println!("{}", written.display());
    Ok(())
}
