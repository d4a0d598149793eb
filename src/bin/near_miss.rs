use anyhow::{bail, Context, Result};
use env_logger::Builder;
use log::{info, LevelFilter};
use probe_hashmap::near_miss::{Verdict, WordSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

fn init_logger() {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .format_timestamp_millis()
        .parse_default_env();
    let _ = builder.try_init();
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn main() -> Result<()> {
    init_logger();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [dictionary, queries] = args.as_slice() else {
        bail!("usage: near-miss <dictionary> <queries>");
    };

    let words = WordSet::from_reader(open(Path::new(dictionary))?)
        .with_context(|| format!("loading dictionary {dictionary}"))?;
    info!("loaded {} words into {} slots", words.len(), words.capacity());

    for line in open(Path::new(queries))?.lines() {
        let line = line.with_context(|| format!("reading {queries}"))?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        match words.check(query) {
            Verdict::Found => println!("{query}: found"),
            Verdict::Transposed(word) => println!("{query}: did you mean {word}?"),
            Verdict::Unknown => println!("{query}: unknown"),
        }
    }

    let stats = words.probe_stats();
    println!("size: {}", words.len());
    println!("capacity: {}", words.capacity());
    println!("mean probes: {:.3}", stats.mean());
    println!("max probes: {}", stats.max_probes);
    Ok(())
}
