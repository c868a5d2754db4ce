use std::path::PathBuf;

use anyhow::Result;
use derive_new::new;
use serde::Serialize;
use structopt::StructOpt;
use tracing::{debug, error, Level};

use dictrie::{destroy, FileFormat, Wordlist};

const SAMPLE_WORDS: [&str; 5] = ["notaword", "ucf", "no", "note", "corg"];

/// Load a dictionary into a trie and print how many times each word occurs in it.
#[derive(StructOpt)]
#[structopt(name = "dictrie")]
struct Cli {
    /// Dictionary file: a word count followed by that many lowercase words
    #[structopt(parse(from_os_str), default_value = "dictionary.txt")]
    dictionary: PathBuf,
    /// Words to look up [default: notaword ucf no note corg]
    words: Vec<String>,
    /// Reject dictionary words longer than this
    #[structopt(long)]
    max_word_len: Option<usize>,
    /// Fail if the dictionary has more words than it declares
    #[structopt(long)]
    strict_count: bool,
    /// Don't echo the dictionary words
    #[structopt(short, long)]
    quiet: bool,
    /// Print every stored word with its count
    #[structopt(long)]
    dump: bool,
    /// Print lookup results as JSON
    #[structopt(long)]
    json: bool,
    /// More logging (-v, -vv, -vvv)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

#[derive(Serialize, new)]
struct Lookup {
    word: String,
    occurrences: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::from_args();
    init_logging(args.verbose);

    let format = FileFormat::builder()
        .max_word_len(args.max_word_len)
        .strict_count(args.strict_count)
        .build();
    let wl = Wordlist::from_file(&args.dictionary, format)?;

    if !args.quiet {
        wl.words().iter().for_each(|word| println!("{}", word));
    }
    if args.dump {
        wl.trie().iter().for_each(|(word, count)| println!("{} {}", word, count));
    }

    let queries: Vec<String> = if args.words.is_empty() {
        SAMPLE_WORDS.iter().map(|w| w.to_string()).collect()
    } else {
        args.words
    };
    let lookups: Vec<Lookup> = queries.into_iter()
        .map(|word| match wl.occurrences(&word) {
            Ok(n) => Lookup::new(word, n, None),
            Err(e) => {
                error!("cannot look up {:?}: {}", word, e);
                Lookup::new(word, 0, Some(e.to_string()))
            }
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&lookups)?);
    } else {
        lookups.iter().for_each(|l| println!("\t{} : {}", l.word, l.occurrences));
    }

    let trie = destroy(Some(wl.into_trie()));
    debug!(released = trie.is_none(), "shutdown");
    Ok(())
}
