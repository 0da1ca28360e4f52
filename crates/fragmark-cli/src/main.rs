use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::process;

use clap::{Parser, Subcommand};
use tabwriter::TabWriter;

use fragmark_io::prelude::*;
use fragmark_io::tags;

#[derive(Debug, Parser)]
#[command(name = "fragmark", version, about = "Markup fragment addressing CLI")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a markup file into tree JSON with shape metrics.
    Tree {
        /// Input markup path
        input: String,
        /// Output minified JSON
        #[arg(long)]
        min: bool,
    },
    /// Reconstruct markup from a tree JSON file.
    Markup {
        /// Input tree JSON path
        tree: String,
    },
    /// Decode + encode round trip of a markup file.
    Roundtrip {
        /// Input markup path
        input: String,
    },
    /// Indented line listing of a markup file's tree.
    Lines {
        /// Input markup path
        input: String,
    },
    /// Extract text fragments, keyed by truncated content hash.
    Fragments {
        /// Input markup path
        input: String,
        /// Maximum traversal depth
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
        /// Output minified JSON
        #[arg(long)]
        min: bool,
    },
    /// Markup with every captured fragment replaced by its content hash.
    Hashes {
        /// Input markup path
        input: String,
        /// Maximum traversal depth
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Markup with every captured fragment masked (length preserved).
    Mask {
        /// Input markup path
        input: String,
        /// Maximum traversal depth
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
        /// Mask character
        #[arg(long, default_value_t = fragmark_io::rewrite::DEFAULT_MASK_CHAR)]
        mask_char: char,
    },
    /// Apply a hash -> replacement-text mapping to a tree JSON file.
    Apply {
        /// Input tree JSON path
        tree: String,
        /// Mapping JSON path (object of hash -> replacement text)
        mapping: String,
    },
    /// Tabular overview of a markup file's fragments.
    Inspect {
        /// Input markup path
        input: String,
        /// Only show fragments owned by this tag
        #[arg(long)]
        tag: Option<String>,
        /// Only show fragments whose text contains this substring
        #[arg(long)]
        grep: Option<String>,
    },
}

fn read_file(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{path}: {e}");
            process::exit(1);
        }
    }
}

fn read_tree(path: &str) -> Node {
    let s = read_file(path);
    match parse_tree_json_str(&s) {
        Ok(node) => node,
        Err(e) => {
            // Boundary validation failure, distinct from I/O problems.
            eprintln!("{e}");
            process::exit(2);
        }
    }
}

fn boundary<T>(result: Result<T, BoundaryError>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    }
}

fn preview(text: &str) -> String {
    const MAX: usize = 80;
    if text.chars().count() <= MAX {
        return text.to_string();
    }
    let mut out: String = text.chars().take(MAX - 1).collect();
    out.push('…');
    out
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Tree { input, min } => {
            let response = boundary(markup_to_tree(&read_file(&input)));
            let out = if min {
                serde_json::to_string(&response)?
            } else {
                serde_json::to_string_pretty(&response)?
            };
            println!("{out}");
        }
        Command::Markup { tree } => {
            let root = read_tree(&tree);
            println!("{}", tree_to_markup(&root));
        }
        Command::Roundtrip { input } => {
            let markup = boundary(markup_to_markup(&read_file(&input)));
            println!("{markup}");
        }
        Command::Lines { input } => {
            let lines = boundary(markup_to_lines(&read_file(&input)));
            println!("{lines}");
        }
        Command::Fragments { input, max_depth, min } => {
            let response = boundary(markup_to_fragments(&read_file(&input), max_depth));
            let out = if min {
                serde_json::to_string(&response)?
            } else {
                serde_json::to_string_pretty(&response)?
            };
            println!("{out}");
        }
        Command::Hashes { input, max_depth } => {
            let markup = boundary(markup_to_hashed_markup(&read_file(&input), max_depth));
            println!("{markup}");
        }
        Command::Mask { input, max_depth, mask_char } => {
            let markup = boundary(markup_to_masked_markup(
                &read_file(&input),
                max_depth,
                mask_char,
            ));
            println!("{markup}");
        }
        Command::Apply { tree, mapping } => {
            let root = read_tree(&tree);
            let mapping_s = read_file(&mapping);
            let mapping: BTreeMap<String, String> = match serde_json::from_str(&mapping_s) {
                Ok(m) => m,
                Err(e) => {
                    eprintln!("{e}");
                    process::exit(1);
                }
            };
            println!("{}", apply_hash_mapping_to_tree(&root, &mapping));
        }
        Command::Inspect { input, tag, grep } => {
            let response = boundary(markup_to_fragments(&read_file(&input), DEFAULT_MAX_DEPTH));

            let mut tw = TabWriter::new(vec![]);
            writeln!(tw, "hash\ttag\trole\tpreview")?;
            for (hash, fragment) in response.fragments.iter() {
                if let Some(tag) = &tag {
                    if &fragment.tag != tag {
                        continue;
                    }
                }
                if let Some(grep) = &grep {
                    if !fragment.text.contains(grep.as_str()) {
                        continue;
                    }
                }
                let role = tags::text_role(&fragment.tag);
                writeln!(tw, "{hash}\t{}\t{role}\t{}", fragment.tag, preview(&fragment.text))?;
            }
            tw.flush()?;
            let bytes = match tw.into_inner() {
                Ok(bytes) => bytes,
                Err(e) => return Err(anyhow::anyhow!("tab alignment failed: {}", e.error())),
            };
            print!("{}", String::from_utf8(bytes)?);
        }
    }

    Ok(())
}
