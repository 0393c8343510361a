//! Basic usage example - rank the files of a directory against a query

use soundboard_core::{IndexBuilder, Ranker, Result};

fn main() -> Result<()> {
    // Get directory and query from args
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "./sounds/".to_string());
    let query = args.next().unwrap_or_else(|| "horn".to_string());

    println!("Indexing {}", path);
    let index = IndexBuilder::new().build(&path)?;

    if index.is_empty() {
        println!("No files found.");
        return Ok(());
    }

    println!("Results for {:?}:", query);
    for candidate in Ranker::new().rank(&query, &index).best_first().take(5) {
        println!("  {:>3}  {}", candidate.score, candidate.file_name);
    }

    Ok(())
}
