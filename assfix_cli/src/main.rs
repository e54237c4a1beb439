use std::path::PathBuf;

use clap::Parser;

use assfix_core::{scene_archives, scrub_file};

#[derive(Parser)]
#[command(
    name = "assfix",
    about = "Strip color_manager settings from gzip-compressed .ass scene archives, in place",
    version
)]
struct Cli {
    /// Root directory scanned recursively for *.ass.gz files
    root: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut scanned = 0u64;
    let mut rewritten = 0u64;
    let mut failed = 0u64;

    for path in scene_archives(&cli.root)? {
        scanned += 1;
        match scrub_file(&path) {
            // The banner only appears for files that opened and decompressed
            // cleanly; failures go to stderr alone.
            Ok(report) => {
                println!("cleanup for {}", path.display());
                for line in &report.dropped {
                    println!("{line}");
                }
                if report.rewritten {
                    rewritten += 1;
                }
            }
            // A bad file never stops the batch; report it and move on.
            Err(err) => {
                eprintln!("{err:#}");
                failed += 1;
            }
        }
    }

    eprintln!("  scanned   : {scanned}");
    eprintln!("  rewritten : {rewritten}");
    eprintln!("  failed    : {failed}");
    Ok(())
}
