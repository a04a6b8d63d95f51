use std::{fs::File, io::Write, time::Instant};

use blocktables::{blockset::STANDARD_BLOCKS, emit, polyominoes::Block};
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use crate::{make_bar, GenerateOpts};

pub fn generate(opts: &GenerateOpts) -> std::io::Result<()> {
    let bar = make_bar(STANDARD_BLOCKS.len() as u64);
    bar.set_message("blocks oriented");

    let start = Instant::now();

    let blocks: Vec<Block> = if opts.no_parallelism {
        STANDARD_BLOCKS
            .iter()
            .map(|def| {
                let block = def.build();
                bar.inc(1);
                block
            })
            .collect()
    } else {
        STANDARD_BLOCKS
            .par_iter()
            .map(|def| {
                let block = def.build();
                bar.inc(1);
                block
            })
            .collect()
    };

    bar.finish();

    let duration = start.elapsed();

    let mut out: Box<dyn Write> = match &opts.output_path {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    emit::write_tables(&mut out, &blocks, opts.mini_size_limit)?;
    out.flush()?;

    let oriented: usize = blocks.iter().map(|block| block.pieces().len()).sum();

    let time = duration.as_micros();
    let secs = time / 1_000_000;
    let micros = time % 1_000_000;

    // The tables may be going to stdout, so the summary goes to stderr.
    eprintln!(
        "Done! Emitted {oriented} oriented pieces across {} blocks in {secs}.{micros:06} s",
        blocks.len()
    );

    Ok(())
}
