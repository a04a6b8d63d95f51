use clap::{Args, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use blocktables::blockset::{find, STANDARD_BLOCKS};

mod generate;
use generate::generate;

#[derive(Clone, Parser)]
pub enum Opts {
    /// Compute every block's orientation set and emit the piece tables
    Generate(GenerateOpts),
    /// Print a summary of one or more blocks
    Info {
        #[clap(required = true)]
        names: Vec<String>,
    },
}

#[derive(Clone, Args)]
pub struct GenerateOpts {
    /// The path to write the generated table source to.
    ///
    /// Defaults to standard output.
    #[clap(short, long)]
    pub output_path: Option<String>,

    /// Disable parallelism.
    #[clap(long, short = 'p')]
    pub no_parallelism: bool,

    /// Largest block size included in the mini piece set.
    #[clap(long, short = 'm', default_value = "4")]
    pub mini_size_limit: usize,
}

pub fn make_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);

    let pos_width = format!("{len}").len();

    let template =
        format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos:>{pos_width}}}/{{len}} {{msg}}");

    bar.set_style(
        ProgressStyle::with_template(&template)
            .unwrap()
            .progress_chars("#>-"),
    );
    bar
}

fn info(name: &str) {
    let def = match find(name) {
        Some(def) => def,
        None => {
            let known: Vec<&str> = STANDARD_BLOCKS.iter().map(|def| def.name).collect();
            println!("Unknown block {name}. Known blocks: {}", known.join(", "));
            std::process::exit(1);
        }
    };

    let block = def.build();

    println!();
    println!("Info for {}", block.name());
    println!("Cells per piece: {}", block.size());
    println!("Canonical orientations: {}", block.pieces().len());

    for piece in block.pieces() {
        println!();
        println!(
            "{} (orientation {}, {} corner cells)",
            piece.name(),
            piece.orientation(),
            piece.corners().len()
        );
        println!("{piece}");
    }
}

fn main() {
    let opts = Opts::parse();

    match opts {
        Opts::Generate(g) => generate(&g).unwrap(),
        Opts::Info { names } => names.iter().map(String::as_str).for_each(info),
    }
}
