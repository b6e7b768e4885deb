//! uiwarp CLI
//!
//! Usage:
//!   uiwarp [OPTIONS] [FILE]
//!
//! Options:
//!   -v, --viewport <FILE>  Viewport geometry (TOML format, default 800x600)
//!   -f, --find <ID>        Print only the first control with this id
//!   -h, --help             Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use uiwarp::{markup, Layout, Viewport};

#[derive(Parser)]
#[command(name = "uiwarp")]
#[command(about = "Resolve a declarative UI layout document to pixel geometry")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Viewport geometry file (TOML format)
    #[arg(short, long)]
    viewport: Option<PathBuf>,

    /// Print only the first control with this id
    #[arg(short, long)]
    find: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load viewport
    let viewport = match &cli.viewport {
        Some(path) => match Viewport::from_file(path) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("Error loading viewport '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Viewport::default(),
    };

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    // Parse, reporting syntax errors with source context
    let doc = match markup::parse(&source) {
        Ok(doc) => doc,
        Err(errors) => {
            for error in errors {
                eprintln!("{}", error.format(&source, &filename));
            }
            std::process::exit(1);
        }
    };

    let root = match Layout::new(&doc.root, viewport.to_rect()) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(id) = &cli.find {
        match root.find_control(id) {
            Ok(Some(control)) => {
                println!(
                    "Control {}: pos({},{}) size({},{})",
                    control.id, control.rect.x, control.rect.y, control.rect.w, control.rect.h
                );
            }
            Ok(None) => {
                eprintln!("No control with id '{}'", id);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    for element in root.elements() {
        match element {
            Ok(element) => {
                let rect = element.rect();
                match &element {
                    uiwarp::Element::Container(layout) => println!(
                        "Layout {}: {} pos({},{}) size({},{})",
                        layout.attribute("id", String::new()),
                        layout.kind(),
                        rect.x,
                        rect.y,
                        rect.w,
                        rect.h
                    ),
                    uiwarp::Element::Control(control) => println!(
                        "Control {}: {} pos({},{}) size({},{})",
                        control.id,
                        control.kind(),
                        rect.x,
                        rect.y,
                        rect.w,
                        rect.h
                    ),
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn print_intro() {
    println!(
        r#"uiwarp - resolve declarative UI layout documents to pixel geometry

USAGE:
    uiwarp [OPTIONS] [FILE]
    echo '<markup>' | uiwarp

OPTIONS:
    -v, --viewport <FILE>  Viewport geometry (TOML, default 800x600 at origin)
    -f, --find <ID>        Print only the first control with this id
    -h, --help             Print help

QUICK START:
    echo 'grid {{ control [id: "ok", width: "50%", height: "100%"] }}' | uiwarp

Containers are `grid` and `table`; leaves are `control`. Lengths mix units:
"10px", "50%", "1c" (table cells), and sums like "100%-20px". A negative
total anchors to the far edge, so x: "-10px" hugs the right border."#
    );
}
