use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

use generator::{Site, SiteConfig};

#[derive(Parser)]
#[command(name = "mdsite", version, about = "Markdown static site generator")]
struct Cli {
    /// Disable colored error output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the whole site into the output directory
    Build(BuildArgs),

    /// Convert a single Markdown file and print the result
    Render(RenderArgs),
}

#[derive(clap::Args)]
struct BuildArgs {
    /// Site root (holds site.toml, content/, static/, template.html)
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Override the configured base path
    #[arg(long)]
    basepath: Option<String>,

    /// Suppress per-file progress output
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Markdown source file
    file: String,

    /// Print the extracted page title instead of the body HTML
    #[arg(long)]
    title: bool,
}

fn main() {
    let cli = Cli::parse();
    let color_choice = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    match cli.command {
        Command::Build(args) => do_build(args, color_choice),
        Command::Render(args) => do_render(args, color_choice),
    }
}

fn do_build(args: BuildArgs, color_choice: ColorChoice) {
    let mut config = match SiteConfig::load(&args.root) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    if let Some(basepath) = args.basepath {
        config.basepath = basepath;
    }

    let site = Site::new(&args.root, config);
    let result = if args.quiet {
        let mut sink = std::io::sink();
        site.build(&mut sink)
    } else {
        let mut stdout = std::io::stdout();
        site.build(&mut stdout)
    };

    let summary = match result {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    if !summary.failures.is_empty() {
        let writer = StandardStream::stderr(color_choice);
        let config = term::Config::default();
        let mut files = SimpleFiles::new();
        for failure in &summary.failures {
            let file_id = files.add(failure.path.display().to_string(), failure.source.clone());
            let diagnostic = failure.error.to_diagnostic(file_id);
            let _ = term::emit_to_write_style(&mut writer.lock(), &config, &files, &diagnostic);
        }
        eprintln!(
            "generated {} pages, copied {} assets, {} failed",
            summary.pages,
            summary.assets,
            summary.failures.len()
        );
        process::exit(1);
    }

    println!(
        "generated {} pages, copied {} assets",
        summary.pages, summary.assets
    );
}

fn do_render(args: RenderArgs, color_choice: ColorChoice) {
    let source = match std::fs::read_to_string(&args.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", args.file, e);
            process::exit(1);
        }
    };

    let mut files = SimpleFiles::new();
    let file_id = files.add(args.file.clone(), source.clone());

    let result = if args.title {
        mdsite::extract_title(&source)
    } else {
        mdsite::markdown_to_html_node(&source).map(|node| node.to_html())
    };

    match result {
        Ok(text) => println!("{}", text),
        Err(error) => {
            let writer = StandardStream::stderr(color_choice);
            let config = term::Config::default();
            let diagnostic = error.to_diagnostic(file_id);
            let _ = term::emit_to_write_style(&mut writer.lock(), &config, &files, &diagnostic);
            process::exit(1);
        }
    }
}
