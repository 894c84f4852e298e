use std::path::{Path, PathBuf};
use std::process::Command;

use clap::Parser;
use log::warn;

use invoice_press::config::RunOptions;

/// Render invoice data through an HTML template into a paginated PDF.
#[derive(Parser)]
#[command(name = "invoice-press")]
#[command(about = "Invoice PDF generation from CSV/JSON data")]
struct Cli {
    /// Data file (CSV or JSON); defaults to the first file in the data directory
    data: Option<PathBuf>,

    /// HTML template; defaults to the first template in the template directory
    template: Option<PathBuf>,

    /// Invoice identifier to render; renders every invoice when omitted
    #[arg(long)]
    invoice: Option<String>,

    /// Open the generated PDF with the platform viewer
    #[arg(long)]
    open: bool,
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let options = RunOptions {
        data_file: cli.data,
        template_file: cli.template,
        invoice: cli.invoice,
    };

    match invoice_press::run(&options) {
        Ok(output_path) => {
            if cli.open {
                open_document(&output_path);
            }
        }
        Err(e) => {
            log::error!("{e:#}");
            std::process::exit(1);
        }
    }
}

/// Hand the finished PDF to the platform opener. Failure only warns.
fn open_document(path: &Path) {
    #[cfg(target_os = "windows")]
    let result = Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .status();
    #[cfg(target_os = "macos")]
    let result = Command::new("open").arg(path).status();
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let result = Command::new("xdg-open").arg(path).status();

    if let Err(e) = result {
        warn!("could not open the document automatically: {e}");
    }
}
