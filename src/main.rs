use anyhow::{anyhow, Result};
use std::env;

use ocr_dashboard::{catalog::VendorCatalog, projection};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // The integrity check runs before either mode so a broken dataset
    // fails fast instead of surfacing as a lookup error mid-render.
    let catalog = load_catalog()?;

    if args.len() > 1 && args[1] == "export" {
        run_export(&catalog)?;
    } else {
        run_ui_mode(catalog)?;
    }

    Ok(())
}

fn load_catalog() -> Result<VendorCatalog> {
    let catalog = VendorCatalog::new();

    if let Err(errors) = catalog.verify() {
        for error in &errors {
            eprintln!("❌ Dataset error: {}", error);
        }
        return Err(anyhow!("vendor dataset failed integrity check ({} errors)", errors.len()));
    }

    Ok(catalog)
}

fn run_export(catalog: &VendorCatalog) -> Result<()> {
    let document = projection::export_document(catalog)?;
    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(catalog: VendorCatalog) -> Result<()> {
    use ocr_dashboard::ui;

    println!("🖥️  Loading OCR Dashboard... (Press 'q' to quit)\n");

    let mut app = ui::App::new(catalog);
    ui::run_ui(&mut app)?;

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_catalog: VendorCatalog) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or dump the view models: cargo run export");
    std::process::exit(1);
}
