//! Render the page to a static HTML file.
//!
//! ```bash
//! cargo run --example render_page
//! ```

use gogetters_page::{current_year, render_page};

fn main() -> std::io::Result<()> {
    let html = render_page(current_year());
    std::fs::write("gogetters.html", &html)?;
    println!("wrote gogetters.html ({} bytes)", html.len());
    Ok(())
}
