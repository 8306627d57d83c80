//! Minimal example: load a page, bind the click styler, dispatch a few clicks
//!
//! Run with: cargo run --example minimal_click

use clickstyler::{ClickStyler, Page, DEFAULT_TARGET_ID};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("ClickStyler - Minimal Example\n");

    let html = r#"<html>
<head><title>Minimal</title></head>
<body>
  <h1>Press the button</h1>
  <button id="btn-essai" style="background-color: gray">Essai</button>
</body>
</html>"#;

    let mut page = Page::load_html(html)?;

    let snap = page.text_snapshot();
    println!("Loaded: {}", snap.title);

    let binding = ClickStyler::new().initialize(&mut page);
    println!("Bound: {}\n", binding.is_bound());

    for i in 1..=3 {
        page.click(DEFAULT_TARGET_ID);
        let el = page.element_by_id(DEFAULT_TARGET_ID).expect("button missing");
        println!(
            "click {}: border-radius={} background-color={}",
            i,
            el.border_radius.as_deref().unwrap_or("-"),
            el.background_color.as_deref().unwrap_or("-")
        );
    }

    println!("\nDone.");
    Ok(())
}
