use std::path::Path;

use serde_json::Value;

use moot_report::write_report;

pub fn execute(file: &Path, out: Option<&Path>, stem: &str) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(file)?;
    // JSON files compile as structured sources; everything else as text.
    let source = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(_) => Value::String(text),
    };

    let date = time::OffsetDateTime::now_utc().date();
    let document = moot_report::compile(&source, date);

    match out {
        Some(dir) => {
            let path = write_report(&document, dir, stem)?;
            println!(
                "Wrote {} page(s) to {}",
                document.page_count(),
                path.display()
            );
        }
        None => {
            for (i, page) in document.pages.iter().enumerate() {
                if i > 0 {
                    println!("\u{0c}");
                }
                for line in &page.lines {
                    println!("{line}");
                }
            }
        }
    }

    Ok(())
}
