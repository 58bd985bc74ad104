use std::io::{BufRead, Write};
use std::path::Path;

use moot_backend::{BackendClient, BackendConfig};
use moot_report::{ReportSink, TextFileSink};
use moot_session::SessionController;

pub fn execute(config: &BackendConfig, out_dir: &Path, stem: &str) -> anyhow::Result<()> {
    let backend = BackendClient::new(config);
    let mut controller = SessionController::new(config);
    let sink = TextFileSink::new(out_dir);

    tracing::info!(session = %controller.state().session_id, url = %config.url(), "session started");

    println!("Describe your desired procedure");
    println!("(/report compiles the report, /quit ends the session)");

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match line.trim() {
            "/quit" | "/exit" => break,
            "/report" => match controller.compile(time::OffsetDateTime::now_utc()) {
                Ok(document) => {
                    let path = sink.emit(&document, stem)?;
                    println!("Report written to {}", path.display());
                }
                Err(err) => println!("[system] {err}"),
            },
            input => {
                // Skip the echoed user turn; print only what the fold appended.
                let mark = controller.state().transcript.len() + 1;
                match controller.submit(input, &backend) {
                    Ok(_) => {
                        for turn in controller.turns_since(mark) {
                            println!("[{}] {}", turn.role, turn.content);
                        }
                    }
                    Err(err) => println!("{err}"),
                }
            }
        }
    }

    Ok(())
}
