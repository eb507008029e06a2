use claude_hooks::dispatch::HandlerRegistry;
use claude_hooks::{logging, pipeline};

#[tokio::main]
async fn main() {
    // Logging is best-effort: an unwritable log dir must never cost the
    // host its response.
    let guard = match logging::init_logging() {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("claude-hooks: file logging disabled: {err}");
            None
        }
    };

    tracing::info!("=== Claude Hooks Starting ===");

    // Handler wiring belongs to the configuration layer; the engine only
    // requires a populated registry before dispatch begins. With no
    // handlers registered the binary still enforces the event schema and
    // fails closed on anything malformed.
    let registry = HandlerRegistry::new();

    let response = pipeline::process_from(&mut std::io::stdin(), &registry).await;

    // The structured form always goes out; the exit code mirrors it.
    let exit_code = match response.to_json() {
        Ok(json) => {
            println!("{json}");
            response.exit_code()
        }
        Err(err) => {
            tracing::error!("Failed to serialize response: {err}");
            println!(r#"{{"decision":"block","reason":"failed to serialize hook response"}}"#);
            2
        }
    };

    tracing::info!("=== Claude Hooks Finished: {:?} ===", response.decision);

    // Flush logs before exiting
    drop(guard);
    std::process::exit(exit_code);
}
