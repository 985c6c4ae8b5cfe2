//! REPL (Read-Eval-Print Loop) for interactive querying

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use bridgechat_application::{NoQueryProgress, RunQueryInput, RunQueryUseCase};
use bridgechat_domain::{Model, Question};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Interactive chat REPL
///
/// One question per line; each runs the query use case to completion before
/// the prompt returns. Errors are printed inline and the REPL stays usable.
pub struct ChatRepl {
    use_case: RunQueryUseCase,
    model: Model,
    show_progress: bool,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: RunQueryUseCase, model: Model) -> Self {
        Self {
            use_case,
            model,
            show_progress: true,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("bridgechat").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    // Run the query
                    self.process_question(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           bridgechat - Chat Mode            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.model);
        println!();
        println!("Ask about gene, protein, or compound identifiers, e.g.:");
        println!("  What are the identifiers for the TP53 gene?");
        println!("  Find mappings for the chemical compound Aspirin");
        println!("  Map the Ensembl ID ENSG00000139618 to other databases");
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /model    - Show the current model");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /model           - Show the current model");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/model" => {
                println!();
                println!("Current model: {}", self.model);
                println!();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_question(&self, question: &str) {
        println!();

        let Some(question) = Question::try_new(question) else {
            return;
        };
        let input = RunQueryInput::new(question, self.model.clone());

        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute(input, &progress).await
        } else {
            self.use_case.execute(input, &NoQueryProgress).await
        };

        match result {
            Ok(result) => {
                println!("{}", ConsoleFormatter::format_answer_only(&result));
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
        println!();
    }
}
