//! Line-oriented command loop.

use crate::commands::{CommandRegistry, Outcome, ShellContext};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Greeting printed when the loop starts.
pub const INTRO: &str = "Welcome to the D H shell. Type help or ? to list commands.\n\
Detailed text for help can be seen by using `help option name` e.g. `help search_ingredients`";

/// Reads commands, dispatches them through the registry and prints results.
pub struct Shell<'a> {
    ctx: ShellContext<'a>,
    registry: CommandRegistry,
    prompt: String,
}

impl<'a> Shell<'a> {
    /// Creates a shell with the built-in commands.
    pub fn new(ctx: ShellContext<'a>, prompt: impl Into<String>) -> Self {
        Self::with_registry(ctx, CommandRegistry::standard(), prompt)
    }

    /// Creates a shell with a custom command registry.
    pub fn with_registry(
        ctx: ShellContext<'a>,
        registry: CommandRegistry,
        prompt: impl Into<String>,
    ) -> Self {
        Self { ctx, registry, prompt: prompt.into() }
    }

    /// Runs until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}", INTRO)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            buf.clear();
            let read = input.read_until(b'\n', &mut buf).context("Failed to read command")?;
            if read == 0 {
                debug!("End of input");
                writeln!(output)?;
                break;
            }

            // Undecodable bytes become U+FFFD so a mistyped line cannot end the session
            let line = String::from_utf8_lossy(&buf);
            match self.execute_line(&line) {
                Outcome::Continue(text) if text.is_empty() => {}
                Outcome::Continue(text) => writeln!(output, "{}", text)?,
                Outcome::Exit => break,
            }
        }

        Ok(())
    }

    /// Parses and runs a single input line.
    ///
    /// Command errors are rendered as text; they never end the loop.
    pub fn execute_line(&self, line: &str) -> Outcome {
        let (command, arg) = parse_line(line);
        if command.is_empty() && arg.is_empty() {
            return Outcome::Continue(String::new());
        }

        if command == "help" {
            return Outcome::Continue(self.help(arg));
        }

        let Some(spec) = self.registry.get(command) else {
            return Outcome::Continue(format!("*** Unknown syntax: {}", line.trim()));
        };

        debug!("Dispatching {} with argument {:?}", spec.name, arg);
        match (spec.handler)(arg, &self.ctx) {
            Ok(outcome) => outcome,
            Err(e) => Outcome::Continue(format!("Error: {:#}", e)),
        }
    }

    fn help(&self, topic: &str) -> String {
        if topic.is_empty() {
            let width = self.registry.iter().map(|c| c.name.len()).max().unwrap_or(0);
            let mut lines = vec!["Documented commands (type help <topic>):".to_string()];
            for command in self.registry.iter() {
                lines.push(format!("  {:<width$}  {}", command.name, command.summary));
            }
            lines.push(format!("  {:<width$}  {}", "help", "List commands or show help on one"));
            return lines.join("\n");
        }

        match self.registry.get(topic) {
            Some(command) => command.usage.to_string(),
            None if topic == "help" => {
                "List commands or show help on one\nUsage: `help [command]`".to_string()
            }
            None => format!("*** No help on {}", topic),
        }
    }
}

/// Splits a line into its command word and trimmed argument.
///
/// The command word is the leading run of ASCII letters, digits and `_`.
/// A leading `?` stands for `help`.
pub fn parse_line(line: &str) -> (&str, &str) {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix('?') {
        return ("help", rest.trim());
    }

    let end = line
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_'))
        .map_or(line.len(), |(i, _)| i);

    (&line[..end], line[end..].trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{test_support, CommandSpec};
    use crate::config::{Config, OutputFormat};

    fn shell_output(script: &str, format: OutputFormat) -> String {
        let catalog = test_support::catalog();
        let config = Config { format, ..Config::default() };
        let shell = Shell::new(ShellContext::new(&catalog, &config), config.prompt.clone());

        let mut output = Vec::new();
        shell.run(script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(
            parse_line("search_products Acai + Cherry"),
            ("search_products", "Acai + Cherry")
        );
        assert_eq!(parse_line("  ingredients  \n"), ("ingredients", ""));
        assert_eq!(parse_line("?"), ("help", ""));
        assert_eq!(parse_line("? search_products"), ("help", "search_products"));
        assert_eq!(parse_line("?exit"), ("help", "exit"));
        assert_eq!(parse_line(""), ("", ""));
        assert_eq!(parse_line("!!"), ("", "!!"));
        assert_eq!(parse_line("exit,now"), ("exit", ",now"));
    }

    #[test]
    fn test_exit_stops_loop() {
        let output = shell_output("exit\nproducts\n", OutputFormat::Table);

        assert!(output.starts_with(INTRO));
        assert!(!output.contains("Available Products"));
        assert_eq!(output.matches("D-H > ").count(), 1);
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let output = shell_output("products\n", OutputFormat::Table);

        assert!(output.contains("Available Products"));
        assert_eq!(output.matches("D-H > ").count(), 2);
    }

    #[test]
    fn test_unknown_command_continues() {
        let output = shell_output("frobnicate now\ningredients\nexit\n", OutputFormat::Csv);

        assert!(output.contains("*** Unknown syntax: frobnicate now"));
        assert!(output.contains("Organic Cherry"));
    }

    #[test]
    fn test_empty_line_is_ignored() {
        let output = shell_output("\n   \nexit\n", OutputFormat::Table);
        assert!(!output.contains("Unknown syntax"));
        assert_eq!(output.matches("D-H > ").count(), 3);
    }

    #[test]
    fn test_help_lists_commands() {
        let output = shell_output("help\n", OutputFormat::Table);

        assert!(output.contains("Documented commands"));
        for name in ["ingredients", "search_with_ingredients", "show_product_ingredients", "exit"] {
            assert!(output.contains(name));
        }
        assert!(output.contains("Filter products with ingredients"));
    }

    #[test]
    fn test_help_topic() {
        let output = shell_output("help search_ingredients\n?frobnicate\n", OutputFormat::Table);

        assert!(output.contains("Usage: `search_ingredients Mushrooms`"));
        assert!(output.contains("*** No help on frobnicate"));
    }

    #[test]
    fn test_command_error_is_reported() {
        let output =
            shell_output("show_product_ingredients Mystery Mix\nexit\n", OutputFormat::Table);

        assert!(output.contains("Error: product 'Mystery Mix' references ingredient id 99"));
    }

    #[test]
    fn test_invalid_utf8_line_keeps_loop_alive() {
        let catalog = test_support::catalog();
        let config = Config { format: OutputFormat::Csv, ..Config::default() };
        let shell = Shell::new(ShellContext::new(&catalog, &config), config.prompt.clone());

        let mut output = Vec::new();
        shell.run(&b"search_products A\xe7ai\nproducts\nexit\n"[..], &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("name\nAcai + Cherry\nCherry + Ginger\nCashew Bowl\nMystery Mix"));
        assert_eq!(output.matches("D-H > ").count(), 3);
    }

    #[test]
    fn test_custom_registry() {
        let catalog = test_support::catalog();
        let mut registry = CommandRegistry::new();
        registry.register(CommandSpec {
            name: "quit",
            summary: "Leave the shell",
            usage: "Leave the shell",
            handler: |_, _| Ok(Outcome::Exit),
        });
        let shell =
            Shell::with_registry(ShellContext::new(&catalog, &Config::default()), registry, "> ");

        assert_eq!(shell.execute_line("quit"), Outcome::Exit);
        assert_eq!(
            shell.execute_line("products"),
            Outcome::Continue("*** Unknown syntax: products".to_string())
        );
        assert!(matches!(shell.execute_line("help"), Outcome::Continue(t) if t.contains("quit")));
    }

    #[test]
    fn test_execute_line_exit() {
        let catalog = test_support::catalog();
        let shell = Shell::new(ShellContext::new(&catalog, &Config::default()), "> ");
        assert_eq!(shell.execute_line("exit"), Outcome::Exit);
        assert_eq!(shell.execute_line("exit please"), Outcome::Exit);
    }
}
