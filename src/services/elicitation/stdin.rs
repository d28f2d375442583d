use std::io::{BufRead, Write};

use anyhow::Context;
use async_trait::async_trait;
use serde_json::{json, Value};

use super::Elicitor;
use crate::models::SchemaDescription;

/// Answers elicitations by prompting the operator on the terminal.
pub struct StdinElicitor;

#[async_trait]
impl Elicitor for StdinElicitor {
    async fn elicit(&self, message: &str, schema: &SchemaDescription) -> anyhow::Result<Value> {
        let message = message.to_string();
        let keys = schema.property_names();

        tokio::task::spawn_blocking(move || {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            prompt_for_answer(&mut stdin.lock(), &mut stdout, &message, &keys)
        })
        .await
        .context("stdin prompt task failed")?
    }
}

fn read_line(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> anyhow::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}

fn non_blank(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

pub fn prompt_for_answer(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
    schema_keys: &[&str],
) -> anyhow::Result<Value> {
    writeln!(output, "\n--- ELICITATION REQUEST ---")?;
    writeln!(output, "{message}")?;
    writeln!(output, "Schema keys: {schema_keys:?}")?;

    let choice = read_line(input, output, "Proceed with alternatives? (y/n): ")?.to_lowercase();
    if choice.starts_with('n') {
        return Ok(json!({
            "checkAlternative": false,
            "alternativeDate": null,
            "alternativeRoom": null,
        }));
    }

    let alt_date = non_blank(read_line(
        input,
        output,
        "Alternative date (YYYY-MM-DD, blank to keep current): ",
    )?);
    let alt_room = non_blank(read_line(
        input,
        output,
        "Alternative room type (standard/deluxe/suite, blank to keep current): ",
    )?);

    Ok(json!({
        "checkAlternative": true,
        "alternativeDate": alt_date,
        "alternativeRoom": alt_room,
    }))
}
