use anyhow::{Context, Result};
use serde::Serialize;

/// Where command results go: human-readable text or pretty JSON.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print `value` as JSON, or hand it to `render` for text output.
    pub fn emit<T, F>(self, value: &T, render: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T),
    {
        if self.json {
            let rendered =
                serde_json::to_string_pretty(value).context("Failed to encode output as JSON")?;
            println!("{}", rendered);
        } else {
            render(value);
        }
        Ok(())
    }

    /// Report the outcome of a mutation.
    pub fn outcome(self, ok: bool, done: &str, failed: &str) -> Result<()> {
        #[derive(Serialize)]
        struct Outcome<'a> {
            ok: bool,
            message: &'a str,
        }

        let message = if ok { done } else { failed };
        self.emit(&Outcome { ok, message }, |o| {
            let mark = if o.ok { "✓" } else { "✗" };
            println!("{} {}", mark, o.message);
        })
    }
}
