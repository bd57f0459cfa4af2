//! `urlclean clean <text>...` – clean each input and print the result.

use anyhow::Result;
use std::io::Write;
use serde::Serialize;
use urlclean_core::{CleanResult, UrlCleaner};

/// Exit code when at least one input was not an eligible URL.
const EXIT_INELIGIBLE: i32 = 2;

#[derive(Debug, Serialize)]
struct CleanLine<'a> {
    input: &'a str,
    #[serde(flatten)]
    result: &'a CleanResult,
}

fn render(input: &str, result: &CleanResult, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(&CleanLine { input, result })?)
    } else {
        Ok(result.value.clone())
    }
}

/// Cleaned values go to `out`, one per line; ineligible inputs are reported on `err`.
pub fn run_clean<W: Write, E: Write>(
    cleaner: &UrlCleaner,
    inputs: &[String],
    json: bool,
    mut out: W,
    mut err: E,
) -> Result<i32> {
    let mut code = 0;
    for input in inputs {
        match cleaner.sanitize(input) {
            Some(result) => writeln!(out, "{}", render(input, &result, json)?)?,
            None => {
                writeln!(err, "not an eligible http(s) URL: {input:?}")?;
                code = EXIT_INELIGIBLE;
            }
        }
    }
    out.flush()?;
    Ok(code)
}
