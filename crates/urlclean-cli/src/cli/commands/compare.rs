//! `urlclean compare <url>` – original and cleaned URL side by side.

use anyhow::Result;
use urlclean_core::{Comparison, UrlCleaner};

pub(crate) fn format_comparison(cmp: &Comparison) -> String {
    format!(
        "original: {}\ncleaned:  {}\nstatus:   {}",
        cmp.original,
        cmp.cleaned,
        cmp.status.message()
    )
}

pub fn run_compare(cleaner: &UrlCleaner, url: &str) -> Result<i32> {
    let cmp = cleaner.compare(url);
    println!("{}", format_comparison(&cmp));
    Ok(if cmp.status.is_error() { 1 } else { 0 })
}
