// src/delimited.rs
//
// CSV/TSV text for Copy (GUI) and --format csv|tsv (CLI).

use std::io::Write;

use crate::data::Provider;

/// Write providers as delimited rows, optionally preceded by a header row.
pub fn write_providers<'a, W, I>(out: W, providers: I, delim: char, include_headers: bool) -> csv::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Provider>,
{
    let mut w = csv::WriterBuilder::new()
        .delimiter(delim_byte(delim))
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    if include_headers {
        w.write_record(Provider::COLUMNS)?;
    }
    for p in providers {
        w.write_record(p.cells())?;
    }
    w.flush()?;
    Ok(())
}

/// Same as `write_providers`, into a String.
pub fn to_export_string<'a, I>(providers: I, delim: char, include_headers: bool) -> String
where
    I: IntoIterator<Item = &'a Provider>,
{
    let mut buf: Vec<u8> = Vec::new();
    if let Err(e) = write_providers(&mut buf, providers, delim, include_headers) {
        loge!("Export: could not build delimited text: {}", e);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

fn delim_byte(delim: char) -> u8 {
    if delim.is_ascii() { delim as u8 } else { b',' }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::normalize;
    use serde_json::json;

    #[test]
    fn csv_quotes_only_when_needed() {
        let ps = normalize(&json!([{ "Company": "Say \"hi\", Inc.", "Rating": 5 }]));
        let out = to_export_string(&ps, ',', false);
        assert_eq!(out, "\"Say \"\"hi\"\", Inc.\",,,,,Other,,,,5\n");
    }

    #[test]
    fn headers_follow_columns() {
        let out = to_export_string(std::iter::empty(), '\t', true);
        assert_eq!(out, format!("{}\n", Provider::COLUMNS.join("\t")));
    }
}
