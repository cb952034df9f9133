/// Number of leading bytes inspected when sniffing the delimiter.
pub const SAMPLE_SIZE: usize = 1024;

const CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Picks the delimiter for a CSV file, falling back to comma.
pub fn detect_delimiter(contents: &[u8]) -> u8 {
    let end = contents.len().min(SAMPLE_SIZE);
    let sample = &contents[..end];
    let truncated = contents.len() > SAMPLE_SIZE && !sample.ends_with(b"\n");

    sniff_delimiter(&String::from_utf8_lossy(sample), truncated).unwrap_or(b',')
}

/// A candidate qualifies when every complete sample record holds the same
/// non-zero number of unquoted occurrences. The most frequent one wins.
pub fn sniff_delimiter(sample: &str, truncated: bool) -> Option<u8> {
    let sample = sample.strip_prefix('\u{feff}').unwrap_or(sample);
    let mut records: Vec<&str> = split_records(sample)
        .into_iter()
        .filter(|r| !r.trim().is_empty())
        .collect();

    // the cut-off tail record would skew the counts
    if truncated && records.len() > 1 {
        records.pop();
    }

    if records.is_empty() {
        return None;
    }

    let mut best: Option<(u8, usize)> = None;

    for &delimiter in &CANDIDATES {
        let counts: Vec<usize> = records
            .iter()
            .map(|record| count_unquoted(record, delimiter))
            .collect();

        let first = counts[0];
        if first == 0 || counts.iter().any(|&c| c != first) {
            continue;
        }

        if best.map_or(true, |(_, seen)| first > seen) {
            best = Some((delimiter, first));
        }
    }

    best.map(|(delimiter, _)| delimiter)
}

/// Splits on line breaks outside quoted fields, so a quoted value that
/// spans lines stays in one record.
fn split_records(sample: &str) -> Vec<&str> {
    let mut records = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (idx, byte) in sample.bytes().enumerate() {
        match byte {
            b'"' => in_quotes = !in_quotes,
            b'\n' if !in_quotes => {
                records.push(sample[start..idx].trim_end_matches('\r'));
                start = idx + 1;
            }
            _ => {}
        }
    }

    if start < sample.len() {
        records.push(&sample[start..]);
    }

    records
}

fn count_unquoted(record: &str, delimiter: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;

    for byte in record.bytes() {
        if byte == b'"' {
            in_quotes = !in_quotes;
        } else if byte == delimiter && !in_quotes {
            count += 1;
        }
    }

    count
}
