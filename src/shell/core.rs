//! Interactive front end: pick a name list from a directory, bucket-sort it
//! and write the result next to it.
//!
//! Console streams are injected so a whole session can be driven from
//! memory; the binary passes locked stdin/stdout.
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::bucket::Buckets;
use crate::error::{Error, Result};
use crate::lines::{read_records, write_records};

/// Directory searched when none is configured.
pub const DEFAULT_DIR: &str = "archivos";

/// Extension appended to operator-chosen output names.
pub const OUTPUT_EXTENSION: &str = "txt";

/// Prefix of the generated output name when the operator leaves it blank.
pub const DEFAULT_OUTPUT_PREFIX: &str = "hash_sorted_";

/// Records per row in console listings.
const LISTING_ROW: usize = 5;

/// Resolved options for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub dir: PathBuf,
    /// Pre-answered file selection; prompts when `None`.
    pub selection: Option<String>,
    /// Pre-answered output base name; prompts when `None`.
    pub output_name: Option<String>,
    /// Skip record listings and bucket narration.
    pub quiet: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            dir: PathBuf::from(DEFAULT_DIR),
            selection: None,
            output_name: None,
            quiet: false,
        }
    }
}

/// What one pipeline run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub records: usize,
    pub blank_lines: usize,
    pub buckets: usize,
}

/// Regular files in `dir`, ordered by file name.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::DirectoryMissing {
            path: dir.to_path_buf(),
        });
    }
    let entries = fs::read_dir(dir).map_err(|e| Error::read(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::read(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    if files.is_empty() {
        return Err(Error::NoFiles {
            path: dir.to_path_buf(),
        });
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Turn a 1-based selection typed by the operator into a 0-based index
/// into a list of `count` entries.
pub fn parse_selection(input: &str, count: usize) -> Result<usize> {
    let trimmed = input.trim();
    let selection: i64 = trimmed.parse().map_err(|_| Error::InvalidNumber {
        input: trimmed.to_string(),
    })?;
    if selection < 1 || selection as u64 > count as u64 {
        return Err(Error::OutOfRange { selection, count });
    }
    Ok(selection as usize - 1)
}

/// Output file name for `input_name`. A blank `base` yields
/// `hash_sorted_<input_name>`; otherwise `<base>.txt`.
pub fn output_file_name(input_name: &str, base: &str) -> String {
    let base = base.trim();
    if base.is_empty() {
        format!("{}{}", DEFAULT_OUTPUT_PREFIX, input_name)
    } else {
        format!("{}.{}", base, OUTPUT_EXTENSION)
    }
}

/// Records joined by " | ", five per row, one row per line.
pub fn format_records<S: AsRef<str>>(records: &[S]) -> String {
    let mut out = String::new();
    for row in records.chunks(LISTING_ROW) {
        for (i, record) in row.iter().enumerate() {
            if i > 0 {
                out.push_str(" | ");
            }
            out.push_str(record.as_ref());
        }
        out.push('\n');
    }
    out
}

/// Read `input`, bucket-sort it and write the result to `output`,
/// narrating each step to `console`.
///
/// An input with no records is an error and leaves `output` untouched.
pub fn sort_file(
    input: &Path,
    output: &Path,
    console: &mut impl Write,
    quiet: bool,
) -> Result<SortReport> {
    let outcome = read_records(input)?;
    if outcome.blank_lines > 0 {
        writeln!(console, "Ignored {} blank lines.", outcome.blank_lines)?;
    }
    if outcome.records.is_empty() {
        warn!(path = %input.display(), "no records to sort");
        return Err(Error::EmptyInput {
            path: input.to_path_buf(),
        });
    }

    let records = outcome.records.len();
    writeln!(console, "Records read: {}", records)?;
    if !quiet {
        writeln!(console, "Original data:")?;
        write!(console, "{}", format_records(&outcome.records))?;
        writeln!(console, "Step 1: creating buckets by first letter")?;
    }

    let mut buckets = Buckets::partition(outcome.records);
    let bucket_count = buckets.len();
    if !quiet {
        writeln!(console, "Bucket distribution:")?;
        for summary in buckets.summary() {
            writeln!(
                console,
                "   Bucket '{}': {} records",
                summary.key, summary.len
            )?;
        }
        writeln!(console, "Step 2: sorting each bucket")?;
    }

    buckets.sort_each();
    if !quiet {
        for summary in buckets.summary() {
            let ellipsis = if summary.truncated() { " ..." } else { "" };
            writeln!(
                console,
                "   Bucket '{}' sorted: {}{}",
                summary.key,
                summary.preview.join(" "),
                ellipsis
            )?;
        }
        writeln!(console, "Step 3: merging sorted buckets")?;
    }

    let sorted = buckets.merge();
    writeln!(console, "Total records in result: {}", sorted.len())?;

    write_records(&sorted, output)?;

    if !quiet {
        writeln!(console, "Sorted data:")?;
        write!(console, "{}", format_records(&sorted))?;
    }

    Ok(SortReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        records,
        blank_lines: outcome.blank_lines,
        buckets: bucket_count,
    })
}

/// One interactive session over the given console streams.
pub struct Shell<R, W> {
    config: ShellConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(config: ShellConfig, input: R, output: W) -> Self {
        Shell {
            config,
            input,
            output,
        }
    }

    /// List, select, name, sort, write. Stops at the first error without
    /// touching any file when it happens before the pipeline starts.
    pub fn run(&mut self) -> Result<SortReport> {
        let dir = self.config.dir.clone();
        let files = list_files(&dir)?;

        writeln!(self.output, "Available files in {}:", dir.display())?;
        for (i, file) in files.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, display_name(file))?;
        }

        let answer = match self.config.selection.clone() {
            Some(answer) => answer,
            None => self.prompt("Select the number of the file to sort: ")?,
        };
        let index = parse_selection(&answer, files.len())?;
        let input = &files[index];
        let input_name = display_name(input);
        writeln!(self.output, "Selected file: {}", input_name)?;

        let base = match self.config.output_name.clone() {
            Some(base) => base,
            None => self.prompt("Enter a name for the sorted file (without extension): ")?,
        };
        let output = dir.join(output_file_name(&input_name, &base));
        info!(input = %input.display(), output = %output.display(), "starting bucket sort");

        writeln!(self.output, "Starting false-hash sort...")?;
        let report = sort_file(input, &output, &mut self.output, self.config.quiet)?;

        let shown = std::path::absolute(&report.output).unwrap_or_else(|_| report.output.clone());
        writeln!(self.output, "Process completed!")?;
        writeln!(self.output, "Sorted file saved as: {}", shown.display())?;
        self.output.flush()?;
        Ok(report)
    }

    /// Print `message` without a newline and read one line of reply.
    /// End of input reads as an empty reply.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Give back the console streams, mainly so tests can inspect output.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
