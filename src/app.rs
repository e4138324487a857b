// File: src/app.rs
use crate::config::{Config, OutputFormat};
use crate::core::engine::SpellChecker;
use crate::error::Result;
use crate::persistence::{read_text, save_text};
use crate::report::CheckReport;
use crate::session::ReviewSession;
use std::io::{BufRead, Write};

/// What a run did, for the caller's exit status and logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub misspelled: usize,
    pub replaced: usize,
    pub output_written: bool,
}

/// Loads the dictionary, checks the input file and, in human mode, reviews
/// every misspelling and writes the corrected text.
pub fn run<R: BufRead, W: Write>(config: &Config, input: R, mut output: W) -> Result<Outcome> {
    let mut checker =
        SpellChecker::from_word_list(&config.dictionary_path)?.with_max_distance(config.max_distance);
    let text = read_text(&config.input_path)?;
    let checked = checker.check_text(&text);
    let misspelled = checked.misspelled().len();
    tracing::info!(words = checked.word_count(), misspelled, "checked {}", config.input_path.display());

    if config.format == OutputFormat::Json {
        let report = CheckReport::build(&checker, &checked);
        writeln!(output, "{}", report.to_json(config.pretty)?)?;
        return Ok(Outcome { misspelled, ..Outcome::default() });
    }

    writeln!(output, "{}", checked.highlighted())?;
    if misspelled == 0 {
        writeln!(output, "\nNo misspellings found.")?;
        return Ok(Outcome::default());
    }

    let replacements = ReviewSession::new(input, &mut output).review(&mut checker, &checked)?;
    save_text(&config.output_path, &checked.apply(&replacements))?;
    writeln!(output, "\nFinal corrected text written to {}", config.output_path.display())?;

    Ok(Outcome { misspelled, replaced: replacements.len(), output_written: true })
}
