//! Main parser for ELDO `.chi` simulation logs.
//!
//! Walks the log once, top to bottom, driving an explicit state machine:
//!
//! ```text
//! Idle --section marker--> AwaitingHeader --X row--> AccumulatingRows
//!   ^                          ^                           |
//!   |                          +------ Y row (MultiPlot) --+
//!   +-------------------------------- Y row (SinglePlot) --+
//! ```
//!
//! A section marker always (re)opens a section, resetting the legend table.

use super::classifier::classify_header;
use super::legend::{is_legend_line, parse_legend_line, LegendTable};
use super::rows::{accumulate_row, RowKind};
use super::schema::{Plot, SimulationRun};
use super::section::detect_section;
use crate::utils::config::{ParseOptions, SectionMode, HEADER_MARKER_TOKEN};
use crate::utils::error::ParseError;
use log::{debug, trace};

/// Where the parser is within the log
#[derive(Debug, Clone, PartialEq)]
pub enum ParserState {
    /// Outside any section
    Idle,
    /// Inside a section, waiting for a header row followed by `X`
    AwaitingHeader { group: usize },
    /// Inside a table, collecting rows until `Y`
    AccumulatingRows {
        group: usize,
        plot: Plot,
        /// 1-based line number of the header row
        header_line: usize,
    },
}

/// Single-pass parser over an indexed line buffer
pub struct ChiParser<'a> {
    lines: &'a [&'a str],
    options: ParseOptions,
    run: SimulationRun,
    legend: LegendTable,
    state: ParserState,
}

impl<'a> ChiParser<'a> {
    pub fn new(lines: &'a [&'a str], options: ParseOptions) -> Self {
        Self {
            lines,
            options,
            run: SimulationRun::new(),
            legend: LegendTable::new(),
            state: ParserState::Idle,
        }
    }

    pub fn state(&self) -> &ParserState {
        &self.state
    }

    pub fn legend(&self) -> &LegendTable {
        &self.legend
    }

    /// Process the line at `index`
    ///
    /// # Errors
    /// Any `ParseError`; the parser should not be used after an error.
    pub fn step(&mut self, index: usize) -> Result<(), ParseError> {
        let Some(&line) = self.lines.get(index) else {
            return Ok(());
        };
        let line_no = index + 1;

        if let Some(sim_type) = detect_section(line) {
            if let ParserState::AccumulatingRows { header_line, .. } = &self.state {
                return Err(ParseError::TruncatedInput {
                    line: line_no,
                    expected: format!(
                        "new {} section started before the table opened at line {} was closed by `Y`",
                        sim_type, header_line
                    ),
                });
            }

            debug!("line {}: opening {} section", line_no, sim_type);
            let group = self.run.upsert_group(sim_type);
            if !self.legend.is_empty() {
                trace!("line {}: dropping {} legend entries", line_no, self.legend.len());
                self.legend.clear();
            }
            self.state = ParserState::AwaitingHeader { group };
            return Ok(());
        }

        if matches!(self.state, ParserState::Idle) {
            return Ok(());
        }

        if is_legend_line(line) {
            let (key, mnemonic) = parse_legend_line(line, line_no)?;
            trace!("line {}: legend {} -> {}", line_no, key, mnemonic);
            self.legend.insert(key, mnemonic);
            return Ok(());
        }

        match std::mem::replace(&mut self.state, ParserState::Idle) {
            ParserState::Idle => {}

            ParserState::AwaitingHeader { group } => {
                self.state = if is_header_marker(line) {
                    self.open_plot(group, index)?
                } else {
                    ParserState::AwaitingHeader { group }
                };
            }

            ParserState::AccumulatingRows {
                group,
                mut plot,
                header_line,
            } => match accumulate_row(&mut plot, line, line_no)? {
                RowKind::Data | RowKind::Blank => {
                    self.state = ParserState::AccumulatingRows {
                        group,
                        plot,
                        header_line,
                    };
                }
                RowKind::Close => {
                    self.state = self.seal_plot(group, plot, line_no);
                }
            },
        }

        Ok(())
    }

    /// Consume every line and return the finished run
    ///
    /// # Errors
    /// * `ParseError::TruncatedInput` - input ended inside a table
    /// * any error raised by [`ChiParser::step`]
    pub fn run(mut self) -> Result<SimulationRun, ParseError> {
        for index in 0..self.lines.len() {
            self.step(index)?;
        }
        self.finish()
    }

    /// Close the pass, checking that no table is left open
    pub fn finish(self) -> Result<SimulationRun, ParseError> {
        match self.state {
            ParserState::AccumulatingRows { header_line, .. } => Err(ParseError::TruncatedInput {
                line: self.lines.len(),
                expected: format!(
                    "end of input reached before the table opened at line {} was closed by `Y`",
                    header_line
                ),
            }),
            ParserState::AwaitingHeader { .. } => {
                debug!("input ended inside a section with no further table");
                Ok(self.run)
            }
            ParserState::Idle => Ok(self.run),
        }
    }

    /// Classify the row before `index` and start a new plot
    ///
    /// **Private** - internal helper for step
    fn open_plot(&self, group: usize, index: usize) -> Result<ParserState, ParseError> {
        let header_index = index.checked_sub(1);
        let header = header_index.and_then(|i| self.lines.get(i)).copied().unwrap_or("");
        let header_line = header_index.map_or(index + 1, |i| i + 1);

        let traces = classify_header(header, &self.legend);
        if traces.is_empty() {
            return Err(ParseError::EmptyHeader { line: header_line });
        }

        debug!(
            "line {}: header with {} columns: {}",
            header_line,
            traces.len(),
            traces
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(ParserState::AccumulatingRows {
            group,
            plot: Plot::new(traces),
            header_line,
        })
    }

    /// Append a finished plot to its group and pick the next state
    ///
    /// **Private** - internal helper for step
    fn seal_plot(&mut self, group: usize, plot: Plot, line_no: usize) -> ParserState {
        debug_assert!(plot.is_aligned());

        let target = &mut self.run.groups[group];
        debug!(
            "line {}: sealed {} plot #{} ({} traces x {} rows)",
            line_no,
            target.sim_type,
            target.plots.len() + 1,
            plot.traces.len(),
            plot.row_count()
        );
        target.plots.push(plot);

        match self.options.section_mode {
            SectionMode::SinglePlot => ParserState::Idle,
            SectionMode::MultiPlot => ParserState::AwaitingHeader { group },
        }
    }
}

/// True when `line` has the standalone header marker token
pub fn is_header_marker(line: &str) -> bool {
    line.split_whitespace().any(|t| t == HEADER_MARKER_TOKEN)
}

/// Parse a whole `.chi` log with default options
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `ParseError::LegendParse` - malformed `Print_Legend` line
/// * `ParseError::NumericParse` - non-numeric data value
/// * `ParseError::ColumnCount` - row width differs from header width
/// * `ParseError::TruncatedInput` - a table was never closed
/// * `ParseError::EmptyHeader` - `X` marker with an empty header row
pub fn parse_chi(text: &str) -> Result<SimulationRun, ParseError> {
    parse_chi_with(text, ParseOptions::default())
}

/// Parse a whole `.chi` log with explicit options
pub fn parse_chi_with(text: &str, options: ParseOptions) -> Result<SimulationRun, ParseError> {
    let lines: Vec<&str> = text.lines().collect();
    parse_lines(&lines, options)
}

/// Parse an already split line buffer
pub fn parse_lines(lines: &[&str], options: ParseOptions) -> Result<SimulationRun, ParseError> {
    let run = ChiParser::new(lines, options).run()?;

    debug!(
        "Parsed {} simulation groups, {} plots",
        run.groups.len(),
        run.plot_count()
    );

    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::SimType;

    #[test]
    fn test_state_transitions() {
        let lines = [
            "header text",
            " ****  TRANSIENT ANALYSIS",
            "Print_Legend 1: V(out)",
            " TIME   1",
            " X",
            " 0.0  1.0",
            " Y",
        ];
        let mut parser = ChiParser::new(&lines, ParseOptions::default());

        parser.step(0).unwrap();
        assert_eq!(parser.state(), &ParserState::Idle);

        parser.step(1).unwrap();
        assert_eq!(parser.state(), &ParserState::AwaitingHeader { group: 0 });

        parser.step(2).unwrap();
        parser.step(3).unwrap();
        assert_eq!(parser.legend().len(), 1);
        assert_eq!(parser.state(), &ParserState::AwaitingHeader { group: 0 });

        parser.step(4).unwrap();
        assert!(matches!(
            parser.state(),
            ParserState::AccumulatingRows { header_line: 4, .. }
        ));

        parser.step(5).unwrap();
        parser.step(6).unwrap();
        assert_eq!(parser.state(), &ParserState::Idle);

        let run = parser.finish().unwrap();
        assert_eq!(run.groups[0].sim_type, SimType::Transient);
        assert_eq!(run.groups[0].plots[0].row_count(), 1);
    }

    #[test]
    fn test_multi_plot_mode_stays_in_section() {
        let lines = ["AC ANALYSIS", "HERTZ VDB(OUT)", "X", "1.0 -3.0", "Y"];
        let options = ParseOptions::new().with_section_mode(SectionMode::MultiPlot);
        let mut parser = ChiParser::new(&lines, options);
        for i in 0..lines.len() {
            parser.step(i).unwrap();
        }
        assert_eq!(parser.state(), &ParserState::AwaitingHeader { group: 0 });
    }

    #[test]
    fn test_lines_outside_sections_are_ignored() {
        let text = "Print_Legend garbage\nX\n1 2 3\nY\n";
        let run = parse_chi(text).unwrap();
        assert!(run.is_empty());
    }

    #[test]
    fn test_x_inside_word_is_not_header_marker() {
        assert!(!is_header_marker("MAX VALUE"));
        assert!(is_header_marker("   X   "));
    }

    #[test]
    fn test_x_right_after_section_marker_uses_marker_line() {
        // The marker line is the header row here; its words become traces.
        let run = parse_chi("AC ANALYSIS\nX\n1.0 2.0\nY\n").unwrap();
        let names: Vec<&str> = run.groups[0].plots[0]
            .traces
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["ac", "analysis"]);
    }

    #[test]
    fn test_empty_header_row() {
        let err = parse_chi("DC TRANSFER CURVES\n\nX\n").unwrap_err();
        assert_eq!(err, ParseError::EmptyHeader { line: 2 });
    }

    #[test]
    fn test_section_without_table_is_kept_empty() {
        let run = parse_chi("DC TRANSFER CURVES\nnothing printed\n").unwrap();
        assert_eq!(run.groups.len(), 1);
        assert!(run.groups[0].plots.is_empty());
    }
}
