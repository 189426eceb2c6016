//! Interactive prompt loop.
//!
//! Each round asks for a start address and a block of client addresses,
//! runs the planner synchronously, then prints the visit order, the total
//! distance and where the map was written. Failures are reported and the
//! loop carries on with the next round.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::{PlanError, ShellError};
use crate::planner::{Plan, RoutePlanner};
use crate::traits::{DistanceMatrixProvider, Geocoder, RouteSolver};

pub struct Shell<'a, G, M, S> {
    planner: &'a RoutePlanner<G, M, S>,
    map_output: PathBuf,
}

impl<'a, G, M, S> Shell<'a, G, M, S>
where
    G: Geocoder,
    M: DistanceMatrixProvider,
    S: RouteSolver,
{
    pub fn new(planner: &'a RoutePlanner<G, M, S>, map_output: impl Into<PathBuf>) -> Self {
        Self {
            planner,
            map_output: map_output.into(),
        }
    }

    /// Runs rounds until `quit`/`exit` or end of input.
    pub fn run<R, W>(&self, mut input: R, mut output: W) -> Result<(), ShellError>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "Route Optimizer")?;
        writeln!(
            output,
            "Enter the starting address and client addresses below. Type 'quit' to exit."
        )?;

        loop {
            write!(output, "\nStarting address: ")?;
            output.flush()?;

            let Some(start) = read_line(&mut input)? else {
                break;
            };
            let start = start.trim();
            if matches!(start, "quit" | "exit") {
                break;
            }
            if start.is_empty() {
                writeln!(output, "error: {}", PlanError::MissingStartAddress)?;
                continue;
            }

            writeln!(output, "Client addresses (one per line, blank line to optimize):")?;
            let clients = read_block(&mut input)?;

            writeln!(output, "Optimizing route...")?;
            match self.planner.plan(start, &clients) {
                Ok(plan) => self.show(&plan, &mut output)?,
                Err(err) => report_failure(&err, &mut output)?,
            }
        }

        Ok(())
    }

    fn show<W: Write>(&self, plan: &Plan, output: &mut W) -> Result<(), ShellError> {
        writeln!(output, "Optimized visit order:")?;
        for leg in &plan.report.legs {
            writeln!(output, "{leg}")?;
        }
        writeln!(output, "{}", plan.report.total_line())?;

        match self.write_map(plan) {
            Ok(()) => writeln!(output, "Map written to {}", self.map_output.display())?,
            Err(err) => {
                tracing::warn!(error = %err, "map not written");
                writeln!(output, "error: {err}")?;
            }
        }
        Ok(())
    }

    fn write_map(&self, plan: &Plan) -> Result<(), ShellError> {
        let html = plan.map.render_html()?;
        std::fs::write(&self.map_output, html).map_err(|source| ShellError::WriteMap {
            path: self.map_output.clone(),
            source,
        })
    }
}

fn report_failure<W: Write>(err: &PlanError, output: &mut W) -> Result<(), ShellError> {
    writeln!(output, "error: {err}")?;
    if let PlanError::Geocode {
        last_error: Some(last_error),
        ..
    } = err
    {
        writeln!(output, "  last lookup error: {last_error}")?;
    }
    Ok(())
}

/// Reads one line without its terminator; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, ShellError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Reads lines up to the first blank one (or end of input).
fn read_block<R: BufRead>(input: &mut R) -> Result<String, ShellError> {
    let mut lines = Vec::new();
    while let Some(line) = read_line(input)? {
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}
