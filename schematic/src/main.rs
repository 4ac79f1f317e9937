use std::collections::BTreeSet;
use std::fmt;
use std::fmt::Write as _;
use std::fs;
use sdk::*;
use thiserror::Error;

const BACKGROUND: char = '.';

fn main() -> Result<()> {
    init();
    let path = input_path("schematic/input.txt");
    let input = fs::read_to_string(&path)?;
    let schematic = Schematic::parse(&input)?;
    trace!("Loaded schematic:\n{schematic}");
    for number in &schematic.numbers {
        trace!("Number {} at row {}, columns {}..{}", number.value, number.row, number.start, number.end);
    }
    debug!("Parsed {} numbers and {} part markers", schematic.numbers.len(), schematic.parts.len());

    let sum = schematic.part_number_sum();
    info!("Sum of schematic part numbers: {sum}");

    // Presentation only; the sum stands whether or not this lands on disk.
    match fs::write("/tmp/schematic.html", schematic.to_html()) {
        Ok(()) => info!("Open HTML report in browser: file:///tmp/schematic.html"),
        Err(e) => warn!("Failed to write HTML visualization: {e}"),
    }
    Ok(())
}

#[derive(Debug, Error, PartialEq, Eq)]
enum SchematicError {
    #[error("digit run '{digits}' at row {row}, column {start} is too large for a part number")]
    NumberTooLarge { row: usize, start: usize, digits: String },
    #[error("digit run at row {row} spans columns {start}..{end} but the row holds {width} cells")]
    RunOutsideRow { row: usize, start: usize, end: usize, width: usize },
}

/// Handle into [`Schematic::numbers`]. Cells store this instead of the number
/// itself, so every cell of a run resolves to the same token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct NumberId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Number {
    value: usize,
    row: usize,
    start: usize,
    end: usize,
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    symbol: char,
    number: Option<NumberId>,
}

impl Cell {
    const EMPTY: Cell = Cell { symbol: BACKGROUND, number: None };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Point {
    row: usize,
    col: usize,
}

#[derive(Debug, Clone)]
struct Schematic {
    rows: Vec<Vec<Cell>>,
    numbers: Vec<Number>,
    parts: Vec<Point>,
    num_rows: usize,
    num_cols: usize,
}

impl Schematic {
    fn parse(input: &str) -> Result<Self, SchematicError> {
        let mut rows = Vec::new();
        let mut numbers = Vec::new();
        let mut parts = Vec::new();
        for (row, line) in input.lines().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            let mut run = RunBuffer::default();
            for (col, symbol) in line.chars().enumerate() {
                cells.push(Cell { symbol, number: None });
                if symbol.is_ascii_digit() {
                    run.push(symbol, col);
                    continue;
                }
                Self::close_run(&mut numbers, &mut cells, &mut run, row)?;
                if symbol != BACKGROUND {
                    parts.push(Point { row, col });
                }
            }
            // A run touching the end of the line has no trailing symbol to
            // close it; flush before the cursor drops to the next row.
            Self::close_run(&mut numbers, &mut cells, &mut run, row)?;
            rows.push(cells);
        }

        // Ragged inputs leave short rows; pad to the widest so neighbor
        // lookups are total over the grid rectangle.
        let num_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        for cells in &mut rows {
            cells.resize(num_cols, Cell::EMPTY);
        }

        Ok(Schematic {
            num_rows: rows.len(),
            num_cols,
            rows,
            numbers,
            parts,
        })
    }

    /// Commits a pending digit run: one `Number` in the arena, every covered
    /// cell resolved to its id. No-op when no run is pending.
    fn close_run(
        numbers: &mut Vec<Number>,
        cells: &mut Vec<Cell>,
        run: &mut RunBuffer,
        row: usize,
    ) -> Result<(), SchematicError> {
        let Some((digits, start)) = run.take() else {
            return Ok(());
        };
        let end = start + digits.len();
        let width = cells.len();
        let value = digits
            .parse()
            .map_err(|_| SchematicError::NumberTooLarge { row, start, digits: digits.clone() })?;
        let id = NumberId(numbers.len());
        numbers.push(Number { value, row, start, end });
        let span = cells
            .get_mut(start..end)
            .ok_or(SchematicError::RunOutsideRow { row, start, end, width })?;
        for cell in span {
            cell.number = Some(id);
        }
        Ok(())
    }

    fn cell(&self, p: Point) -> Cell {
        self.rows[p.row][p.col]
    }

    /// In-bounds Moore neighborhood of `p`: row-major over the 3x3 block,
    /// self excluded. A corner yields 3 points, an interior cell 8.
    fn neighbors(&self, p: Point) -> Vec<Point> {
        let mut neighbors = Vec::with_capacity(8);
        if self.num_rows == 0 || self.num_cols == 0 {
            return neighbors;
        }
        for row in p.row.saturating_sub(1)..=(p.row + 1).min(self.num_rows - 1) {
            for col in p.col.saturating_sub(1)..=(p.col + 1).min(self.num_cols - 1) {
                if (row, col) != (p.row, p.col) {
                    neighbors.push(Point { row, col });
                }
            }
        }
        neighbors
    }

    /// Numbers adjacent to at least one part marker, deduplicated by token
    /// identity: two runs holding the same digits are still two numbers.
    fn part_numbers(&self) -> BTreeSet<NumberId> {
        let mut matched = BTreeSet::new();
        for part in &self.parts {
            for neighbor in self.neighbors(*part) {
                if let Some(id) = self.cell(neighbor).number {
                    trace!(
                        "Part at ({}, {}) touches number {} at ({}, {})",
                        part.row, part.col, self.numbers[id.0].value, neighbor.row, neighbor.col,
                    );
                    matched.insert(id);
                }
            }
        }
        matched
    }

    /// Each qualifying number counts exactly once, even when it borders
    /// several parts.
    fn part_number_sum(&self) -> usize {
        self.part_numbers()
            .into_iter()
            .map(|id| self.numbers[id.0].value)
            .sum()
    }

    /// Static markup rendering of the grid, digits of part-adjacent numbers
    /// in red.
    fn to_html(&self) -> String {
        let highlighted = self.part_numbers();
        let mut html = String::from("<code>\n");
        for cells in &self.rows {
            for cell in cells {
                let matched = cell.number.is_some_and(|id| highlighted.contains(&id));
                let color = if matched { "red" } else { "black" };
                let _ = match cell.symbol {
                    '&' => write!(html, "<strong style='color:{color}'>&amp;</strong>"),
                    '<' => write!(html, "<strong style='color:{color}'>&lt;</strong>"),
                    '>' => write!(html, "<strong style='color:{color}'>&gt;</strong>"),
                    c => write!(html, "<strong style='color:{color}'>{c}</strong>"),
                };
            }
            html.push_str("<br>\n");
        }
        html.push_str("</code>");
        html
    }
}

impl fmt::Display for Schematic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.rows {
            for cell in cells {
                write!(f, "{}", cell.symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Digits of the run being scanned, plus its starting column. The run only
/// becomes a [`Number`] once a non-digit, end of line, or end of input closes
/// it.
#[derive(Debug, Clone, Default)]
struct RunBuffer {
    pending: Option<(String, usize)>,
}

impl RunBuffer {
    fn push(&mut self, digit: char, col: usize) {
        match &mut self.pending {
            Some((digits, _)) => digits.push(digit),
            pending @ None => *pending = Some((digit.to_string(), col)),
        }
    }

    fn take(&mut self) -> Option<(String, usize)> {
        self.pending.take()
    }
}
