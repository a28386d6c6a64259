//! Terminal display and output formatting utilities
//!
//! The display layer only ever reads the grid through its row iteration;
//! it draws one glyph per cell and never mutates simulation state.

use crate::engine::Grid;

/// Format grids for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form, one character per cell
    pub fn format_compact(grid: &Grid) -> String {
        let mut output = String::new();
        for row in grid.iter_rows() {
            for &cell in row {
                output.push(if cell { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with row and column coordinates
    pub fn format_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..grid.cols() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for (row_idx, row) in grid.iter_rows().enumerate() {
            output.push_str(&format!("{:2} ", row_idx));
            for &cell in row {
                output.push_str(if cell { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// One-line generation banner for the run loop
    pub fn format_generation_header(generation: u64, population: usize) -> String {
        format!("Generation {} (living: {})", generation, population)
    }
}

/// Progress indicator for long headless runs
pub struct ProgressIndicator {
    total: u64,
    current: u64,
    last_update: std::time::Instant,
    start_time: std::time::Instant,
}

impl ProgressIndicator {
    pub fn new(total: u64) -> Self {
        let now = std::time::Instant::now();
        Self {
            total,
            current: 0,
            last_update: now,
            start_time: now,
        }
    }

    /// Update progress and optionally redraw
    pub fn update(&mut self, current: u64) {
        self.current = current;
        let now = std::time::Instant::now();

        // Redraw at most every 100ms
        if now.duration_since(self.last_update).as_millis() > 100 {
            self.display();
            self.last_update = now;
        }
    }

    fn display(&self) {
        let percentage = if self.total > 0 {
            (self.current as f64 / self.total as f64) * 100.0
        } else {
            0.0
        };
        print!(
            "\rGeneration {}/{} ({:.1}%)",
            self.current, self.total, percentage
        );
        std::io::Write::flush(&mut std::io::stdout()).ok();
    }

    /// Finish and clear the progress line
    pub fn finish(&self) {
        println!(
            "\rCompleted {} generations in {:.2}s",
            self.total,
            self.start_time.elapsed().as_secs_f64()
        );
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
