/// A destination for program output.
///
/// `println` is the only caller. Each call hands over one complete line
/// without its trailing newline.
///
/// # Example
/// ```
/// use fimp::interpreter::evaluator::output::OutputSink;
///
/// let mut lines: Vec<String> = Vec::new();
/// lines.print_line("1 1");
/// assert_eq!(lines, ["1 1"]);
/// ```
pub trait OutputSink {
    /// Writes one line of output.
    fn print_line(&mut self, line: &str);
}

/// Writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn print_line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Captures lines in memory, in order.
impl OutputSink for Vec<String> {
    fn print_line(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}
