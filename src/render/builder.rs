/// Line builder for a monospace receipt.
///
/// Every line is cut to the configured width in characters.
pub struct ReceiptBuilder {
    lines: Vec<String>,
    width: usize
}

impl ReceiptBuilder {
    pub fn new(width: usize) -> Self {
        Self {
            lines: Vec::with_capacity(32),
            width
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Write a left aligned line
    pub fn line(&mut self, text: &str) -> &mut Self {
        let line = truncate(text, self.width);
        self.lines.push(line);
        self
    }

    /// Write a centered line
    pub fn center(&mut self, text: &str) -> &mut Self {
        let text = truncate(text.trim(), self.width);
        let padding = (self.width - text.chars().count()) / 2;
        self.lines.push(format!("{}{}", " ".repeat(padding), text).trim_end().to_string());
        self
    }

    /// Dashed separator across the full width
    pub fn divider(&mut self) -> &mut Self {
        self.lines.push("-".repeat(self.width));
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Left text flush left, right text flush right, at least one space apart.
    pub fn pair(&mut self, left: &str, right: &str) -> &mut Self {
        let right = truncate(right, self.width);
        let right_width = right.chars().count();
        let room = self.width.saturating_sub(right_width + 1);
        let left = truncate(left, room);
        let gap = self.width.saturating_sub(left.chars().count() + right_width).max(1);
        let line = format!("{left}{}{right}", " ".repeat(gap));
        self.lines.push(truncate(&line, self.width));
        self
    }

    /// `label : value` with the colons aligned at `label_width` and the value
    /// flush right.
    pub fn labeled(&mut self, label: &str, label_width: usize, value: &str) -> &mut Self {
        let label = format!("{:<label_width$}:", truncate(label, label_width));
        self.pair(&label, value)
    }

    pub fn build(&self) -> String {
        let mut output = self.lines.join("\n");
        output.push('\n');
        output
    }
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
