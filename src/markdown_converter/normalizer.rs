//! Streaming post-processing of converted Markdown.
//!
//! One pass, line by line. Each line is classified so that spacing decisions
//! never touch inline formatting, and fenced code passes through verbatim.

/// Zero-width characters VitePress leaves in heading anchors
const ZERO_WIDTH: &[char] = &['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineType {
    Blank,
    Heading,
    CodeFence,
    TableRow,
    HtmlComment,
    Paragraph,
}

impl LineType {
    fn classify(line: &str) -> Self {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return Self::Blank;
        }
        if trimmed.starts_with("<!--") {
            return Self::HtmlComment;
        }
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            return Self::CodeFence;
        }
        if trimmed.starts_with('#') {
            let hash_count = trimmed.chars().take_while(|&c| c == '#').count();
            let rest = &trimmed[hash_count..];
            // `#fff` is text, `##Text` is a heading missing its space
            if hash_count <= 6 && (hash_count > 1 || rest.is_empty() || rest.starts_with(' ')) {
                return Self::Heading;
            }
        }
        if trimmed.starts_with('|') {
            return Self::TableRow;
        }
        Self::Paragraph
    }

    const fn needs_blank_before(self) -> bool {
        matches!(self, Self::Heading | Self::CodeFence)
    }
}

/// Single-pass normalizer.
///
/// - zero-width characters and trailing whitespace are dropped
/// - runs of blank lines collapse to one
/// - headings and fences get a blank line before them
/// - a table is separated from whatever follows it by a blank line
/// - `##Text` becomes `## Text`
pub(super) struct MarkdownNormalizer {
    output: String,
    prev_type: LineType,
    in_code_fence: bool,
}

impl MarkdownNormalizer {
    pub(super) fn normalize(input: &str) -> String {
        let mut this = Self {
            output: String::with_capacity(input.len()),
            prev_type: LineType::Blank,
            in_code_fence: false,
        };

        for line in input.lines() {
            this.emit(line);
        }

        this.output.trim().to_string()
    }

    fn emit(&mut self, line: &str) {
        if self.in_code_fence {
            let trimmed = line.trim_start();
            if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
                self.in_code_fence = false;
            }
            self.write_line(line);
            return;
        }

        let cleaned: String = line.chars().filter(|c| !ZERO_WIDTH.contains(c)).collect();
        let cleaned = cleaned.trim_end();
        let line_type = LineType::classify(cleaned);

        match line_type {
            LineType::HtmlComment => return,
            LineType::Blank => {
                if self.prev_type != LineType::Blank {
                    self.write_line("");
                }
                self.prev_type = LineType::Blank;
                return;
            }
            LineType::CodeFence => self.in_code_fence = true,
            _ => {}
        }

        let needs_blank = line_type.needs_blank_before()
            || (self.prev_type == LineType::TableRow && line_type != LineType::TableRow);
        if needs_blank && self.prev_type != LineType::Blank {
            self.write_line("");
        }

        if line_type == LineType::Heading {
            self.write_line(&Self::normalize_heading(cleaned));
        } else {
            self.write_line(cleaned);
        }
        self.prev_type = line_type;
    }

    #[inline]
    fn write_line(&mut self, line: &str) {
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        self.output.push_str(line);
    }

    /// Ensure space after # in headings: `##Text` → `## Text`
    fn normalize_heading(line: &str) -> String {
        let trimmed = line.trim_start();
        let hash_count = trimmed.chars().take_while(|&c| c == '#').count();
        let rest = &trimmed[hash_count..];

        if rest.is_empty() || rest.starts_with(' ') {
            trimmed.to_string()
        } else {
            format!("{} {}", "#".repeat(hash_count), rest)
        }
    }
}
