//! Scoped code printer.
//!
//! [`CodePrinter`] is an indentation aware text emitter. It also carries the
//! naming scope stack used to synthesize names for anonymous nested types,
//! and a queue of document parts joined together when the output is flushed.
//!
//! Code parts are rendered through [`PrettyPrint`] and then run through
//! [`fix_commas`], which moves stray separator lines back onto the line they
//! belong to and aligns trailing comments.

use crate::syntax::TargetSyntax;

/// Separator placed between document parts.
const PART_SEPARATOR: &str = "\n\n";

/// A value that renders itself as target source code.
pub trait PrettyPrint {
    /// Renders the value using the given target syntax.
    fn pretty_print(&self, syntax: &TargetSyntax) -> String;
}

/// A part of the generated document.
pub enum DocumentPart {
    /// Text appended verbatim.
    Text(String),
    /// Code rendered by its pretty printer, then repaired.
    Code(Box<dyn PrettyPrint>),
}

impl DocumentPart {
    /// Creates a code part.
    pub fn code(printable: impl PrettyPrint + 'static) -> Self {
        Self::Code(Box::new(printable))
    }
}

/// Indentation and scope aware text emitter.
pub struct CodePrinter {
    syntax: TargetSyntax,
    output: String,
    indent_level: usize,
    start_of_group: bool,
    scope_stack: Vec<String>,
    queue: Vec<DocumentPart>,
}

impl CodePrinter {
    /// Creates an empty printer.
    #[must_use]
    pub fn new(syntax: &TargetSyntax) -> Self {
        Self {
            syntax: *syntax,
            output: String::new(),
            indent_level: 0,
            start_of_group: true,
            scope_stack: Vec::new(),
            queue: Vec::new(),
        }
    }

    /// Returns the target syntax.
    #[must_use]
    pub fn syntax(&self) -> TargetSyntax {
        self.syntax
    }

    /// Returns the text printed so far.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Prints text, indenting it if it starts a new line.
    pub fn print(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            return;
        }
        if self.output.is_empty() || self.output.ends_with('\n') {
            for _ in 0..self.indent_level {
                self.output.push_str(self.syntax.indent);
            }
        }
        self.output.push_str(text);
        self.start_of_group = false;
    }

    /// Starts a new line. Does nothing before anything was printed.
    pub fn print_newline(&mut self) {
        if !self.output.is_empty() {
            self.output.push('\n');
        }
    }

    /// Prints text at the start of a new line.
    pub fn print_on_newline(&mut self, text: impl AsRef<str>) {
        self.print_newline();
        self.print(text);
    }

    /// Starts a new line unless the current group is still empty.
    ///
    /// Repeated calls produce at most one blank separator line.
    pub fn print_newline_if_needed(&mut self) {
        if !self.start_of_group {
            self.print_newline();
        }
        self.start_of_group = true;
    }

    /// Prints `open`, runs `body` one indentation level deeper, and prints
    /// `close` on its own line.
    pub fn scoped_block<R>(
        &mut self,
        open: &str,
        close: &str,
        body: impl FnOnce(&mut Self) -> R,
    ) -> R {
        self.print(open);
        self.start_of_group = true;
        let result = self.with_indent(body);
        self.print_on_newline(close);
        result
    }

    /// Runs `body` one indentation level deeper.
    pub fn with_indent<R>(&mut self, body: impl FnOnce(&mut Self) -> R) -> R {
        self.indent_level += 1;
        let result = body(self);
        self.indent_level -= 1;
        result
    }

    /// Pushes a naming component onto the scope stack.
    pub fn push_scope(&mut self, component: impl Into<String>) {
        self.scope_stack.push(component.into());
    }

    /// Pops the innermost naming component.
    pub fn pop_scope(&mut self) -> Option<String> {
        self.scope_stack.pop()
    }

    /// Returns the current naming scope, outermost component first.
    #[must_use]
    pub fn scope(&self) -> &[String] {
        &self.scope_stack
    }

    /// Takes the text printed so far, leaving the printer empty.
    pub fn take_output(&mut self) -> String {
        self.start_of_group = true;
        std::mem::take(&mut self.output)
    }

    /// Queues a document part.
    pub fn enqueue(&mut self, part: DocumentPart) {
        self.queue.push(part);
    }

    /// Queues the text printed so far as a verbatim part.
    pub fn finish_part(&mut self) {
        if !self.output.is_empty() {
            let text = self.take_output();
            self.queue.push(DocumentPart::Text(text));
        }
    }

    /// Returns the number of queued parts.
    #[must_use]
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Renders and joins all queued parts, emptying the queue.
    pub fn flush(&mut self) -> String {
        self.finish_part();
        let syntax = self.syntax;
        let rendered: Vec<String> = self
            .queue
            .drain(..)
            .map(|part| render_part(&part, &syntax))
            .filter(|text| !text.is_empty())
            .collect();

        if rendered.is_empty() {
            return String::new();
        }
        let mut output = rendered.join(PART_SEPARATOR);
        output.push('\n');
        output
    }
}

fn render_part(part: &DocumentPart, syntax: &TargetSyntax) -> String {
    match part {
        DocumentPart::Text(text) => text.clone(),
        DocumentPart::Code(code) => fix_commas(&code.pretty_print(syntax), syntax.line_comment),
    }
}

/// A line split into its code and trailing comment.
struct RepairedLine {
    code: String,
    comment: Option<String>,
}

/// Repairs separator placement and aligns trailing comments in a block.
///
/// Empty lines are dropped. A line consisting only of `,` is folded into
/// the code portion of the line before it. Every line with a trailing
/// comment is then re-emitted with its comment starting one column after
/// the widest commented code portion of the block. Full-line comments and
/// lines without comments are left untouched.
#[must_use]
pub fn fix_commas(block: &str, comment_marker: &str) -> String {
    let lines: Vec<&str> = block.lines().filter(|l| !l.trim().is_empty()).collect();
    let mut repaired = Vec::with_capacity(lines.len());

    let mut index = 0;
    while index < lines.len() {
        let line = lines[index];
        let full_line_comment = line.trim_start().starts_with(comment_marker);

        let mut repaired_line = if full_line_comment {
            RepairedLine {
                code: line.to_string(),
                comment: None,
            }
        } else {
            split_comment(line, comment_marker)
        };

        let next_is_comma = lines.get(index + 1).is_some_and(|next| next.trim() == ",");
        if next_is_comma && !full_line_comment {
            let code = repaired_line.code.trim_end();
            repaired_line.code = format!("{code},");
            index += 1;
        }

        repaired.push(repaired_line);
        index += 1;
    }

    let width = repaired
        .iter()
        .filter(|l| l.comment.is_some())
        .map(|l| l.code.chars().count())
        .max()
        .unwrap_or(0);

    repaired
        .into_iter()
        .map(|line| match line.comment {
            Some(comment) if comment.is_empty() => {
                format!("{:<width$} {comment_marker}", line.code)
            }
            Some(comment) => format!("{:<width$} {comment_marker} {comment}", line.code),
            None => line.code,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn split_comment(line: &str, comment_marker: &str) -> RepairedLine {
    match line.find(comment_marker) {
        Some(pos) => RepairedLine {
            code: line[..pos].trim_end().to_string(),
            comment: Some(line[pos + comment_marker.len()..].trim().to_string()),
        },
        None => RepairedLine {
            code: line.to_string(),
            comment: None,
        },
    }
}
