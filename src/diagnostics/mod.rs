pub mod codes;

use crate::reporter::CompileError;
use crate::utils::Span;
use ariadne::{Color, Config, Label as AriadneLabel, Report, ReportKind, Source};
use codes::ErrorCode;
use std::io;

#[derive(Debug, Clone)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// 一条可以渲染给用户的诊断信息。
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: &'static str,
    message: String,
    label: Label,
    notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(error_code: &'static ErrorCode, primary_label: Label) -> Self {
        Self {
            code: error_code.code,
            message: error_code.message.to_string(),
            label: primary_label,
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn code(&self) -> &str {
        self.code
    }

    /// 打印到 stderr（带颜色）。
    pub fn print(&self, file_name: &str, source: &str) -> io::Result<()> {
        self.render(file_name, source, true, io::stderr())
    }

    /// 渲染到任意 writer（不带颜色）。
    pub fn write<W: io::Write>(&self, file_name: &str, source: &str, out: W) -> io::Result<()> {
        self.render(file_name, source, false, out)
    }

    fn render<W: io::Write>(&self, file_name: &str, source: &str, color: bool, out: W) -> io::Result<()> {
        let range = self.label.span.into_range();

        // 所有诊断都是致命错误
        let mut report = Report::build(ReportKind::Error, (file_name, range.clone()))
            .with_config(Config::default().with_color(color))
            .with_code(self.code)
            .with_message(&self.message)
            .with_label(
                AriadneLabel::new((file_name, range))
                    .with_message(&self.label.message)
                    .with_color(Color::Red),
            );
        for note in &self.notes {
            report = report.with_note(note);
        }

        report.finish().write((file_name, Source::from(source)), out)
    }
}

impl From<&CompileError> for Diagnostic {
    fn from(error: &CompileError) -> Self {
        let label = Label::new(error.span, error.kind.to_string());
        let diagnostic = Diagnostic::new(error.code(), label);
        match error.span.line {
            0 => diagnostic,
            line => diagnostic.with_note(format!("at line {}, column {}", line, error.span.column)),
        }
    }
}
