use std::fmt;
use std::ops::Range;

/// 代表源代码中的一个位置范围。
///
/// `start`/`end` 是字节索引（给 ariadne 用），`line`/`column` 是从 1 开始的行列号
/// （给人看的错误信息用），两者都在词法分析时一次性算好。
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    pub fn into_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.into_range()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// 行首偏移表，用来把字节偏移换算成行列号。
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(source.match_indices('\n').map(|(i, _)| i + 1));
        Self { line_starts }
    }

    /// 由字节范围构造一个带行列号的 Span。列号按字符计数。
    pub fn span(&self, source: &str, range: Range<usize>) -> Span {
        // partition_point 返回第一个大于 start 的行首，减一即所在行
        let line = self.line_starts.partition_point(|&s| s <= range.start);
        let line_start = self.line_starts[line - 1];
        let column = source[line_start..range.start].chars().count() + 1;
        Span::new(range.start, range.end, line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_and_column_are_one_based() {
        let source = "program P;\n  var x";
        let index = LineIndex::new(source);
        let span = index.span(source, 13..16);
        assert_eq!((span.line, span.column), (2, 3));
        assert_eq!(index.span(source, 0..7).to_string(), "1:1");
    }
}
