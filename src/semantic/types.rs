use std::fmt;

/// 语义分析阶段使用的类型描述符。
///
/// 结构化、构造后不可变；数组拥有它的元素类型。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Char,
    Array { size: usize, element: Box<Type> },
}

impl Type {
    pub fn array(size: usize, element: Type) -> Self {
        Type::Array {
            size,
            element: Box::new(element),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => write!(f, "Int"),
            Type::Char => write!(f, "Char"),
            Type::Array { size, element } => write!(f, "Arr({},{})", size, element),
        }
    }
}

/// 常量求值的结果。声明常量时按值复制，不共享。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstantValue {
    Int(i64),
    Char(char),
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Int(i) => write!(f, "{}", i),
            ConstantValue::Char(c) => write!(f, "'{}'", c),
        }
    }
}
