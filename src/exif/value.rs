use std::fmt;

/// A decoded EXIF tag value, copied into the metadata record unchanged.
///
/// Single-element arrays collapse to their scalar; longer arrays become
/// a [`TagValue::Tuple`].
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Rational { num: i64, denom: i64 },
    Bytes(Vec<u8>),
    Tuple(Vec<TagValue>),
}

impl TagValue {
    /// Borrow the value as text, if it is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the value kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Rational { .. } => "rational",
            Self::Bytes(_) => "bytes",
            Self::Tuple(_) => "tuple",
        }
    }

    fn collapse(mut items: Vec<TagValue>) -> Self {
        if items.len() == 1 {
            items.remove(0)
        } else {
            Self::Tuple(items)
        }
    }

    fn fmt_member(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "'{s}'"),
            other => write!(f, "{other}"),
        }
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&exif::Value> for TagValue {
    fn from(value: &exif::Value) -> Self {
        use exif::Value;

        fn ints<T: Copy + Into<i64>>(v: &[T]) -> TagValue {
            TagValue::collapse(v.iter().map(|&n| TagValue::Integer(n.into())).collect())
        }

        match value {
            Value::Byte(v) => ints(v),
            Value::SByte(v) => ints(v),
            Value::Short(v) => ints(v),
            Value::SShort(v) => ints(v),
            Value::Long(v) => ints(v),
            Value::SLong(v) => ints(v),
            Value::Ascii(v) => Self::collapse(
                v.iter()
                    .map(|s| Self::Text(String::from_utf8_lossy(s).trim_end_matches('\0').to_string()))
                    .collect(),
            ),
            Value::Rational(v) => Self::collapse(
                v.iter()
                    .map(|r| Self::Rational { num: r.num.into(), denom: r.denom.into() })
                    .collect(),
            ),
            Value::SRational(v) => Self::collapse(
                v.iter()
                    .map(|r| Self::Rational { num: r.num.into(), denom: r.denom.into() })
                    .collect(),
            ),
            Value::Float(v) => Self::collapse(v.iter().map(|&x| Self::Float(x.into())).collect()),
            Value::Double(v) => Self::collapse(v.iter().map(|&x| Self::Float(x)).collect()),
            Value::Undefined(bytes, _) => Self::Bytes(bytes.clone()),
            Value::Unknown(typ, count, offset) => Self::Tuple(vec![
                Self::Integer((*typ).into()),
                Self::Integer((*count).into()),
                Self::Integer((*offset).into()),
            ]),
            #[allow(unreachable_patterns)]
            _ => Self::Bytes(Vec::new()),
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Rational { num, denom } if *denom == 0 => write!(f, "{num}/0"),
            Self::Rational { num, denom } => write!(f, "{}", *num as f64 / *denom as f64),
            Self::Bytes(bytes) => {
                f.write_str("b'")?;
                for &b in bytes {
                    match b {
                        b'\\' => f.write_str("\\\\")?,
                        b'\'' => f.write_str("\\'")?,
                        0x20..=0x7e => write!(f, "{}", b as char)?,
                        _ => write!(f, "\\x{b:02x}")?,
                    }
                }
                f.write_str("'")
            }
            Self::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_member(f)?;
                }
                f.write_str(")")
            }
        }
    }
}
