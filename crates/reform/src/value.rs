//! Dynamically typed SQL values.
//!
//! Records hand their fields to the querier as [Value]s and get them back through [Scan].  The set of variants is
//! what every supported database can carry without loss; anything richer is the client's business.
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
    Timestamp(OffsetDateTime),
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ConversionError {
    #[error("Got NULL, which can't be stored in {target}")]
    UnexpectedNull { target: &'static str },

    #[error("Can't convert {kind} to {target}")]
    TypeMismatch {
        kind: &'static str,
        target: &'static str,
    },

    #[error("{value} is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    #[error("Unable to parse timestamp {text:?}: {message}")]
    InvalidTimestamp { text: String, message: String },
}

impl Value {
    /// Name of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Text(_) => "text",
            Value::Blob(_) => "blob",
            Value::Timestamp(_) => "timestamp",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn mismatch(&self, target: &'static str) -> ConversionError {
        ConversionError::TypeMismatch {
            kind: self.kind(),
            target,
        }
    }
}

/// Convert a Rust value into a [Value].
pub trait ToValue {
    fn to_value(&self) -> Value;
}

/// Convert a [Value] back.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, ConversionError>;
}

/// Something a column can be scanned into.
///
/// Object safe, so that records can hand out `&mut dyn Scan` for each field.
pub trait Scan {
    fn scan(&mut self, value: Value) -> Result<(), ConversionError>;
}

impl<T: FromValue> Scan for T {
    fn scan(&mut self, value: Value) -> Result<(), ConversionError> {
        *self = T::from_value(value)?;
        Ok(())
    }
}

/// Is this the zero value of its type?
///
/// Generated code uses this to decide whether a primary key is set.
pub fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, ConversionError> {
        Ok(value)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Bool(b) => Ok(b),
            // Most databases have no boolean type.
            Value::Integer(i) => Ok(i != 0),
            Value::Null => Err(ConversionError::UnexpectedNull { target: "bool" }),
            v => Err(v.mismatch("bool")),
        }
    }
}

macro_rules! integer_value {
    ($($t: ty),*) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Value {
                    Value::Integer(*self as i64)
                }
            }

            impl FromValue for $t {
                fn from_value(value: Value) -> Result<Self, ConversionError> {
                    let target = stringify!($t);
                    let i = match value {
                        Value::Integer(i) => i,
                        Value::Bool(b) => b as i64,
                        Value::Null => return Err(ConversionError::UnexpectedNull { target }),
                        v => return Err(v.mismatch(target)),
                    };
                    <$t>::try_from(i).map_err(|_| ConversionError::OutOfRange {
                        value: i.to_string(),
                        target,
                    })
                }
            }

            impl From<$t> for Value {
                fn from(x: $t) -> Value {
                    x.to_value()
                }
            }
        )*
    };
}

integer_value!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! real_value {
    ($($t: ty),*) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Value {
                    Value::Real(*self as f64)
                }
            }

            impl FromValue for $t {
                fn from_value(value: Value) -> Result<Self, ConversionError> {
                    match value {
                        Value::Real(r) => Ok(r as $t),
                        Value::Integer(i) => Ok(i as $t),
                        Value::Null => Err(ConversionError::UnexpectedNull { target: stringify!($t) }),
                        v => Err(v.mismatch(stringify!($t))),
                    }
                }
            }

            impl From<$t> for Value {
                fn from(x: $t) -> Value {
                    x.to_value()
                }
            }
        )*
    };
}

real_value!(f32, f64);

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl ToValue for &str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Text(s) => Ok(s),
            Value::Blob(b) => String::from_utf8(b).map_err(|_| ConversionError::TypeMismatch {
                kind: "non-UTF-8 blob",
                target: "String",
            }),
            Value::Null => Err(ConversionError::UnexpectedNull { target: "String" }),
            v => Err(v.mismatch("String")),
        }
    }
}

impl ToValue for Vec<u8> {
    fn to_value(&self) -> Value {
        Value::Blob(self.clone())
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Blob(b) => Ok(b),
            Value::Text(s) => Ok(s.into_bytes()),
            Value::Null => Err(ConversionError::UnexpectedNull { target: "Vec<u8>" }),
            v => Err(v.mismatch("Vec<u8>")),
        }
    }
}

impl ToValue for OffsetDateTime {
    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }
}

/// Parse the textual timestamps databases without a native type hand back.
pub fn parse_timestamp(text: &str) -> Result<OffsetDateTime, ConversionError> {
    OffsetDateTime::parse(text, &Rfc3339).map_err(|e| ConversionError::InvalidTimestamp {
        text: text.to_string(),
        message: e.to_string(),
    })
}

impl FromValue for OffsetDateTime {
    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Timestamp(t) => Ok(t),
            Value::Text(s) => parse_timestamp(&s),
            Value::Integer(i) => {
                OffsetDateTime::from_unix_timestamp(i).map_err(|_| ConversionError::OutOfRange {
                    value: i.to_string(),
                    target: "OffsetDateTime",
                })
            }
            Value::Null => Err(ConversionError::UnexpectedNull {
                target: "OffsetDateTime",
            }),
            v => Err(v.mismatch("OffsetDateTime")),
        }
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(x) => x.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Null => Ok(None),
            v => T::from_value(v).map(Some),
        }
    }
}

impl From<bool> for Value {
    fn from(x: bool) -> Value {
        Value::Bool(x)
    }
}

impl From<String> for Value {
    fn from(x: String) -> Value {
        Value::Text(x)
    }
}

impl From<&str> for Value {
    fn from(x: &str) -> Value {
        Value::Text(x.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(x: Vec<u8>) -> Value {
        Value::Blob(x)
    }
}

impl From<OffsetDateTime> for Value {
    fn from(x: OffsetDateTime) -> Value {
        Value::Timestamp(x)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(x: Option<T>) -> Value {
        x.map_or(Value::Null, Into::into)
    }
}
