// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Read-only value view used by the engine and by rules.
//!
//! Every type the engine can look at implements [`Inspect`], which maps a
//! borrowed value onto a small closed set of shapes ([`FieldValue`]). Rules
//! never see concrete field types; they work on these shapes.
//!
//! # Shapes
//!
//! | Rust type | Shape |
//! |-----------|-------|
//! | `String`, `&str`, `Cow<str>` | [`FieldValue::Str`] |
//! | `char` | [`FieldValue::Char`] |
//! | `bool` | [`FieldValue::Bool`] |
//! | `i8`..`i64`, `isize` | [`FieldValue::Int`] |
//! | `u8`..`u64`, `usize` | [`FieldValue::Uint`] |
//! | `f32` | [`FieldValue::Float32`] |
//! | `f64` | [`FieldValue::Float`] |
//! | `Vec<T>`, `[T]`, `[T; N]`, sets | [`FieldValue::Seq`] |
//! | `HashMap`, `BTreeMap`, `IndexMap` | [`FieldValue::Map`] |
//! | `None` | [`FieldValue::Nil`] |
//! | `Some(v)`, `Box<T>`, `Arc<T>`, `Rc<T>` | [`FieldValue::Ref`] |
//! | `&T` | same shape as `T` |
//! | `#[derive(Record)]` types | [`FieldValue::Record`] |

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    fmt,
    rc::Rc,
    sync::Arc
};

use indexmap::IndexMap;

use crate::{error::LogicError, record::Record};

/// Borrowed view of a single value.
pub enum FieldValue<'a> {
    /// Absent value (`None`).
    Nil,
    /// Boolean.
    Bool(bool),
    /// Signed integer widened to `i64`.
    Int(i64),
    /// Unsigned integer widened to `u64`.
    Uint(u64),
    /// Double precision floating point number.
    Float(f64),
    /// Single precision floating point number, kept at its own width.
    Float32(f32),
    /// Single character.
    Char(char),
    /// Text.
    Str(&'a str),
    /// Sequence with its element count.
    Seq(usize),
    /// Map with its entry count.
    Map(usize),
    /// One indirection layer around another value.
    Ref(Box<FieldValue<'a>>),
    /// Nested record.
    Record(&'a dyn Record),
    /// A value the engine cannot look into, tagged with its type name.
    Opaque(&'static str)
}

impl<'a> FieldValue<'a> {
    /// Wrap a value in one indirection layer.
    pub fn indirect(inner: FieldValue<'a>) -> Self {
        Self::Ref(Box::new(inner))
    }

    /// Strip every indirection layer.
    pub fn peel(&self) -> &FieldValue<'a> {
        let mut current = self;
        while let Self::Ref(inner) = current {
            current = inner;
        }
        current
    }

    /// Nested record behind any number of indirection layers.
    pub fn as_record(&self) -> Option<&'a dyn Record> {
        match self.peel() {
            Self::Record(record) => Some(*record),
            _ => None
        }
    }

    /// Text behind any number of indirection layers.
    pub fn as_str(&self) -> Option<&'a str> {
        match self.peel() {
            Self::Str(s) => Some(*s),
            _ => None
        }
    }

    /// Check if the value is the zero value of its type.
    ///
    /// An indirection layer is never zero, whatever it points at; only an
    /// absent value is. Booleans and records are never zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Nil => true,
            Self::Str(s) => s.is_empty(),
            Self::Int(n) => *n == 0,
            Self::Uint(n) => *n == 0,
            Self::Float(n) => *n == 0.0,
            Self::Float32(n) => *n == 0.0,
            Self::Char(c) => *c == '\0',
            Self::Seq(len) | Self::Map(len) => *len == 0,
            Self::Bool(_) | Self::Ref(_) | Self::Record(_) | Self::Opaque(_) => false
        }
    }

    /// Literal representation used by text-based rules.
    ///
    /// An absent value stringifies as the empty string.
    ///
    /// # Errors
    ///
    /// [`LogicError::UnsupportedType`] for sequences, maps, records and
    /// opaque values.
    pub fn stringify(&self) -> Result<String, LogicError> {
        match self.peel() {
            Self::Nil => Ok(String::new()),
            Self::Str(s) => Ok((*s).to_string()),
            Self::Char(c) => Ok(c.to_string()),
            Self::Bool(b) => Ok(b.to_string()),
            Self::Int(n) => Ok(n.to_string()),
            Self::Uint(n) => Ok(n.to_string()),
            Self::Float(n) => Ok(n.to_string()),
            Self::Float32(n) => Ok(n.to_string()),
            other => Err(LogicError::UnsupportedType(other.kind().to_string()))
        }
    }

    /// Short name of the shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) | Self::Float32(_) => "float",
            Self::Char(_) => "char",
            Self::Str(_) => "string",
            Self::Seq(_) => "sequence",
            Self::Map(_) => "map",
            Self::Ref(_) => "reference",
            Self::Record(_) => "record",
            Self::Opaque(name) => *name
        }
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("Nil"),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Self::Uint(v) => f.debug_tuple("Uint").field(v).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Float32(v) => f.debug_tuple("Float32").field(v).finish(),
            Self::Char(v) => f.debug_tuple("Char").field(v).finish(),
            Self::Str(v) => f.debug_tuple("Str").field(v).finish(),
            Self::Seq(len) => f.debug_tuple("Seq").field(len).finish(),
            Self::Map(len) => f.debug_tuple("Map").field(len).finish(),
            Self::Ref(inner) => f.debug_tuple("Ref").field(inner).finish(),
            Self::Record(record) => {
                let names: Vec<_> = record.descriptors().iter().map(|d| d.name).collect();
                f.debug_tuple("Record").field(&names).finish()
            }
            Self::Opaque(name) => f.debug_tuple("Opaque").field(name).finish()
        }
    }
}

/// Types the engine can look at.
///
/// Implemented for common std types and generated by `#[derive(Record)]`
/// for records. Implement it by hand for domain newtypes:
///
/// ```rust
/// use field_rules_core::{FieldValue, Inspect};
///
/// struct Email(String);
///
/// impl Inspect for Email {
///     fn view(&self) -> FieldValue<'_> {
///         FieldValue::Str(&self.0)
///     }
/// }
/// ```
pub trait Inspect {
    /// Borrowed view of `self`.
    fn view(&self) -> FieldValue<'_>;
}

macro_rules! inspect_as {
    ($variant:ident, $target:ty: $($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn view(&self) -> FieldValue<'_> {
                    FieldValue::$variant(*self as $target)
                }
            }
        )*
    };
}

inspect_as!(Int, i64: i8, i16, i32, i64, isize);
inspect_as!(Uint, u64: u8, u16, u32, u64, usize);
inspect_as!(Float, f64: f64);
inspect_as!(Float32, f32: f32);

impl Inspect for bool {
    fn view(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl Inspect for char {
    fn view(&self) -> FieldValue<'_> {
        FieldValue::Char(*self)
    }
}

impl Inspect for str {
    fn view(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl Inspect for String {
    fn view(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl Inspect for Cow<'_, str> {
    fn view(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

// Shared references are transparent so `&str` fields behave like `String`.
impl<T: Inspect + ?Sized> Inspect for &T {
    fn view(&self) -> FieldValue<'_> {
        (**self).view()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn view(&self) -> FieldValue<'_> {
        FieldValue::indirect((**self).view())
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn view(&self) -> FieldValue<'_> {
        FieldValue::indirect((**self).view())
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    fn view(&self) -> FieldValue<'_> {
        FieldValue::indirect((**self).view())
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn view(&self) -> FieldValue<'_> {
        match self {
            Some(value) => FieldValue::indirect(value.view()),
            None => FieldValue::Nil
        }
    }
}

impl<T> Inspect for [T] {
    fn view(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.len())
    }
}

impl<T, const N: usize> Inspect for [T; N] {
    fn view(&self) -> FieldValue<'_> {
        FieldValue::Seq(N)
    }
}

impl<T> Inspect for Vec<T> {
    fn view(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.len())
    }
}

impl<T, S> Inspect for HashSet<T, S> {
    fn view(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.len())
    }
}

impl<T> Inspect for BTreeSet<T> {
    fn view(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.len())
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S> {
    fn view(&self) -> FieldValue<'_> {
        FieldValue::Map(self.len())
    }
}

impl<K, V> Inspect for BTreeMap<K, V> {
    fn view(&self) -> FieldValue<'_> {
        FieldValue::Map(self.len())
    }
}

impl<K, V, S> Inspect for IndexMap<K, V, S> {
    fn view(&self) -> FieldValue<'_> {
        FieldValue::Map(self.len())
    }
}
