//! The value model the inspector walks.
//!
//! [`Value`] is a tagged variant over everything a debug session typically holds:
//! scalars, sequences, mappings, attribute bags, numeric arrays and tensors,
//! module-like objects and opaque objects. Conversions from the usual Rust types
//! are provided through `From`.
//!
//! # Examples
//!
//! ```
//! use tenpeek::{Mapping, Namespace, Value};
//! use tenpeek_core::DenseND;
//!
//! let mut config = Namespace::new();
//! config.set("lr", 0.01);
//! config.set("epochs", 10);
//!
//! let mut state = Mapping::new();
//! state.insert("weights", DenseND::<f32>::zeros(&[3, 3]));
//! state.insert("config", config);
//!
//! let value = Value::from(state);
//! assert_eq!(value.type_name(), "dict");
//! ```

use crate::format::{bool_repr, float_repr, str_repr};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use tenpeek_core::{DenseND, Element, NumericArray, NumericTensor, PrintOptions, Tensor};

/// A mapping key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl Key {
    /// Python-like repr used in labels: `'name'`, `3`, `True`.
    pub fn repr(&self) -> String {
        match self {
            Key::Str(s) => str_repr(s),
            Key::Int(i) => i.to_string(),
            Key::Bool(b) => bool_repr(*b).to_string(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}

macro_rules! impl_int_key {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Key {
                fn from(i: $ty) -> Self {
                    Key::Int(i as i64)
                }
            }
        )*
    };
}

impl_int_key!(i8, i16, i32, i64, u8, u16, u32);

/// Insertion-ordered mapping with unique keys.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: Vec<(Key, Value)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Builder-style [`Mapping::insert`].
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (k, v) in iter {
            mapping.insert(k, v);
        }
        mapping
    }
}

/// Attribute bag: named attributes in definition order.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    attrs: Vec<(String, Value)>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing an existing one of the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Builder-style [`Namespace::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

/// Anything the inspector can walk or summarize.
#[derive(Debug, Clone)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    Map(Mapping),
    Namespace(Namespace),
    Array(Arc<dyn NumericArray>),
    Tensor(Arc<dyn NumericTensor>),
    /// Module-like object (a model or layer); printed as `ClassName(...)`
    Module { class_name: String },
    /// A callable
    Function { name: String },
    /// An imported library handle
    Package { name: String },
    /// Any other object, known only by its type name and textual form
    Opaque { type_name: String, repr: String },
}

impl Value {
    pub fn tuple(items: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Value::Tuple(items.into_iter().map(Into::into).collect())
    }

    pub fn list(items: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn array(array: impl NumericArray + 'static) -> Self {
        Value::Array(Arc::new(array))
    }

    pub fn tensor(tensor: impl NumericTensor + 'static) -> Self {
        Value::Tensor(Arc::new(tensor))
    }

    pub fn module(class_name: impl Into<String>) -> Self {
        Value::Module {
            class_name: class_name.into(),
        }
    }

    pub fn function(name: impl Into<String>) -> Self {
        Value::Function { name: name.into() }
    }

    pub fn package(name: impl Into<String>) -> Self {
        Value::Package { name: name.into() }
    }

    pub fn opaque(type_name: impl Into<String>, repr: impl Into<String>) -> Self {
        Value::Opaque {
            type_name: type_name.into(),
            repr: repr.into(),
        }
    }

    /// Runtime type name, as an interactive session would report it.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek::Value;
    ///
    /// assert_eq!(Value::from(1.5).type_name(), "float");
    /// assert_eq!(Value::module("Linear").type_name(), "Linear");
    /// assert_eq!(Value::opaque("IPython.core.Shell", "<shell>").type_name(), "IPython.core.Shell");
    /// ```
    pub fn type_name(&self) -> &str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Map(_) => "dict",
            Value::Namespace(_) => "Namespace",
            Value::Array(_) => "ndarray",
            Value::Tensor(_) => "Tensor",
            Value::Module { class_name } => class_name,
            Value::Function { .. } => "function",
            Value::Package { .. } => "module",
            Value::Opaque { type_name, .. } => type_name,
        }
    }

    /// True for plain numbers (`Bool`, `Int`, `Float`).
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Bool(_) | Value::Int(_) | Value::Float(_))
    }

    /// Python-like repr.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpeek::Value;
    /// use tenpeek_core::PrintOptions;
    ///
    /// let value = Value::list([Value::from(1), Value::from("a"), Value::tuple([2.5])]);
    /// assert_eq!(value.repr(&PrintOptions::default()), "[1, 'a', (2.5,)]");
    /// ```
    pub fn repr(&self, options: &PrintOptions) -> String {
        match self {
            Value::None => "None".to_string(),
            Value::Bool(b) => bool_repr(*b).to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(x) => float_repr(*x),
            Value::Str(s) => str_repr(s),
            Value::List(items) => format!("[{}]", join_reprs(items, options)),
            Value::Tuple(items) if items.len() == 1 => {
                format!("({},)", items[0].repr(options))
            }
            Value::Tuple(items) => format!("({})", join_reprs(items, options)),
            Value::Map(mapping) => {
                let entries: Vec<String> = mapping
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k.repr(), v.repr(options)))
                    .collect();
                format!("{{{}}}", entries.join(", "))
            }
            Value::Namespace(ns) => {
                let attrs: Vec<String> = ns
                    .iter()
                    .map(|(n, v)| format!("{}={}", n, v.repr(options)))
                    .collect();
                format!("Namespace({})", attrs.join(", "))
            }
            Value::Array(array) => array.render(options),
            Value::Tensor(tensor) => tensor.render(options),
            Value::Module { class_name } => format!("{}(...)", class_name),
            Value::Function { name } => format!("<function {}>", name),
            Value::Package { name } => format!("<module {}>", str_repr(name)),
            Value::Opaque { repr, .. } => repr.clone(),
        }
    }

    /// Text printed for a terminal value: strings print raw, everything else
    /// prints its repr.
    pub fn text(&self, options: &PrintOptions) -> String {
        match self {
            Value::Str(s) => s.clone(),
            other => other.repr(options),
        }
    }
}

fn join_reprs(items: &[Value], options: &PrintOptions) -> String {
    items
        .iter()
        .map(|v| v.repr(options))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Borrowing conversion used by the `inspect!` macro.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl<T: Clone + Into<Value>> ToValue for T {
    fn to_value(&self) -> Value {
        self.clone().into()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_int_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Self {
                    Value::Int(i as i64)
                }
            }
        )*
    };
}

impl_int_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(i: u64) -> Self {
        i64::try_from(i).map_or(Value::Float(i as f64), Value::Int)
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        Value::from(i as u64)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(x as f64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Value::None, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Value::Map(mapping)
    }
}

impl From<Namespace> for Value {
    fn from(ns: Namespace) -> Self {
        Value::Namespace(ns)
    }
}

impl<K: Into<Key>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::Map(map.into_iter().collect())
    }
}

impl<K: Into<Key>, V: Into<Value>> From<HashMap<K, V>> for Value {
    fn from(map: HashMap<K, V>) -> Self {
        Value::Map(map.into_iter().collect())
    }
}

impl<T: Element> From<DenseND<T>> for Value {
    fn from(array: DenseND<T>) -> Self {
        Value::Array(Arc::new(array))
    }
}

impl<T: Element> From<Tensor<T>> for Value {
    fn from(tensor: Tensor<T>) -> Self {
        Value::Tensor(Arc::new(tensor))
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => Value::None,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Value::Str(s),
            Json::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Json::Object(fields) => Value::Map(fields.into_iter().collect()),
        }
    }
}
