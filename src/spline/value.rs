use serde::{Serialize, Serializer};

/// One decoded value from the stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// `nil`.
	Null,
	/// `true` / `false`.
	Bool(bool),
	/// Any integer or float family.
	Number(Number),
	/// UTF-8 string.
	String(Box<str>),
	/// Raw `bin` payload.
	Binary(Vec<u8>),
	/// Ordered elements.
	Array(Vec<Value>),
	/// String-keyed entries in stream order.
	Map(Vec<(Box<str>, Value)>),
	/// Vendor extension value; `payload` is never interpreted.
	Ext {
		/// Application-defined extension code.
		type_code: i8,
		/// Opaque payload bytes.
		payload: Vec<u8>,
	},
}

impl Value {
	/// Base wire type name, without the extension code.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "boolean",
			Self::Number(_) => "number",
			Self::String(_) => "string",
			Self::Binary(_) => "binary",
			Self::Array(_) => "array",
			Self::Map(_) => "object",
			Self::Ext { .. } => "ext",
		}
	}

	/// Return the numeric payload, if this is a number.
	pub fn as_number(&self) -> Option<Number> {
		match self {
			Self::Number(number) => Some(*number),
			_ => None,
		}
	}

	/// Return the string payload, if this is a string.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(text) => Some(&**text),
			_ => None,
		}
	}

	/// Return array elements, if this is an array.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items.as_slice()),
			_ => None,
		}
	}
}

/// Numeric value keeping the wire width class it was decoded from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
	/// Signed integer family.
	Int(i64),
	/// Unsigned integer family.
	UInt(u64),
	/// Float family; `float 32` is widened.
	Float(f64),
}

impl Number {
	/// Widen to `f64` for numeric comparisons.
	pub fn as_f64(self) -> f64 {
		match self {
			Self::Int(v) => v as f64,
			Self::UInt(v) => v as f64,
			Self::Float(v) => v,
		}
	}

	/// Bit key under which numerically equal values collide.
	///
	/// `0.0`/`-0.0` share a key, every NaN shares a key, and integers compare
	/// by their `f64` widening.
	pub fn distinct_key(self) -> u64 {
		let value = self.as_f64();
		if value == 0.0 {
			0
		} else if value.is_nan() {
			f64::NAN.to_bits()
		} else {
			value.to_bits()
		}
	}
}

impl Serialize for Number {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match *self {
			Self::Int(v) => serializer.serialize_i64(v),
			Self::UInt(v) => serializer.serialize_u64(v),
			Self::Float(v) if v.is_finite() => serializer.serialize_f64(v),
			Self::Float(_) => serializer.serialize_none(),
		}
	}
}
