use crate::spline::bytes::Cursor;
use crate::spline::{Number, Result, SplineError, Value};

/// Decoder limits for one stream pass.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
	/// Maximum container nesting depth inside one top-level value.
	pub max_depth: u32,
}

impl DecodeOptions {
	/// Default nesting ceiling; deep enough for real scene files.
	pub const DEFAULT_MAX_DEPTH: u32 = 512;
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: Self::DEFAULT_MAX_DEPTH,
		}
	}
}

/// Result of decoding a whole stream: the decoded prefix plus the first fault.
#[derive(Debug)]
pub struct DecodeOutcome {
	/// Top-level values decoded before the fault (or all of them).
	pub items: Vec<Value>,
	/// First decode fault, if the stream did not end on a value boundary.
	pub fault: Option<SplineError>,
	/// Bytes consumed by `items`.
	pub consumed: usize,
}

impl DecodeOutcome {
	/// Treat any fault as fatal and drop the prefix.
	pub fn into_result(self) -> Result<Vec<Value>> {
		match self.fault {
			Some(err) => Err(err),
			None => Ok(self.items),
		}
	}
}

/// Decode every back-to-back value in `bytes`.
pub fn decode_stream(bytes: &[u8], options: &DecodeOptions) -> DecodeOutcome {
	let mut iter = ValueIter::new(bytes, *options);
	let mut items = Vec::new();
	let mut consumed = 0;
	let mut fault = None;

	while let Some(item) = iter.next() {
		match item {
			Ok(value) => {
				items.push(value);
				consumed = iter.pos();
			}
			Err(err) => fault = Some(err),
		}
	}

	DecodeOutcome { items, fault, consumed }
}

/// Lazy top-level value iterator; stops after the first fault.
pub struct ValueIter<'a> {
	cursor: Cursor<'a>,
	options: DecodeOptions,
	done: bool,
}

impl<'a> ValueIter<'a> {
	/// Start iterating at offset 0 of `bytes`.
	pub fn new(bytes: &'a [u8], options: DecodeOptions) -> Self {
		Self {
			cursor: Cursor::new(bytes),
			options,
			done: false,
		}
	}

	/// Byte offset of the next top-level value.
	pub fn pos(&self) -> usize {
		self.cursor.pos()
	}
}

impl Iterator for ValueIter<'_> {
	type Item = Result<Value>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		if self.cursor.remaining() == 0 {
			self.done = true;
			return None;
		}

		let value = decode_value(&mut self.cursor, 0, &self.options);
		if value.is_err() {
			self.done = true;
		}
		Some(value)
	}
}

fn decode_value(cursor: &mut Cursor<'_>, depth: u32, options: &DecodeOptions) -> Result<Value> {
	let at = cursor.pos();
	let marker = cursor.read_u8()?;

	match marker {
		0x00..=0x7f => Ok(Value::Number(Number::UInt(u64::from(marker)))),
		0x80..=0x8f => decode_map(cursor, at, u64::from(marker & 0x0f), depth, options),
		0x90..=0x9f => decode_array(cursor, at, u64::from(marker & 0x0f), depth, options),
		0xa0..=0xbf => decode_str(cursor, at, u64::from(marker & 0x1f)),
		0xc0 => Ok(Value::Null),
		0xc2 => Ok(Value::Bool(false)),
		0xc3 => Ok(Value::Bool(true)),
		0xc4 => {
			let len = u64::from(cursor.read_u8()?);
			decode_bin(cursor, at, len)
		}
		0xc5 => {
			let len = u64::from(cursor.read_u16_be()?);
			decode_bin(cursor, at, len)
		}
		0xc6 => {
			let len = u64::from(cursor.read_u32_be()?);
			decode_bin(cursor, at, len)
		}
		0xc7 => {
			let len = u64::from(cursor.read_u8()?);
			decode_ext(cursor, at, len)
		}
		0xc8 => {
			let len = u64::from(cursor.read_u16_be()?);
			decode_ext(cursor, at, len)
		}
		0xc9 => {
			let len = u64::from(cursor.read_u32_be()?);
			decode_ext(cursor, at, len)
		}
		0xca => Ok(float(f64::from(cursor.read_f32_be()?))),
		0xcb => Ok(float(cursor.read_f64_be()?)),
		0xcc => Ok(uint(u64::from(cursor.read_u8()?))),
		0xcd => Ok(uint(u64::from(cursor.read_u16_be()?))),
		0xce => Ok(uint(u64::from(cursor.read_u32_be()?))),
		0xcf => Ok(uint(cursor.read_u64_be()?)),
		0xd0 => Ok(int(i64::from(cursor.read_i8()?))),
		0xd1 => Ok(int(i64::from(cursor.read_i16_be()?))),
		0xd2 => Ok(int(i64::from(cursor.read_i32_be()?))),
		0xd3 => Ok(int(cursor.read_i64_be()?)),
		0xd4 => decode_fixext(cursor, 1),
		0xd5 => decode_fixext(cursor, 2),
		0xd6 => decode_fixext(cursor, 4),
		0xd7 => decode_fixext(cursor, 8),
		0xd8 => decode_fixext(cursor, 16),
		0xd9 => {
			let len = u64::from(cursor.read_u8()?);
			decode_str(cursor, at, len)
		}
		0xda => {
			let len = u64::from(cursor.read_u16_be()?);
			decode_str(cursor, at, len)
		}
		0xdb => {
			let len = u64::from(cursor.read_u32_be()?);
			decode_str(cursor, at, len)
		}
		0xdc => {
			let count = u64::from(cursor.read_u16_be()?);
			decode_array(cursor, at, count, depth, options)
		}
		0xdd => {
			let count = u64::from(cursor.read_u32_be()?);
			decode_array(cursor, at, count, depth, options)
		}
		0xde => {
			let count = u64::from(cursor.read_u16_be()?);
			decode_map(cursor, at, count, depth, options)
		}
		0xdf => {
			let count = u64::from(cursor.read_u32_be()?);
			decode_map(cursor, at, count, depth, options)
		}
		0xe0..=0xff => Ok(int(i64::from(marker as i8))),
		0xc1 => Err(SplineError::InvalidMarker { at, marker }),
	}
}

fn float(value: f64) -> Value {
	Value::Number(Number::Float(value))
}

fn uint(value: u64) -> Value {
	Value::Number(Number::UInt(value))
}

fn int(value: i64) -> Value {
	Value::Number(Number::Int(value))
}

/// Read `len` payload bytes, rejecting lengths that overrun the buffer.
fn read_payload<'a>(cursor: &mut Cursor<'a>, at: usize, len: u64) -> Result<&'a [u8]> {
	let rem = cursor.remaining();
	match usize::try_from(len) {
		Ok(n) if n <= rem => cursor.read_exact(n),
		_ => Err(SplineError::LengthOutOfRange { at, len, rem }),
	}
}

/// Every element takes at least one byte, so `count * min_bytes` bounds the input needed.
fn check_count(cursor: &Cursor<'_>, at: usize, count: u64, min_bytes: u64) -> Result<usize> {
	let rem = cursor.remaining();
	let need = count.saturating_mul(min_bytes);
	if need > rem as u64 {
		return Err(SplineError::LengthOutOfRange { at, len: count, rem });
	}
	// bounded by `rem` above
	Ok(count as usize)
}

fn check_depth(at: usize, depth: u32, options: &DecodeOptions) -> Result<()> {
	if depth >= options.max_depth {
		return Err(SplineError::DepthExceeded {
			at,
			max_depth: options.max_depth,
		});
	}
	Ok(())
}

fn decode_str(cursor: &mut Cursor<'_>, at: usize, len: u64) -> Result<Value> {
	let raw = read_payload(cursor, at, len)?;
	let text = std::str::from_utf8(raw).map_err(|_| SplineError::InvalidUtf8 { at })?;
	Ok(Value::String(text.into()))
}

fn decode_bin(cursor: &mut Cursor<'_>, at: usize, len: u64) -> Result<Value> {
	let raw = read_payload(cursor, at, len)?;
	Ok(Value::Binary(raw.to_vec()))
}

fn decode_ext(cursor: &mut Cursor<'_>, at: usize, len: u64) -> Result<Value> {
	let type_code = cursor.read_i8()?;
	let payload = read_payload(cursor, at, len)?;
	Ok(Value::Ext {
		type_code,
		payload: payload.to_vec(),
	})
}

fn decode_fixext(cursor: &mut Cursor<'_>, len: usize) -> Result<Value> {
	let type_code = cursor.read_i8()?;
	let payload = cursor.read_exact(len)?;
	Ok(Value::Ext {
		type_code,
		payload: payload.to_vec(),
	})
}

fn decode_array(cursor: &mut Cursor<'_>, at: usize, count: u64, depth: u32, options: &DecodeOptions) -> Result<Value> {
	check_depth(at, depth, options)?;
	let count = check_count(cursor, at, count, 1)?;

	let mut items = Vec::with_capacity(count);
	for _ in 0..count {
		items.push(decode_value(cursor, depth + 1, options)?);
	}
	Ok(Value::Array(items))
}

fn decode_map(cursor: &mut Cursor<'_>, at: usize, count: u64, depth: u32, options: &DecodeOptions) -> Result<Value> {
	check_depth(at, depth, options)?;
	let count = check_count(cursor, at, count, 2)?;

	let mut entries = Vec::with_capacity(count);
	for _ in 0..count {
		let key_at = cursor.pos();
		let key = match decode_value(cursor, depth + 1, options)? {
			Value::String(text) => text,
			Value::Number(Number::Int(v)) => v.to_string().into(),
			Value::Number(Number::UInt(v)) => v.to_string().into(),
			Value::Number(Number::Float(v)) => float_key(v).into(),
			other => {
				return Err(SplineError::InvalidMapKey {
					at: key_at,
					kind: other.kind(),
				});
			}
		};
		let value = decode_value(cursor, depth + 1, options)?;
		entries.push((key, value));
	}
	Ok(Value::Map(entries))
}

/// Object-key spelling of a float: integral values drop the fraction.
fn float_key(value: f64) -> String {
	if value.is_infinite() {
		return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
	}
	if value == 0.0 {
		return "0".to_owned();
	}
	value.to_string()
}
