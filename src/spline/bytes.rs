use crate::spline::{Result, SplineError};

/// Simple bounded cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(SplineError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut buf = [0_u8; N];
		buf.copy_from_slice(raw);
		Ok(buf)
	}

	/// Read one byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_exact(1)?[0])
	}

	/// Read a big-endian `u16`.
	pub fn read_u16_be(&mut self) -> Result<u16> {
		self.read_array().map(u16::from_be_bytes)
	}

	/// Read a big-endian `u32`.
	pub fn read_u32_be(&mut self) -> Result<u32> {
		self.read_array().map(u32::from_be_bytes)
	}

	/// Read a big-endian `u64`.
	pub fn read_u64_be(&mut self) -> Result<u64> {
		self.read_array().map(u64::from_be_bytes)
	}

	/// Read a signed byte.
	pub fn read_i8(&mut self) -> Result<i8> {
		self.read_array().map(i8::from_be_bytes)
	}

	/// Read a big-endian `i16`.
	pub fn read_i16_be(&mut self) -> Result<i16> {
		self.read_array().map(i16::from_be_bytes)
	}

	/// Read a big-endian `i32`.
	pub fn read_i32_be(&mut self) -> Result<i32> {
		self.read_array().map(i32::from_be_bytes)
	}

	/// Read a big-endian `i64`.
	pub fn read_i64_be(&mut self) -> Result<i64> {
		self.read_array().map(i64::from_be_bytes)
	}

	/// Read a big-endian IEEE-754 single.
	pub fn read_f32_be(&mut self) -> Result<f32> {
		self.read_array().map(f32::from_be_bytes)
	}

	/// Read a big-endian IEEE-754 double.
	pub fn read_f64_be(&mut self) -> Result<f64> {
		self.read_array().map(f64::from_be_bytes)
	}
}
