//! Byte builders for hand-assembled MessagePack fixtures.

/// Append-only MessagePack writer covering the markers the tests need.
#[derive(Default)]
pub(crate) struct Pack {
	bytes: Vec<u8>,
}

impl Pack {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}

	pub(crate) fn nil(mut self) -> Self {
		self.bytes.push(0xc0);
		self
	}

	pub(crate) fn bool(mut self, value: bool) -> Self {
		self.bytes.push(if value { 0xc3 } else { 0xc2 });
		self
	}

	pub(crate) fn uint(mut self, value: u64) -> Self {
		if value < 0x80 {
			self.bytes.push(value as u8);
		} else if let Ok(v) = u16::try_from(value) {
			self.bytes.push(0xcd);
			self.bytes.extend_from_slice(&v.to_be_bytes());
		} else {
			self.bytes.push(0xcf);
			self.bytes.extend_from_slice(&value.to_be_bytes());
		}
		self
	}

	pub(crate) fn int(mut self, value: i64) -> Self {
		if (-32..0).contains(&value) {
			self.bytes.push(value as i8 as u8);
		} else {
			self.bytes.push(0xd3);
			self.bytes.extend_from_slice(&value.to_be_bytes());
		}
		self
	}

	pub(crate) fn f32(mut self, value: f32) -> Self {
		self.bytes.push(0xca);
		self.bytes.extend_from_slice(&value.to_be_bytes());
		self
	}

	pub(crate) fn f64(mut self, value: f64) -> Self {
		self.bytes.push(0xcb);
		self.bytes.extend_from_slice(&value.to_be_bytes());
		self
	}

	pub(crate) fn str(mut self, value: &str) -> Self {
		let len = value.len();
		if len < 32 {
			self.bytes.push(0xa0 | len as u8);
		} else if len < 256 {
			self.bytes.push(0xd9);
			self.bytes.push(len as u8);
		} else {
			self.bytes.push(0xda);
			self.bytes.extend_from_slice(&(len as u16).to_be_bytes());
		}
		self.bytes.extend_from_slice(value.as_bytes());
		self
	}

	pub(crate) fn bin(mut self, value: &[u8]) -> Self {
		self.bytes.push(0xc5);
		self.bytes.extend_from_slice(&(value.len() as u16).to_be_bytes());
		self.bytes.extend_from_slice(value);
		self
	}

	/// Array header; the caller appends `len` elements.
	pub(crate) fn array(mut self, len: usize) -> Self {
		if len < 16 {
			self.bytes.push(0x90 | len as u8);
		} else {
			self.bytes.push(0xdc);
			self.bytes.extend_from_slice(&(len as u16).to_be_bytes());
		}
		self
	}

	/// Map header; the caller appends `len` key/value pairs.
	pub(crate) fn map(mut self, len: usize) -> Self {
		self.bytes.push(0x80 | len as u8);
		self
	}

	/// Extension value using the smallest `ext 8/16/32` form.
	pub(crate) fn ext(mut self, type_code: i8, payload: &[u8]) -> Self {
		let len = payload.len();
		if len < 256 {
			self.bytes.push(0xc7);
			self.bytes.push(len as u8);
		} else {
			self.bytes.push(0xc8);
			self.bytes.extend_from_slice(&(len as u16).to_be_bytes());
		}
		self.bytes.push(type_code as u8);
		self.bytes.extend_from_slice(payload);
		self
	}

	pub(crate) fn raw(mut self, bytes: &[u8]) -> Self {
		self.bytes.extend_from_slice(bytes);
		self
	}
}
