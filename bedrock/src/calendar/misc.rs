// FIXME(stable): Constant traits

pub(crate) const fn i16i64(val: i16) -> i64 {
  val as i64
}

pub(crate) const fn i32i64(val: i32) -> i64 {
  val as i64
}

pub(crate) const fn u8u16(val: u8) -> u16 {
  val as u16
}

pub(crate) const fn u8u32(val: u8) -> u32 {
  val as u32
}

pub(crate) const fn u8usize(val: u8) -> usize {
  val as usize
}

pub(crate) const fn u16i32(val: u16) -> i32 {
  val as i32
}

pub(crate) const fn u16u32(val: u16) -> u32 {
  val as u32
}

pub(crate) const fn u32i64(val: u32) -> i64 {
  val as i64
}
