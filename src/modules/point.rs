//! Point Record Layout Module
//!
//! Fixed-stride vertex records shared with the JS host through linear memory.

use bytemuck::{Pod, Zeroable};

/// One point in the field: three packed `f32` coordinates, 12-byte stride.
///
/// The host reads these straight out of wasm memory as a `Float32Array`, so
/// the layout is frozen: field order x, y, z, no padding.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct PointRecord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Byte distance between consecutive records.
pub const RECORD_STRIDE: usize = core::mem::size_of::<PointRecord>();

/// Number of records populated by `init`. Fixed for this build.
pub const RECORD_COUNT: u32 = 1_000_000;

/// Size of the owned backing region: 24 MiB. The records need 12 MB of it;
/// the trailing slack is headroom for the host, not an error.
pub const BUFFER_BYTES: usize = 24 * 1024 * 1024;
