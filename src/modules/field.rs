//! Point Field State Module
//!
//! Owns the shared point buffer and the frame clock the JS host reads.

use wasm_bindgen::prelude::*;
use serde::Serialize;

use crate::modules::point::{PointRecord, BUFFER_BYTES, RECORD_COUNT, RECORD_STRIDE};

/// Clock and sizing fields in one structured value, for host-side overlays.
#[derive(Serialize, Clone, Copy)]
pub struct ClockSnapshot {
    #[serde(rename = "startTime")]
    pub start_time: f64,
    #[serde(rename = "thisTime")]
    pub current_time: f64,
    #[serde(rename = "deltaTime")]
    pub delta_time: f64,
    #[serde(rename = "recordCount")]
    pub record_count: u32,
    #[serde(rename = "bufferBytes")]
    pub buffer_bytes: usize,
}

/// The point-field state: a 24 MiB owned buffer, a typed record view over its
/// prefix, and the timestamps captured at construction.
///
/// Exactly one of these exists per embedding (see `bridge`), but nothing here
/// depends on that: the state is an ordinary owned value.
#[wasm_bindgen]
pub struct PointField {
    start_time: f64,
    current_time: f64,
    delta_time: f64,
    record_count: u32,
    buffer: Box<[u8]>,
}

#[wasm_bindgen]
impl PointField {
    /// Builds the field and writes each record's `x` from its index.
    ///
    /// Only `x` is part of the contract; `y` and `z` carry unspecified
    /// content the host must overwrite or ignore. (This build zero-fills
    /// the buffer, but consumers must not rely on that.)
    #[wasm_bindgen(constructor)]
    pub fn new(start_time: f64) -> Self {
        let mut field = Self {
            start_time,
            current_time: start_time,
            delta_time: 0.0,
            record_count: RECORD_COUNT,
            buffer: vec![0u8; BUFFER_BYTES].into_boxed_slice(),
        };
        for (i, record) in field.records_mut().iter_mut().enumerate() {
            record.x = i as f32;
        }
        field
    }

    /// Per-frame hook. The host drives all animation itself for now, so this
    /// must stay a no-op; advancing `current_time`/`delta_time` here would
    /// change observable behavior.
    pub fn tick(&mut self) {}

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn delta_time(&self) -> f64 {
        self.delta_time
    }

    pub fn record_count(&self) -> u32 {
        self.record_count
    }

    pub fn record_stride(&self) -> usize {
        RECORD_STRIDE
    }

    pub fn buffer_bytes(&self) -> usize {
        self.buffer.len()
    }

    /// Base address of the owned buffer in linear memory.
    pub fn buffer_ptr(&self) -> *const u8 {
        self.buffer.as_ptr()
    }

    /// Returns the clock fields as a JS object.
    pub fn snapshot_js(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.snapshot())?)
    }

    /// Zero-copy `Float32Array` over the record prefix of the buffer.
    ///
    /// The view aliases wasm memory and is invalidated by any allocation
    /// that grows the memory; the host should re-request it per frame.
    #[cfg(target_arch = "wasm32")]
    pub fn records_view(&self) -> js_sys::Float32Array {
        unsafe { js_sys::Float32Array::view(bytemuck::cast_slice(self.records())) }
    }
}

impl PointField {
    /// Typed view over the record prefix of the buffer. Same memory, no copy.
    pub fn records(&self) -> &[PointRecord] {
        bytemuck::cast_slice(&self.buffer[..RECORD_COUNT as usize * RECORD_STRIDE])
    }

    pub fn records_mut(&mut self) -> &mut [PointRecord] {
        bytemuck::cast_slice_mut(&mut self.buffer[..RECORD_COUNT as usize * RECORD_STRIDE])
    }

    pub(crate) fn buffer_mut_ptr(&mut self) -> *mut u8 {
        self.buffer.as_mut_ptr()
    }

    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            start_time: self.start_time,
            current_time: self.current_time,
            delta_time: self.delta_time,
            record_count: self.record_count,
            buffer_bytes: self.buffer.len(),
        }
    }
}
