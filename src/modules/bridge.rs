//! JS Interface Module
//!
//! Raw C-ABI exports for hosts that drive the module through
//! `WebAssembly.instantiate` and decode the state block by byte offset,
//! without wasm-bindgen glue.

use std::ptr;

use crate::modules::field::PointField;
use crate::modules::point::{PointRecord, RECORD_COUNT, RECORD_STRIDE};

/// State block the host walks by offset after `init` returns its address:
/// three f64 times, the record count, then the buffer and records addresses.
///
/// Field order and sizes are part of the host contract; never reorder.
/// On wasm32 the pointers are 4 bytes, putting them at offsets 28 and 32.
#[repr(C)]
pub struct StateBlock {
    pub start_time: f64,
    pub current_time: f64,
    pub delta_time: f64,
    pub record_count: u32,
    pub dynamic: *mut u8,
    pub records: *mut PointRecord,
}

// Process-wide singleton. The embedding host is single-threaded: one `init`
// call, then any number of `tick` calls, never concurrent.
static mut FIELD: Option<PointField> = None;
static mut STATE: StateBlock = StateBlock {
    start_time: 0.0,
    current_time: 0.0,
    delta_time: 0.0,
    record_count: 0,
    dynamic: ptr::null_mut(),
    records: ptr::null_mut(),
};

/// Allocates the point field and returns the address of the state block.
///
/// Must be called before the host reads any state. Calling it again replaces
/// the field wholesale; the block address itself stays stable.
#[no_mangle]
pub extern "C" fn init(start_time: f64) -> *mut StateBlock {
    console_error_panic_hook::set_once();

    let mut field = PointField::new(start_time);
    unsafe {
        STATE = StateBlock {
            start_time: field.start_time(),
            current_time: field.current_time(),
            delta_time: field.delta_time(),
            record_count: field.record_count(),
            dynamic: field.buffer_mut_ptr(),
            records: field.buffer_mut_ptr().cast(),
        };
        FIELD = Some(field);
        ptr::addr_of_mut!(STATE)
    }
}

/// Per-frame hook. Intentionally empty: the host owns the frame clock for
/// now, and mutating state here would break hosts that re-read the block
/// every frame expecting it unchanged.
#[no_mangle]
pub extern "C" fn tick() {}

/// Base address of the record buffer, or null before `init`.
#[no_mangle]
pub extern "C" fn buffer_ptr() -> *const u8 {
    unsafe { (*ptr::addr_of!(FIELD)).as_ref().map_or(ptr::null(), PointField::buffer_ptr) }
}

#[no_mangle]
pub extern "C" fn record_count() -> u32 {
    RECORD_COUNT
}

#[no_mangle]
pub extern "C" fn record_stride() -> u32 {
    RECORD_STRIDE as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::point::BUFFER_BYTES;

    #[test]
    fn test_state_block_offsets() {
        assert_eq!(core::mem::offset_of!(StateBlock, start_time), 0);
        assert_eq!(core::mem::offset_of!(StateBlock, current_time), 8);
        assert_eq!(core::mem::offset_of!(StateBlock, delta_time), 16);
        assert_eq!(core::mem::offset_of!(StateBlock, record_count), 24);
        #[cfg(target_arch = "wasm32")]
        {
            assert_eq!(core::mem::offset_of!(StateBlock, dynamic), 28);
            assert_eq!(core::mem::offset_of!(StateBlock, records), 32);
        }
    }

    // Single test for the whole export surface: the singleton is process-wide
    // state, and the test harness runs functions in parallel.
    #[test]
    fn test_ffi_surface() {
        let handle = init(123.456);
        {
            let state = unsafe { &*handle };
            assert_eq!(state.start_time, 123.456);
            assert_eq!(state.current_time, 123.456);
            assert_eq!(state.delta_time, 0.0);
            assert_eq!(state.record_count, 1_000_000);
            assert_eq!(state.dynamic.cast_const(), buffer_ptr());
            assert_eq!(state.records.cast::<u8>().cast_const(), buffer_ptr());

            let records =
                unsafe { std::slice::from_raw_parts(state.records, state.record_count as usize) };
            assert_eq!(records[0].x, 0.0);
            assert_eq!(records[1].x, 1.0);
            assert_eq!(records[999_999].x, 999_999.0);

            // tick never mutates the block or the records
            for _ in 0..1000 {
                tick();
            }
            assert_eq!(state.current_time, 123.456);
            assert_eq!(state.delta_time, 0.0);
            assert_eq!(records[500_000].x, 500_000.0);
        }

        // re-init replaces the field; the block address stays stable
        let handle2 = init(0.0);
        assert_eq!(handle, handle2);
        let state = unsafe { &*handle2 };
        assert_eq!(state.start_time, 0.0);
        assert_eq!(state.current_time, 0.0);
        assert_eq!(state.record_count, 1_000_000);
        assert!(!state.dynamic.is_null());

        assert_eq!(record_count(), 1_000_000);
        assert_eq!(record_stride(), 12);
        assert!(BUFFER_BYTES as u32 >= record_count() * record_stride());
    }
}
