//! GNU Scientific Library binding surface
//!
//! Exposes xoroshiro128+ as a `gsl_rng_type` vtable so GSL samplers
//! (`gsl_ran_*`) can draw from an engine's state without owning it.
//!
//! # Ownership Rules
//!
//! 1. **Borrow only**: A [`GslBinding`] holds a mutable borrow of the
//!    engine's state; the engine cannot be moved or dropped while it lives
//! 2. **Rust-allocated record**: The `gsl_rng` record is a Rust box and must
//!    never be passed to `gsl_rng_free`
//! 3. **Detach before destroy**: Dropping the binding nulls the state
//!    pointer before the record is released
//!
//! # Example
//!
//! ```
//! use xoroshiro_core_rs::XoroshiroEngine;
//!
//! let mut rng = XoroshiroEngine::new(42, 0);
//! let mut reference = rng.clone();
//! {
//!     let mut binding = rng.gsl_binding();
//!     // binding.as_ptr() is what a GSL sampler would receive
//!     assert_eq!(u64::from(binding.get()), reference.next_u64());
//! }
//! assert_eq!(rng.next_u64(), reference.next_u64());
//! ```

use crate::rng::{initial_state, XoroshiroEngine, XoroshiroState};
use crate::sampling;
use std::ffi::{c_char, c_ulong, c_void};
use std::marker::PhantomData;
use std::ptr;

/// Layout-compatible with GSL's `gsl_rng_type`.
#[repr(C)]
#[derive(Debug)]
pub struct GslRngType {
    pub name: *const c_char,
    pub max: c_ulong,
    pub min: c_ulong,
    pub size: usize,
    pub set: unsafe extern "C" fn(*mut c_void, c_ulong),
    pub get: unsafe extern "C" fn(*mut c_void) -> c_ulong,
    pub get_double: unsafe extern "C" fn(*mut c_void) -> f64,
}

// The only pointer is to a static, immutable, NUL-terminated name.
unsafe impl Sync for GslRngType {}

/// Layout-compatible with GSL's `gsl_rng`.
#[repr(C)]
#[derive(Debug)]
pub struct GslRng {
    pub rng_type: *const GslRngType,
    pub state: *mut c_void,
}

const GSL_NAME: &[u8] = b"xoroshiro128+\0";

/// The vtable handed to GSL.
pub static XOROSHIRO_GSL_RNG_TYPE: GslRngType = GslRngType {
    name: GSL_NAME.as_ptr() as *const c_char,
    max: c_ulong::MAX,
    min: 0,
    size: std::mem::size_of::<XoroshiroState>(),
    set: gsl_set,
    get: gsl_get,
    get_double: gsl_get_double,
};

unsafe fn state_from<'a>(state: *mut c_void) -> Option<&'a mut XoroshiroState> {
    (state as *mut XoroshiroState).as_mut()
}

/// `set`: reseed as worker 0. No-op on a detached (null) state.
unsafe extern "C" fn gsl_set(state: *mut c_void, seed: c_ulong) {
    if let Some(state) = state_from(state) {
        *state = initial_state(u64::from(seed), 0);
    }
}

/// `get`: one core step, truncated to `unsigned long`.
unsafe extern "C" fn gsl_get(state: *mut c_void) -> c_ulong {
    match state_from(state) {
        Some(state) => state.step() as c_ulong,
        None => 0,
    }
}

/// `get_double`: half-open `[0, 1)`.
unsafe extern "C" fn gsl_get_double(state: *mut c_void) -> f64 {
    match state_from(state) {
        Some(state) => sampling::unit_f64(state),
        None => 0.0,
    }
}

/// Non-owning GSL view of an engine's state
pub struct GslBinding<'a> {
    raw: Box<GslRng>,
    _state: PhantomData<&'a mut XoroshiroState>,
}

impl<'a> GslBinding<'a> {
    pub fn new(state: &'a mut XoroshiroState) -> Self {
        let raw = Box::new(GslRng {
            rng_type: &XOROSHIRO_GSL_RNG_TYPE,
            state: (state as *mut XoroshiroState).cast::<c_void>(),
        });
        Self {
            raw,
            _state: PhantomData,
        }
    }

    /// Pointer for GSL calls such as `gsl_ran_gaussian`.
    ///
    /// Const so callers cannot hand it to `gsl_rng_free`; GSL still mutates
    /// the state through the vtable, as it does for its own generators.
    pub fn as_ptr(&self) -> *const GslRng {
        &*self.raw
    }

    pub fn rng_type(&self) -> &'static GslRngType {
        &XOROSHIRO_GSL_RNG_TYPE
    }

    pub fn is_attached(&self) -> bool {
        !self.raw.state.is_null()
    }

    /// Null the state pointer; later calls through the vtable are no-ops.
    pub fn detach(&mut self) {
        self.raw.state = ptr::null_mut();
    }

    /// Reseed through the vtable, as `gsl_rng_set` would.
    pub fn set(&mut self, seed: c_ulong) {
        // SAFETY: state is either null or the live borrow held for 'a
        unsafe { (XOROSHIRO_GSL_RNG_TYPE.set)(self.raw.state, seed) }
    }

    /// Draw through the vtable, as `gsl_rng_get` would.
    pub fn get(&mut self) -> c_ulong {
        // SAFETY: state is either null or the live borrow held for 'a
        unsafe { (XOROSHIRO_GSL_RNG_TYPE.get)(self.raw.state) }
    }

    /// Draw through the vtable, as `gsl_rng_uniform` would.
    pub fn get_double(&mut self) -> f64 {
        // SAFETY: state is either null or the live borrow held for 'a
        unsafe { (XOROSHIRO_GSL_RNG_TYPE.get_double)(self.raw.state) }
    }
}

impl Drop for GslBinding<'_> {
    fn drop(&mut self) {
        self.detach();
        log::trace!("Detached GSL binding from xoroshiro state");
    }
}

impl XoroshiroEngine {
    /// Lend this engine's state to GSL for the lifetime of the binding.
    ///
    /// Reseeding through the binding does not update [`XoroshiroEngine::seed_used`].
    pub fn gsl_binding(&mut self) -> GslBinding<'_> {
        GslBinding::new(self.state_mut())
    }
}
