// Console plumbing shared by the rest of the crate: panic hook, log macros
// and a scoped timer. Off wasm32 everything degrades to stderr or no-ops so
// the simulation modules can be unit tested on the host.

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ( $( $t:tt )* ) => {
        web_sys::console::log_1(&format!( $( $t )* ).into())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(unused_macros)]
macro_rules! console_log {
    ( $( $t:tt )* ) => {
        eprintln!( $( $t )* )
    }
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_warn {
    ( $( $t:tt )* ) => {
        web_sys::console::warn_1(&format!( $( $t )* ).into())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(unused_macros)]
macro_rules! console_warn {
    ( $( $t:tt )* ) => {
        eprintln!( $( $t )* )
    }
}

// Measures the enclosing scope with console.time / console.timeEnd. Only
// debug wasm builds talk to the console; release builds compile it away.
pub struct Timer<'a> {
    #[cfg_attr(not(all(target_arch = "wasm32", debug_assertions)), allow(dead_code))]
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        #[cfg(all(target_arch = "wasm32", debug_assertions))]
        web_sys::console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        #[cfg(all(target_arch = "wasm32", debug_assertions))]
        web_sys::console::time_end_with_label(self.name);
    }
}
