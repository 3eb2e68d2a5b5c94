#[cfg(target_arch = "wasm32")]
pub fn main() {
    login_page::start();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
