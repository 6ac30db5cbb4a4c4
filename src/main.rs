#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(err) = atom_builder::platform::native::start() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // wasm32에서는 #[wasm_bindgen(start)]가 자동으로 호출되므로 main은 비어있음
}
