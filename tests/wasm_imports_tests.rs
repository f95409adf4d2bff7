// Host-side guard for the wasm-only modules.
// Host builds never compile them, so check the trait imports their casts need.

const WASM_MODULES: &[(&str, &str)] = &[
    ("lib.rs", include_str!("../src/lib.rs")),
    ("dom.rs", include_str!("../src/dom.rs")),
    ("frame.rs", include_str!("../src/frame.rs")),
    ("overlay.rs", include_str!("../src/overlay.rs")),
    ("render.rs", include_str!("../src/render.rs")),
    ("events/mod.rs", include_str!("../src/events/mod.rs")),
    ("events/pointer.rs", include_str!("../src/events/pointer.rs")),
    ("events/keyboard.rs", include_str!("../src/events/keyboard.rs")),
];

const CAST_METHODS: &[&str] = &[
    ".unchecked_ref()",
    ".dyn_into::<",
    ".dyn_ref::<",
    ".unchecked_into::<",
];

fn imports_js_cast(src: &str) -> bool {
    src.lines().map(str::trim).any(|line| {
        (line.starts_with("use wasm_bindgen::") && line.contains("JsCast"))
            || line.starts_with("use wasm_bindgen::prelude::*")
    })
}

#[test]
fn modules_using_casts_import_js_cast() {
    for (name, src) in WASM_MODULES {
        if CAST_METHODS.iter().any(|m| src.contains(m)) {
            assert!(imports_js_cast(src), "{name} casts JS values without importing JsCast");
        }
    }
}

#[test]
fn keydown_listener_module_imports_js_cast() {
    let src = include_str!("../src/events/keyboard.rs");
    assert!(src.contains(".unchecked_ref()"));
    assert!(imports_js_cast(src));
}
