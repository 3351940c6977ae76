fn main() {
    let signed = std::env::var_os("CARGO_FEATURE_SIGNED_INDEX").is_some();
    let wide = std::env::var_os("CARGO_FEATURE_INDEX_64").is_some();

    if signed && !wide {
        println!(
            "cargo:warning=countrange: `signed-index` without `index-64` selects a \
             pointer-width signed index; enable `index-64` if sequences may exceed isize::MAX / 2"
        );
    }

    println!("cargo:rerun-if-changed=build.rs");
}
