//! Build script for watchface-simulator
//!
//! Sets up SDL2 library paths and copies SDL2.dll next to the binary on Windows.

use std::path::PathBuf;
use std::{env, fs};

fn main() {
    // Only Windows needs a vendored SDL2
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR").map(PathBuf::from) else {
        return;
    };
    let Some(workspace_dir) = manifest_dir.parent() else {
        return;
    };
    let vendor_sdl2 = workspace_dir.join("vendor").join("sdl2");

    if vendor_sdl2.exists() {
        println!("cargo:rustc-link-search=native={}", vendor_sdl2.display());

        // OUT_DIR is like target/debug/build/watchface-simulator-xxx/out
        if let Ok(out_dir) = env::var("OUT_DIR") {
            let out_path = PathBuf::from(&out_dir);
            if let Some(target_dir) = out_path
                .ancestors()
                .find(|p| p.file_name().is_some_and(|n| n == "release" || n == "debug"))
            {
                let dll_src = vendor_sdl2.join("SDL2.dll");
                let dll_dst = target_dir.join("SDL2.dll");

                if dll_src.exists() && !dll_dst.exists() {
                    match fs::copy(&dll_src, &dll_dst) {
                        Ok(_) => println!("cargo:warning=Copied SDL2.dll to {}", dll_dst.display()),
                        Err(e) => println!("cargo:warning=Failed to copy SDL2.dll: {e}"),
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=SDL2 vendor directory not found at {}", vendor_sdl2.display());
        println!("cargo:warning=Place SDL2.lib and SDL2.dll in vendor/sdl2/ at the workspace root");
    }

    println!("cargo:rerun-if-changed={}", vendor_sdl2.display());
}
