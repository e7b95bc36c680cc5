const UI_ENTRY_POINT: &str = "ui/app-window.slint";

fn main() {
    println!("cargo:rerun-if-changed={UI_ENTRY_POINT}");

    slint_build::compile(UI_ENTRY_POINT).expect("Slint build failed");
}
