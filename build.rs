fn main() {
    let is_at_least_1_49 = version_check::is_min_version("1.49.0").unwrap_or(false);

    if !is_at_least_1_49 {
        println!("cargo:warning=slotpool requires rustc >= 1.49.0");
    }
}
