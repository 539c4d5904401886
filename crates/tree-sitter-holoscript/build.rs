//! Compiles the generated HoloScript grammar when the `linked` feature is on.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    #[cfg(feature = "linked")]
    linked::compile();
}

#[cfg(feature = "linked")]
mod linked {
    use std::env;
    use std::path::PathBuf;

    /// Overrides the directory holding `parser.c` (and optionally `scanner.c`).
    const GRAMMAR_DIR_VAR: &str = "HOLOSCRIPT_GRAMMAR_DIR";

    pub fn compile() {
        println!("cargo:rerun-if-env-changed={GRAMMAR_DIR_VAR}");

        let grammar_dir = env::var_os(GRAMMAR_DIR_VAR).map_or_else(
            || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("grammar"),
            PathBuf::from,
        );

        let parser = grammar_dir.join("parser.c");
        assert!(
            parser.is_file(),
            "{} not found: run `tree-sitter generate` or set {GRAMMAR_DIR_VAR}",
            parser.display()
        );

        let mut build = cc::Build::new();
        build
            .std("c11")
            .include(&grammar_dir)
            .flag_if_supported("-Wno-unused-parameter")
            .flag_if_supported("-Wno-unused-but-set-variable")
            .flag_if_supported("-Wno-trigraphs");

        if env::var("CARGO_CFG_TARGET_ENV").as_deref() == Ok("msvc") {
            build.flag("-utf-8");
        }

        build.file(&parser);
        println!("cargo:rerun-if-changed={}", parser.display());

        let scanner = grammar_dir.join("scanner.c");
        if scanner.is_file() {
            build.file(&scanner);
            println!("cargo:rerun-if-changed={}", scanner.display());
        }

        build.compile("tree-sitter-holoscript");
    }
}
